use std::sync::Arc;

use crate::client::MoodClient;
use crate::error::DetectionError;
use crate::http::HttpClient;
use crate::modality::{Modality, MoodResult};
use crate::sink::ResultSink;

/// Output region voice results are written into.
pub const VOICE_OUTPUT_REGION: &str = "voiceOutput";

/// Binds a [`MoodClient`] to a [`ResultSink`].
///
/// Reproduces the three host-page triggers: face and text results are
/// raised as alerts, voice results are written into the
/// [`VOICE_OUTPUT_REGION`] region. Failures are presented through the same
/// sink and also returned so callers can react.
pub struct MoodSession<H: HttpClient, S: ResultSink> {
    client: MoodClient<H>,
    sink: Arc<S>,
}

impl<H: HttpClient, S: ResultSink> MoodSession<H, S> {
    /// Creates a session over the given client and sink.
    pub fn new(client: MoodClient<H>, sink: Arc<S>) -> Self {
        Self { client, sink }
    }

    /// Detect the current face mood and alert the result.
    pub async fn start_face_recognition(&self) -> Result<MoodResult, DetectionError> {
        let res = self.client.detect(Modality::Face, None).await;
        self.present_alert(&res);
        res
    }

    /// Detect the current voice mood and write it to the voice region.
    pub async fn start_voice_command(&self) -> Result<MoodResult, DetectionError> {
        let res = self.client.detect(Modality::Voice, None).await;
        match &res {
            Ok(mood) => self
                .sink
                .write(VOICE_OUTPUT_REGION, &format!("Detected mood: {}", mood.mood)),
            Err(err) => self.sink.write(VOICE_OUTPUT_REGION, &err.to_string()),
        }
        res
    }

    /// Detect the mood of `text` and alert the result.
    pub async fn submit_text_input(&self, text: &str) -> Result<MoodResult, DetectionError> {
        let res = self.client.detect(Modality::Text, Some(text)).await;
        self.present_alert(&res);
        res
    }

    fn present_alert(&self, res: &Result<MoodResult, DetectionError>) {
        match res {
            Ok(mood) => self.sink.alert(&format!("Detected mood: {}", mood.mood)),
            Err(err) => self.sink.alert(&err.to_string()),
        }
    }
}

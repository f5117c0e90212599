use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tracing::{debug, warn};

use crate::error::{DetectionError, DetectionErrorKind};
use crate::http::HttpClient;
use crate::modality::{Modality, MoodResult};

/// Client façade for the mood-classification backend.
///
/// Each [`detect`](MoodClient::detect) call is one independent
/// request/response exchange: no state is shared across calls and the
/// caller is resumed exactly once, with either a result or an error.
///
/// # Example
/// ```no_run
/// use std::sync::Arc;
/// use mood_rs::{Modality, MoodClient, ReqwestHttpClient};
/// # tokio_test::block_on(async {
/// let http = Arc::new(ReqwestHttpClient::new("http://localhost:5000".parse().unwrap()));
/// let client = MoodClient::new(http);
/// let result = client.detect(Modality::Text, Some("feeling great")).await.unwrap();
/// println!("{}", result.mood);
/// # });
/// ```
pub struct MoodClient<H: HttpClient> {
    http: Arc<H>,
}

impl<H: HttpClient> Clone for MoodClient<H> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
        }
    }
}

impl<H: HttpClient> MoodClient<H> {
    /// Creates a client over the given transport.
    pub fn new(http: Arc<H>) -> Self {
        Self { http }
    }

    /// Submits one detection request and returns the normalized result.
    ///
    /// `payload` is required non-empty for [`Modality::Text`] and ignored
    /// for the other modalities. Validation failures are reported before
    /// anything touches the network.
    pub async fn detect(
        &self,
        modality: Modality,
        payload: Option<&str>,
    ) -> Result<MoodResult, DetectionError> {
        let body = build_body(modality, payload)
            .map_err(|kind| DetectionError::new(modality, kind))?;
        debug!(%modality, "requesting mood detection");
        let resp = self
            .http
            .post(modality.endpoint_path(), body.as_ref())
            .await
            .map_err(|e| {
                warn!(%modality, error = %e, "detection request failed");
                DetectionError::new(modality, DetectionErrorKind::Transport(e.to_string()))
            })?;
        if !resp.is_success() {
            warn!(%modality, status = resp.status, "backend rejected detection");
            return Err(DetectionError::new(
                modality,
                DetectionErrorKind::Status(resp.status),
            ));
        }
        let result =
            parse_mood(&resp.body).map_err(|kind| DetectionError::new(modality, kind))?;
        debug!(%modality, mood = %result.mood, "mood detected");
        Ok(result)
    }

    /// Like [`detect`](MoodClient::detect), but gives up after `deadline`.
    ///
    /// On expiry the in-flight request is dropped and the call resolves
    /// with [`DetectionErrorKind::Cancelled`].
    pub async fn detect_with_deadline(
        &self,
        modality: Modality,
        payload: Option<&str>,
        deadline: Duration,
    ) -> Result<MoodResult, DetectionError> {
        match tokio::time::timeout(deadline, self.detect(modality, payload)).await {
            Ok(res) => res,
            Err(_) => {
                warn!(%modality, ?deadline, "detection deadline expired");
                Err(DetectionError::new(modality, DetectionErrorKind::Cancelled))
            }
        }
    }
}

/// Build the request body for `modality`, validating the text payload.
fn build_body(
    modality: Modality,
    payload: Option<&str>,
) -> Result<Option<serde_json::Value>, DetectionErrorKind> {
    match modality {
        Modality::Text => match payload {
            Some(text) if !text.trim().is_empty() => Ok(Some(json!({ "text": text }))),
            _ => Err(DetectionErrorKind::EmptyPayload),
        },
        Modality::Face | Modality::Voice => Ok(None),
    }
}

/// Extract the `mood` field from a backend response body.
fn parse_mood(body: &[u8]) -> Result<MoodResult, DetectionErrorKind> {
    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|e| DetectionErrorKind::Malformed(e.to_string()))?;
    match value.get("mood").and_then(|m| m.as_str()) {
        Some(mood) => Ok(MoodResult { mood: mood.to_string() }),
        None => Err(DetectionErrorKind::Malformed(
            "response lacks a string `mood` field".into(),
        )),
    }
}

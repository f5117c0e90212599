use crate::modality::Modality;
use thiserror::Error;

/// Failure of a single detection call.
///
/// Carries the modality the call targeted and a human-readable cause.
/// Errors are surfaced once to the caller and never retried internally.
#[derive(Debug, Error)]
#[error("{modality} detection failed: {kind}")]
pub struct DetectionError {
    pub modality: Modality,
    pub kind: DetectionErrorKind,
}

impl DetectionError {
    pub fn new(modality: Modality, kind: DetectionErrorKind) -> Self {
        Self { modality, kind }
    }
}

/// Cause of a [`DetectionError`].
#[derive(Debug, Error)]
pub enum DetectionErrorKind {
    /// Text detection was requested without a non-empty payload.
    #[error("text payload must be a non-empty string")]
    EmptyPayload,
    /// The request never produced an HTTP response.
    #[error("transport failure: {0}")]
    Transport(String),
    /// The backend answered with a non-success status.
    #[error("backend returned status {0}")]
    Status(u16),
    /// The response body was not JSON or lacked a string `mood` field.
    #[error("malformed response: {0}")]
    Malformed(String),
    /// The per-call deadline expired before a response arrived.
    #[error("cancelled before a response arrived")]
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_modality_and_cause() {
        let err = DetectionError::new(Modality::Voice, DetectionErrorKind::Status(500));
        assert_eq!(err.to_string(), "voice detection failed: backend returned status 500");
    }

    #[test]
    fn empty_payload_message_is_actionable() {
        let err = DetectionError::new(Modality::Text, DetectionErrorKind::EmptyPayload);
        assert!(err.to_string().contains("non-empty"));
    }
}

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Input channel a mood request targets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Face,
    Voice,
    Text,
}

impl Modality {
    /// Backend endpoint path for this modality.
    pub fn endpoint_path(&self) -> &'static str {
        match self {
            Modality::Face => "/face",
            Modality::Voice => "/voice",
            Modality::Text => "/text",
        }
    }

    /// Lowercase name used in log fields and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Modality::Face => "face",
            Modality::Voice => "voice",
            Modality::Text => "text",
        }
    }
}

impl std::fmt::Display for Modality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized classification returned by the backend.
///
/// The mood label is an opaque string; the client never interprets it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodResult {
    pub mood: String,
}

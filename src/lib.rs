//! Client façade for a mood-classification backend.
//!
//! This crate exposes [`MoodClient`] for submitting a modality-tagged
//! request (`face`, `voice` or `text`) to an HTTP backend and consuming
//! the normalized [`MoodResult`], plus [`MoodSession`] for wiring results
//! into a host-provided [`ResultSink`]. Transport and presentation are
//! injected capabilities, so everything is testable with in-process
//! doubles.

mod client;
mod error;
mod http;
mod modality;
mod session;
mod sink;

pub use client::MoodClient;
pub use error::{DetectionError, DetectionErrorKind};
pub use http::{HttpClient, HttpResponse, ReqwestHttpClient};
pub use modality::{Modality, MoodResult};
pub use session::{MoodSession, VOICE_OUTPUT_REGION};
pub use sink::{ResultSink, TerminalSink, TracingSink};

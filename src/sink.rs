use tracing::{info, warn};

/// Presentation capability provided by the host UI environment.
///
/// The backend contract only requires a surface that can raise a modal
/// alert or write text into a named output region; which one a given
/// detection uses is decided by [`MoodSession`](crate::MoodSession).
pub trait ResultSink: Send + Sync {
    /// Raise a modal alert with `message`.
    fn alert(&self, message: &str);

    /// Write `message` into the output region named `region`.
    fn write(&self, region: &str, message: &str);
}

/// [`ResultSink`] that routes presentation to `tracing` events.
///
/// Useful as a default sink in headless or test environments.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl ResultSink for TracingSink {
    fn alert(&self, message: &str) {
        warn!(%message, "alert");
    }

    fn write(&self, region: &str, message: &str) {
        info!(%region, %message, "display update");
    }
}

/// [`ResultSink`] printing to stdout, used by `moodctl`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalSink;

impl ResultSink for TerminalSink {
    fn alert(&self, message: &str) {
        println!("{message}");
    }

    fn write(&self, region: &str, message: &str) {
        println!("[{region}] {message}");
    }
}

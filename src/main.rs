use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use mood_rs::{Modality, MoodClient, MoodSession, ReqwestHttpClient, TerminalSink};
use url::Url;

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing_subscriber::filter::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing_subscriber::filter::LevelFilter::ERROR,
            LogLevel::Warn => tracing_subscriber::filter::LevelFilter::WARN,
            LogLevel::Info => tracing_subscriber::filter::LevelFilter::INFO,
            LogLevel::Debug => tracing_subscriber::filter::LevelFilter::DEBUG,
            LogLevel::Trace => tracing_subscriber::filter::LevelFilter::TRACE,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "moodctl", about = "One-shot mood detection against a backend")]
struct Cli {
    /// Which input channel to classify.
    modality: Modality,

    /// Text payload, required for the text modality.
    #[arg(long)]
    text: Option<String>,

    #[arg(long, env = "MOOD_BASE_URL", default_value = "http://127.0.0.1:5000")]
    base_url: Url,

    /// Give up after this many seconds.
    #[arg(long)]
    timeout_secs: Option<u64>,

    #[arg(long, default_value = "info")]
    log_level: LogLevel,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::from(cli.log_level))
        .init();

    let http = Arc::new(ReqwestHttpClient::new(cli.base_url));
    let client = MoodClient::new(http);

    if let Some(secs) = cli.timeout_secs {
        let result = client
            .detect_with_deadline(
                cli.modality,
                cli.text.as_deref(),
                Duration::from_secs(secs),
            )
            .await?;
        println!("Detected mood: {}", result.mood);
        return Ok(());
    }

    let session = MoodSession::new(client, Arc::new(TerminalSink));
    let outcome = match cli.modality {
        Modality::Face => session.start_face_recognition().await,
        Modality::Voice => session.start_voice_command().await,
        Modality::Text => {
            session
                .submit_text_input(cli.text.as_deref().unwrap_or_default())
                .await
        }
    };
    // The session already presented the failure through the sink.
    if outcome.is_err() {
        std::process::exit(1);
    }
    Ok(())
}

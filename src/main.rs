use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use verinews_client::speech::{
    start_speech_recognition, stop_speech_recognition, EngineSelection, RecognitionEngineFactory,
    SessionEvent, TranscriptionSession,
};
use verinews_client::{render_report, ApiClient, Config};

#[derive(Debug, Parser)]
#[command(
    name = "verinews-client",
    about = "Check news authenticity from text, voice or image input"
)]
struct Cli {
    /// Config file path, without extension
    #[arg(long, default_value = "config/verinews-client")]
    config: String,

    /// Short language code (en, hi, ta, te, bn, mr, gu, kn, ml, pa)
    #[arg(long)]
    language: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyze typed text
    Text { text: String },

    /// Analyze a recorded audio file
    Voice { file: PathBuf },

    /// Analyze an image or PDF, with an optional caption
    Image {
        file: PathBuf,

        #[arg(long, default_value = "")]
        text: String,
    },

    /// Transcribe live speech and analyze the final transcript
    Listen {
        /// Recognition script overriding the configured engine
        #[arg(long)]
        script: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let cfg = Config::load_or_default(&cli.config);

    info!("{} starting", cfg.service.name);

    let language = cli
        .language
        .clone()
        .unwrap_or_else(|| cfg.api.default_language.clone());

    let api = ApiClient::new(
        cfg.api.base_url.as_str(),
        Duration::from_secs(cfg.api.timeout_secs),
    )?;

    let report = match cli.command {
        Command::Text { text } => api.check_text(&text, &language).await?,

        Command::Voice { file } => {
            let bytes = std::fs::read(&file)
                .with_context(|| format!("Failed to read audio file {}", file.display()))?;
            let name = file
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("recording.wav")
                .to_string();

            api.check_voice(bytes, &name, &language).await?
        }

        Command::Image { file, text } => {
            let bytes = std::fs::read(&file)
                .with_context(|| format!("Failed to read image file {}", file.display()))?;
            let name = file
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("image.png")
                .to_string();

            api.check_image(bytes, &name, &text, &language).await?
        }

        Command::Listen { script } => {
            let transcript = run_listen(&cfg, script, &language).await?;

            if transcript.trim().is_empty() {
                bail!("No speech was transcribed");
            }

            info!("Submitting transcript for analysis: {:?}", transcript);

            api.check_text(&transcript, &language).await?
        }
    };

    print!("{}", render_report(&report));

    Ok(())
}

/// Run a transcription session to completion and return the final transcript
///
/// Interim updates are redrawn in place; Ctrl-C requests a graceful stop and
/// the transcript accumulated so far is kept.
async fn run_listen(cfg: &Config, script: Option<PathBuf>, language: &str) -> Result<String> {
    let selection = match script {
        Some(path) => EngineSelection::Script(path),
        None => cfg.speech.engine_selection()?,
    };

    let engine = RecognitionEngineFactory::create(selection)?;
    let mut session = TranscriptionSession::new(engine);

    let mut events = start_speech_recognition(&mut session, Some(language)).await;
    let mut transcript = String::new();

    loop {
        tokio::select! {
            event = events.recv() => match event {
                Some(SessionEvent::Started) => {
                    println!("Listening... speak now (Ctrl-C to stop)");
                }
                Some(SessionEvent::Interim(text)) => {
                    print!("\r{}", text);
                    std::io::Write::flush(&mut std::io::stdout()).ok();
                }
                Some(SessionEvent::Result(text)) => {
                    print!("\r{}", text);
                    std::io::Write::flush(&mut std::io::stdout()).ok();
                    transcript = text;
                }
                Some(SessionEvent::Error(code)) => {
                    bail!("Speech recognition error: {}", code);
                }
                Some(SessionEvent::Ended(text)) => {
                    println!();
                    transcript = text;
                    break;
                }
                None => break,
            },
            _ = tokio::signal::ctrl_c() => {
                info!("Stop requested");
                stop_speech_recognition(&mut session).await?;
            }
        }
    }

    Ok(transcript)
}

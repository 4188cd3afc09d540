//! Speech transcription
//!
//! This module provides the `TranscriptionSession` abstraction that manages:
//! - Capture engine lifecycle (start, graceful stop, natural end)
//! - Interim/final transcript accumulation
//! - Language code to locale tag resolution
//! - Typed session event emission over a channel

pub mod engine;
pub mod locale;
pub mod scripted;
pub mod session;
pub mod system;

pub use engine::{
    EngineNotice, EngineSelection, RecognitionEngine, RecognitionEngineFactory, RecognizedSpan,
};
pub use locale::{resolve_locale, DEFAULT_LOCALE};
pub use scripted::{ScriptStep, ScriptedEngine};
pub use session::{SessionEvent, TranscriptionSession, ERR_NOT_SUPPORTED};
pub use system::SystemEngine;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::info;

/// Start speech recognition using a short language code (e.g. "hi")
///
/// Resolves the code through the locale table, defaulting to
/// [`DEFAULT_LOCALE`] for unknown or absent codes, then starts the session.
pub async fn start_speech_recognition(
    session: &mut TranscriptionSession,
    language: Option<&str>,
) -> mpsc::Receiver<SessionEvent> {
    let locale = resolve_locale(language);

    info!("Starting speech recognition (locale: {})", locale);

    session.start(locale).await
}

/// Request a graceful stop of the active recognition run, if any
pub async fn stop_speech_recognition(session: &mut TranscriptionSession) -> Result<()> {
    session.stop().await
}

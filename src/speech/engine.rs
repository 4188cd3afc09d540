use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::sync::mpsc;

/// A single recognized fragment delivered by a capture engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognizedSpan {
    /// Recognized text
    pub text: String,
    /// Whether the engine will revise this fragment further
    #[serde(rename = "final")]
    pub is_final: bool,
}

impl RecognizedSpan {
    pub fn interim(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: false,
        }
    }

    pub fn fin(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: true,
        }
    }
}

/// Asynchronous notification from a capture engine
#[derive(Debug, Clone)]
pub enum EngineNotice {
    /// Capture has begun
    Started,
    /// A batch of recognized spans, in delivery order
    Batch(Vec<RecognizedSpan>),
    /// Capture failed; the code is an opaque engine-specific string
    Error(String),
    /// Capture ended (natural end of speech or requested stop)
    Ended,
}

/// Speech capture engine trait
///
/// Engines are continuous (they do not stop after the first utterance) and
/// interim-enabled (they deliver non-final spans while speech is ongoing).
///
/// Implementations:
/// - System: platform speech service (where one is bound)
/// - Scripted: plays a recognition script (for testing/batch processing)
#[async_trait::async_trait]
pub trait RecognitionEngine: Send + Sync {
    /// Start capturing with the given locale tag (e.g. "hi-IN")
    ///
    /// Returns a channel receiver that will receive engine notices
    async fn start(&mut self, locale: &str) -> Result<mpsc::Receiver<EngineNotice>>;

    /// Request a graceful stop; the `Ended` notice still arrives asynchronously
    async fn stop(&mut self) -> Result<()>;

    /// Whether this engine can capture speech on the current host
    fn is_available(&self) -> bool;

    /// Engine name for logging
    fn name(&self) -> &str;
}

/// Which capture engine to construct
#[derive(Debug, Clone)]
pub enum EngineSelection {
    /// Platform speech service
    System,
    /// Scripted engine driven by a JSON recognition script
    Script(PathBuf),
}

/// Recognition engine factory
pub struct RecognitionEngineFactory;

impl RecognitionEngineFactory {
    /// Create an engine for the given selection
    pub fn create(selection: EngineSelection) -> Result<Box<dyn RecognitionEngine>> {
        match selection {
            EngineSelection::System => {
                let engine = super::system::SystemEngine::probe();
                Ok(Box::new(engine))
            }
            EngineSelection::Script(path) => {
                let engine = super::scripted::ScriptedEngine::from_file(&path)?;
                Ok(Box::new(engine))
            }
        }
    }
}

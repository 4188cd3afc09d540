use super::engine::{EngineNotice, RecognitionEngine, RecognizedSpan};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Notify};
use tokio::task::JoinHandle;
use tracing::info;

/// One step of a recognition script
///
/// A step waits `delay_ms`, then delivers either an error code or a batch of
/// spans. An error step ends playback the way a mid-session capture failure
/// would.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptStep {
    /// Delay before this step fires, in milliseconds
    #[serde(default)]
    pub delay_ms: u64,

    /// Recognized spans delivered by this step, in order
    #[serde(default)]
    pub spans: Vec<RecognizedSpan>,

    /// Capture error code; when set, `spans` is ignored
    #[serde(default)]
    pub error: Option<String>,
}

impl ScriptStep {
    pub fn batch(spans: Vec<RecognizedSpan>) -> Self {
        Self {
            delay_ms: 0,
            spans,
            error: None,
        }
    }

    pub fn error(code: impl Into<String>) -> Self {
        Self {
            delay_ms: 0,
            spans: Vec::new(),
            error: Some(code.into()),
        }
    }
}

/// Scripted capture engine
///
/// Plays a fixed recognition script instead of listening to a microphone,
/// for tests and batch processing. Each `start` replays the script from the
/// beginning. Continuous and interim-enabled by construction: playback does
/// not stop after the first final span, and non-final spans are delivered
/// as written.
pub struct ScriptedEngine {
    steps: Vec<ScriptStep>,
    capturing: Arc<AtomicBool>,
    stop_requested: Arc<AtomicBool>,
    stop_signal: Arc<Notify>,
    playback_handle: Option<JoinHandle<()>>,
}

impl ScriptedEngine {
    /// Create an engine from an in-memory script
    pub fn new(steps: Vec<ScriptStep>) -> Self {
        Self {
            steps,
            capturing: Arc::new(AtomicBool::new(false)),
            stop_requested: Arc::new(AtomicBool::new(false)),
            stop_signal: Arc::new(Notify::new()),
            playback_handle: None,
        }
    }

    /// Load a script from a JSON file (an array of steps)
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read recognition script {}", path.display()))?;

        let steps: Vec<ScriptStep> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse recognition script {}", path.display()))?;

        info!("Loaded recognition script with {} steps", steps.len());

        Ok(Self::new(steps))
    }
}

#[async_trait::async_trait]
impl RecognitionEngine for ScriptedEngine {
    async fn start(&mut self, locale: &str) -> Result<mpsc::Receiver<EngineNotice>> {
        info!("Scripted engine starting (locale: {})", locale);

        // Cancel any playback left over from a previous start
        if let Some(handle) = self.playback_handle.take() {
            handle.abort();
        }

        let (tx, rx) = mpsc::channel(32);

        self.capturing.store(true, Ordering::SeqCst);
        self.stop_requested.store(false, Ordering::SeqCst);

        let steps = self.steps.clone();
        let capturing = Arc::clone(&self.capturing);
        let stop_requested = Arc::clone(&self.stop_requested);
        let stop_signal = Arc::clone(&self.stop_signal);

        self.playback_handle = Some(tokio::spawn(async move {
            if tx.send(EngineNotice::Started).await.is_err() {
                capturing.store(false, Ordering::SeqCst);
                return;
            }

            for step in steps {
                if step.delay_ms > 0 {
                    tokio::select! {
                        _ = tokio::time::sleep(Duration::from_millis(step.delay_ms)) => {}
                        _ = stop_signal.notified() => {}
                    }
                }

                if stop_requested.load(Ordering::SeqCst) {
                    break;
                }

                if let Some(code) = step.error {
                    // A capture failure ends playback without an Ended notice;
                    // the session treats the error as terminal on its own.
                    let _ = tx.send(EngineNotice::Error(code)).await;
                    capturing.store(false, Ordering::SeqCst);
                    return;
                }

                if !step.spans.is_empty() && tx.send(EngineNotice::Batch(step.spans)).await.is_err() {
                    capturing.store(false, Ordering::SeqCst);
                    return;
                }
            }

            capturing.store(false, Ordering::SeqCst);
            let _ = tx.send(EngineNotice::Ended).await;
        }));

        Ok(rx)
    }

    async fn stop(&mut self) -> Result<()> {
        if !self.capturing.load(Ordering::SeqCst) {
            return Ok(());
        }

        info!("Scripted engine stop requested");

        self.stop_requested.store(true, Ordering::SeqCst);
        // notify_one stores a permit, so a stop that lands between steps
        // still wakes the next delay immediately
        self.stop_signal.notify_one();

        Ok(())
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

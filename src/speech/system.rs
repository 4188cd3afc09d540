use super::engine::{EngineNotice, RecognitionEngine};
use anyhow::{bail, Result};
use tokio::sync::mpsc;

/// Platform speech service engine
///
/// Probes the host for a usable speech recognizer. No system binding is
/// shipped yet, so the probe reports unavailable everywhere and sessions
/// surface a not-supported error to their callers instead of starting.
// TODO: bind speech-dispatcher/libspeechd on Linux once the service API settles
pub struct SystemEngine {
    available: bool,
}

impl SystemEngine {
    /// Probe the host for a system speech recognizer
    pub fn probe() -> Self {
        Self { available: false }
    }
}

#[async_trait::async_trait]
impl RecognitionEngine for SystemEngine {
    async fn start(&mut self, _locale: &str) -> Result<mpsc::Receiver<EngineNotice>> {
        bail!("no system speech service is available on this host")
    }

    async fn stop(&mut self) -> Result<()> {
        Ok(())
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn name(&self) -> &str {
        "system"
    }
}

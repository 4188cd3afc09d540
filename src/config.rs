use crate::speech::EngineSelection;
use anyhow::{bail, Result};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::warn;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub service: ServiceConfig,
    pub api: ApiConfig,
    pub speech: SpeechConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the analysis service, including the API prefix
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Short language code used when none is given on the command line
    pub default_language: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    /// Capture engine: "system" or "scripted"
    pub engine: String,

    /// Recognition script for the scripted engine
    pub script_path: Option<PathBuf>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: "verinews-client".to_string(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api/v1".to_string(),
            timeout_secs: 30,
            default_language: "en".to_string(),
        }
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            engine: "system".to_string(),
            script_path: None,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Load a config file, falling back to defaults when it is missing or invalid
    pub fn load_or_default(path: &str) -> Self {
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("Using default configuration ({}): {}", path, e);
                Self::default()
            }
        }
    }
}

impl SpeechConfig {
    /// Which capture engine this configuration selects
    pub fn engine_selection(&self) -> Result<EngineSelection> {
        match self.engine.as_str() {
            "system" => Ok(EngineSelection::System),
            "scripted" => match &self.script_path {
                Some(path) => Ok(EngineSelection::Script(path.clone())),
                None => bail!("speech.engine = \"scripted\" requires speech.script_path"),
            },
            other => bail!("Unknown speech engine {:?}", other),
        }
    }
}

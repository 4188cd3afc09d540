use super::types::AnalysisReport;
use anyhow::{bail, Context, Result};
use reqwest::multipart::{Form, Part};
use std::time::Duration;
use tracing::{error, info};

/// Client for the news-authenticity analysis service
///
/// All three endpoints take multipart form submissions and return the same
/// report payload. Non-2xx responses are failures; the status and response
/// body are carried in the error.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the service at `base_url` (e.g.
    /// "http://localhost:8000/api/v1")
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Analyze typed text
    pub async fn check_text(&self, text: &str, language: &str) -> Result<AnalysisReport> {
        let form = Form::new()
            .text("text", text.to_string())
            .text("language", language.to_string());

        self.post_form("/news/check-text", form).await
    }

    /// Analyze a recorded audio file; the service transcribes it first
    pub async fn check_voice(
        &self,
        audio: Vec<u8>,
        file_name: &str,
        language: &str,
    ) -> Result<AnalysisReport> {
        let audio_part = Part::bytes(audio).file_name(file_name.to_string());

        let form = Form::new()
            .part("audio_file", audio_part)
            .text("language", language.to_string());

        self.post_form("/news/check-voice", form).await
    }

    /// Analyze an image (or PDF) with an optional caption; the service runs
    /// OCR and analyzes caption plus extracted text together
    pub async fn check_image(
        &self,
        image: Vec<u8>,
        file_name: &str,
        text: &str,
        language: &str,
    ) -> Result<AnalysisReport> {
        let image_part = Part::bytes(image).file_name(file_name.to_string());

        let form = Form::new()
            .part("image_file", image_part)
            .text("text", text.to_string())
            .text("language", language.to_string());

        self.post_form("/news/check-image", form).await
    }

    async fn post_form(&self, endpoint: &str, form: Form) -> Result<AnalysisReport> {
        let url = format!("{}{}", self.base_url, endpoint);

        info!("Sending analysis request to {}", url);

        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;

        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("Analysis request failed: HTTP {}: {}", status, body);
            bail!("Analysis request failed: HTTP {}: {}", status, body);
        }

        let report = response
            .json::<AnalysisReport>()
            .await
            .context("Failed to parse analysis response")?;

        info!(
            "Analysis response received (risk: {:?}, confidence: {:.2})",
            report.risk_level(),
            report.confidence_score
        );

        Ok(report)
    }
}

use super::{
    extractor::{ExtractOptions, Extractor},
    types::RawExtraction,
};
use crate::error::ExtractError;
use async_trait::async_trait;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, info, warn};

/// Extraction adapter that shells out to yt-dlp.
///
/// The engine is only ever asked for metadata (`--dump-json`); media bytes
/// are never downloaded by this service.
pub struct YtDlpExtractor {
    binary: String,
    timeout: Duration,
}

impl YtDlpExtractor {
    pub fn new(binary: impl Into<String>, timeout: Duration) -> Self {
        Self {
            binary: binary.into(),
            timeout,
        }
    }

    fn build_args<'a>(url: &'a str, options: &'a ExtractOptions) -> Vec<&'a str> {
        let mut args = vec!["--dump-json"];
        if options.quiet {
            args.push("--quiet");
            args.push("--no-warnings");
        }
        if options.skip_download {
            args.push("--skip-download");
        }
        if options.no_check_certificates {
            args.push("--no-check-certificates");
        }
        args.push("--format");
        args.push(&options.format);
        args.push(url);
        args
    }
}

#[async_trait]
impl Extractor for YtDlpExtractor {
    fn name(&self) -> &'static str {
        "yt-dlp"
    }

    async fn resolve(
        &self,
        url: &str,
        options: &ExtractOptions,
    ) -> Result<RawExtraction, ExtractError> {
        debug!("Extracting metadata with yt-dlp for: {}", url);

        let output = tokio::time::timeout(
            self.timeout,
            Command::new(&self.binary)
                .args(Self::build_args(url, options))
                .output(),
        )
        .await
        .map_err(|_| ExtractError::Internal("Media metadata extraction timed out".to_string()))?
        .map_err(|e| ExtractError::Internal(format!("Failed to run {}: {}", self.binary, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = stderr.trim();
            if detail.is_empty() {
                return Err(ExtractError::ExtractionFailed(format!(
                    "{} exited with {}",
                    self.binary, output.status
                )));
            }
            return Err(ExtractError::ExtractionFailed(detail.to_string()));
        }

        let json_str = String::from_utf8_lossy(&output.stdout);
        debug!("yt-dlp JSON output: {}", json_str);

        serde_json::from_str(&json_str).map_err(|e| {
            ExtractError::Internal(format!("Failed to parse media metadata: {}", e))
        })
    }

    async fn test_availability(&self) -> bool {
        match Command::new(&self.binary).arg("--version").output().await {
            Ok(output) => {
                if output.status.success() {
                    let version = String::from_utf8_lossy(&output.stdout);
                    info!("✅ {} is available, version: {}", self.binary, version.trim());
                    true
                } else {
                    warn!("❌ {} command failed", self.binary);
                    false
                }
            }
            Err(e) => {
                warn!("❌ {} not found: {}", self.binary, e);
                false
            }
        }
    }
}

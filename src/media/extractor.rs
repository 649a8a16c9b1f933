use super::types::RawExtraction;
use crate::error::ExtractError;
use async_trait::async_trait;

/// Fixed option policy handed to the extraction engine on every call.
///
/// Built once at startup and passed explicitly into each invocation; never
/// exposed to HTTP callers.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Suppress the engine's informational output.
    pub quiet: bool,
    /// Resolve metadata only, never download media bytes.
    pub skip_download: bool,
    /// Skip TLS certificate verification of the target site.
    pub no_check_certificates: bool,
    /// Format preference hint for the engine's own selection heuristics.
    pub format: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            quiet: true,
            skip_download: true,
            no_check_certificates: true,
            format: "bestaudio*+bestvideo*/best".to_string(),
        }
    }
}

#[async_trait]
pub trait Extractor: Send + Sync {
    /// Human-readable name of the extractor
    fn name(&self) -> &'static str;

    /// Resolve raw stream metadata for the given URL. A single attempt, no
    /// retries; failures surface as typed errors.
    async fn resolve(
        &self,
        url: &str,
        options: &ExtractOptions,
    ) -> Result<RawExtraction, ExtractError>;

    /// Test if this extractor is available on the system
    async fn test_availability(&self) -> bool;
}

mod extractor;
mod resolver;
mod types;
mod ytdlp;

pub use extractor::{ExtractOptions, Extractor};
pub use types::{RawExtraction, RawFormat, ResolvedMedia};
pub use ytdlp::YtDlpExtractor;

use crate::error::ExtractError;
use anyhow::Result;
use tracing::{debug, info};

/// Resolves a media page URL into a direct, playable URL.
///
/// Extraction itself is delegated to the configured [`Extractor`]; this type
/// owns the fixed engine option policy and applies the best-format selection
/// to whatever the engine reports. Stateless apart from configuration, so a
/// single instance is shared across requests.
pub struct MediaResolver {
    extractor: Box<dyn Extractor>,
    options: ExtractOptions,
}

impl MediaResolver {
    pub fn new(extractor: Box<dyn Extractor>) -> Self {
        Self {
            extractor,
            options: ExtractOptions::default(),
        }
    }

    /// Resolve `url` to the best playable candidate the engine reports.
    pub async fn resolve(&self, url: &str) -> Result<ResolvedMedia, ExtractError> {
        info!("Resolving direct URL for: {}", url);

        let raw = self.extractor.resolve(url, &self.options).await?;
        let resolved = resolver::select_best(&raw)?;

        debug!(
            "Resolved via {}: {} ({})",
            self.extractor.name(),
            resolved.direct_url,
            resolved.content_type.as_deref().unwrap_or("no content type"),
        );
        Ok(resolved)
    }

    pub async fn test_setup(&self) -> Result<()> {
        info!("Testing media resolver setup...");

        if self.extractor.test_availability().await {
            Ok(())
        } else {
            Err(anyhow::anyhow!(
                "{} is not available. Please install it.",
                self.extractor.name()
            ))
        }
    }
}

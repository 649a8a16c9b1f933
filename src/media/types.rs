use serde::{Deserialize, Serialize};

/// One candidate stream reported by the extraction engine. The engine's
/// records are platform-dependent; fields it does not provide stay `None`
/// and anything beyond these is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawFormat {
    pub url: Option<String>,
    pub height: Option<u32>,
    pub ext: Option<String>,
}

/// The engine's metadata record for one extraction, reduced to the fields
/// the resolver consumes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawExtraction {
    /// Pre-resolved direct URL, when the engine already picked one.
    pub url: Option<String>,
    /// File-type token for `url`.
    pub ext: Option<String>,
    #[serde(default)]
    pub formats: Vec<RawFormat>,
}

/// Response contract: a playable URL plus a coarse content-type label.
///
/// `content_type` is a `video/<ext>` token derived from the extension the
/// engine reported, not real content-type detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedMedia {
    pub direct_url: String,
    pub content_type: Option<String>,
}

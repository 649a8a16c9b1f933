use super::types::{RawExtraction, RawFormat, ResolvedMedia};
use crate::error::ExtractError;

fn content_type_for(ext: Option<&str>) -> Option<String> {
    ext.filter(|e| !e.is_empty()).map(|e| format!("video/{e}"))
}

/// Pick the best candidate out of an extraction record.
///
/// A pre-resolved top-level URL always wins and the format table is not
/// consulted, even when the table holds higher-quality entries. Without one,
/// formats with a usable URL are ordered ascending by `height` (missing
/// height sorts lowest, ties keep their original order) and the last entry
/// is taken. A format table where no entry has a usable URL does not count
/// as a match and the resolution fails.
pub fn select_best(raw: &RawExtraction) -> Result<ResolvedMedia, ExtractError> {
    let top_url = raw.url.as_deref().filter(|u| !u.is_empty());

    if top_url.is_none() && !raw.formats.is_empty() {
        let mut usable: Vec<(&str, &RawFormat)> = raw
            .formats
            .iter()
            .filter_map(|f| f.url.as_deref().filter(|u| !u.is_empty()).map(|u| (u, f)))
            .collect();
        usable.sort_by_key(|(_, f)| f.height.unwrap_or(0));

        if let Some((url, format)) = usable.last() {
            return Ok(ResolvedMedia {
                direct_url: (*url).to_string(),
                content_type: content_type_for(format.ext.as_deref()),
            });
        }
    }

    match top_url {
        Some(url) => Ok(ResolvedMedia {
            direct_url: url.to_string(),
            content_type: content_type_for(raw.ext.as_deref()),
        }),
        None => Err(ExtractError::NoResolvableFormat),
    }
}

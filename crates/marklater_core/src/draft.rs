use serde::Serialize;

/// The user-authored payload to be saved: one bookmark as captured from the
/// active page. Immutable once handed to the submission controller.
///
/// Serializes to exactly the four keys the server's `/add` endpoint expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookmarkDraft {
    pub title: String,
    pub url: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl BookmarkDraft {
    /// Builds a draft from raw capture-form values. The `url` is assumed
    /// non-empty (the capture UI pre-populates it from the active page);
    /// the controller does not re-validate it.
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            description: description.into(),
            tags,
        }
    }
}

/// Splits a comma-separated tag field into individual tags, trimming
/// whitespace and dropping blank entries while preserving order.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

// file: src/session/resolve.rs
// description: whitespace normalization and effective docId resolution

/// Collapses every whitespace run to one space and strips both ends.
/// `None` normalizes to the empty string.
pub fn normalize_whitespace(text: Option<&str>) -> String {
    text.map(|t| t.split_whitespace().collect::<Vec<_>>().join(" "))
        .unwrap_or_default()
}

/// The override text wins over the picker; `None` means "all documents".
pub fn resolve_doc_id(override_text: Option<&str>, picked: Option<&str>) -> Option<String> {
    [override_text, picked]
        .into_iter()
        .map(normalize_whitespace)
        .find(|id| !id.is_empty())
}

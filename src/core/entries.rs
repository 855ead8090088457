use crate::core::error::ConvertError;

/// Split a flat option string into trimmed `(key, value)` pairs.
///
/// Entries are comma-separated; each entry splits on its first `:` so the
/// value may itself contain colons (URLs, Argo `depends` expressions).
/// Whitespace-only entries are skipped. `option` names the CLI option in
/// error messages.
pub fn split_entries(option: &str, raw: &str) -> Result<Vec<(String, String)>, ConvertError> {
    let mut pairs = Vec::new();
    for item in raw.split(',').map(str::trim).filter(|item| !item.is_empty()) {
        let (key, value) = item.split_once(':').ok_or_else(|| ConvertError::MalformedEntry {
            option: option.to_string(),
            entry: item.to_string(),
        })?;
        let key = key.trim();
        if key.is_empty() {
            return Err(ConvertError::EmptyKey {
                option: option.to_string(),
            });
        }
        pairs.push((key.to_string(), value.trim().to_string()));
    }
    Ok(pairs)
}

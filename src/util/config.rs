//! Line-level helpers shared by the `key = value` config parsers.

/// Whether a config line is blank or a `#`, `//` or `;` comment.
#[must_use]
pub fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// What: Split a `key = value` line on its first `=`.
///
/// Inputs:
/// - `line`: Config line
///
/// Output:
/// - Trimmed `(key, value)`; `None` when there is no `=` or the key is empty.
#[must_use]
pub fn parse_key_value(line: &str) -> Option<(String, String)> {
    let (key, value) = line.trim().split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key.to_string(), value.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_and_kv_lines() {
        assert!(skip_comment_or_empty("   "));
        assert!(skip_comment_or_empty("; legacy"));
        assert!(!skip_comment_or_empty("page_size = 3"));
        assert_eq!(
            parse_key_value(" endpoint = https://x.test/?a=b "),
            Some(("endpoint".to_string(), "https://x.test/?a=b".to_string()))
        );
        assert_eq!(parse_key_value("= 3"), None);
        assert_eq!(parse_key_value("novalue"), None);
    }
}

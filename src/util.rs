pub(crate) const EXCERPT_CHARS: usize = 20;

/// Escaped, truncated excerpt of the remaining input for one log column.
pub(crate) fn formatter_str(s: &str) -> String {
    let head: String = s.chars().take(EXCERPT_CHARS).collect();
    head.escape_default().to_string()
}

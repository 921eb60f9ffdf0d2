// Normalize a scraped count like "1,234" or "1 234" into a digits-only string.
// Returns Some(digits) only if the remainder is pure ASCII digits; None otherwise.
pub fn normalize_count(s: &str) -> Option<String> {
    let cleaned: String = s
        .trim()
        .chars()
        .filter(|c| !matches!(c, ',' | '，' | ' ' | '\u{00a0}' | '\u{2009}'))
        .collect();
    if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(cleaned)
}

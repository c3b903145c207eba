// src/core/sanitize.rs

/// Keep ASCII digits only ("+234 801-234-5678" → "2348012345678").
pub fn digits_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// `None` for blank input, otherwise the trimmed value.
pub fn non_blank(s: &str) -> Option<&str> {
    let t = s.trim();
    if t.is_empty() { None } else { Some(t) }
}

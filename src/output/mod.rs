// Terminal rendering.

pub mod terminal;

/// Truncate a string to `max` characters, appending an ellipsis when cut.
/// Operates on chars, not bytes, so multi-byte text never splits mid-char.
pub fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let cut: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{cut}…")
}

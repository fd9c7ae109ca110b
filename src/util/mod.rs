//! Small formatting helpers shared by the UI, CLI and logging.

pub mod config;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// What: Truncate text to a display width, appending `…` when shortened.
///
/// Inputs:
/// - `s`: text to fit
/// - `max`: available terminal columns
///
/// Output:
/// - `s` unchanged when it fits; otherwise the longest prefix plus `…` within `max` columns.
#[must_use]
pub fn truncate_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Capitalize the first letter of a remote name (`"bulbasaur"` → `"Bulbasaur"`).
#[must_use]
pub fn display_name(name: &str) -> String {
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Render an optional number, `—` when absent.
#[must_use]
pub fn opt_num(v: Option<i64>) -> String {
    v.map_or_else(|| "—".to_string(), |n| n.to_string())
}

/// Join names with `", "`, `—` when empty.
#[must_use]
pub fn join_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "—".to_string()
    } else {
        items.join(", ")
    }
}

/// Local timestamp formatted for log lines (`YYYY-MM-DD-T HH:MM:SS`).
#[must_use]
pub fn log_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Truncation respects display width and marks the cut
    fn truncate_width() {
        assert_eq!(truncate_to_width("pikachu", 10), "pikachu");
        assert_eq!(truncate_to_width("pikachu", 5), "pika…");
        assert_eq!(truncate_to_width("ポケモン", 5), "ポケ…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn name_and_number_formatting() {
        assert_eq!(display_name("mr-mime"), "Mr-mime");
        assert_eq!(display_name(""), "");
        assert_eq!(opt_num(None), "—");
        assert_eq!(opt_num(Some(45)), "45");
        assert_eq!(join_or_dash(&[]), "—");
        assert_eq!(
            join_or_dash(&["grass".to_string(), "poison".to_string()]),
            "grass, poison"
        );
    }
}

use ratatui::style::Color;

use super::types::Theme;

/// What: Remove a trailing `# ...` or `// ...` comment from a config value.
///
/// Inputs:
/// - `val`: Raw value text following `=`
///
/// Output:
/// - Trimmed value without the comment.
///
/// Details:
/// - A marker only starts a comment when preceded by whitespace, so hex colors such as
///   `#1e1e2e` and URLs such as `https://...` survive.
pub(crate) fn strip_inline_comment(val: &str) -> &str {
    let t = val.trim();
    let bytes = t.as_bytes();
    let cut = t
        .char_indices()
        .skip(1)
        .find(|(i, _)| {
            let rest = &t[*i..];
            (rest.starts_with('#') || rest.starts_with("//")) && bytes[i - 1].is_ascii_whitespace()
        })
        .map_or(t.len(), |(i, _)| i);
    t[..cut].trim()
}

/// What: Parse a color literal from configuration text into a [`Color`].
///
/// Inputs:
/// - `s`: Color specification string potentially containing inline comments.
///
/// Output:
/// - `Some(Color)` for recognized hex or decimal triplet formats; `None` otherwise.
///
/// Details:
/// - Accepts `#RRGGBB` hex and `R,G,B` decimal triplets (0-255 per channel).
pub(crate) fn parse_color_value(s: &str) -> Option<Color> {
    let t = strip_inline_comment(s);
    if t.is_empty() {
        return None;
    }
    let h = t.strip_prefix('#').unwrap_or(t);
    if h.len() == 6 && h.chars().all(|c| c.is_ascii_hexdigit()) {
        let r = u8::from_str_radix(&h[0..2], 16).ok()?;
        let g = u8::from_str_radix(&h[2..4], 16).ok()?;
        let b = u8::from_str_radix(&h[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    let parts: Vec<&str> = t.split(',').collect();
    if let [r, g, b] = parts.as_slice() {
        let r = r.trim().parse::<u8>().ok()?;
        let g = g.trim().parse::<u8>().ok()?;
        let b = b.trim().parse::<u8>().ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    None
}

/// What: Apply one `key = color` line to a theme.
///
/// Inputs:
/// - `theme`: palette to update
/// - `key`: palette key, canonical or descriptive (`background_base`, `text_primary`, ...)
/// - `val`: color literal
///
/// Output:
/// - `Err` with a diagnostic for unknown keys or invalid colors; the theme is untouched then.
pub(crate) fn apply_theme_override(theme: &mut Theme, key: &str, val: &str) -> Result<(), String> {
    let norm = key.trim().to_lowercase().replace(['.', '-', ' '], "_");
    let color = parse_color_value(val).ok_or_else(|| format!("invalid color for '{key}'"))?;
    let slot = match norm.as_str() {
        "base" | "background" | "background_base" => &mut theme.base,
        "mantle" | "background_mantle" => &mut theme.mantle,
        "crust" | "background_crust" => &mut theme.crust,
        "surface1" | "surface_level1" => &mut theme.surface1,
        "surface2" | "surface_level2" => &mut theme.surface2,
        "overlay1" | "overlay_primary" => &mut theme.overlay1,
        "overlay2" | "overlay_secondary" => &mut theme.overlay2,
        "text" | "text_primary" => &mut theme.text,
        "subtext0" | "text_secondary" => &mut theme.subtext0,
        "subtext1" | "text_tertiary" => &mut theme.subtext1,
        "sapphire" | "accent_interactive" => &mut theme.sapphire,
        "mauve" | "accent_heading" => &mut theme.mauve,
        "green" | "semantic_success" => &mut theme.green,
        "yellow" | "semantic_warning" => &mut theme.yellow,
        "red" | "semantic_error" => &mut theme.red,
        "lavender" | "accent_emphasis" => &mut theme.lavender,
        _ => return Err(format!("unknown theme key '{key}'")),
    };
    *slot = color;
    Ok(())
}

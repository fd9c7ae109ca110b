use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::state::ProjectedRecord;
use crate::theme::Theme;
use crate::util::{display_name, join_or_dash, opt_num};

/// What: Map a species color name to a terminal color.
///
/// Inputs:
/// - `name`: species color as reported by the remote source (e.g. `"green"`)
///
/// Output:
/// - `Some(color)` for known names; `None` for `"transparent"` or anything unknown, in
///   which case the caller uses the theme accent.
#[must_use]
pub fn species_color(name: &str) -> Option<Color> {
    match name {
        "black" => Some(Color::Rgb(0x58, 0x5b, 0x70)),
        "blue" => Some(Color::Rgb(0x89, 0xb4, 0xfa)),
        "brown" => Some(Color::Rgb(0xc6, 0x9a, 0x6d)),
        "gray" => Some(Color::Rgb(0xa6, 0xad, 0xc8)),
        "green" => Some(Color::Rgb(0xa6, 0xe3, 0xa1)),
        "pink" => Some(Color::Rgb(0xf5, 0xc2, 0xe7)),
        "purple" => Some(Color::Rgb(0xcb, 0xa6, 0xf7)),
        "red" => Some(Color::Rgb(0xf3, 0x8b, 0xa8)),
        "white" => Some(Color::Rgb(0xcd, 0xd6, 0xf4)),
        "yellow" => Some(Color::Rgb(0xf9, 0xe2, 0xaf)),
        _ => None,
    }
}

/// Tenths (decimetres, hectograms) rendered with one decimal and `unit`.
fn metric(v: Option<i64>, unit: &str) -> String {
    v.map_or_else(
        || "—".to_string(),
        |n| format!("{}.{} {unit}", n / 10, n.rem_euclid(10)),
    )
}

/// Evolution species joined by `sep`, `—` when the chain is empty.
fn evolution(chain: &[String], sep: &str) -> String {
    if chain.is_empty() {
        "—".to_string()
    } else {
        chain.join(sep)
    }
}

/// What: Build the styled lines of one card body.
///
/// Inputs:
/// - `rec`: projected record (read-only)
/// - `th`: active theme
///
/// Output:
/// - Header line tinted by the species color followed by one line per field.
///
/// Details:
/// - Missing stats and measurements render as `—`; empty lists render as `—`.
/// - The description is the last line so the caller's wrapping only affects it.
#[must_use]
pub fn card_lines(rec: &ProjectedRecord, th: &Theme) -> Vec<Line<'static>> {
    let accent = species_color(&rec.color).unwrap_or(th.mauve);
    let label = |s: &'static str| Span::styled(s, Style::default().fg(th.overlay1));
    let value = |s: String| Span::styled(s, Style::default().fg(th.text));

    vec![
        Line::from(vec![
            Span::styled(
                display_name(&rec.name),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  #{:03}", rec.id), Style::default().fg(th.subtext0)),
        ]),
        Line::from(vec![
            label("HP "),
            Span::styled(
                opt_num(rec.hp),
                Style::default().fg(th.green).add_modifier(Modifier::BOLD),
            ),
            label("  Type "),
            value(join_or_dash(&rec.types)),
        ]),
        Line::from(vec![
            label("Atk "),
            value(opt_num(rec.attack)),
            label("  Def "),
            value(opt_num(rec.defense)),
            label("  SpA "),
            value(opt_num(rec.special_attack)),
        ]),
        Line::from(vec![
            label("Ht "),
            value(metric(rec.height, "m")),
            label("  Wt "),
            value(metric(rec.weight, "kg")),
        ]),
        Line::from(vec![label("Abilities "), value(join_or_dash(&rec.abilities))]),
        Line::from(vec![label("Moves "), value(join_or_dash(&rec.moves))]),
        Line::from(vec![label("Evolution "), value(evolution(&rec.evolution_chain, " → "))]),
        Line::from(Span::styled(
            rec.description.clone(),
            Style::default()
                .fg(th.subtext1)
                .add_modifier(Modifier::ITALIC),
        )),
    ]
}

/// What: Plain-text rendering of one card for non-interactive output.
///
/// Output:
/// - Multi-line text without styling, same fields and placeholders as [`card_lines`].
#[must_use]
pub fn card_text(rec: &ProjectedRecord) -> String {
    let description = if rec.description.is_empty() {
        "—"
    } else {
        rec.description.as_str()
    };
    format!(
        "{} #{:03} [{}]\n  HP {}  Type {}\n  Atk {}  Def {}  SpA {}\n  Ht {}  Wt {}\n  Abilities {}\n  Moves {}\n  Evolution {}\n  {}\n",
        display_name(&rec.name),
        rec.id,
        rec.color,
        opt_num(rec.hp),
        join_or_dash(&rec.types),
        opt_num(rec.attack),
        opt_num(rec.defense),
        opt_num(rec.special_attack),
        metric(rec.height, "m"),
        metric(rec.weight, "kg"),
        join_or_dash(&rec.abilities),
        join_or_dash(&rec.moves),
        evolution(&rec.evolution_chain, " -> "),
        description,
    )
}

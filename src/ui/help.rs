use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::theme::Theme;

/// Key bindings listed in the help overlay, grouped by section.
const BINDINGS: &[(&str, &[(&str, &str)])] = &[
    (
        "Global",
        &[
            ("Ctrl+C", "Quit"),
            ("Tab / Shift+Tab", "Next / previous input"),
            ("?", "Toggle help"),
        ],
    ),
    (
        "Search form",
        &[
            ("Enter", "Search"),
            ("Esc", "Back to cards"),
            ("← / →", "Change stat"),
            ("Backspace", "Delete"),
        ],
    ),
    (
        "Cards",
        &[
            ("Arrows", "Move selection"),
            ("n / PgDn", "Next page"),
            ("p / PgUp", "Previous page"),
            ("o", "Toggle order"),
            ("t / T", "Next / previous type filter"),
            ("s / S", "Next / previous sort key"),
            ("/", "Edit name"),
            ("f", "Search"),
            ("q", "Quit"),
        ],
    ),
];

/// Render the help overlay centered on `area`.
pub fn render_help(f: &mut Frame, area: Rect, th: &Theme) {
    let w = area.width.saturating_sub(6).min(64);
    let h = area.height.saturating_sub(4).min(26);
    let rect = Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    };
    f.render_widget(Clear, rect);

    let mut lines: Vec<Line<'static>> = vec![
        Line::from(Span::styled(
            "Pokedex Help",
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for (section, keys) in BINDINGS {
        lines.push(Line::from(Span::styled(
            *section,
            Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
        )));
        for (chord, action) in *keys {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {chord:18}"),
                    Style::default().fg(th.text).add_modifier(Modifier::BOLD),
                ),
                Span::styled(*action, Style::default().fg(th.overlay2)),
            ]));
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "Esc / Enter / ? to close",
        Style::default().fg(th.subtext0),
    )));

    let para = Paragraph::new(lines)
        .style(Style::default().fg(th.text).bg(th.mantle))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(Span::styled(" Help ", Style::default().fg(th.overlay1)))
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(th.mauve))
                .style(Style::default().bg(th.mantle)),
        );
    f.render_widget(para, rect);
}

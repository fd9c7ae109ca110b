use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    prelude::Position,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::state::{AppState, Focus};
use crate::theme::Theme;
use crate::util::truncate_to_width;

fn field_block<'a>(title: &'a str, focused: bool, th: &Theme) -> Block<'a> {
    Block::default()
        .title(Span::styled(
            title,
            Style::default().fg(if focused { th.sapphire } else { th.overlay1 }),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { th.sapphire } else { th.surface2 }))
}

/// What: Render the search form: name, stat selector, min and max inputs.
///
/// Inputs:
/// - `f`: frame
/// - `app`: application state (read-only)
/// - `area`: three rows high
/// - `th`: theme
///
/// Details:
/// - The terminal cursor is placed at the end of the focused text field.
/// - Blank min/max fields show their effective default bound as a dim placeholder.
pub fn render_search_form(f: &mut Frame, app: &AppState, area: Rect, th: &Theme) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(46),
            Constraint::Percentage(18),
            Constraint::Percentage(18),
            Constraint::Percentage(18),
        ])
        .split(area);

    let c = &app.criteria;
    let fields = [
        (Focus::Name, " Name ", c.search_text.as_str(), "search by name"),
        (Focus::Min, " Min ", c.min_value.as_str(), "0"),
        (Focus::Max, " Max ", c.max_value.as_str(), "9999"),
    ];
    for (focus, title, text, placeholder) in fields {
        let rect = match focus {
            Focus::Name => cols[0],
            Focus::Min => cols[2],
            _ => cols[3],
        };
        let focused = app.focus == focus;
        let block = field_block(title, focused, th);
        let inner = block.inner(rect);
        let line = if text.is_empty() {
            Line::from(Span::styled(placeholder, Style::default().fg(th.overlay2)))
        } else {
            Line::from(Span::styled(
                truncate_to_width(text, usize::from(inner.width)),
                Style::default().fg(th.text),
            ))
        };
        f.render_widget(Paragraph::new(line).block(block), rect);
        if focused {
            let offset = u16::try_from(text.width()).unwrap_or(u16::MAX);
            let x = inner
                .x
                .saturating_add(offset)
                .min(inner.right().saturating_sub(1));
            f.set_cursor_position(Position { x, y: inner.y });
        }
    }

    let stat_focused = app.focus == Focus::Stat;
    let stat = Paragraph::new(Line::from(vec![
        Span::styled("◀ ", Style::default().fg(th.overlay1)),
        Span::styled(
            c.stat.label(),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ▶", Style::default().fg(th.overlay1)),
    ]))
    .block(field_block(" Stat ", stat_focused, th));
    f.render_widget(stat, cols[1]);
}

/// What: Render the one-line controls row: type filter, sort key and remote order.
pub fn render_controls(f: &mut Frame, app: &AppState, area: Rect, th: &Theme) {
    let label = |s: &'static str| Span::styled(s, Style::default().fg(th.overlay1));
    let value = |s: String| {
        Span::styled(
            s,
            Style::default().fg(th.lavender).add_modifier(Modifier::BOLD),
        )
    };
    let line = Line::from(vec![
        label(" Type [t]: "),
        value(app.type_filter_label()),
        label("   Sort [s]: "),
        value(app.criteria.sort_key.label().to_string()),
        label("   Order [o]: "),
        value(app.criteria.order.label().to_string()),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::events::GRID_COLUMNS;
use crate::state::{AppState, LoadStatus};
use crate::theme::Theme;

use super::card::card_lines;

/// Rows of one card including its border.
pub const CARD_HEIGHT: u16 = 12;

/// Spinner frames advanced by the tick worker.
const SPINNER: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Current spinner glyph for the given frame counter.
#[must_use]
pub fn spinner_glyph(frame: usize) -> &'static str {
    SPINNER[frame % SPINNER.len()]
}

/// What: Compute the first grid row to draw so the selected card stays visible.
///
/// Inputs:
/// - `selected`: index of the highlighted card
/// - `visible_rows`: rows that fit in the area (at least 1)
///
/// Output:
/// - Index of the first visible row.
#[must_use]
pub fn first_visible_row(selected: usize, visible_rows: usize) -> usize {
    let sel_row = selected / GRID_COLUMNS;
    sel_row.saturating_sub(visible_rows.max(1) - 1)
}

/// What: Render the card grid, or the loading/failure/empty message in its place.
///
/// Inputs:
/// - `f`: frame
/// - `app`: application state (read-only)
/// - `area`: grid area including the outer border
/// - `th`: theme
pub fn render_cards(f: &mut Frame, app: &AppState, area: Rect, th: &Theme) {
    let mut title = vec![Span::styled(
        format!(" Pokémon ({}) ", app.displayed.len()),
        Style::default().fg(th.overlay1),
    )];
    if app.is_loading() {
        title.push(Span::styled(
            format!("{} ", spinner_glyph(app.spinner_frame)),
            Style::default().fg(th.sapphire),
        ));
    }
    let block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if app.focus.is_form() {
            th.surface2
        } else {
            th.lavender
        }));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let message = match &app.status {
        LoadStatus::Failed(msg) => Some(Line::from(Span::styled(
            format!("Failed to load page: {msg}"),
            Style::default().fg(th.red).add_modifier(Modifier::BOLD),
        ))),
        LoadStatus::Loading if app.displayed.is_empty() => Some(Line::from(Span::styled(
            format!("{} Loading…", spinner_glyph(app.spinner_frame)),
            Style::default().fg(th.sapphire),
        ))),
        LoadStatus::Ready if app.displayed.is_empty() => Some(Line::from(Span::styled(
            "No matches found",
            Style::default().fg(th.yellow),
        ))),
        _ => None,
    };
    if let Some(line) = message {
        let y = inner.y + inner.height / 2;
        let row = Rect {
            x: inner.x,
            y,
            width: inner.width,
            height: inner.height.saturating_sub(y - inner.y).min(2),
        };
        f.render_widget(
            Paragraph::new(line)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            row,
        );
        return;
    }

    let visible_rows = usize::from((inner.height / CARD_HEIGHT).max(1));
    let first_row = first_visible_row(app.selected, visible_rows);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); visible_rows])
        .split(inner);

    for (row_offset, row_area) in rows.iter().enumerate() {
        let start = (first_row + row_offset) * GRID_COLUMNS;
        if start >= app.displayed.len() {
            break;
        }
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, 4); GRID_COLUMNS])
            .split(*row_area);
        for (col, card_area) in cols.iter().enumerate() {
            let idx = start + col;
            let Some(rec) = app.displayed.get(idx) else {
                break;
            };
            let selected = idx == app.selected && !app.focus.is_form();
            let card = Paragraph::new(card_lines(rec, th))
                .wrap(Wrap { trim: true })
                .style(Style::default().bg(th.mantle))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(if selected {
                            Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD)
                        } else {
                            Style::default().fg(th.surface1)
                        }),
                );
            f.render_widget(card, *card_area);
        }
    }
}

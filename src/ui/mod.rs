//! TUI rendering for Pokedex.
//!
//! Layout from top to bottom: title, search form, controls row, card grid, footer.
//! Rendering never mutates the application state.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::state::AppState;
use crate::theme::theme;

/// Single card body.
pub mod card;
/// Card grid and status messages.
mod cards;
/// Search form and controls row.
mod form;
/// Help overlay.
mod help;

pub use card::{card_lines, card_text, species_color};

/// What: Render one full frame.
///
/// Inputs:
/// - `f`: frame to draw into
/// - `app`: application state (read-only)
pub fn ui(f: &mut Frame, app: &AppState) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    let title = Line::from(vec![
        Span::styled(
            " Pokédex ",
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ),
        Span::styled("GraphQL catalog browser", Style::default().fg(th.overlay1)),
    ]);
    f.render_widget(Paragraph::new(title), chunks[0]);

    form::render_search_form(f, app, chunks[1], &th);
    form::render_controls(f, app, chunks[2], &th);
    cards::render_cards(f, app, chunks[3], &th);

    let footer = Line::from(vec![
        Span::styled(
            format!(" Page {} ", app.criteria.page),
            Style::default().fg(th.crust).bg(th.lavender),
        ),
        Span::styled(
            "  n/p page · Tab focus · ? help · q quit",
            Style::default().fg(th.subtext0),
        ),
    ]);
    f.render_widget(Paragraph::new(footer), chunks[4]);

    if app.show_help {
        help::render_help(f, area, &th);
    }
}

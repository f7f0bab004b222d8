use crate::app::state::{AppState, CARD_COLUMNS};
use crate::games::memory::MemoryMatch;
use crate::ui::layout::grid;
use crate::ui::theme::Palette;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

const HIDDEN: &str = "❓";

pub fn render(frame: &mut Frame, area: Rect, game: &MemoryMatch, state: &AppState, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Moves
            Constraint::Min(6),    // Cards
            Constraint::Length(1), // Completion banner
        ])
        .split(area);

    let memory = game.state();
    let moves = Paragraph::new(Line::from(vec![
        Span::styled(format!(" Moves: {}", memory.moves), palette.text()),
        Span::styled(
            format!("   Pairs: {}/{}", memory.matched_pairs(), memory.deck.len() / 2),
            palette.muted(),
        ),
    ]));
    frame.render_widget(moves, chunks[0]);

    let cells = grid(chunks[1], memory.deck.len(), CARD_COLUMNS, 8, 3);
    for (card, card_area) in memory.deck.iter().zip(cells) {
        let (label, style) = if !card.face_up() {
            (HIDDEN, palette.card_hidden())
        } else if card.matched {
            (card.value.as_str(), palette.card_matched())
        } else {
            (card.value.as_str(), palette.card_shown())
        };
        let border = if card.id == state.card_cursor.index {
            palette.border_focused()
        } else {
            palette.border()
        };
        let widget = Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::default().borders(Borders::ALL).border_style(border));
        frame.render_widget(widget, card_area);
    }

    if game.is_complete() {
        let banner = Paragraph::new(format!(
            "You matched everything in {} moves! 🎉",
            memory.moves
        ))
        .alignment(Alignment::Center)
        .style(palette.success());
        frame.render_widget(banner, chunks[2]);
    }
}

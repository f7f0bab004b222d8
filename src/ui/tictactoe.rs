use crate::app::state::{AppState, BOARD_COLUMNS};
use crate::games::tictactoe::{Mark, TicTacToe, CELLS};
use crate::ui::layout::grid;
use crate::ui::theme::Palette;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, game: &TicTacToe, state: &AppState, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Mode
            Constraint::Min(9),    // Board
            Constraint::Length(1), // Status
        ])
        .split(area);

    let game_state = game.state();
    let mode = Paragraph::new(Line::from(vec![
        Span::styled(" Mode: ", palette.muted()),
        Span::styled(game_state.mode.label(), palette.text()),
    ]));
    frame.render_widget(mode, chunks[0]);

    let winning = game_state.board.winning_line();
    let cells = grid(chunks[1], CELLS, BOARD_COLUMNS, 7, 3);
    for (i, cell_area) in cells.into_iter().enumerate() {
        let (label, mut style) = match game_state.board.get(i) {
            Some(Mark::X) => ("X".to_string(), palette.mark_x()),
            Some(Mark::O) => ("O".to_string(), palette.mark_o()),
            None => ((i + 1).to_string(), palette.muted()),
        };
        if winning.is_some_and(|line| line.contains(&i)) {
            style = palette.winning_cell();
        }
        let border = if i == state.board_cursor.index {
            palette.border_focused()
        } else {
            palette.border()
        };
        let cell = Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::default().borders(Borders::ALL).border_style(border));
        frame.render_widget(cell, cell_area);
    }

    let status_style = if game.outcome().is_terminal() {
        palette.success()
    } else {
        palette.text()
    };
    let mut status_text = game_state.status_text();
    if game.opponent_pending() {
        status_text.push_str(" (CPU is thinking…)");
    }
    let status = Paragraph::new(status_text)
        .alignment(Alignment::Center)
        .style(status_style);
    frame.render_widget(status, chunks[2]);
}

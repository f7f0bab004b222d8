mod header;
mod layout;
mod memory;
mod menu;
mod spinner;
mod status_bar;
mod theme;
mod tictactoe;

use crate::app::state::AppState;
use crate::hub::Screen;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use theme::Palette;

pub fn render(frame: &mut Frame, state: &AppState) {
    let palette = Palette::new(state.hub.theme());
    let area = frame.area();
    frame.render_widget(Block::default().style(palette.base()), area);

    let app_layout = layout::compute_layout(area);
    header::render(frame, app_layout.header, state, &palette);

    let view = state.hub.view();
    let block = Block::default()
        .title(format!(" {} ", view.title()))
        .title_style(palette.title())
        .borders(Borders::ALL)
        .border_style(palette.border())
        .style(palette.base());
    let body = block.inner(app_layout.body);
    frame.render_widget(block, app_layout.body);

    match state.hub.screen() {
        Screen::Menu => menu::render(frame, body, state, &palette),
        Screen::TicTacToe(game) => tictactoe::render(frame, body, game, state, &palette),
        Screen::Memory(game) => memory::render(frame, body, game, state, &palette),
        Screen::Spinner(spinner) => spinner::render(frame, body, spinner, state, &palette),
    }

    let footer = Paragraph::new("Made with ♥ in the terminal. Pick any game to play instantly.")
        .alignment(Alignment::Center)
        .style(palette.muted());
    frame.render_widget(footer, app_layout.footer);

    status_bar::render(frame, app_layout.status_bar, state, &palette);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::hub::View;
    use ratatui::backend::TestBackend;
    use std::time::Instant;

    fn draw(state: &AppState) -> String {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn app() -> AppState {
        AppState::new(AppConfig {
            seed: Some(1),
            ..AppConfig::default()
        })
    }

    #[test]
    fn test_menu_lists_games() {
        let text = draw(&app());
        assert!(text.contains("Fun Games Hub"));
        assert!(text.contains("Tic-Tac-Toe"));
        assert!(text.contains("Memory Match"));
        assert!(text.contains("Surprise Spinner"));
    }

    #[test]
    fn test_tictactoe_status_line() {
        let t0 = Instant::now();
        let mut state = app();
        state.hub.select(View::TicTacToe);
        assert!(draw(&state).contains("X's turn"));
        state.hub.play_cell(t0, 0);
        let text = draw(&state);
        assert!(text.contains("O's turn"));
        assert!(text.contains("Human vs Human"));
    }

    #[test]
    fn test_memory_shows_moves() {
        let mut state = app();
        state.hub.select(View::Memory);
        assert!(draw(&state).contains("Moves: 0"));
    }

    #[test]
    fn test_spinner_prompt() {
        let mut state = app();
        state.hub.select(View::Spinner);
        assert!(draw(&state).contains("Press Enter to spin"));
    }

    #[test]
    fn test_dark_theme_label() {
        let mut state = app();
        assert!(draw(&state).contains("[t] Dark"));
        state.hub.toggle_theme();
        assert!(draw(&state).contains("[t] Light"));
    }
}

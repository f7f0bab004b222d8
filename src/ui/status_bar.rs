use crate::app::state::AppState;
use crate::hub::View;
use crate::ui::theme::Palette;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

fn key_hints(view: View) -> &'static [(&'static str, &'static str)] {
    match view {
        View::Menu => &[("↑↓", "choose"), ("Enter", "play"), ("1-3", "jump"), ("t", "theme"), ("q", "quit")],
        View::TicTacToe => &[("1-9", "place"), ("←↑↓→ Enter", "select"), ("m", "mode"), ("r", "reset"), ("Esc", "back")],
        View::Memory => &[("←↑↓→", "move"), ("Enter", "flip"), ("r", "restart"), ("Esc", "back")],
        View::Spinner => &[("Enter", "spin"), ("Esc", "back")],
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let mut parts: Vec<Span> = Vec::new();
    for (key, what) in key_hints(state.hub.view()) {
        parts.push(Span::styled(format!(" {}", key), palette.status_key()));
        parts.push(Span::styled(format!(" {} ", what), palette.status_bar()));
    }

    // Seed on the right so a session can be replayed from the config
    let seed = format!(" seed {} ", state.seed);
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + seed.width());
    parts.push(Span::styled(" ".repeat(remaining), palette.status_bar()));
    parts.push(Span::styled(seed, palette.status_bar()));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

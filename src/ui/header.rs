use crate::app::state::AppState;
use crate::hub::Theme;
use crate::ui::theme::Palette;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(palette.border())
        .style(palette.base());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(24)])
        .split(inner);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(" Fun Games Hub ", palette.title()),
        Span::styled("🎮", palette.text()),
    ]));
    frame.render_widget(title, chunks[0]);

    // The toggle names the theme it switches to
    let target = match state.hub.theme() {
        Theme::Light => "Dark",
        Theme::Dark => "Light",
    };
    let controls = Paragraph::new(Line::from(vec![
        Span::styled(format!("[t] {}", target), palette.text()),
        Span::styled("  [h] Home ", palette.muted()),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(controls, chunks[1]);
}

use crate::app::state::AppState;
use crate::hub::{View, MENU};
use crate::ui::theme::Palette;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

fn description(view: View) -> &'static str {
    match view {
        View::TicTacToe => "Classic 3×3. Play vs Human or quick CPU.",
        View::Memory => "Flip cards and find pairs. Test your memory!",
        View::Spinner => "Spin to pick a game for you.",
        View::Menu => "",
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    let selected = state.selected_menu_view();
    for (i, (view, column)) in MENU.iter().zip(columns.iter()).enumerate() {
        let border = if *view == selected {
            palette.border_focused()
        } else {
            palette.border()
        };
        let block = Block::default()
            .title(format!(" {} ", i + 1))
            .borders(Borders::ALL)
            .border_style(border)
            .style(palette.base());

        let text = vec![
            Line::from(Span::styled(view.title(), palette.title())),
            Line::from(""),
            Line::from(Span::styled(description(*view), palette.muted())),
        ];
        let card_area = Rect {
            height: column.height.min(7),
            ..*column
        };
        let paragraph = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, card_area);
    }
}

use crate::app::state::AppState;
use crate::games::spinner::Spinner;
use crate::hub::Destination;
use crate::ui::theme::Palette;
use ratatui::layout::Flex;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

const FACES: [&str; 6] = ["⚀", "⚁", "⚂", "⚃", "⚄", "⚅"];

pub fn render(
    frame: &mut Frame,
    area: Rect,
    spinner: &Spinner<Destination>,
    state: &AppState,
    palette: &Palette,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .flex(Flex::Center)
        .constraints([
            Constraint::Length(5), // Wheel
            Constraint::Length(1),
            Constraint::Length(1), // Prompt
            Constraint::Length(1), // Result
        ])
        .split(area);

    let wheel_area = Layout::default()
        .direction(Direction::Horizontal)
        .flex(Flex::Center)
        .constraints([Constraint::Length(20)])
        .split(chunks[0])[0];

    // Cycle faces and game names while spinning
    let (face, caption) = if spinner.is_spinning() {
        let frame_no = (state.tick_count / 2) as usize;
        let name = Destination::ALL[frame_no % Destination::ALL.len()].name();
        (FACES[frame_no % FACES.len()], name)
    } else {
        ("🎲", "")
    };
    let wheel = Paragraph::new(vec![
        Line::from(Span::styled(face, palette.spinner())),
        Line::from(Span::styled(caption, palette.muted())),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(palette.spinner()),
    );
    frame.render_widget(wheel, wheel_area);

    let prompt = Paragraph::new("Press Enter to spin and let chance choose a game.")
        .alignment(Alignment::Center)
        .style(palette.text());
    frame.render_widget(prompt, chunks[2]);

    if let Some(result) = spinner.result() {
        let line = Line::from(vec![
            Span::styled("Going to ", palette.text()),
            Span::styled(result.name(), palette.title()),
            Span::styled("…", palette.text()),
        ]);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), chunks[3]);
    }
}

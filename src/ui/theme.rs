use crate::hub::Theme;
use ratatui::style::{Color, Modifier, Style};

/// Styles for the active light/dark theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    theme: Theme,
}

impl Palette {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    fn dark(&self) -> bool {
        self.theme == Theme::Dark
    }

    fn fg(&self) -> Color {
        if self.dark() {
            Color::Gray
        } else {
            Color::Black
        }
    }

    fn bg(&self) -> Color {
        if self.dark() {
            Color::Black
        } else {
            Color::White
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.fg()).bg(self.bg())
    }

    pub fn border(&self) -> Style {
        Style::default().fg(Color::DarkGray).bg(self.bg())
    }

    pub fn border_focused(&self) -> Style {
        let accent = if self.dark() { Color::Cyan } else { Color::Blue };
        Style::default().fg(accent).bg(self.bg())
    }

    pub fn title(&self) -> Style {
        let fg = if self.dark() { Color::White } else { Color::Black };
        Style::default().fg(fg).bg(self.bg()).add_modifier(Modifier::BOLD)
    }

    pub fn text(&self) -> Style {
        self.base()
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(Color::DarkGray).bg(self.bg())
    }

    pub fn mark_x(&self) -> Style {
        let fg = if self.dark() { Color::LightBlue } else { Color::Blue };
        Style::default().fg(fg).bg(self.bg()).add_modifier(Modifier::BOLD)
    }

    pub fn mark_o(&self) -> Style {
        let fg = if self.dark() { Color::LightRed } else { Color::Red };
        Style::default().fg(fg).bg(self.bg()).add_modifier(Modifier::BOLD)
    }

    pub fn winning_cell(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn card_hidden(&self) -> Style {
        let bg = if self.dark() { Color::DarkGray } else { Color::Gray };
        Style::default().fg(self.fg()).bg(bg)
    }

    pub fn card_shown(&self) -> Style {
        self.base()
    }

    pub fn card_matched(&self) -> Style {
        let fg = if self.dark() { Color::LightGreen } else { Color::Green };
        Style::default().fg(fg).bg(self.bg())
    }

    pub fn success(&self) -> Style {
        let fg = if self.dark() { Color::LightGreen } else { Color::Green };
        Style::default().fg(fg).bg(self.bg()).add_modifier(Modifier::BOLD)
    }

    pub fn spinner(&self) -> Style {
        let fg = if self.dark() { Color::LightYellow } else { Color::Yellow };
        Style::default().fg(fg).bg(self.bg()).add_modifier(Modifier::BOLD)
    }

    pub fn status_bar(&self) -> Style {
        if self.dark() {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Black).bg(Color::Gray)
        }
    }

    pub fn status_key(&self) -> Style {
        self.status_bar().add_modifier(Modifier::BOLD)
    }
}

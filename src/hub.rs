//! The hub: view routing, theme, and the engine behind the active view.
//!
//! Only one engine exists at a time. Entering a game builds a fresh engine,
//! and leaving drops it along with any timers it still had pending.

use crate::config::AppConfig;
use crate::games::memory::{CardId, Flip, MemoryMatch};
use crate::games::random::RandomSource;
use crate::games::spinner::{SpinTiming, Spinner};
use crate::games::tictactoe::{Mode, Outcome, TicTacToe};
use std::time::{Duration, Instant};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Menu,
    TicTacToe,
    Memory,
    Spinner,
}

impl View {
    pub fn title(self) -> &'static str {
        match self {
            View::Menu => "Menu",
            View::TicTacToe => "Tic-Tac-Toe",
            View::Memory => "Memory Match",
            View::Spinner => "Surprise Spinner",
        }
    }
}

/// Menu entries, in display order.
pub const MENU: [View; 3] = [View::TicTacToe, View::Memory, View::Spinner];

/// A game the spinner can send the player to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    TicTacToe,
    Memory,
}

impl Destination {
    pub const ALL: [Destination; 2] = [Destination::TicTacToe, Destination::Memory];

    pub fn view(self) -> View {
        match self {
            Destination::TicTacToe => View::TicTacToe,
            Destination::Memory => View::Memory,
        }
    }

    pub fn name(self) -> &'static str {
        self.view().title()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Delays and deck used when building engines.
#[derive(Debug, Clone)]
pub struct GameSettings {
    pub opponent_delay: Duration,
    pub mismatch_delay: Duration,
    pub spin: SpinTiming,
    pub icons: Vec<String>,
}

impl GameSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            opponent_delay: config.timing.opponent_delay(),
            mismatch_delay: config.timing.mismatch_delay(),
            spin: config.timing.spin_timing(),
            icons: config.memory.icons.clone(),
        }
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

#[derive(Debug)]
pub enum Screen {
    Menu,
    TicTacToe(TicTacToe),
    Memory(MemoryMatch),
    Spinner(Spinner<Destination>),
}

pub struct Hub {
    screen: Screen,
    theme: Theme,
    settings: GameSettings,
    rng: Box<dyn RandomSource>,
}

impl Hub {
    pub fn new(settings: GameSettings, rng: Box<dyn RandomSource>) -> Self {
        Self {
            screen: Screen::Menu,
            theme: Theme::Light,
            settings,
            rng,
        }
    }

    pub fn view(&self) -> View {
        match self.screen {
            Screen::Menu => View::Menu,
            Screen::TicTacToe(_) => View::TicTacToe,
            Screen::Memory(_) => View::Memory,
            Screen::Spinner(_) => View::Spinner,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        debug!(theme = ?self.theme, "theme toggled");
    }

    /// Menu selection. Ignored unless the menu is showing.
    pub fn select(&mut self, view: View) -> bool {
        if self.view() != View::Menu || view == View::Menu {
            return false;
        }
        self.enter(view);
        true
    }

    /// Back/home. Ignored on the menu.
    pub fn back(&mut self) -> bool {
        if self.view() == View::Menu {
            return false;
        }
        info!(from = ?self.view(), "back to menu");
        self.screen = Screen::Menu;
        true
    }

    fn enter(&mut self, view: View) {
        info!(?view, "entering view");
        self.screen = match view {
            View::Menu => Screen::Menu,
            View::TicTacToe => {
                Screen::TicTacToe(TicTacToe::new(Mode::default(), self.settings.opponent_delay))
            }
            View::Memory => Screen::Memory(MemoryMatch::new(
                self.settings.icons.clone(),
                self.settings.mismatch_delay,
                self.rng.as_mut(),
            )),
            View::Spinner => Screen::Spinner(Spinner::new(self.settings.spin)),
        };
    }

    /// Drives the active engine's timers. Returns whether anything visible
    /// changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match &mut self.screen {
            Screen::Menu => false,
            Screen::TicTacToe(game) => game.tick(now, self.rng.as_mut()),
            Screen::Memory(game) => game.tick(now),
            Screen::Spinner(spinner) => {
                let was_spinning = spinner.is_spinning();
                match spinner.tick(now, self.rng.as_mut()) {
                    Some(destination) => {
                        info!(?destination, "spinner picked a game");
                        self.enter(destination.view());
                        true
                    }
                    None => was_spinning != spinner.is_spinning(),
                }
            }
        }
    }

    pub fn play_cell(&mut self, now: Instant, cell: usize) -> bool {
        match &mut self.screen {
            Screen::TicTacToe(game) => game.play(now, cell),
            _ => false,
        }
    }

    pub fn toggle_mode(&mut self, now: Instant) {
        if let Screen::TicTacToe(game) = &mut self.screen {
            let mode = game.state().mode.toggled();
            game.set_mode(now, mode);
        }
    }

    pub fn flip_card(&mut self, now: Instant, id: CardId) -> Flip {
        match &mut self.screen {
            Screen::Memory(game) => game.flip(now, id),
            _ => Flip::Ignored,
        }
    }

    /// Reset for Tic-Tac-Toe, restart for Memory Match.
    pub fn reset_game(&mut self, now: Instant) {
        match &mut self.screen {
            Screen::TicTacToe(game) => game.reset(now),
            Screen::Memory(game) => game.restart(self.rng.as_mut()),
            Screen::Menu | Screen::Spinner(_) => {}
        }
    }

    pub fn spin(&mut self, now: Instant) -> bool {
        match &mut self.screen {
            Screen::Spinner(spinner) => spinner.spin(now, &Destination::ALL, self.rng.as_mut()),
            _ => false,
        }
    }

    /// The active game has reached a win, draw, or full match.
    pub fn game_finished(&self) -> bool {
        match &self.screen {
            Screen::TicTacToe(game) => game.outcome() != Outcome::InProgress,
            Screen::Memory(game) => game.is_complete(),
            Screen::Menu | Screen::Spinner(_) => false,
        }
    }

    pub fn is_animating(&self) -> bool {
        matches!(&self.screen, Screen::Spinner(spinner) if spinner.is_spinning())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::random::testing::ScriptedRandom;
    use crate::games::random::SeededRandom;
    use crate::games::tictactoe::Mark;

    fn hub() -> Hub {
        Hub::new(GameSettings::default(), Box::new(SeededRandom::new(17)))
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_initial_state() {
        let hub = hub();
        assert_eq!(hub.view(), View::Menu);
        assert_eq!(hub.theme(), Theme::Light);
    }

    #[test]
    fn test_menu_selection() {
        let mut hub = hub();
        assert!(hub.select(View::Memory));
        assert_eq!(hub.view(), View::Memory);
        assert!(matches!(hub.screen(), Screen::Memory(_)));
    }

    #[test]
    fn test_back_from_every_game() {
        for view in MENU {
            let mut hub = hub();
            hub.select(view);
            assert_eq!(hub.view(), view);
            assert!(hub.back());
            assert_eq!(hub.view(), View::Menu);
        }
    }

    #[test]
    fn test_invalid_transitions_are_ignored() {
        let mut hub = hub();
        assert!(!hub.back());
        assert!(!hub.select(View::Menu));
        hub.select(View::TicTacToe);
        assert!(!hub.select(View::Memory));
        assert_eq!(hub.view(), View::TicTacToe);
    }

    #[test]
    fn test_theme_toggle() {
        let mut hub = hub();
        hub.toggle_theme();
        assert_eq!(hub.theme(), Theme::Dark);
        hub.select(View::Memory);
        hub.toggle_theme();
        assert_eq!(hub.theme(), Theme::Light);
    }

    #[test]
    fn test_leaving_drops_game() {
        let t0 = Instant::now();
        let mut hub = hub();
        hub.select(View::TicTacToe);
        hub.play_cell(t0, 4);
        hub.back();
        hub.select(View::TicTacToe);
        match hub.screen() {
            Screen::TicTacToe(game) => assert_eq!(game.state().board.get(4), None),
            other => panic!("unexpected screen {:?}", other),
        }
    }

    #[test]
    fn test_navigating_away_cancels_opponent() {
        let t0 = Instant::now();
        let mut hub = hub();
        hub.select(View::TicTacToe);
        hub.toggle_mode(t0);
        hub.play_cell(t0, 0);
        hub.back();
        assert!(!hub.tick(t0 + ms(1000)));
        assert_eq!(hub.view(), View::Menu);
    }

    #[test]
    fn test_cpu_mode_through_hub() {
        let t0 = Instant::now();
        let mut hub = hub();
        hub.select(View::TicTacToe);
        hub.toggle_mode(t0);
        assert!(hub.play_cell(t0, 0));
        assert!(!hub.play_cell(t0, 1));
        assert!(hub.tick(t0 + ms(420)));
        match hub.screen() {
            Screen::TicTacToe(game) => {
                assert_eq!(game.state().mode, Mode::HumanVsRandom);
                assert_eq!(game.state().next_mark, Mark::X);
                assert_eq!(game.state().board.empty_cells().len(), 7);
            }
            other => panic!("unexpected screen {:?}", other),
        }
    }

    #[test]
    fn test_spinner_navigates_to_pick() {
        let t0 = Instant::now();
        // Wait draw 0 -> 1200ms, pick draw 1 -> Memory.
        let rng = ScriptedRandom::new(&[0, 1]);
        let mut hub = Hub::new(GameSettings::default(), Box::new(rng));
        hub.select(View::Spinner);

        assert!(hub.spin(t0));
        assert!(hub.is_animating());
        assert!(!hub.spin(t0));

        assert!(hub.tick(t0 + ms(1200)));
        assert!(!hub.is_animating());
        assert_eq!(hub.view(), View::Spinner);
        match hub.screen() {
            Screen::Spinner(spinner) => assert_eq!(spinner.result(), Some(Destination::Memory)),
            other => panic!("unexpected screen {:?}", other),
        }

        assert!(hub.tick(t0 + ms(1900)));
        assert_eq!(hub.view(), View::Memory);
    }

    #[test]
    fn test_back_during_spin_cancels_navigation() {
        let t0 = Instant::now();
        let mut hub = hub();
        hub.select(View::Spinner);
        hub.spin(t0);
        hub.back();
        hub.tick(t0 + ms(5000));
        assert_eq!(hub.view(), View::Menu);
    }

    #[test]
    fn test_game_inputs_ignored_on_other_views() {
        let t0 = Instant::now();
        let mut hub = hub();
        assert!(!hub.play_cell(t0, 0));
        assert_eq!(hub.flip_card(t0, 0), Flip::Ignored);
        assert!(!hub.spin(t0));
        hub.select(View::Memory);
        assert!(!hub.play_cell(t0, 0));
        assert!(!hub.spin(t0));
    }

    #[test]
    fn test_game_finished() {
        let t0 = Instant::now();
        let mut hub = hub();
        hub.select(View::TicTacToe);
        for cell in [0, 3, 1, 4] {
            hub.play_cell(t0, cell);
        }
        assert!(!hub.game_finished());
        hub.play_cell(t0, 2);
        assert!(hub.game_finished());
        hub.reset_game(t0);
        assert!(!hub.game_finished());
    }
}

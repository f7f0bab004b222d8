use crate::config::AppConfig;
use crate::games::random::SeededRandom;
use crate::hub::{GameSettings, Hub, View, MENU};

pub const BOARD_COLUMNS: usize = 3;
pub const CARD_COLUMNS: usize = 4;

/// Keyboard selection over a row-major grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridCursor {
    pub index: usize,
}

impl GridCursor {
    pub fn move_left(&mut self, cols: usize) {
        if self.index % cols > 0 {
            self.index -= 1;
        }
    }

    pub fn move_right(&mut self, cols: usize, len: usize) {
        if self.index % cols + 1 < cols && self.index + 1 < len {
            self.index += 1;
        }
    }

    pub fn move_up(&mut self, cols: usize) {
        if self.index >= cols {
            self.index -= cols;
        }
    }

    pub fn move_down(&mut self, cols: usize, len: usize) {
        if self.index + cols < len {
            self.index += cols;
        }
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub hub: Hub,
    pub menu_index: usize,
    pub board_cursor: GridCursor,
    pub card_cursor: GridCursor,
    pub seed: u64,
    pub should_quit: bool,
    pub dirty: bool,
    pub tick_count: u64,
    /// Whether the active game was already over after the previous event.
    pub finished: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => SeededRandom::new(seed),
            None => SeededRandom::from_entropy(),
        };
        let seed = rng.seed();
        let hub = Hub::new(GameSettings::from_config(&config), Box::new(rng));
        Self {
            config,
            hub,
            menu_index: 0,
            board_cursor: GridCursor::default(),
            card_cursor: GridCursor::default(),
            seed,
            should_quit: false,
            dirty: true,
            tick_count: 0,
            finished: false,
        }
    }

    pub fn selected_menu_view(&self) -> View {
        MENU[self.menu_index % MENU.len()]
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU.len();
        self.dirty = true;
    }

    pub fn menu_prev(&mut self) {
        self.menu_index = if self.menu_index == 0 {
            MENU.len() - 1
        } else {
            self.menu_index - 1
        };
        self.dirty = true;
    }

    pub fn card_count(&self) -> usize {
        self.config.memory.icons.len() * 2
    }

    /// Puts the game cursors back at the top-left, for a newly entered view.
    /// Entering a game also moves the menu cursor onto it, so going back
    /// leaves the menu on the game just left.
    pub fn reset_cursors(&mut self, view: View) {
        self.board_cursor = GridCursor::default();
        self.card_cursor = GridCursor::default();
        if let Some(index) = MENU.iter().position(|&v| v == view) {
            self.menu_index = index;
        }
    }
}

//! Tic-Tac-Toe: board, outcome detection and the turn state machine.

use super::random::{choose, RandomSource};
use super::timer::{TimerId, Timers};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

pub const CELLS: usize = 9;

/// Rows, then columns, then diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn other(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => f.write_str("X"),
            Mark::O => f.write_str("O"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win(Mark),
    Draw,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    HumanVsHuman,
    /// Human plays X, the random opponent plays O.
    HumanVsRandom,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::HumanVsHuman => Mode::HumanVsRandom,
            Mode::HumanVsRandom => Mode::HumanVsHuman,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::HumanVsHuman => "Human vs Human",
            Mode::HumanVsRandom => "Human (X) vs CPU (O)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Option<Mark>; CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, cell: usize) -> Option<Mark> {
        self.cells.get(cell).copied().flatten()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn empty_cells(&self) -> Vec<usize> {
        (0..CELLS).filter(|&i| self.cells[i].is_none()).collect()
    }

    /// First line holding three equal marks, in [`LINES`] order.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        LINES.iter().copied().find(|&[a, b, c]| {
            self.cells[a].is_some() && self.cells[a] == self.cells[b] && self.cells[a] == self.cells[c]
        })
    }

    pub fn evaluate(&self) -> Outcome {
        if let Some([a, _, _]) = self.winning_line() {
            if let Some(mark) = self.cells[a] {
                return Outcome::Win(mark);
            }
        }
        if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }
}

/// Board plus whose turn it is. The outcome is always derived from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToeState {
    pub board: Board,
    pub next_mark: Mark,
    pub mode: Mode,
}

impl TicTacToeState {
    pub fn new(mode: Mode) -> Self {
        Self {
            board: Board::new(),
            next_mark: Mark::X,
            mode,
        }
    }

    pub fn outcome(&self) -> Outcome {
        self.board.evaluate()
    }

    /// Places the current mark at `cell`. Returns the state unchanged when the
    /// cell is out of range or occupied, or the game is already over.
    pub fn apply_move(&self, cell: usize) -> Self {
        if cell >= CELLS || self.board.cells[cell].is_some() || self.outcome().is_terminal() {
            return *self;
        }
        let mut next = *self;
        next.board.cells[cell] = Some(self.next_mark);
        next.next_mark = self.next_mark.other();
        next
    }

    /// The random opponent is due to move.
    pub fn opponent_to_move(&self) -> bool {
        self.mode == Mode::HumanVsRandom && self.next_mark == Mark::O && !self.outcome().is_terminal()
    }

    pub fn status_text(&self) -> String {
        match self.outcome() {
            Outcome::Win(mark) => format!("Winner: {}", mark),
            Outcome::Draw => "Draw!".to_string(),
            Outcome::InProgress => format!("{}'s turn", self.next_mark),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TicTacToeTimer {
    OpponentMove,
}

/// A running game: state plus the pending opponent move.
#[derive(Debug)]
pub struct TicTacToe {
    state: TicTacToeState,
    opponent_delay: Duration,
    timers: Timers<TicTacToeTimer>,
    opponent_timer: Option<TimerId>,
}

impl TicTacToe {
    pub fn new(mode: Mode, opponent_delay: Duration) -> Self {
        Self {
            state: TicTacToeState::new(mode),
            opponent_delay,
            timers: Timers::new(),
            opponent_timer: None,
        }
    }

    pub fn state(&self) -> &TicTacToeState {
        &self.state
    }

    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    pub fn opponent_pending(&self) -> bool {
        self.opponent_timer
            .is_some_and(|id| self.timers.is_pending(id))
    }

    /// A move requested by a human player. In opponent mode the human only
    /// plays X. Returns whether the board changed.
    pub fn play(&mut self, now: Instant, cell: usize) -> bool {
        if self.state.mode == Mode::HumanVsRandom && self.state.next_mark == Mark::O {
            return false;
        }
        self.apply(now, cell)
    }

    /// Picks a uniformly random empty cell for O and plays it. No-op outside
    /// opponent mode, off-turn, or once the game is over.
    pub fn opponent_move<R: RandomSource + ?Sized>(&mut self, now: Instant, rng: &mut R) -> bool {
        if !self.state.opponent_to_move() {
            return false;
        }
        let empty = self.state.board.empty_cells();
        match choose(rng, &empty) {
            Some(&cell) => {
                debug!(cell, "opponent move");
                self.apply(now, cell)
            }
            None => false,
        }
    }

    pub fn reset(&mut self, now: Instant) {
        self.timers.cancel_all();
        self.opponent_timer = None;
        self.state = TicTacToeState::new(self.state.mode);
        debug!(mode = ?self.state.mode, "tic-tac-toe reset");
        self.schedule_opponent(now);
    }

    /// Switches mode without clearing the board.
    pub fn set_mode(&mut self, now: Instant, mode: Mode) {
        if self.state.mode == mode {
            return;
        }
        self.state.mode = mode;
        debug!(?mode, "tic-tac-toe mode changed");
        self.schedule_opponent(now);
    }

    /// Fires due timers. Returns whether the board changed.
    pub fn tick<R: RandomSource + ?Sized>(&mut self, now: Instant, rng: &mut R) -> bool {
        let mut changed = false;
        for timer in self.timers.take_due(now) {
            trace!(?timer, "tic-tac-toe timer fired");
            match timer {
                TicTacToeTimer::OpponentMove => {
                    self.opponent_timer = None;
                    changed |= self.opponent_move(now, rng);
                }
            }
        }
        changed
    }

    fn apply(&mut self, now: Instant, cell: usize) -> bool {
        let next = self.state.apply_move(cell);
        if next == self.state {
            return false;
        }
        self.state = next;
        match self.state.outcome() {
            Outcome::InProgress => {}
            outcome => debug!(?outcome, "tic-tac-toe finished"),
        }
        self.schedule_opponent(now);
        true
    }

    /// Replaces any pending opponent move with a fresh one if O is due.
    fn schedule_opponent(&mut self, now: Instant) {
        if let Some(id) = self.opponent_timer.take() {
            self.timers.cancel(id);
        }
        if self.state.opponent_to_move() {
            let id = self
                .timers
                .schedule(now, self.opponent_delay, TicTacToeTimer::OpponentMove);
            self.opponent_timer = Some(id);
        }
    }
}

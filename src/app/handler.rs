use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::hub::{View, MENU};
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;
use tracing::debug;

pub fn handle_event(state: &mut AppState, event: AppEvent, now: Instant) -> Vec<Action> {
    let view_before = state.hub.view();

    let mut actions = match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent, now),
        AppEvent::Tick => {
            handle_tick(state, now);
            vec![]
        }
    };

    let view = state.hub.view();
    if view != view_before {
        state.reset_cursors(view);
        state.dirty = true;
    }

    // Bell once on the transition into a finished game
    let finished = state.hub.game_finished();
    if finished && !state.finished && state.config.ui.bell_on_finish {
        actions.push(Action::Bell);
    }
    state.finished = finished;

    actions
}

fn handle_tick(state: &mut AppState, now: Instant) {
    state.tick_count = state.tick_count.wrapping_add(1);
    if state.hub.tick(now) || state.hub.is_animating() {
        state.dirty = true;
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent, now: Instant) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => {
            state.dirty = true;
            handle_key(state, key, now)
        }
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent, now: Instant) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }
    match key.code {
        KeyCode::Char('t') => {
            state.hub.toggle_theme();
            return vec![];
        }
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') => {
            state.hub.back();
            return vec![];
        }
        _ => {}
    }

    match state.hub.view() {
        View::Menu => handle_menu_key(state, key),
        View::TicTacToe => {
            handle_board_key(state, key, now);
            vec![]
        }
        View::Memory => {
            handle_cards_key(state, key, now);
            vec![]
        }
        View::Spinner => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('s')) {
                state.hub.spin(now);
            }
            vec![]
        }
    }
}

fn handle_menu_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Char('q') => return vec![Action::Quit],
        KeyCode::Up | KeyCode::Left | KeyCode::Char('k') => state.menu_prev(),
        KeyCode::Down | KeyCode::Right | KeyCode::Char('j') => state.menu_next(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            let view = state.selected_menu_view();
            state.hub.select(view);
        }
        KeyCode::Char(c @ '1'..='3') => {
            let index = (c as u8 - b'1') as usize;
            state.hub.select(MENU[index]);
        }
        _ => {}
    }
    vec![]
}

fn handle_board_key(state: &mut AppState, key: KeyEvent, now: Instant) {
    let cells = BOARD_COLUMNS * BOARD_COLUMNS;
    match key.code {
        KeyCode::Char(c @ '1'..='9') => {
            let cell = (c as u8 - b'1') as usize;
            state.board_cursor.index = cell;
            if !state.hub.play_cell(now, cell) {
                debug!(cell, "move ignored");
            }
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            let cell = state.board_cursor.index;
            if !state.hub.play_cell(now, cell) {
                debug!(cell, "move ignored");
            }
        }
        KeyCode::Left => state.board_cursor.move_left(BOARD_COLUMNS),
        KeyCode::Right => state.board_cursor.move_right(BOARD_COLUMNS, cells),
        KeyCode::Up => state.board_cursor.move_up(BOARD_COLUMNS),
        KeyCode::Down => state.board_cursor.move_down(BOARD_COLUMNS, cells),
        KeyCode::Char('m') => state.hub.toggle_mode(now),
        KeyCode::Char('r') => state.hub.reset_game(now),
        _ => {}
    }
}

fn handle_cards_key(state: &mut AppState, key: KeyEvent, now: Instant) {
    let cards = state.card_count();
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => {
            state.hub.flip_card(now, state.card_cursor.index);
        }
        KeyCode::Left => state.card_cursor.move_left(CARD_COLUMNS),
        KeyCode::Right => state.card_cursor.move_right(CARD_COLUMNS, cards),
        KeyCode::Up => state.card_cursor.move_up(CARD_COLUMNS),
        KeyCode::Down => state.card_cursor.move_down(CARD_COLUMNS, cards),
        KeyCode::Char('r') => state.hub.reset_game(now),
        _ => {}
    }
}

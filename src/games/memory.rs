//! Memory Match: deal, flip, and pair resolution.
//!
//! A pair-attempt is two flips. A matching pair is committed on the second
//! flip. A mismatched pair stays face up, with input locked, until the
//! mismatch timer turns both cards back over.

use super::random::{shuffle, RandomSource};
use super::timer::Timers;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

pub type CardId = usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: CardId,
    pub value: String,
    pub flipped: bool,
    pub matched: bool,
}

impl Card {
    pub fn face_up(&self) -> bool {
        self.flipped || self.matched
    }
}

/// Deals every icon twice in uniformly random order. Ids follow the dealt
/// position.
pub fn new_deck<R: RandomSource + ?Sized>(icons: &[String], rng: &mut R) -> Vec<Card> {
    let mut values: Vec<String> = icons.iter().chain(icons.iter()).cloned().collect();
    shuffle(rng, &mut values);
    values
        .into_iter()
        .enumerate()
        .map(|(id, value)| Card {
            id,
            value,
            flipped: false,
            matched: false,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryState {
    pub deck: Vec<Card>,
    pub first: Option<CardId>,
    pub second: Option<CardId>,
    pub moves: u32,
    pub locked: bool,
}

impl MemoryState {
    pub fn deal<R: RandomSource + ?Sized>(icons: &[String], rng: &mut R) -> Self {
        Self {
            deck: new_deck(icons, rng),
            first: None,
            second: None,
            moves: 0,
            locked: false,
        }
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.deck.iter().find(|c| c.id == id)
    }

    fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.deck.iter_mut().find(|c| c.id == id)
    }

    pub fn is_complete(&self) -> bool {
        self.deck.iter().all(|c| c.matched)
    }

    pub fn matched_pairs(&self) -> usize {
        self.deck.iter().filter(|c| c.matched).count() / 2
    }

    fn clear_selection(&mut self) {
        self.first = None;
        self.second = None;
        self.locked = false;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MemoryTimer {
    HideMismatch { first: CardId, second: CardId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flip {
    /// Input locked, unknown card, or card already face up.
    Ignored,
    /// First card of a pair-attempt.
    Opened,
    Matched,
    Mismatched,
}

/// A running game: state plus the pending mismatch reveal.
#[derive(Debug)]
pub struct MemoryMatch {
    icons: Vec<String>,
    state: MemoryState,
    mismatch_delay: Duration,
    timers: Timers<MemoryTimer>,
}

impl MemoryMatch {
    pub fn new<R: RandomSource + ?Sized>(icons: Vec<String>, mismatch_delay: Duration, rng: &mut R) -> Self {
        let state = MemoryState::deal(&icons, rng);
        Self {
            icons,
            state,
            mismatch_delay,
            timers: Timers::new(),
        }
    }

    pub fn state(&self) -> &MemoryState {
        &self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    pub fn flip(&mut self, now: Instant, id: CardId) -> Flip {
        if self.state.locked {
            return Flip::Ignored;
        }
        match self.state.card_mut(id) {
            Some(card) if !card.flipped && !card.matched => card.flipped = true,
            _ => return Flip::Ignored,
        }

        let Some(first) = self.state.first else {
            self.state.first = Some(id);
            return Flip::Opened;
        };

        self.state.second = Some(id);
        self.state.moves += 1;
        self.state.locked = true;
        self.resolve(now, first, id)
    }

    fn resolve(&mut self, now: Instant, first: CardId, second: CardId) -> Flip {
        let same = match (self.state.card(first), self.state.card(second)) {
            (Some(a), Some(b)) => a.value == b.value,
            _ => false,
        };

        if same {
            for id in [first, second] {
                if let Some(card) = self.state.card_mut(id) {
                    card.matched = true;
                }
            }
            self.state.clear_selection();
            debug!(first, second, moves = self.state.moves, "pair matched");
            if self.state.is_complete() {
                debug!(moves = self.state.moves, "memory match complete");
            }
            Flip::Matched
        } else {
            self.timers.schedule(
                now,
                self.mismatch_delay,
                MemoryTimer::HideMismatch { first, second },
            );
            debug!(first, second, moves = self.state.moves, "pair mismatched");
            Flip::Mismatched
        }
    }

    /// Fires due timers. Returns whether any card changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        for timer in self.timers.take_due(now) {
            trace!(?timer, "memory timer fired");
            match timer {
                MemoryTimer::HideMismatch { first, second } => {
                    for id in [first, second] {
                        if let Some(card) = self.state.card_mut(id) {
                            card.flipped = false;
                        }
                    }
                    self.state.clear_selection();
                    changed = true;
                }
            }
        }
        changed
    }

    /// Deals a fresh deck and drops any pending reveal.
    pub fn restart<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        self.timers.cancel_all();
        self.state = MemoryState::deal(&self.icons, rng);
        debug!(cards = self.state.deck.len(), "memory match restarted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::random::testing::ScriptedRandom;
    use crate::games::random::SeededRandom;
    use std::collections::HashMap;

    fn icons(n: usize) -> Vec<String> {
        ["A", "B", "C", "D", "E", "F", "G", "H"][..n]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn delay() -> Duration {
        Duration::from_millis(700)
    }

    /// Deck left in dealt order, e.g. A(0) B(1) A(2) B(3) for two icons.
    fn unshuffled(n: usize) -> MemoryMatch {
        // Each draw equals i, so every swap is a no-op.
        let script: Vec<usize> = (1..2 * n).rev().collect();
        let mut rng = ScriptedRandom::new(&script);
        MemoryMatch::new(icons(n), delay(), &mut rng)
    }

    #[test]
    fn test_new_deck_has_each_icon_twice() {
        let mut rng = SeededRandom::new(9);
        for n in 1..=8 {
            let deck = new_deck(&icons(n), &mut rng);
            assert_eq!(deck.len(), 2 * n);
            let mut counts: HashMap<&str, usize> = HashMap::new();
            for card in &deck {
                *counts.entry(card.value.as_str()).or_default() += 1;
                assert!(!card.flipped && !card.matched);
            }
            assert_eq!(counts.len(), n);
            assert!(counts.values().all(|&c| c == 2));
            let ids: Vec<_> = deck.iter().map(|c| c.id).collect();
            assert_eq!(ids, (0..2 * n).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_shuffle_has_no_positional_bias() {
        let mut rng = SeededRandom::new(1234);
        let set = icons(6);
        let mut first_slot: HashMap<String, usize> = HashMap::new();
        for _ in 0..6000 {
            let deck = new_deck(&set, &mut rng);
            *first_slot.entry(deck[0].value.clone()).or_default() += 1;
        }
        assert_eq!(first_slot.len(), 6);
        for (icon, count) in first_slot {
            assert!((850..1150).contains(&count), "{} landed first {} times", icon, count);
        }
    }

    #[test]
    fn test_unshuffled_fixture_layout() {
        let game = unshuffled(2);
        let values: Vec<_> = game.state().deck.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, ["A", "B", "A", "B"]);
    }

    #[test]
    fn test_matched_pair_resolves_immediately() {
        let t0 = Instant::now();
        let mut game = unshuffled(2);
        assert_eq!(game.flip(t0, 0), Flip::Opened);
        assert_eq!(game.state().first, Some(0));
        assert_eq!(game.flip(t0, 2), Flip::Matched);

        let state = game.state();
        assert!(state.card(0).unwrap().matched);
        assert!(state.card(2).unwrap().matched);
        assert_eq!(state.first, None);
        assert_eq!(state.second, None);
        assert!(!state.locked);
        assert_eq!(state.moves, 1);
        assert_eq!(state.matched_pairs(), 1);
    }

    #[test]
    fn test_mismatch_unflips_after_delay() {
        let t0 = Instant::now();
        let mut game = unshuffled(2);
        game.flip(t0, 0);
        assert_eq!(game.flip(t0, 1), Flip::Mismatched);
        assert!(game.state().locked);
        assert_eq!(game.state().second, Some(1));

        // Third flip while resolving is ignored.
        assert_eq!(game.flip(t0, 2), Flip::Ignored);
        assert!(!game.state().card(2).unwrap().flipped);

        assert!(!game.tick(t0 + Duration::from_millis(699)));
        assert!(game.state().card(0).unwrap().flipped);

        assert!(game.tick(t0 + delay()));
        let state = game.state();
        for card in &state.deck {
            assert!(!card.flipped);
            assert!(!card.matched);
        }
        assert!(!state.locked);
        assert_eq!(state.first, None);
        assert_eq!(state.second, None);
        assert_eq!(state.moves, 1);
    }

    #[test]
    fn test_flip_face_up_card_is_noop() {
        let t0 = Instant::now();
        let mut game = unshuffled(2);
        game.flip(t0, 0);
        let before = game.state().clone();
        assert_eq!(game.flip(t0, 0), Flip::Ignored);
        assert_eq!(*game.state(), before);

        game.flip(t0, 2);
        let before = game.state().clone();
        assert_eq!(game.flip(t0, 2), Flip::Ignored);
        assert_eq!(game.flip(t0, 99), Flip::Ignored);
        assert_eq!(*game.state(), before);
    }

    #[test]
    fn test_is_complete() {
        let t0 = Instant::now();
        let mut game = unshuffled(2);
        assert!(!game.is_complete());
        game.flip(t0, 0);
        game.flip(t0, 2);
        assert!(!game.is_complete());
        game.flip(t0, 1);
        game.flip(t0, 3);
        assert!(game.is_complete());
        assert_eq!(game.state().moves, 2);
    }

    #[test]
    fn test_restart_resets_moves_and_cancels_reveal() {
        let t0 = Instant::now();
        let mut rng = SeededRandom::new(4);
        let mut game = unshuffled(3);
        game.flip(t0, 0);
        game.flip(t0, 1);
        assert!(game.state().locked);

        game.restart(&mut rng);
        let state = game.state();
        assert_eq!(state.moves, 0);
        assert!(!state.locked);
        assert_eq!(state.deck.len(), 6);
        assert!(state.deck.iter().all(|c| !c.face_up()));

        // The reveal scheduled before the restart must not touch the new deck.
        game.flip(t0, 4);
        assert!(!game.tick(t0 + delay()));
        assert!(game.state().card(4).unwrap().flipped);
    }
}

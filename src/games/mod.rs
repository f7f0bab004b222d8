//! Game engines. Pure state machines driven by explicit input, an injected
//! random source, and caller-supplied time.

pub mod memory;
pub mod random;
pub mod spinner;
pub mod tictactoe;
pub mod timer;

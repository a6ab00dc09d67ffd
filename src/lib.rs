//! Calendar navigation (calnav)
//!
//! Keyboard-driven navigation over a month / year / decade / century
//! calendar hierarchy, plus a terminal date picker built on it.
//!
//! Follows the Pure Core / Impure Shell split: `model`, `input` and `state`
//! are pure and testable without a terminal; `view`, `config` and `logging`
//! do the I/O.

pub mod config;
pub mod input;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;

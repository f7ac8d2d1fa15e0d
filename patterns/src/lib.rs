//! Pattern sources for the life simulator.
//!
//! Two ways to get a [`Pattern`](life_core::Pattern) onto the board: parse a
//! file in one of the common interchange formats ([`parse`]), or pick from
//! the built-in and embedded [`preset`] catalog.

pub mod parse;
pub mod preset;

pub use parse::{ParseError, parse_file};
pub use preset::Presets;

//! Core state engine for the life simulator.
//!
//! The engine is deliberately small and synchronous: a [`Grid`] of signed
//! "cycle counters" on a torus, and a [`Game`] that owns exactly one grid and
//! applies the mutating operations the driving loop asks for. Rendering,
//! input, and pattern parsing live in sibling crates; this one does no I/O.
//!
//! A counter encodes both liveness and streak length in one integer: `+n`
//! means alive for `n` consecutive generations, `-n` means dead for `n`
//! generations since last alive, `0` means no history. Renderers map the
//! sign and magnitude to a color shade.

mod game;
mod grid;

pub use game::Game;
pub use grid::Grid;

/// Jagged matrix of dead (0) / alive (non-zero) markers used to seed a grid.
///
/// Rows may have differing lengths; missing trailing cells are treated as
/// dead. Produced by the pattern parsers and the preset catalog.
pub type Pattern = Vec<Vec<u8>>;

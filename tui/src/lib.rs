//! Terminal UI for the life simulator.
//!
//! Three pieces, all stateless with respect to the board: the theme catalog
//! mapping cycle counters to colors, the frame renderer, and the input pump
//! translating terminal events into symbolic commands for the driving loop.

mod input;
mod render;
mod theme;

pub use input::{Command, InputPump};
pub use render::{CELL_WIDTH, board_size, draw};
pub use theme::Themes;

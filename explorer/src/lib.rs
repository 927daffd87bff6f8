//! Interactive presentation of a [`move_tree::MoveTree`]: command parsing, statistics tables,
//! board rendering and the read-eval-print loop.

mod board;
mod input_parser;
mod openings;
mod options;
mod output;
mod run_explorer;
mod session;

pub use board::*;
pub use input_parser::*;
pub use openings::*;
pub use options::*;
pub use output::*;
pub use run_explorer::*;
pub use session::*;

mod color;
mod counts;
mod error;
mod game_record;
mod navigator;
mod node;
mod outcome;
mod ply_filter;
mod tree;

pub use color::*;
pub use counts::*;
pub use error::*;
pub use game_record::*;
pub use navigator::*;
pub use node::*;
pub use outcome::*;
pub use ply_filter::*;
pub use tree::*;

//! Game source backed by the Lichess HTTP API.
//!
//! Games are fetched a page at a time, raw pages are memoized in a [`PageCache`], and each game is
//! reduced to a [`move_tree::GameRecord`] seen from the requested user's side.

mod api;
mod cache;
mod fetch;
mod filter;
mod game;
mod options;
mod page_key;

pub use api::*;
pub use cache::*;
pub use fetch::*;
pub use filter::*;
pub use game::*;
pub use options::*;
pub use page_key::*;

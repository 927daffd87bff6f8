use thiserror::Error;

/// Recoverable failures of the navigator. None of them change the navigator state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("no games found with move {mv} from this position")]
    InvalidMove { mv: String },

    #[error("cannot go back {requested} moves from a depth of {depth}")]
    InvalidBack { requested: usize, depth: usize },

    #[error("no games")]
    EmptyStatistics,
}

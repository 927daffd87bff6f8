use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use anyhow::anyhow;

use crate::Color;

/// Selects which plies of a game become edges of the move tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PlyFilter {
    /// Only the tracked player's own moves. Opponent replies are folded into the node reached.
    #[default]
    OwnMoves,
    /// Every ply, alternating between the tracked player and the opponent.
    AllPlies,
}

impl PlyFilter {
    pub fn keeps(self, color: Color, ply: usize) -> bool {
        match self {
            PlyFilter::OwnMoves => color.plays_ply(ply),
            PlyFilter::AllPlies => true,
        }
    }

    /// Index in the full game of the ply that forms the edge below a node at `depth`.
    pub fn ply_at_depth(self, color: Color, depth: usize) -> usize {
        match (self, color) {
            (PlyFilter::OwnMoves, Color::White) => depth * 2,
            (PlyFilter::OwnMoves, Color::Black) => depth * 2 + 1,
            (PlyFilter::AllPlies, _) => depth,
        }
    }

    /// Whether the edges below a node at `depth` are moves chosen by the tracked player.
    pub fn is_own_turn(self, color: Color, depth: usize) -> bool {
        color.plays_ply(self.ply_at_depth(color, depth))
    }
}

impl Display for PlyFilter {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            PlyFilter::OwnMoves => f.write_str("own"),
            PlyFilter::AllPlies => f.write_str("all"),
        }
    }
}

impl FromStr for PlyFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "own" | "own-moves" | "own_moves" => Ok(PlyFilter::OwnMoves),
            "all" | "all-plies" | "all_plies" => Ok(PlyFilter::AllPlies),
            _ => Err(anyhow!("{} is not a ply filter, expected own or all", s)),
        }
    }
}

use crate::{Color, Outcome, PlyFilter};

/// A finished game seen from the tracked player's side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameRecord {
    pub moves: Vec<String>,
    pub player_color: Color,
    pub outcome: Outcome,
}

impl GameRecord {
    pub fn new(moves: Vec<String>, player_color: Color, outcome: Outcome) -> Self {
        Self {
            moves,
            player_color,
            outcome,
        }
    }

    /// The moves that form this game's path through a tree built with `filter`.
    pub fn tree_moves(&self, filter: PlyFilter) -> impl Iterator<Item = &str> + '_ {
        let color = self.player_color;

        self.moves
            .iter()
            .enumerate()
            .filter(move |(ply, _)| filter.keeps(color, *ply))
            .map(|(_, mv)| mv.as_str())
    }

    /// Whether this game's tree path starts with `path`.
    pub fn follows(&self, filter: PlyFilter, path: &[String]) -> bool {
        let mut moves = self.tree_moves(filter);

        path.iter().all(|expected| moves.next() == Some(expected.as_str()))
    }
}

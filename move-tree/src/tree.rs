use log::debug;

use crate::{Color, GameRecord, MoveNode, PlyFilter};

/// Opening statistics for both colors of the tracked player.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveTree {
    white: MoveNode,
    black: MoveNode,
    filter: PlyFilter,
}

/// Builds a tree over the tracked player's own moves.
pub fn build<'a, I>(games: I) -> MoveTree
where
    I: IntoIterator<Item = &'a GameRecord>,
{
    MoveTree::build_with(games, PlyFilter::OwnMoves)
}

impl MoveTree {
    pub fn new(filter: PlyFilter) -> Self {
        Self {
            white: MoveNode::root(),
            black: MoveNode::root(),
            filter,
        }
    }

    pub fn build_with<'a, I>(games: I, filter: PlyFilter) -> Self
    where
        I: IntoIterator<Item = &'a GameRecord>,
    {
        let mut tree = Self::new(filter);
        for game in games {
            tree.insert(game);
        }

        debug!(
            "Built {} move tree: white {} games / {} nodes, black {} games / {} nodes",
            filter,
            tree.white.total(),
            tree.white.node_count(),
            tree.black.total(),
            tree.black.node_count()
        );

        tree
    }

    pub fn root(&self, color: Color) -> &MoveNode {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    pub fn filter(&self) -> PlyFilter {
        self.filter
    }

    fn root_mut(&mut self, color: Color) -> &mut MoveNode {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    fn insert(&mut self, game: &GameRecord) {
        let filter = self.filter;
        let outcome = game.outcome;
        let mut node = self.root_mut(game.player_color);
        node.record(outcome);

        for mv in game.tree_moves(filter) {
            node = node.child_or_insert(mv);
            node.record(outcome);
        }
    }
}

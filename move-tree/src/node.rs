use std::collections::HashMap;

use crate::{Counts, NavigationError, Outcome, Percentages};

/// A position reached by a sequence of tree moves. Each node exclusively owns its children.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveNode {
    mv: Option<String>,
    counts: Counts,
    children: HashMap<String, MoveNode>,
}

impl MoveNode {
    pub fn root() -> Self {
        Self::default()
    }

    fn with_move(mv: &str) -> Self {
        Self {
            mv: Some(mv.to_owned()),
            ..Self::default()
        }
    }

    /// The move leading into this node. `None` only for a root.
    pub fn mv(&self) -> Option<&str> {
        self.mv.as_deref()
    }

    pub fn counts(&self) -> &Counts {
        &self.counts
    }

    pub fn total(&self) -> u32 {
        self.counts.total()
    }

    pub fn percentages(&self) -> Result<Percentages, NavigationError> {
        self.counts.percentages()
    }

    pub fn child(&self, mv: &str) -> Option<&MoveNode> {
        self.children.get(mv)
    }

    pub fn children(&self) -> impl Iterator<Item = &MoveNode> {
        self.children.values()
    }

    pub fn num_children(&self) -> usize {
        self.children.len()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Children ordered by the number of games through them, most played first. Ties are broken
    /// by move so the order is stable between runs.
    pub fn children_by_total(&self) -> Vec<&MoveNode> {
        let mut children = self.children.values().collect::<Vec<_>>();
        children.sort_by(|a, b| b.total().cmp(&a.total()).then_with(|| a.mv.cmp(&b.mv)));
        children
    }

    /// Follows `path` one child at a time.
    pub fn descend<'a, I>(&self, path: I) -> Option<&MoveNode>
    where
        I: IntoIterator<Item = &'a str>,
    {
        path.into_iter()
            .try_fold(self, |node, mv| node.children.get(mv))
    }

    /// Number of games whose tree path ends exactly at this node.
    pub fn games_ending_here(&self) -> u32 {
        let through_children = self.children.values().map(MoveNode::total).sum::<u32>();
        self.total() - through_children
    }

    /// Number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .values()
            .map(MoveNode::node_count)
            .sum::<usize>()
    }

    pub(crate) fn record(&mut self, outcome: Outcome) {
        self.counts.record(outcome);
    }

    pub(crate) fn child_or_insert(&mut self, mv: &str) -> &mut MoveNode {
        self.children
            .entry(mv.to_owned())
            .or_insert_with(|| MoveNode::with_move(mv))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node_with(children: &[(&str, Outcome)]) -> MoveNode {
        let mut root = MoveNode::root();
        for (mv, outcome) in children {
            root.record(*outcome);
            root.child_or_insert(mv).record(*outcome);
        }
        root
    }

    #[test]
    fn test_root_has_no_move() {
        let root = MoveNode::root();

        assert_eq!(root.mv(), None);
        assert_eq!(root.total(), 0);
        assert!(root.is_leaf());
        assert_eq!(root.percentages(), Err(NavigationError::EmptyStatistics));
    }

    #[test]
    fn test_child_or_insert_reuses_existing_child() {
        let root = node_with(&[("e4", Outcome::Win), ("e4", Outcome::Loss)]);

        assert_eq!(root.num_children(), 1);
        assert_eq!(root.child("e4").unwrap().counts(), &Counts::new(1, 0, 1));
        assert_eq!(root.child("e4").unwrap().mv(), Some("e4"));
    }

    #[test]
    fn test_children_by_total_sorts_descending_then_by_move() {
        let root = node_with(&[
            ("d4", Outcome::Win),
            ("e4", Outcome::Draw),
            ("c4", Outcome::Loss),
            ("e4", Outcome::Win),
        ]);

        let order = root
            .children_by_total()
            .iter()
            .map(|n| n.mv().unwrap())
            .collect::<Vec<_>>();

        assert_eq!(order, vec!["e4", "c4", "d4"]);
    }

    #[test]
    fn test_descend() {
        let mut root = MoveNode::root();
        root.child_or_insert("e4").child_or_insert("Nf3").record(Outcome::Win);

        assert_eq!(
            root.descend(["e4", "Nf3"]).and_then(|n| n.mv()),
            Some("Nf3")
        );
        assert_eq!(root.descend(Vec::<&str>::new()).map(|n| n.mv()), Some(None));
        assert!(root.descend(["e4", "Bc4"]).is_none());
    }

    #[test]
    fn test_games_ending_here() {
        let mut root = node_with(&[("e4", Outcome::Win), ("d4", Outcome::Draw)]);
        root.record(Outcome::Loss);

        assert_eq!(root.games_ending_here(), 1);
        assert_eq!(root.child("e4").unwrap().games_ending_here(), 1);
    }

    #[test]
    fn test_node_count() {
        let mut root = MoveNode::root();
        root.child_or_insert("e4").child_or_insert("Nf3");
        root.child_or_insert("d4");

        assert_eq!(root.node_count(), 4);
    }
}

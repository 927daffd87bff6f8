use crate::{Color, MoveNode, MoveTree, NavigationError};

/// A navigation request, already parsed from user input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavCommand {
    Move(String),
    Back(usize),
    Flip,
    Start,
    Board,
}

/// Where the user currently is: a color and the path of moves from that color's root.
///
/// The path always resolves within the tree the state is navigated against. Every operation that
/// could leave the tree is rejected before the state changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigatorState {
    color: Color,
    path: Vec<String>,
}

/// What the presentation layer needs to draw the current position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardView<'a> {
    pub color: Color,
    pub path: &'a [String],
}

impl Default for NavigatorState {
    fn default() -> Self {
        Self::new(Color::White)
    }
}

impl NavigatorState {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            path: Vec::new(),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// The node at the end of the current path.
    ///
    /// # Panics
    ///
    /// Panics if the state is used with a tree other than the one its moves were made against.
    pub fn current_node<'t>(&self, tree: &'t MoveTree) -> &'t MoveNode {
        tree.root(self.color)
            .descend(self.path.iter().map(String::as_str))
            .expect("navigator path must resolve within its tree")
    }

    pub fn make_move(&mut self, tree: &MoveTree, mv: &str) -> Result<(), NavigationError> {
        if self.current_node(tree).child(mv).is_none() {
            return Err(NavigationError::InvalidMove { mv: mv.to_owned() });
        }

        self.path.push(mv.to_owned());

        Ok(())
    }

    pub fn back(&mut self) -> Result<(), NavigationError> {
        self.back_n(1)
    }

    pub fn back_n(&mut self, n: usize) -> Result<(), NavigationError> {
        let depth = self.depth();
        if n > depth {
            return Err(NavigationError::InvalidBack {
                requested: n,
                depth,
            });
        }

        self.path.truncate(depth - n);

        Ok(())
    }

    pub fn flip(&mut self) {
        self.color = self.color.flip();
        self.path.clear();
    }

    pub fn start(&mut self) {
        self.path.clear();
    }

    pub fn board(&self) -> BoardView<'_> {
        BoardView {
            color: self.color,
            path: &self.path,
        }
    }

    /// Applies a state changing command. `Board` leaves the state untouched, see [`Self::board`].
    pub fn apply(&mut self, tree: &MoveTree, command: &NavCommand) -> Result<(), NavigationError> {
        match command {
            NavCommand::Move(mv) => self.make_move(tree, mv),
            NavCommand::Back(n) => self.back_n(*n),
            NavCommand::Flip => {
                self.flip();
                Ok(())
            }
            NavCommand::Start => {
                self.start();
                Ok(())
            }
            NavCommand::Board => Ok(()),
        }
    }
}

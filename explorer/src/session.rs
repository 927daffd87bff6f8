use std::io::Write;

use anyhow::Result;
use log::debug;

use move_tree::{GameRecord, MoveTree, NavCommand, NavigatorState, PlyFilter};

use crate::{
    opening_name, write_board, write_help, write_move_list, write_stats, ExplorerCommand,
    ExplorerOptions,
};

/// A game as listed by the `games` command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExploredGame {
    pub record: GameRecord,
    pub white: String,
    pub black: String,
    pub url: String,
}

/// The built tree together with where the user is in it.
pub struct Session {
    tree: MoveTree,
    games: Vec<ExploredGame>,
    state: NavigatorState,
    options: ExplorerOptions,
}

impl Session {
    pub fn new(games: Vec<ExploredGame>, options: ExplorerOptions) -> Self {
        let tree = MoveTree::build_with(games.iter().map(|g| &g.record), options.plies);

        Self {
            tree,
            games,
            state: NavigatorState::default(),
            options,
        }
    }

    pub fn tree(&self) -> &MoveTree {
        &self.tree
    }

    pub fn state(&self) -> &NavigatorState {
        &self.state
    }

    pub fn options(&self) -> &ExplorerOptions {
        &self.options
    }

    /// Games of the current color that went through the current position.
    pub fn matching_games(&self) -> Vec<&ExploredGame> {
        let filter = self.tree.filter();

        self.games
            .iter()
            .filter(|g| g.record.player_color == self.state.color())
            .filter(|g| g.record.follows(filter, self.state.path()))
            .collect()
    }

    pub fn games_need_confirmation(&self) -> bool {
        self.matching_games().len() >= self.options.games_confirm_threshold
    }

    /// Executes `command`, writing what the user sees to `output`. Returns `false` to stop.
    ///
    /// Navigation failures are returned as [`move_tree::NavigationError`] and leave the session
    /// untouched.
    pub fn handle<W: Write>(&mut self, command: ExplorerCommand, output: &mut W) -> Result<bool> {
        debug!("Handling {:?}", command);

        match command {
            ExplorerCommand::Quit => return Ok(false),
            ExplorerCommand::Noop => {}
            ExplorerCommand::Help => write_help(output)?,
            ExplorerCommand::Stats => self.write_position(output)?,
            ExplorerCommand::Games => self.write_games(output)?,
            ExplorerCommand::Navigate(NavCommand::Board) => {
                write_board(self.state.board(), self.tree.filter(), output)?
            }
            ExplorerCommand::Navigate(NavCommand::Move(mv)) => {
                let mv = self.resolve_move(&mv);
                self.state.make_move(&self.tree, &mv)?;
                self.write_position(output)?;
            }
            ExplorerCommand::Navigate(command) => {
                self.state.apply(&self.tree, &command)?;
                self.write_position(output)?;
            }
        }

        Ok(true)
    }

    /// The statistics of the current node followed by the moves played to reach it.
    pub fn write_position<W: Write>(&self, output: &mut W) -> Result<()> {
        let filter = self.tree.filter();
        let color = self.state.color();
        let path = self.state.path();

        write_stats(
            self.state.current_node(&self.tree),
            filter,
            color,
            self.state.depth(),
            output,
        )?;

        // Opening names are keyed by full games, which own-moves paths are not.
        let opening = match filter {
            PlyFilter::AllPlies => opening_name(path),
            PlyFilter::OwnMoves => None,
        };

        write_move_list(path, filter, color, self.options.columns, opening, output)
    }

    fn write_games<W: Write>(&self, output: &mut W) -> Result<()> {
        for game in self.matching_games() {
            writeln!(output, "{} vs. {} ({})", game.white, game.black, game.url)?;
        }

        Ok(())
    }

    /// Maps `mv` to a child of the current node, ignoring case when that is unambiguous.
    fn resolve_move(&self, mv: &str) -> String {
        let node = self.state.current_node(&self.tree);
        if node.child(mv).is_some() {
            return mv.to_owned();
        }

        let mut candidates = node
            .children()
            .filter_map(|child| child.mv())
            .filter(|child| child.eq_ignore_ascii_case(mv));

        match (candidates.next(), candidates.next()) {
            (Some(only), None) => only.to_owned(),
            _ => mv.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use move_tree::{Color, NavigationError, Outcome};

    fn game(moves: &str, color: Color, outcome: Outcome) -> ExploredGame {
        ExploredGame {
            record: GameRecord::new(
                moves.split_whitespace().map(String::from).collect(),
                color,
                outcome,
            ),
            white: "alice".to_string(),
            black: "bob".to_string(),
            url: "https://lichess.org/abcdefgh".to_string(),
        }
    }

    fn session(plies: PlyFilter) -> Session {
        let games = vec![
            game("d4 d5 c4", Color::White, Outcome::Win),
            game("d4 Nf6 c4", Color::White, Outcome::Loss),
            game("e4 e5", Color::White, Outcome::Draw),
            game("e4 c5 Nf3", Color::Black, Outcome::Win),
        ];

        Session::new(
            games,
            ExplorerOptions {
                plies,
                columns: 80,
                games_confirm_threshold: 2,
            },
        )
    }

    fn handle(session: &mut Session, command: ExplorerCommand) -> Result<String> {
        let mut output = Vec::new();
        session.handle(command, &mut output)?;
        Ok(String::from_utf8(output).unwrap())
    }

    fn mv(mv: &str) -> ExplorerCommand {
        ExplorerCommand::Navigate(NavCommand::Move(mv.to_string()))
    }

    #[test]
    fn test_quit_stops() {
        let mut session = session(PlyFilter::OwnMoves);

        assert!(!session
            .handle(ExplorerCommand::Quit, &mut Vec::new())
            .unwrap());
        assert!(session
            .handle(ExplorerCommand::Noop, &mut Vec::new())
            .unwrap());
    }

    #[test]
    fn test_move_prints_the_new_position() {
        let mut session = session(PlyFilter::OwnMoves);

        let output = handle(&mut session, mv("d4")).unwrap();

        assert_eq!(session.state().path(), ["d4".to_string()]);
        assert!(output.contains("YOUR MOVES (from 2 games)"));
        assert!(output.contains("2. c4 "));
        assert!(output.ends_with("1. d4  \n"));
    }

    #[test]
    fn test_move_ignores_case_when_unambiguous() {
        let mut session = session(PlyFilter::AllPlies);

        handle(&mut session, mv("D4")).unwrap();
        handle(&mut session, mv("nf6")).unwrap();

        assert_eq!(session.state().path(), ["d4".to_string(), "Nf6".to_string()]);
    }

    #[test]
    fn test_unknown_move_is_a_navigation_error() {
        let mut session = session(PlyFilter::OwnMoves);

        let err = handle(&mut session, mv("Nf3")).unwrap_err();

        assert_eq!(
            err.downcast_ref::<NavigationError>(),
            Some(&NavigationError::InvalidMove {
                mv: "Nf3".to_string()
            })
        );
        assert_eq!(session.state().depth(), 0);
    }

    #[test]
    fn test_opening_name_in_all_plies_mode() {
        let mut session = session(PlyFilter::AllPlies);

        handle(&mut session, mv("d4")).unwrap();
        let output = handle(&mut session, mv("Nf6")).unwrap();

        assert!(output.ends_with("1. d4 Nf6  (Indian Defense)\n"));
    }

    #[test]
    fn test_flip_shows_the_other_color() {
        let mut session = session(PlyFilter::OwnMoves);
        handle(&mut session, mv("e4")).unwrap();

        let output = handle(&mut session, ExplorerCommand::Navigate(NavCommand::Flip)).unwrap();

        assert_eq!(session.state().color(), Color::Black);
        assert!(output.contains("1...c5      (you won 100.0%"));
    }

    #[test]
    fn test_matching_games_follow_the_path() {
        let mut session = session(PlyFilter::OwnMoves);
        assert_eq!(session.matching_games().len(), 3);
        assert!(session.games_need_confirmation());

        handle(&mut session, mv("e4")).unwrap();

        assert!(!session.games_need_confirmation());
        let output = handle(&mut session, ExplorerCommand::Games).unwrap();
        assert_eq!(output, "alice vs. bob (https://lichess.org/abcdefgh)\n");
    }

    #[test]
    fn test_board_is_printed() {
        let mut session = session(PlyFilter::OwnMoves);
        handle(&mut session, mv("d4")).unwrap();

        let output = handle(&mut session, ExplorerCommand::Navigate(NavCommand::Board)).unwrap();

        assert_eq!(output.lines().count(), 8);
        assert_eq!(output.lines().nth(4), Some(". . . P . . . ."));
    }
}

use std::io::Cursor;

use explorer::{run_explorer, ExploredGame, ExplorerOptions, Session};
use move_tree::{Color, GameRecord, Outcome, PlyFilter};

fn game(moves: &str, color: Color, outcome: Outcome, id: &str) -> ExploredGame {
    ExploredGame {
        record: GameRecord::new(
            moves.split_whitespace().map(String::from).collect(),
            color,
            outcome,
        ),
        white: "alice".to_string(),
        black: "bob".to_string(),
        url: format!("https://lichess.org/{}", id),
    }
}

fn session(plies: PlyFilter) -> Session {
    let games = vec![
        game("d4 d5 c4 e6", Color::White, Outcome::Win, "g1"),
        game("d4 d5 c4 c6", Color::White, Outcome::Loss, "g2"),
        game("e4 e5 Nf3", Color::White, Outcome::Draw, "g3"),
        game("e4 c5 Nf3", Color::Black, Outcome::Win, "g4"),
        game("d4 Nf6", Color::Black, Outcome::Loss, "g5"),
    ];

    Session::new(
        games,
        ExplorerOptions {
            plies,
            columns: 80,
            games_confirm_threshold: 3,
        },
    )
}

fn run(session: &mut Session, script: &str) -> String {
    let mut output = Vec::new();
    run_explorer(session, Cursor::new(script.to_string()), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn quits_on_command() {
    let mut session = session(PlyFilter::OwnMoves);

    let output = run(&mut session, "quit\nd4\n");

    assert!(output.starts_with("\nYOUR MOVES (from 3 games)\n"));
    assert!(output.ends_with("white>>> "));
    assert_eq!(session.state().depth(), 0);
}

#[test]
fn stops_at_end_of_input() {
    let mut session = session(PlyFilter::OwnMoves);

    let output = run(&mut session, "d4\nc4\n");

    assert_eq!(session.state().path(), ["d4".to_string(), "c4".to_string()]);
    assert!(output.ends_with("1. d4  2. c4  \nwhite>>> \n"));
}

#[test]
fn errors_do_not_stop_the_loop() {
    let mut session = session(PlyFilter::OwnMoves);

    let output = run(&mut session, "back\nNh3\nback two\nd4\nquit\n");

    assert!(output.contains("cannot go back 1 moves from a depth of 0"));
    assert!(output.contains("no games found with move Nh3 from this position"));
    assert!(output.contains("back expects a number of moves, got two"));
    assert_eq!(session.state().path(), ["d4".to_string()]);
}

#[test]
fn flip_changes_the_prompt() {
    let mut session = session(PlyFilter::AllPlies);

    let output = run(&mut session, "flip\nback\n");

    assert!(output.contains("black>>> "));
    assert_eq!(session.state().color(), Color::Black);
    assert!(output.contains("YOUR OPPONENTS' MOVES (from 2 games)"));
}

#[test]
fn navigation_in_all_plies_mode() {
    let mut session = session(PlyFilter::AllPlies);

    let output = run(&mut session, "d4\nd5\nc4\nback 2\nstats\n");

    assert!(output.contains("1. d4 d5  2. c4  (Queen's Gambit)\n"));
    assert_eq!(session.state().path(), ["d4".to_string()]);
}

#[test]
fn games_listing_asks_for_confirmation() {
    let mut session = session(PlyFilter::OwnMoves);

    let declined = run(&mut session, "games\nno\n");
    assert!(declined.contains("Display 3 results? "));
    assert!(!declined.contains("alice vs. bob"));

    let accepted = run(&mut session, "games\ny\n");
    assert_eq!(accepted.matches("alice vs. bob").count(), 3);
}

#[test]
fn small_listing_is_printed_directly() {
    let mut session = session(PlyFilter::OwnMoves);

    let output = run(&mut session, "e4\ngames\n");

    assert!(!output.contains("Display"));
    assert!(output.contains("alice vs. bob (https://lichess.org/g3)\n"));
}

#[test]
fn help_lists_commands() {
    let mut session = session(PlyFilter::OwnMoves);

    let output = run(&mut session, "help\n");

    assert!(output.contains("Available commands"));
    assert!(output.contains("back <n>"));
}

use std::io::Write;

use anyhow::Result;
use shakmaty::san::SanPlus;
use shakmaty::{Board, Chess, File, Position, Rank, Square};

use move_tree::{BoardView, Color, PlyFilter};

/// The position reached by replaying a navigator path.
pub struct Replay {
    pub position: Chess,
    /// Number of path moves that were applied.
    pub applied: usize,
    /// Why replay stopped early, if it did.
    pub failure: Option<String>,
}

fn to_chess_color(color: Color) -> shakmaty::Color {
    match color {
        Color::White => shakmaty::Color::White,
        Color::Black => shakmaty::Color::Black,
    }
}

/// Plays the moves of `view` from the initial position.
///
/// With [`PlyFilter::OwnMoves`] the path holds only the tracked player's moves, so the turn is
/// passed back to them before each move. The board then shows their own setup.
pub fn replay(view: BoardView<'_>, filter: PlyFilter) -> Replay {
    let own_color = to_chess_color(view.color);
    let mut position = Chess::default();

    for (applied, mv) in view.path.iter().enumerate() {
        if filter == PlyFilter::OwnMoves && position.turn() != own_color {
            match position.clone().swap_turn() {
                Ok(swapped) => position = swapped,
                Err(err) => {
                    return Replay {
                        position,
                        applied,
                        failure: Some(format!("cannot pass the turn before {}: {}", mv, err)),
                    }
                }
            }
        }

        let played = mv
            .parse::<SanPlus>()
            .map_err(|err| err.to_string())
            .and_then(|san| san.san.to_move(&position).map_err(|err| err.to_string()));

        match played {
            Ok(m) => position.play_unchecked(&m),
            Err(err) => {
                return Replay {
                    position,
                    applied,
                    failure: Some(format!("cannot play {}: {}", mv, err)),
                }
            }
        }
    }

    Replay {
        applied: view.path.len(),
        position,
        failure: None,
    }
}

/// Draws `board` as eight rows of piece letters, `.` for empty squares, from `orientation`'s side.
pub fn render_board(board: &Board, orientation: Color) -> String {
    let (ranks, files): (Vec<Rank>, Vec<File>) = match orientation {
        Color::White => (Rank::ALL.into_iter().rev().collect(), File::ALL.to_vec()),
        Color::Black => (Rank::ALL.to_vec(), File::ALL.into_iter().rev().collect()),
    };

    ranks
        .iter()
        .map(|&rank| {
            files
                .iter()
                .map(|&file| {
                    board
                        .piece_at(Square::from_coords(file, rank))
                        .map_or('.', |piece| piece.char())
                        .to_string()
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn write_board<W: Write>(view: BoardView<'_>, filter: PlyFilter, output: &mut W) -> Result<()> {
    let replay = replay(view, filter);

    if let Some(failure) = &replay.failure {
        writeln!(
            output,
            "Showing the position after {} of {} moves, {}",
            replay.applied,
            view.path.len(),
            failure
        )?;
    }

    writeln!(output, "{}", render_board(replay.position.board(), view.color))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(moves: &str) -> Vec<String> {
        moves.split_whitespace().map(String::from).collect()
    }

    fn view(color: Color, path: &[String]) -> BoardView<'_> {
        BoardView { color, path }
    }

    #[test]
    fn test_initial_position() {
        let replay = replay(view(Color::White, &[]), PlyFilter::AllPlies);

        assert_eq!(
            render_board(replay.position.board(), Color::White),
            "r n b q k b n r\n\
             p p p p p p p p\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             P P P P P P P P\n\
             R N B Q K B N R"
        );
    }

    #[test]
    fn test_black_orientation() {
        let replay = replay(view(Color::Black, &[]), PlyFilter::AllPlies);
        let drawn = render_board(replay.position.board(), Color::Black);

        assert_eq!(drawn.lines().next(), Some("R N B K Q B N R"));
        assert_eq!(drawn.lines().last(), Some("r n b k q b n r"));
    }

    #[test]
    fn test_all_plies_replays_the_game() {
        let moves = path("e4 e5 Nf3");
        let replay = replay(view(Color::White, &moves), PlyFilter::AllPlies);
        let drawn = render_board(replay.position.board(), Color::White);

        assert_eq!(replay.applied, 3);
        assert!(replay.failure.is_none());
        assert_eq!(drawn.lines().nth(3), Some(". . . . p . . ."));
        assert_eq!(drawn.lines().nth(4), Some(". . . . P . . ."));
        assert_eq!(drawn.lines().nth(5), Some(". . . . . N . ."));
    }

    #[test]
    fn test_own_moves_skip_the_opponent() {
        let moves = path("d4 c4 Nc3");
        let replay = replay(view(Color::White, &moves), PlyFilter::OwnMoves);
        let drawn = render_board(replay.position.board(), Color::White);

        assert_eq!(replay.applied, 3);
        assert!(replay.failure.is_none());
        assert_eq!(drawn.lines().nth(1), Some("p p p p p p p p"));
        assert_eq!(drawn.lines().nth(4), Some(". . P P . . . ."));
        assert_eq!(drawn.lines().nth(5), Some(". . N . . . . ."));
    }

    #[test]
    fn test_own_moves_for_black() {
        let moves = path("e5 Nc6");
        let replay = replay(view(Color::Black, &moves), PlyFilter::OwnMoves);

        assert_eq!(replay.applied, 2);
        assert!(replay.failure.is_none());
        assert_eq!(
            replay.position.board().piece_at(Square::E5).map(|p| p.char()),
            Some('p')
        );
        assert_eq!(
            replay.position.board().piece_at(Square::C6).map(|p| p.char()),
            Some('n')
        );
    }

    #[test]
    fn test_replay_stops_at_illegal_move() {
        let moves = path("e4 Ke3 d4");
        let replay = replay(view(Color::White, &moves), PlyFilter::AllPlies);

        assert_eq!(replay.applied, 1);
        assert!(replay.failure.unwrap().contains("Ke3"));
    }

    #[test]
    fn test_write_board_reports_failure() {
        let moves = path("e4 Qh9");
        let mut output = Vec::new();

        write_board(view(Color::White, &moves), PlyFilter::AllPlies, &mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.starts_with("Showing the position after 1 of 2 moves"));
        assert_eq!(output.lines().count(), 9);
    }
}

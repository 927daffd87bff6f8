use std::io::Write;

use anyhow::Result;
use itertools::Itertools;

use move_tree::{Color, MoveNode, NavigationError, PlyFilter};

const HELP: &str = "\
Available commands
  quit, exit     Exit the program.
  back <n>       Go back n moves, or back one move if n is not given.
  start          Return to the starting position.
  flip           Return to the starting position with the opposite color.
  board          Print the board's current position.
  stats          Print the stats for each move in the current position.
  games          Print information about the current games.
  help           Print this help message.
  <move>         Make a move on the board. Use standard algebraic notation.
";

/// `1 game`, `2 games`.
pub fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

/// `3. ` before a white ply, `3...` before a black one. `ply` is zero based.
pub fn move_number(ply: usize) -> String {
    let dots = if ply % 2 == 1 { "..." } else { ". " };
    format!("{}{}", ply / 2 + 1, dots)
}

/// The statistics table of the moves available at `node`, the node at `depth` below `color`'s root.
pub fn write_stats<W: Write>(
    node: &MoveNode,
    filter: PlyFilter,
    color: Color,
    depth: usize,
    output: &mut W,
) -> Result<()> {
    writeln!(output)?;

    if let Err(NavigationError::EmptyStatistics) = node.percentages() {
        writeln!(output, "{}", NavigationError::EmptyStatistics)?;
        return Ok(());
    }

    let header = if filter.is_own_turn(color, depth) {
        "YOUR MOVES"
    } else {
        "YOUR OPPONENTS' MOVES"
    };
    writeln!(
        output,
        "{} (from {})",
        header,
        pluralize(node.total() as usize, "game")
    )?;

    let number = move_number(filter.ply_at_depth(color, depth));
    for child in node.children_by_total() {
        let percentages = child.percentages()?;

        // Ng3xe5+ is as long as a move gets.
        writeln!(
            output,
            "{}{:7} (you won {:5.1}%, lost {:5.1}%, and drew {:5.1}%, from {})",
            number,
            child.mv().unwrap_or_default(),
            percentages.win,
            percentages.loss,
            percentages.draw,
            pluralize(child.total() as usize, "game")
        )?;
    }

    writeln!(output)?;

    Ok(())
}

/// Groups the path into numbered chunks such as `1. e4 e5  `.
pub fn move_list_chunks(path: &[String], filter: PlyFilter, color: Color) -> Vec<String> {
    path.iter()
        .enumerate()
        .map(|(depth, mv)| (filter.ply_at_depth(color, depth), mv))
        .group_by(|(ply, _)| ply / 2)
        .into_iter()
        .map(|(_, group)| {
            let group = group.collect::<Vec<_>>();
            let moves = group.iter().map(|(_, mv)| mv.as_str()).join(" ");
            format!("{}{}  ", move_number(group[0].0), moves)
        })
        .collect()
}

/// Writes the moves played so far wrapped to `columns`, followed by the opening name if known.
pub fn write_move_list<W: Write>(
    path: &[String],
    filter: PlyFilter,
    color: Color,
    columns: usize,
    opening: Option<&str>,
    output: &mut W,
) -> Result<()> {
    if path.is_empty() {
        return Ok(());
    }

    let mut remaining = columns;
    for chunk in move_list_chunks(path, filter, color) {
        let len = chunk.chars().count();
        if len <= remaining {
            write!(output, "{}", chunk)?;
            remaining -= len;
        } else {
            write!(output, "\n{}", chunk)?;
            remaining = columns.saturating_sub(len);
        }
    }

    match opening {
        Some(opening) => {
            if opening.chars().count() + 2 > remaining {
                writeln!(output)?;
            }
            writeln!(output, "({})", opening)?;
        }
        None => writeln!(output)?,
    }

    Ok(())
}

pub fn write_help<W: Write>(output: &mut W) -> Result<()> {
    write!(output, "{}", HELP)?;
    Ok(())
}

use anyhow::{bail, Result};
use once_cell::sync::Lazy;
use regex::Regex;

use move_tree::NavCommand;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExplorerCommand {
    Navigate(NavCommand),
    Stats,
    Games,
    Help,
    Quit,
    Noop,
}

static BACK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^back(?:\s+(\S+))?$").unwrap());
static MOVE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\S+$").unwrap());

pub struct InputParser;

impl InputParser {
    pub fn parse_line(line: &str) -> Result<ExplorerCommand> {
        let line = line.trim();

        if let Some(cap) = BACK_RE.captures(line) {
            let plies = match cap.get(1) {
                Some(n) => match n.as_str().parse::<usize>() {
                    Ok(n) => n,
                    Err(_) => bail!("back expects a number of moves, got {}", n.as_str()),
                },
                None => 1,
            };

            return Ok(ExplorerCommand::Navigate(NavCommand::Back(plies)));
        }

        match line.to_lowercase().as_str() {
            "" => Ok(ExplorerCommand::Noop),
            "quit" | "exit" => Ok(ExplorerCommand::Quit),
            "start" => Ok(ExplorerCommand::Navigate(NavCommand::Start)),
            "flip" => Ok(ExplorerCommand::Navigate(NavCommand::Flip)),
            "board" => Ok(ExplorerCommand::Navigate(NavCommand::Board)),
            "stats" => Ok(ExplorerCommand::Stats),
            "games" => Ok(ExplorerCommand::Games),
            "help" => Ok(ExplorerCommand::Help),
            // e4, Nxf7+, O-O-O
            _ if MOVE_RE.is_match(line) => {
                Ok(ExplorerCommand::Navigate(NavCommand::Move(line.to_owned())))
            }
            _ => {
                bail!("Command is unknown: {}. Type help for a list of commands", line);
            }
        }
    }
}

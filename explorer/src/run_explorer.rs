use std::io::{BufRead, Write};

use anyhow::Result;
use log::debug;

use move_tree::NavigationError;

use crate::{ExplorerCommand, InputParser, Session};

/// Reads commands from `input` until `quit` or end of input, writing everything to `output`.
pub fn run_explorer<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    mut output: W,
) -> Result<()> {
    session.write_position(&mut output)?;

    loop {
        write!(output, "{}>>> ", session.state().color())?;
        output.flush()?;

        let mut buffer = String::new();
        if input.read_line(&mut buffer)? == 0 {
            debug!("End of input");
            writeln!(output)?;
            return Ok(());
        }

        let command = match InputParser::parse_line(&buffer) {
            Ok(command) => command,
            Err(err) => {
                writeln!(output, "{}", err)?;
                continue;
            }
        };

        if command == ExplorerCommand::Games && session.games_need_confirmation() {
            let prompt = format!("Display {} results? ", session.matching_games().len());
            if !input_yes_no(&mut input, &mut output, &prompt)? {
                continue;
            }
        }

        match session.handle(command, &mut output) {
            Ok(true) => {}
            Ok(false) => return Ok(()),
            Err(err) if err.is::<NavigationError>() => writeln!(output, "{}\n", err)?,
            Err(err) => return Err(err),
        }
    }
}

/// Asks until the answer starts with `y` or `n`. End of input counts as no.
pub fn input_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<bool> {
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        let mut buffer = String::new();
        if input.read_line(&mut buffer)? == 0 {
            return Ok(false);
        }

        let answer = buffer.trim().to_lowercase();
        if answer.starts_with('y') {
            return Ok(true);
        } else if answer.starts_with('n') {
            return Ok(false);
        }
    }
}

//! Human player that reads moves from a line-oriented terminal.

use invincitron_tictactoe::{Board, EngineError, Mark, MoveSource};
use std::io::{self, BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Human player using keyboard input.
///
/// Cells are entered as keys 1-9 matching the legend printed beside the
/// board. Anything else is rejected and the player is asked again.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    fn failed(&self, message: impl Into<String>) -> EngineError {
        EngineError::SourceFailed {
            name: self.name.clone(),
            message: message.into(),
        }
    }

    fn ask(&mut self, board: &Board, mark: Mark) -> io::Result<Option<usize>> {
        let keys: Vec<String> = board.empty_cells().map(|cell| (cell + 1).to_string()).collect();

        write!(self.output, "\n{}", board.legend())?;
        loop {
            write!(self.output, "your move as {mark}? choose from [{}] ", keys.join(" "))?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            let entry = line.trim();
            match parse_key(entry, board) {
                Some(cell) => return Ok(Some(cell)),
                None => {
                    debug!(entry, "Rejected input");
                    writeln!(self.output, "{entry}: not a valid move, try again")?;
                }
            }
        }
    }
}

/// Maps a 1-9 key to a free cell.
fn parse_key(entry: &str, board: &Board) -> Option<usize> {
    let key: usize = entry.parse().ok()?;
    let cell = key.checked_sub(1)?;
    board.is_empty(cell).then_some(cell)
}

impl<R: BufRead, W: Write> MoveSource for HumanPlayer<R, W> {
    #[instrument(skip(self, board), fields(player = %self.name))]
    fn next_move(&mut self, board: &Board, mark: Mark) -> Result<usize, EngineError> {
        if board.is_full() {
            return Err(EngineError::NoLegalMove { mark });
        }

        match self.ask(board, mark) {
            Ok(Some(cell)) => {
                info!(cell, "Human chose position");
                Ok(cell)
            }
            Ok(None) => {
                warn!("Input closed while waiting for a move");
                Err(self.failed("input closed"))
            }
            Err(e) => Err(self.failed(e.to_string())),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Asks which mark the human wants to play. `None` if input closes first.
#[instrument(skip_all)]
pub fn prompt_side<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<Option<Mark>> {
    loop {
        write!(output, "X or O? ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        // "0" is a common slip for "O".
        let answer = line.trim().replace('0', "O");
        match answer.parse::<Mark>() {
            Ok(mark) => return Ok(Some(mark)),
            Err(_) => writeln!(output, "{}: please answer X or O", line.trim())?,
        }
    }
}

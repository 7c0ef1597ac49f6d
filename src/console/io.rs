use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

use super::render::write_board;
use crate::config::DisplayConfig;
use crate::game::Board;

/// Supplies lines of player input.
pub trait InputSource {
    /// Read one line without its terminator. `None` once input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Receives everything the session shows to the players.
pub trait View {
    fn clear(&mut self) -> io::Result<()>;
    fn show_board(&mut self, board: &Board) -> io::Result<()>;
    fn show_message(&mut self, message: &str) -> io::Result<()>;
}

/// Line input from any buffered reader, normally stdin.
pub struct LineInput<R> {
    reader: R,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        LineInput { reader }
    }
}

impl LineInput<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> InputSource for LineInput<R> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// Canned input, one entry per line.
impl InputSource for VecDeque<String> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.pop_front())
    }
}

/// Text view over a writer, normally stdout.
pub struct TerminalView<W> {
    out: W,
    display: DisplayConfig,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, display: DisplayConfig) -> Self {
        TerminalView { out, display }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }
}

impl TerminalView<io::Stdout> {
    pub fn stdout(display: DisplayConfig) -> Self {
        Self::new(io::stdout(), display)
    }
}

impl<W: Write> View for TerminalView<W> {
    fn clear(&mut self) -> io::Result<()> {
        if self.display.clear_screen {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    fn show_board(&mut self, board: &Board) -> io::Result<()> {
        write_board(&mut self.out, board, &self.display)
    }

    fn show_message(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{message}")?;
        self.out.flush()
    }
}

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{style, Color, Print, PrintStyledContent, Stylize};

use crate::config::DisplayConfig;
use crate::game::{Board, Cell, COLS, ROWS};

/// Write the board as a bordered text grid followed by a dash separator.
///
/// ```text
/// | | | | | | | |
/// ...
/// |R|Y| | | | | |
/// ---------------
/// ```
pub fn write_board<W: Write>(out: &mut W, board: &Board, display: &DisplayConfig) -> io::Result<()> {
    for row in 0..ROWS {
        for col in 0..COLS {
            queue!(out, Print('|'))?;
            let cell = board.get(row, col);
            let glyph = display.glyph(cell);
            match cell_color(cell) {
                Some(color) if display.color => {
                    queue!(out, PrintStyledContent(style(glyph).with(color).bold()))?;
                }
                _ => queue!(out, Print(glyph))?,
            }
        }
        queue!(out, Print("|\n"))?;
    }
    queue!(out, Print(separator()), Print('\n'))?;
    out.flush()
}

/// Render the board as plain, uncolored text.
pub fn board_to_string(board: &Board, display: &DisplayConfig) -> String {
    let plain = DisplayConfig {
        color: false,
        ..display.clone()
    };
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_board(&mut buf, board, &plain);
    String::from_utf8_lossy(&buf).into_owned()
}

fn separator() -> String {
    "-".repeat(COLS * 2 + 1)
}

fn cell_color(cell: Cell) -> Option<Color> {
    match cell {
        Cell::Empty => None,
        Cell::Red => Some(Color::Red),
        Cell::Yellow => Some(Color::Yellow),
    }
}

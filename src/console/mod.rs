//! Line-oriented console frontend: text rendering, input and view seams, and
//! the play-again session loop.

mod io;
pub mod render;
mod session;

pub use io::{InputSource, LineInput, TerminalView, View};
pub use session::{Scoreboard, Session};

//! # Console Connect Four
//!
//! A two-player Connect Four game for the terminal. The board engine is
//! independent of any I/O; two frontends drive it: a line-oriented console
//! session and a full-screen Ratatui view.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, state machine
//! - [`console`] — Text rendering, input/view seams, play-again session
//! - [`ui`] — Full-screen terminal UI
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types
//! - [`logging`] — Tracing subscriber setup

pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};

use console_connect_four::config::AppConfig;
use console_connect_four::console::{LineInput, Session, TerminalView};
use console_connect_four::game::Player;
use console_connect_four::logging;
use console_connect_four::ui::App;

/// Play two-player Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Seed for choosing the starting player
    #[arg(long)]
    seed: Option<u64>,

    /// Always let this player move first
    #[arg(long, value_enum)]
    first: Option<FirstPlayer>,

    /// Print discs without color
    #[arg(long)]
    no_color: bool,

    /// Do not clear the screen between turns
    #[arg(long)]
    no_clear: bool,

    /// Use the full-screen terminal UI
    #[arg(long)]
    tui: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum FirstPlayer {
    Red,
    Yellow,
}

impl From<FirstPlayer> for Player {
    fn from(first: FirstPlayer) -> Self {
        match first {
            FirstPlayer::Red => Player::Red,
            FirstPlayer::Yellow => Player::Yellow,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(seed) = cli.seed {
        config.game.seed = Some(seed);
    }
    if let Some(first) = cli.first {
        config.game.first_player = Some(first.into());
    }
    if cli.no_color {
        config.display.color = false;
    }
    if cli.no_clear {
        config.display.clear_screen = false;
    }

    let rng = match config.game.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    if cli.tui {
        run_tui(rng, config.game.first_player).context("running terminal UI")
    } else {
        let view = TerminalView::stdout(config.display.clone());
        let mut session = Session::new(LineInput::stdin(), view, rng, config.display)
            .with_first_player(config.game.first_player);
        session.run().context("running console session")?;
        Ok(())
    }
}

fn run_tui(rng: StdRng, first_player: Option<Player>) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(rng, first_player);
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    println!("{}", app.scoreboard().summary());
    res
}

use std::path::Path;

use crate::error::ConfigError;
use crate::game::{Cell, Player};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub display: DisplayConfig,
    pub game: GameConfig,
}

/// How the board is drawn on the console.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub red_glyph: char,
    pub yellow_glyph: char,
    pub empty_glyph: char,
    /// Color discs with terminal styling
    pub color: bool,
    /// Clear the screen before each board redraw
    pub clear_screen: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            red_glyph: 'R',
            yellow_glyph: 'Y',
            empty_glyph: ' ',
            color: true,
            clear_screen: true,
        }
    }
}

impl DisplayConfig {
    /// Glyph drawn for a cell
    pub fn glyph(&self, cell: Cell) -> char {
        match cell {
            Cell::Empty => self.empty_glyph,
            Cell::Red => self.red_glyph,
            Cell::Yellow => self.yellow_glyph,
        }
    }

    /// Glyph drawn for a player's discs
    pub fn player_glyph(&self, player: Player) -> char {
        self.glyph(player.to_cell())
    }
}

/// How games are started.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for the starting-player draw; drawn from the OS when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Always give the first move to this player instead of drawing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_player: Option<Player>,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let glyphs = [
            ("display.red_glyph", self.display.red_glyph),
            ("display.yellow_glyph", self.display.yellow_glyph),
            ("display.empty_glyph", self.display.empty_glyph),
        ];

        for (name, glyph) in glyphs {
            if glyph.is_control() {
                return Err(ConfigError::Validation(format!(
                    "{name} must not be a control character"
                )));
            }
            // '|' and '-' draw the grid borders
            if glyph == '|' || glyph == '-' {
                return Err(ConfigError::Validation(format!(
                    "{name} must not be a border character ('|' or '-')"
                )));
            }
        }

        let d = &self.display;
        if d.red_glyph == d.yellow_glyph
            || d.red_glyph == d.empty_glyph
            || d.yellow_glyph == d.empty_glyph
        {
            return Err(ConfigError::Validation(
                "display glyphs must be distinct".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

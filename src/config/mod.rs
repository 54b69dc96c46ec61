pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "cinema-booking")]
#[command(about = "Seat reservation engine for a multiplex cinema")]
pub struct CliConfig {
    #[arg(long, help = "Directory holding the screen documents")]
    pub data_dir: Option<String>,

    #[arg(long, help = "Path to a TOML settings file")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Register a new screen with the given seat layout
    AddScreen { id: i32, columns: u32, rows: u32 },
    /// Delete a screen from the cinema
    RemoveScreen { id: i32 },
    /// Start showing a movie on a screen
    AddMovie {
        id: i32,
        title: String,
        cost_cents: i64,
    },
    /// Stop the screening on a screen and release its seats
    RemoveMovie { id: i32 },
    /// Book a specific seat for a movie
    Book { title: String, seat: u32, row: u32 },
    /// Book a random available seat for a movie
    BookRandom { title: String },
    /// List the screens currently showing movies
    List,
    /// Show the details of one screen
    Details { id: i32 },
}

impl CliConfig {
    /// Settings precedence: CLI flag, then TOML file, then built-in default.
    pub fn resolved_data_dir(&self, file: Option<&toml_config::CinemaConfig>) -> String {
        self.data_dir
            .clone()
            .or_else(|| file.and_then(|f| f.storage.data_dir.clone()))
            .unwrap_or_else(|| "./data".to_string())
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(dir) = &self.data_dir {
            validate_path("data_dir", dir)?;
        }
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}

//! Command-line interface for vidplayer.
//!
//! The default command starts the interactive shell. The remaining commands
//! are one-shot views over the catalog.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config;
use crate::core::Player;
use crate::domain::Video;
use crate::library::{bundled_catalog, load_catalog};

pub mod display;
pub mod shell;

pub use shell::{ParseError, Shell, ShellCommand};

/// vidplayer - In-memory video catalog player
#[derive(Parser, Debug)]
#[command(name = "vidplayer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Catalog file to load (.txt or .json); overrides VIDPLAYER_CATALOG and the config file
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive shell (default)
    Shell,

    /// List all videos sorted by title
    Videos,

    /// Search video titles
    Search {
        /// Case-insensitive substring of the title
        term: String,
    },

    /// Search videos by tag
    Tag {
        /// Tag to match exactly, ignoring case (e.g. "#cat")
        tag: String,
    },

    /// Show resolved configuration (debug)
    Config,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        match self.command.unwrap_or(Commands::Shell) {
            Commands::Shell => run_shell(self.catalog).await,
            Commands::Videos => list_videos(self.catalog).await,
            Commands::Search { term } => {
                let player = build_player(self.catalog).await?;
                print_results(&term, &player.search_titles(&term));
                Ok(())
            }
            Commands::Tag { tag } => {
                let player = build_player(self.catalog).await?;
                print_results(&tag, &player.search_tag(&tag));
                Ok(())
            }
            Commands::Config => show_config(),
        }
    }
}

/// Load the catalog and construct the player from configuration
pub async fn build_player(catalog_override: Option<PathBuf>) -> Result<Player> {
    let cfg = config::config()?;

    let catalog = match catalog_override.or_else(|| cfg.catalog.clone()) {
        Some(path) => load_catalog(&path).await?,
        None => bundled_catalog()?,
    };

    Ok(Player::new(catalog).with_default_flag_reason(cfg.default_flag_reason.clone()))
}

/// Run the interactive shell on stdin/stdout
async fn run_shell(catalog_override: Option<PathBuf>) -> Result<()> {
    let player = build_player(catalog_override).await?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(player, stdin.lock(), stdout.lock());
    shell.run()
}

/// List every video in the catalog
async fn list_videos(catalog_override: Option<PathBuf>) -> Result<()> {
    let player = build_player(catalog_override).await?;
    let videos = player.all_videos_sorted();

    if videos.is_empty() {
        println!("The catalog is empty");
        return Ok(());
    }

    println!("{} videos in the library\n", videos.len());
    print_table(&videos);
    Ok(())
}

fn print_results(query: &str, results: &[&Video]) {
    if results.is_empty() {
        println!("No search results for {}", query);
        return;
    }

    println!("Found {} result(s) for \"{}\":\n", results.len(), query);
    print_table(results);
}

fn print_table(videos: &[&Video]) {
    println!("{:<28} {:<32} {:<30}", "ID", "TITLE", "TAGS");
    println!("{}", "-".repeat(92));

    for video in videos {
        let title = if video.title().chars().count() > 29 {
            format!("{}...", video.title().chars().take(29).collect::<String>())
        } else {
            video.title().to_string()
        };
        let tags = match video.flag_reason() {
            Some(reason) => format!("{} [FLAGGED: {}]", video.tags().join(" "), reason),
            None => video.tags().join(" "),
        };
        println!("{:<28} {:<32} {:<30}", video.id().as_str(), title, tags);
    }
}

/// Show resolved configuration
fn show_config() -> Result<()> {
    let cfg = config::config()?;

    println!("vidplayer configuration");
    println!();
    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!("Home:        {}", cfg.home.display());
    println!(
        "Catalog:     {}",
        cfg.catalog
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(bundled)".to_string())
    );
    println!("Default flag reason: {}", cfg.default_flag_reason);

    Ok(())
}

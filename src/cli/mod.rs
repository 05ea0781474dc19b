//! CLI module for Notat.

pub mod commands;
mod output;

pub use output::Output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Notat - YouTube and Meeting Notes
///
/// Turns YouTube videos and meeting recordings into structured study notes.
/// The name "Notat" comes from the Norwegian word for "note."
#[derive(Parser, Debug)]
#[command(name = "notat")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate notes from a YouTube video
    Generate {
        /// YouTube video URL
        url: String,

        /// Detail level (brief, medium, detailed)
        #[arg(short, long)]
        detail: Option<String>,

        /// Note layout (bullet, paragraph)
        #[arg(short, long)]
        format: Option<String>,

        /// Engine override (heuristic, gemini)
        #[arg(short, long)]
        engine: Option<String>,

        /// Write the notes to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip saving the notes to the store
        #[arg(long)]
        no_save: bool,
    },

    /// Generate meeting notes from an audio recording
    Audio {
        /// Path to the audio file (wav, mp3, ogg, webm, m4a)
        file: PathBuf,

        /// Detail level (brief, medium, detailed)
        #[arg(short, long)]
        detail: Option<String>,

        /// Note layout (bullet, paragraph)
        #[arg(short, long)]
        format: Option<String>,

        /// Write the notes to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip saving the notes to the store
        #[arg(long)]
        no_save: bool,
    },

    /// List saved notes
    List,

    /// Show a saved note
    Show {
        /// Note id
        id: String,
    },

    /// Start the HTTP API server
    Serve {
        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,
}

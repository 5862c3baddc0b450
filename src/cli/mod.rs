//! CLI interface for Wobble

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Multi-output LFO modulation engine for software synthesizers
#[derive(Parser)]
#[command(name = "wobble")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play the configured notes through the audition voice
    Play {
        /// Configuration file path
        #[arg(short, long, default_value = "wobble.yaml")]
        config: PathBuf,
    },

    /// Record the audition voice to a mono WAV file
    Record {
        /// Configuration file path
        #[arg(short, long, default_value = "wobble.yaml")]
        config: PathBuf,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Duration in seconds
        #[arg(short, long, default_value = "10")]
        duration: u64,
    },

    /// Render the six raw LFO channels to a multichannel WAV file
    Render {
        /// Configuration file path
        #[arg(short, long, default_value = "wobble.yaml")]
        config: PathBuf,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Duration in seconds
        #[arg(short, long, default_value = "10")]
        duration: u64,
    },

    /// List available audio output devices
    Devices,

    /// Validate a configuration file
    Check {
        /// Configuration file path
        #[arg(short, long, default_value = "wobble.yaml")]
        config: PathBuf,
    },

    /// Generate an example configuration file
    Init,
}

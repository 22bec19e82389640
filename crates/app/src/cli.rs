//! Command-line interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Skinbox - headless painter for two-layer 64x64 character skins
#[derive(Parser, Debug)]
#[command(name = "skinbox")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a command script onto a skin and write the result
    Render {
        /// Command script (JSON array or one JSON command per line)
        #[arg(short, long)]
        script: PathBuf,

        /// Output PNG
        #[arg(short, long)]
        out: PathBuf,

        /// Starting skin PNG; the default template is used when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// JSON configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Write the default template skin
    Template {
        /// Output PNG
        #[arg(short, long)]
        out: PathBuf,

        /// Use the slim (3px arm) model
        #[arg(long)]
        slim: bool,
    },
}

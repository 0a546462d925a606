// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(name = "modelgen")]
#[command(about = "Procedural 3D model generator with OBJ export", long_about = None)]
pub struct Cli {
    /// Suppress the generation summary on stdout
    #[arg(long, short, global = true, default_value = "false")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Generate a model from a prompt and export it as OBJ
    Generate {
        /// Free-text description, e.g. "a giant robot"
        #[arg(long, short)]
        prompt: String,

        /// Detail level, clamped to [0.25, 4.0]
        #[arg(long, short)]
        detail: Option<f32>,

        /// Output file; overrides the configured directory and file stem
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// JSON studio configuration
        #[arg(long, short)]
        config: Option<PathBuf>,

        /// Seed for cosmetic variation
        #[arg(long)]
        jitter_seed: Option<u64>,

        /// Append per-vertex colors sampled from each material
        #[arg(long, default_value = "false")]
        colors: bool,

        /// Print the OBJ document instead of writing a file
        #[arg(long, default_value = "false", conflicts_with = "output")]
        stdout: bool,
    },
    /// Print the category a prompt maps to
    Classify {
        prompt: String,
    },
    /// List categories and their trigger keywords
    Categories,
}

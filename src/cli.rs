//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Paginate the collections of a tola site
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Site root directory (default: current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name, relative to root
    #[arg(short = 'C', long, default_value = "tola.toml")]
    pub config: PathBuf,

    /// Content manifest file name, relative to root
    #[arg(short, long, default_value = "content.toml")]
    pub manifest: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Paginate every page that asks for it and show the resulting page sequences
    Plan,

    /// Print the paginator payload of paginated pages as JSON
    Payload {
        /// Only the page with this URL
        #[arg(short, long)]
        url: Option<String>,
    },

    /// Print the collection named by the paginate loop in a template
    Scan {
        /// Template file to scan
        file: PathBuf,
    },
}

impl Cli {
    pub fn root(&self) -> PathBuf {
        self.root.clone().unwrap_or_else(|| PathBuf::from("./"))
    }
}

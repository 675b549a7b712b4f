//! Command-line interface definition.
use clap::Parser;
use std::path::PathBuf;

/// Link your dotfiles into your home directory.
#[derive(Parser, Debug)]
#[command(
    name = "dotfiles-link",
    about = "Link your dotfiles into your home directory.",
    version
)]
pub struct Cli {
    /// The directory containing the dotfiles you want to link
    /// (default: <dotfiles root>/<username>)
    #[arg(long, value_name = "DIR")]
    pub src_dir: Option<PathBuf>,

    /// The directory where you want to link the dotfiles (default: your home directory)
    #[arg(long, value_name = "DIR")]
    pub dst_dir: Option<PathBuf>,

    /// Print status messages while linking
    #[arg(short = 'v', long)]
    pub progress: bool,

    /// Show debug log messages on the console
    #[arg(long)]
    pub debug: bool,

    /// Read settings from this file instead of the default link.toml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Name of the marker file that makes a directory link as a unit
    #[arg(long, value_name = "NAME")]
    pub marker: Option<String>,
}

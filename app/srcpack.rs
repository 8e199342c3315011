//! Command-line interface for srcpack.
//!
//! This binary walks a source directory and writes every file it finds into a
//! single combined text file, one marker line per file.

use clap::Parser;
use srcpack::{CombineBuilder, combine};
use std::path::PathBuf;
use std::process::exit;

/// srcpack — combine a source tree into one text file
#[derive(Parser)]
#[command(name = "srcpack", version, about, long_about = None)]
struct Cli {
    /// Source directory to combine
    #[arg(default_value = "./src")]
    source: PathBuf,

    /// Output file path (truncated if it exists)
    #[arg(default_value = "combined_src_files.txt")]
    output: PathBuf,

    /// Follow symlinked directories
    #[arg(long)]
    follow_links: bool,
}

fn main() {
    let cli = Cli::parse();
    let output = cli.output.clone();

    let options = CombineBuilder::new(cli.source)
        .output(cli.output)
        .follow_links(cli.follow_links)
        .build();

    match combine(options) {
        Ok(_) => {
            println!("Combined file created: {}", output.display());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}

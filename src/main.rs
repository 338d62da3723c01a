//! CLI entry point for treedown

use std::path::PathBuf;
use std::process;

use clap::Parser;
use treedown::{build_document, scan_directory, write_document};

/// Default destination, relative to the working directory.
const DEFAULT_OUTPUT_FILE: &str = "folder_structure.txt";

#[derive(Parser, Debug)]
#[command(name = "treedown")]
#[command(about = "Flatten a directory tree into one markdown document")]
#[command(version)]
struct Args {
    /// Directory to scan
    #[arg(default_value = ".")]
    path: PathBuf,

    /// File to write the generated markdown to
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,
}

fn main() {
    let args = Args::parse();

    // An unreadable root still produces a document with just the title,
    // same as any other silently skipped directory.
    let fragment = match scan_directory(&args.path, 0) {
        Ok(fragment) => fragment.unwrap_or_default(),
        Err(e) => {
            eprintln!("treedown: cannot access '{}': {}", args.path.display(), e);
            process::exit(1);
        }
    };

    let document = build_document(&args.path, &fragment);
    if let Err(e) = write_document(&args.output, &document) {
        eprintln!("treedown: cannot write '{}': {}", args.output.display(), e);
        process::exit(1);
    }

    println!(
        "Markdown file '{}' created successfully.",
        args.output.display()
    );
}

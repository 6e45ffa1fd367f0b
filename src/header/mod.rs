//! The `copyright-updater` tool: canonicalize copyright notices in a tree.
//!
//! Every file under the given directory is read, its first line is
//! canonicalized when it opens with the copyright marker, and the file is
//! written back:
//!
//! ```text
//! $ copyright-updater Source/
//! ```
//!
//! [`rewrite`] holds the pure first-line logic; [`walk`] supplies the
//! breadth-first traversal that feeds it.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use thiserror::Error;

pub mod rewrite;
pub mod walk;

pub use rewrite::{COPYRIGHT_LINE, COPYRIGHT_MARKER, rewrite_header};
pub use walk::visit_files;

/// Errors that can occur while updating copyright notices.
#[derive(Error, Debug)]
pub enum UpdateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Empty file: {0}")]
    EmptyFile(PathBuf),
}

/// Command-line arguments for `copyright-updater`.
///
/// The operand is optional so that an incomplete invocation reaches
/// [`run`], which answers it with a usage line instead of a parse error.
#[derive(Parser)]
#[command(name = "copyright-updater", version)]
#[command(about = "Rewrite first-line copyright notices under a directory")]
pub struct Cli {
    /// Directory whose files should be updated
    pub root: Option<PathBuf>,
}

/// Runs the updater end to end for the given arguments.
///
/// A missing operand, or one that is not an existing directory, prints a
/// usage line and returns `Ok`, so the process still exits 0. Errors while
/// walking or rewriting abort the run and leave later files untouched.
pub fn run(cli: Cli) -> Result<(), UpdateError> {
    let root = match cli.root {
        Some(root) if root.is_dir() => root,
        _ => {
            println!("{}", usage_line(&program_name()));
            return Ok(());
        }
    };
    walk::visit_files(&root, process_file)
}

/// Canonicalizes one file in place.
///
/// The write happens even when the content is unchanged, so every visited
/// file's mtime is touched.
fn process_file(path: &Path) -> Result<(), UpdateError> {
    let content = fs::read_to_string(path)?;
    let rewritten = rewrite::rewrite_header(&content)
        .ok_or_else(|| UpdateError::EmptyFile(path.to_path_buf()))?;
    fs::write(path, rewritten)?;
    Ok(())
}

fn usage_line(program: &str) -> String {
    format!("usage: {program} <src_directory>")
}

fn program_name() -> String {
    std::env::args()
        .next()
        .unwrap_or_else(|| "copyright-updater".to_string())
}

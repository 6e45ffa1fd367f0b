//! Breadth-first directory traversal.
//!
//! Directories are visited level by level: every file directly under the
//! root is handed to the callback before anything one level deeper, and so
//! on down. Within a single directory, entries come back in whatever order
//! the filesystem reports them.

use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use super::UpdateError;

/// Walks the tree under `root` breadth-first, calling `visit` on every
/// non-directory entry.
///
/// Symlinks to directories are descended into like real directories. The
/// first error, whether from reading a directory or from the callback,
/// aborts the walk.
pub fn visit_files<F>(root: &Path, mut visit: F) -> Result<(), UpdateError>
where
    F: FnMut(&Path) -> Result<(), UpdateError>,
{
    let mut pending = VecDeque::from([root.to_path_buf()]);
    while let Some(dir) = pending.pop_front() {
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.is_dir() {
                pending.push_back(path);
            } else {
                visit(&path)?;
            }
        }
    }
    Ok(())
}

//! Document assembly and output writing

use std::fs;
use std::io;
use std::path::Path;

/// Assemble the final document: a title line naming the scanned root, a
/// blank line, then the accumulated structure fragment.
pub fn build_document(root: &Path, fragment: &str) -> String {
    format!("# Folder structure for `{}`\n\n{fragment}", root.display())
}

/// Write the document to `path`, truncating anything already there.
/// Single plain write; no atomic rename.
pub fn write_document(path: &Path, document: &str) -> io::Result<()> {
    fs::write(path, document)
}

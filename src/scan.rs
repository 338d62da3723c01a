//! Recursive directory traversal
//!
//! The walker turns a directory into a nested markdown bullet list, pulling
//! file contents in through the renderer. Each recursive call builds and
//! returns its own fragment; the caller concatenates, so no buffer is ever
//! shared across levels.

use std::fs;
use std::io;
use std::path::Path;

use crate::render::{indent_for, render_file};

/// Scan `dir` and return its structure as a markdown fragment.
///
/// Every entry becomes a bullet line at `level`, in the order the
/// filesystem listing returns them: directories as `- **name/**` followed
/// by their own fragment at `level + 1`, files as `- name` followed by
/// their rendered content.
///
/// Returns `Ok(None)` when the listing is denied by an access restriction;
/// the caller then omits the directory entirely, bullet included. Any
/// other I/O failure propagates.
pub fn scan_directory(dir: &Path, level: usize) -> io::Result<Option<String>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => return Ok(None),
        Err(e) => return Err(e),
    };

    let indent = indent_for(level);
    let mut fragment = String::new();

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => return Ok(None),
            Err(e) => return Err(e),
        };
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();

        if path.is_dir() {
            // The bullet is written only once the subtree listing is known
            // to succeed; a denied directory leaves no trace in the output.
            if let Some(subtree) = scan_directory(&path, level + 1)? {
                fragment.push_str(&indent);
                fragment.push_str("- **");
                fragment.push_str(&name);
                fragment.push_str("/**\n");
                fragment.push_str(&subtree);
            }
        } else {
            fragment.push_str(&indent);
            fragment.push_str("- ");
            fragment.push_str(&name);
            fragment.push('\n');
            fragment.push_str(&render_file(&path, level + 1));
        }
    }

    Ok(Some(fragment))
}

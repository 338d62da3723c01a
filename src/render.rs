//! File content rendering
//!
//! Renders a single file as a fenced code block indented to its tree depth.
//! This is the program's only failure-containment boundary: a file that
//! cannot be read becomes one inline error line and the walk moves on.

use std::fs;
use std::path::Path;

/// One indentation step: four spaces per depth level.
pub const INDENT_UNIT: &str = "    ";

/// Indentation prefix for a given depth level.
pub fn indent_for(level: usize) -> String {
    INDENT_UNIT.repeat(level)
}

/// Render the content of `path` as a fenced block indented to `level`.
///
/// Lines are reproduced verbatim between the opening and closing fences,
/// each prefixed with the level's indentation. A file without a final
/// newline gets one supplied so the closing fence stays on its own line.
///
/// If the file cannot be read for any reason (permissions, invalid UTF-8,
/// I/O) the fragment is instead a single indented line reporting the error
/// in place of content.
pub fn render_file(path: &Path, level: usize) -> String {
    let indent = indent_for(level);
    match fs::read_to_string(path) {
        Ok(content) => {
            let mut block = String::with_capacity(content.len() + 16);
            block.push_str(&indent);
            block.push_str("```\n");
            for line in content.split_inclusive('\n') {
                block.push_str(&indent);
                block.push_str(line);
            }
            if !block.ends_with('\n') {
                block.push('\n');
            }
            block.push_str(&indent);
            block.push_str("```\n");
            block
        }
        Err(e) => format!("{indent}Error reading file: {e}\n"),
    }
}

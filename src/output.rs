//! Rendering of a [`Snapshot`] into the combined text format.
//!
//! Each file becomes one block: a marker line `/// <path>`, a blank line, the
//! verbatim file content, then a blank-line separator. File content is never
//! altered; a file that does not end in a newline still gets exactly the
//! two-newline separator after it.

use crate::{CombineError, FileBlock, Snapshot};
use std::fs;
use std::path::Path;

/// Formats a single block.
pub fn render_block(block: &FileBlock) -> String {
    let mut out = String::with_capacity(block.content.len() + block.marker_path.len() + 8);
    out.push_str("/// ");
    out.push_str(&block.marker_path);
    out.push_str("\n\n");
    out.push_str(&block.content);
    out.push_str("\n\n");
    out
}

/// Formats the whole snapshot. An empty snapshot renders as an empty string.
pub fn render_snapshot(snapshot: &Snapshot) -> String {
    let mut out = String::with_capacity(1024);
    for block in &snapshot.blocks {
        out.push_str(&render_block(block));
    }
    out
}

/// Renders the snapshot and writes it to `path`, truncating any existing file.
pub fn write_snapshot(snapshot: &Snapshot, path: impl AsRef<Path>) -> Result<(), CombineError> {
    let content = render_snapshot(snapshot);
    fs::write(&path, content).map_err(|e| CombineError::io(path.as_ref(), e))?;
    Ok(())
}

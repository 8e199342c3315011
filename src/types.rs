use serde::{Deserialize, Serialize};

/// One source file's contribution to the combined output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileBlock {
    /// The path written on the marker line, of the form
    /// `<root_folder>/<path relative to the source directory>`.
    pub marker_path: String,
    /// The verbatim UTF-8 content of the file.
    pub content: String,
}

/// The complete result of a combine run.
///
/// Blocks are ordered deterministically (sorted by path components), so two
/// runs over an unchanged tree render to byte-identical output.
#[derive(Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// One block per regular file under the source directory.
    pub blocks: Vec<FileBlock>,
}

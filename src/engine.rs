use crate::error::CombineError;
use crate::options::CombineOptions;
use crate::output;
use crate::types::{FileBlock, Snapshot};
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;
struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(options: &CombineOptions) -> Self {
        let mut builder = WalkBuilder::new(&options.root);
        builder
            .standard_filters(false)
            .follow_links(options.follow_links);
        Self {
            inner: builder.build(),
        }
    }
    fn into_iter(self) -> impl Iterator<Item = Result<PathBuf, CombineError>> {
        self.inner.filter_map(|result| match result {
            Ok(entry) => Some(Ok(entry.path().to_path_buf())),
            Err(e) => Some(Err(CombineError::Walk(e.to_string()))),
        })
    }
    fn collect_entries(self) -> Result<Vec<PathBuf>, CombineError> {
        self.into_iter().collect()
    }
}
/// Base name of the source directory, used as the leading marker segment.
///
/// Paths without a final normal component (".", "..", "/") are resolved
/// through canonicalization first.
fn root_folder_name(root: &Path) -> String {
    if let Some(name) = root.file_name() {
        return name.to_string_lossy().into_owned();
    }
    root.canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| ".".to_string())
}
fn read_file_content(path: &Path) -> Result<String, CombineError> {
    let bytes = fs::read(path).map_err(|e| CombineError::io(path, e))?;
    String::from_utf8(bytes).map_err(|_| CombineError::Decode {
        path: path.to_path_buf(),
    })
}
/// Walks `options.root`, reads every regular file, and writes the combined
/// output to `options.output`.
///
/// The source tree is read-only input. The output file is truncated if it
/// already exists and is written in a single pass; an empty tree still
/// produces the (empty) output file. The run fails before the output file is
/// touched when the source directory does not exist, and aborts on the first
/// unreadable or non-UTF-8 file.
///
/// Symlinked directories are not followed unless `follow_links` is set;
/// symlinked regular files are read like any other file.
pub fn combine(options: CombineOptions) -> Result<Snapshot, CombineError> {
    #[cfg(feature = "logging")]
    tracing::debug!("Starting combine with root: {}", options.root.display());
    if !options.root.is_dir() {
        return Err(CombineError::SourceNotFound(options.root));
    }
    let walker = Walker::new(&options);
    let mut file_paths: Vec<PathBuf> = walker
        .collect_entries()?
        .into_iter()
        .filter(|p| p.is_file())
        .collect();
    file_paths.sort_by(|a, b| a.components().cmp(b.components()));
    let root_name = root_folder_name(&options.root);
    let mut blocks = Vec::with_capacity(file_paths.len());
    for path in file_paths {
        #[cfg(feature = "logging")]
        tracing::debug!("Reading {}", path.display());
        let relative = path.strip_prefix(&options.root).unwrap_or(&path);
        let marker_path = Path::new(&root_name).join(relative).display().to_string();
        let content = read_file_content(&path)?;
        blocks.push(FileBlock {
            marker_path,
            content,
        });
    }
    let snapshot = Snapshot { blocks };
    output::write_snapshot(&snapshot, &options.output)?;
    Ok(snapshot)
}

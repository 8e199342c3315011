//! # Srcpack
//!
//! `srcpack` recursively walks a source directory and concatenates every file
//! it finds into a single output text file. Each file's content is preceded by
//! a marker line of the form `/// <root_folder>/<relative_path>` and followed
//! by a blank-line separator, producing a one-file snapshot of a project tree.
//!
//! The walk includes hidden files and applies no filtering; entries are sorted
//! so repeated runs over an unchanged tree produce byte-identical output. Any
//! unreadable or non-UTF-8 file aborts the run with the offending path.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use srcpack::{CombineBuilder, combine};
//!
//! let options = CombineBuilder::new("./src")
//!     .output("combined_src_files.txt")
//!     .build();
//!
//! let snapshot = combine(options).expect("Failed to combine directory");
//!
//! for block in snapshot.blocks {
//!     println!("Packed: {}", block.marker_path);
//! }
//! ```

mod engine;
mod error;
mod options;
pub mod output;
mod types;

pub use engine::combine;
pub use error::CombineError;
pub use options::{CombineBuilder, CombineOptions};
pub use types::{FileBlock, Snapshot};

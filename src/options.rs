use serde::{Deserialize, Serialize};
use std::path::PathBuf;
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombineOptions {
    pub root: PathBuf,
    pub output: PathBuf,
    pub follow_links: bool,
}
impl Default for CombineOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("./src"),
            output: PathBuf::from("combined_src_files.txt"),
            follow_links: false,
        }
    }
}
#[derive(Debug, Default)]
pub struct CombineBuilder {
    options: CombineOptions,
}
impl CombineBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: CombineOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output = path.into();
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn build(self) -> CombineOptions {
        self.options
    }
}

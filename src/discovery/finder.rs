use globset::{Glob, GlobMatcher};
use ignore::WalkBuilder;

use std::io;
use std::path::{Path, PathBuf};

use crate::core::error::{RescaleError, Result};

/// Anything that can produce the set of files a run works on
pub trait FileFinder {
    fn find_files(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// Recursively collects files whose name matches a glob such as `*.xbb`.
///
/// Every directory below the root is visited: hidden entries and paths
/// listed in ignore files are not skipped. Symbolic links to directories
/// are not followed.
#[derive(Debug, Clone)]
pub struct ExtensionFinder {
    matcher: GlobMatcher,
}

impl ExtensionFinder {
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            matcher: Glob::new(pattern)?.compile_matcher(),
        })
    }

    /// Finder for `*.<extension>`
    pub fn for_extension(extension: &str) -> Result<Self> {
        Self::new(&format!("*.{extension}"))
    }

    pub fn matches(&self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| self.matcher.is_match(Path::new(name)))
    }
}

impl FileFinder for ExtensionFinder {
    fn find_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.is_dir() {
            return Err(RescaleError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("'{}' is not a directory", root.display()),
            )));
        }

        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b));

        let mut result_paths = Vec::new();
        for entry in builder.build() {
            let entry = entry?;
            let entry_path = entry.path();

            if entry_path.is_file() && self.matches(entry_path) {
                result_paths.push(entry_path.to_path_buf());
            }
        }

        Ok(result_paths)
    }
}

//! Built-in validators.
//!
//! Each validator reads dataset files under the target directory itself and
//! reports findings keyed by the file's path relative to that directory.

mod file_encoding;
mod prefix;

pub use file_encoding::{FileEncodingConfig, FileEncodingValidator};
pub use prefix::{PrefixConfig, PrefixRule, PrefixValidator};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File extensions treated as RDF resources.
pub const RDF_EXTENSIONS: &[&str] = &["rdf", "ttl", "nt", "owl"];

/// Collect files under `root` whose extension is in `extensions`.
///
/// Hidden directories and links to directories are skipped, so link cycles
/// cannot repeat a file. Paths are returned sorted.
pub fn collect_files(root: &Path, extensions: &[String]) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let file_type = entry.file_type()?;
            let path = entry.path();
            let hidden = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with('.'));

            if file_type.is_dir() {
                if !hidden {
                    pending.push(path);
                }
            } else if file_type.is_symlink() && path.is_dir() {
                tracing::debug!("not following directory link {}", path.display());
            } else if has_extension(&path, extensions) {
                files.push(path);
            }
        }
    }

    files.sort();
    Ok(files)
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}

/// Resource id of `path`: relative to `root`, with `/` separators.
pub fn resource_id(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

pub(crate) fn default_extensions() -> Vec<String> {
    RDF_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}

use crate::error::Result;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// File name every manifest in the tree must match exactly.
pub const MANIFEST_FILE_NAME: &str = "Cargo.toml";

/// Lazily yields the path of every `Cargo.toml` under `root`.
///
/// The walk is bottom-up: the contents of a directory are yielded before the
/// directory itself, so nested manifests come before the root manifest.
/// Siblings are visited in file-name order. Symlinked directories are not
/// descended into, but a `Cargo.toml` symlink pointing at a file is yielded.
///
/// Traversal failures (unreadable directories, permission errors) are yielded
/// as `Err` items rather than skipped.
pub fn locate_manifests(root: &Path) -> impl Iterator<Item = Result<PathBuf>> {
    WalkDir::new(root)
        .contents_first(true)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => {
                if entry.file_name() == MANIFEST_FILE_NAME && is_manifest_file(&entry) {
                    log::debug!("Found manifest: {}", entry.path().display());
                    Some(Ok(entry.into_path()))
                } else {
                    None
                }
            }
            Err(e) => Some(Err(e.into())),
        })
}

fn is_manifest_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

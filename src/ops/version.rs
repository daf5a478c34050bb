use crate::error::Result;
use crate::ops::locate::locate_manifests;
use crate::ops::transaction::Transaction;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Literal prefix identifying a version line.
pub const VERSION_PREFIX: &str = "version";

/// Extracts the value from a version line.
///
/// The line is split on `=`, the second field is taken and stripped of
/// surrounding whitespace and double quotes. Returns `None` for lines that do
/// not start with [`VERSION_PREFIX`] or have no `=`.
pub fn parse_version_line(line: &str) -> Option<&str> {
    if !line.starts_with(VERSION_PREFIX) {
        return None;
    }

    line.split('=')
        .nth(1)
        .map(|value| value.trim().trim_matches('"'))
}

/// Reads the version declared by the first version line of `manifest`.
///
/// Returns `Ok(None)` when the manifest does not exist, has no version line,
/// or its first version line carries no value. Later version lines are never
/// consulted.
pub fn read_current_version(manifest: &Path) -> Result<Option<String>> {
    let content = match fs::read_to_string(manifest) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Root manifest not found: {}", manifest.display());
            return Ok(None);
        }
        Err(e) => {
            return Err(io::Error::new(
                e.kind(),
                format!("Failed to read {}: {}", manifest.display(), e),
            )
            .into());
        }
    };

    let version = content
        .lines()
        .find(|line| line.starts_with(VERSION_PREFIX))
        .and_then(parse_version_line)
        .map(str::to_string);

    if version.is_none() {
        log::warn!("No version line found in {}", manifest.display());
    }

    Ok(version)
}

/// Replaces every version line in `content` with `version = "<new_version>"`.
///
/// All other lines are kept byte-for-byte, line terminators included.
pub fn rewrite_version_lines(content: &str, new_version: &str) -> String {
    let mut output = String::with_capacity(content.len());

    for line in content.split_inclusive('\n') {
        if line.starts_with(VERSION_PREFIX) {
            output.push_str(&format!("{} = \"{}\"\n", VERSION_PREFIX, new_version));
        } else {
            output.push_str(line);
        }
    }

    output
}

/// Rewrites the version line of every manifest under `root`.
///
/// Every manifest is read and staged before any is written, then all staged
/// updates are committed in walk order. Returns the manifests whose content
/// changed.
pub fn write_version(root: &Path, new_version: &str) -> Result<Vec<PathBuf>> {
    let mut txn = Transaction::new();

    for manifest in locate_manifests(root) {
        let manifest = manifest?;
        let content = fs::read_to_string(&manifest).map_err(|e| {
            io::Error::new(
                e.kind(),
                format!("Failed to read {}: {}", manifest.display(), e),
            )
        })?;

        let updated = rewrite_version_lines(&content, new_version);
        txn.update_file(manifest, content, updated);
    }

    if txn.is_empty() {
        log::info!("All manifests already at version {:?}", new_version);
    }

    txn.commit()?;
    log::info!("Updated {} manifest(s)", txn.len());

    Ok(txn.paths().map(Path::to_path_buf).collect())
}

use crate::error::{BumpError, Result};
use colored::Colorize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Debug, Clone)]
enum Operation {
    UpdateFile { path: PathBuf, new: String },
}

/// Staged manifest rewrites, applied in order by [`Transaction::commit`].
///
/// There is no rollback: a failed commit leaves earlier files updated.
#[must_use = "Transaction must be committed"]
pub struct Transaction {
    operations: Vec<Operation>,
    committed: bool,
}

impl Transaction {
    pub fn new() -> Self {
        Self {
            operations: Vec::new(),
            committed: false,
        }
    }

    /// Stages a rewrite of `path`. Unchanged content is skipped.
    pub fn update_file(&mut self, path: PathBuf, original: String, new: String) {
        if original == new {
            log::debug!("File content unchanged, skipping: {}", path.display());
            return;
        }

        log::debug!("Staging update for: {}", path.display());
        self.operations.push(Operation::UpdateFile { path, new });
    }

    /// Writes every staged file.
    ///
    /// Each file is written to a temporary sibling and renamed over the
    /// original. A failure stops at the first file that could not be replaced.
    pub fn commit(&mut self) -> Result<()> {
        if self.committed {
            return Err(BumpError::Other(anyhow::anyhow!(
                "Transaction already committed"
            )));
        }

        for op in &self.operations {
            match op {
                Operation::UpdateFile { path, new } => {
                    replace_file(path, new)?;
                    log::debug!("Updated: {}", path.display());
                }
            }
        }

        self.committed = true;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Paths of every staged file, in staging order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.operations.iter().map(|op| match op {
            Operation::UpdateFile { path, .. } => path.as_path(),
        })
    }
}

/// Replaces `path` with `content`. Symlinks are written through: the temporary
/// file lives next to the link target and is renamed onto it.
fn replace_file(path: &Path, content: &str) -> Result<()> {
    let with_path = |e: io::Error| {
        io::Error::new(
            e.kind(),
            format!("Failed to write {}: {}", path.display(), e),
        )
    };

    let target = fs::canonicalize(path).map_err(with_path)?;
    let dir = target.parent().unwrap_or_else(|| Path::new("."));
    let permissions = fs::metadata(&target).map_err(with_path)?.permissions();

    let mut tmp = NamedTempFile::new_in(dir).map_err(with_path)?;
    tmp.write_all(content.as_bytes()).map_err(with_path)?;
    tmp.as_file().sync_all().map_err(with_path)?;
    fs::set_permissions(tmp.path(), permissions).map_err(with_path)?;

    tmp.persist(&target).map_err(|source| BumpError::Persist {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(())
}

/// Writes the list of rewritten manifests, relative to `root`, to `out`.
pub fn print_summary(out: &mut impl Write, paths: &[PathBuf], root: &Path) -> io::Result<()> {
    if paths.is_empty() {
        return writeln!(out, "\n{}", "No manifests needed changes".yellow());
    }

    let display_path = |path: &Path| -> String {
        let relative = pathdiff::diff_paths(path, root).unwrap_or_else(|| path.to_path_buf());
        relative.to_string_lossy().replace('\\', "/")
    };

    writeln!(
        out,
        "\n{} {} manifest{}:",
        "Updated".green().bold(),
        paths.len(),
        if paths.len() == 1 { "" } else { "s" }
    )?;
    for path in paths {
        writeln!(out, "   {} {}", "✓".green(), display_path(path).dimmed())?;
    }
    Ok(())
}

use crate::error::{BumpError, Result};
use crate::ops::{MANIFEST_FILE_NAME, print_summary, read_current_version, write_version};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Shown in place of the current version when the root manifest has none.
pub const NO_VERSION: &str = "<none>";

/// The new version is always read interactively from standard input.
#[derive(Parser, Debug, Clone, Default)]
pub struct BumpArgs {}

/// What a completed bump did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpOutcome {
    /// Version read from the root manifest before the bump.
    pub previous: Option<String>,
    /// Version entered by the user, verbatim.
    pub new_version: String,
    /// Manifests whose content changed.
    pub updated: Vec<PathBuf>,
}

pub fn execute(_args: BumpArgs) -> Result<()> {
    let root = std::env::current_dir()?;
    log::debug!("Bumping manifests under: {}", root.display());

    let stdin = io::stdin();
    let stdout = io::stdout();
    bump(&root, stdin.lock(), stdout.lock())?;

    Ok(())
}

/// Prompts for a new version on `input` and writes it into every manifest
/// under `root`.
///
/// The current version comes from `<root>/Cargo.toml` and is only displayed.
/// Whatever the user enters is used as-is.
pub fn bump(root: &Path, mut input: impl BufRead, mut output: impl Write) -> Result<BumpOutcome> {
    let previous = read_current_version(&root.join(MANIFEST_FILE_NAME))?;

    writeln!(output, "bumping version...")?;
    writeln!(
        output,
        "current version: {}",
        previous.as_deref().unwrap_or(NO_VERSION)
    )?;
    write!(output, "new version: ")?;
    output.flush()?;

    let new_version = read_new_version(&mut input)?;
    log::debug!("New version entered: {:?}", new_version);

    let updated = write_version(root, &new_version)?;
    print_summary(&mut output, &updated, root)?;

    Ok(BumpOutcome {
        previous,
        new_version,
        updated,
    })
}

/// Reads one line, dropping only its line terminator.
fn read_new_version(input: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(BumpError::NoInput);
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }

    Ok(line)
}

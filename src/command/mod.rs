pub mod bump;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum CargoCommand {
    /// Bump the version line of every Cargo.toml under the current directory.
    Bump(bump::BumpArgs),
}

use crate::command::CargoCommand;
use clap::Parser;

/// Invoked either directly as `cargo-bump` or through cargo as `cargo bump`.
#[derive(Parser)]
#[command(name = "cargo-bump", bin_name = "cargo-bump", version, about)]
pub struct CargoCli {
    #[command(subcommand)]
    pub command: Option<CargoCommand>,
}

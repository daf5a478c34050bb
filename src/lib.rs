#![doc = include_str!("../README.md")]

pub mod cli;
pub mod command;
pub mod error;
pub mod ops;

pub use error::*;

pub fn run() -> Result<()> {
    use clap::Parser;
    use command::CargoCommand;

    let cli = cli::CargoCli::parse();
    match cli.command {
        Some(CargoCommand::Bump(args)) => command::bump::execute(args),
        None => command::bump::execute(command::bump::BumpArgs::default()),
    }
}

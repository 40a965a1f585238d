mod commands;

use crate::commands::{
    handle_convert, handle_init, handle_inspect, ConvertArgs, InitArgs, InspectArgs,
};
use clap::{Parser, Subcommand};
use common::error::SqlMetaError;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sqlmeta", version, about = "Describe SQL tables as YAML metadata")]
pub struct Cli {
    #[arg(
        long = "config-path",
        short = 'c',
        help = "directory containing sqlmeta.yml",
        global = true
    )]
    pub config_path: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Cmd,
}

#[derive(Subcommand)]
pub enum Cmd {
    /// Write a sqlmeta.yml with default paths
    Init(InitArgs),
    /// Convert CREATE TABLE statements into a YAML metadata file
    Convert(ConvertArgs),
    /// Print the YAML metadata to stdout instead of writing a file
    Inspect(InspectArgs),
}

fn run_cmd<T>(func: Result<T, SqlMetaError>) {
    if let Err(e) = func {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn main() {
    logging::init_logger();
    let cli = Cli::parse();

    match cli.command {
        Cmd::Init(args) => run_cmd(handle_init(&args)),
        Cmd::Convert(args) => run_cmd(handle_convert(&args, cli.config_path)),
        Cmd::Inspect(args) => run_cmd(handle_inspect(&args, cli.config_path)),
    }
}

// Copyright (c) 2026, Verge Developers
// Licensed under the MIT License

use clap::{Parser, Subcommand};
use verge_cli::{masks, rename};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    Masks(masks::MasksArgs),
    Rename(rename::RenameArgs),
}

fn main() {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Masks(masks_args)) => masks::masks(masks_args),
        Some(Commands::Rename(rename_args)) => rename::rename(rename_args),
        None => {}
    }
}

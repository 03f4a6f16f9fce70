//! CLI entry point for the macro-cell dungeon generator

use clap::Parser;
use dungeon_cells::io::cli::{Cli, CommandRunner};

fn main() -> dungeon_cells::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let runner = CommandRunner::new(cli);
    let stdout = std::io::stdout();
    runner.run(&mut stdout.lock())
}

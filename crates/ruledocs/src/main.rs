//! ruledocs - Entry Point

use clap::Parser;
use ruledocs::{Cli, run};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(&cli)
}

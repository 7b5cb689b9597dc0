use clap::Parser;

use regrid::cli::{run, Cli};

fn main() -> anyhow::Result<()> {
    run(Cli::parse())
}

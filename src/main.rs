use anyhow::Result;
use clap::Parser;

use razzberry::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}

//! CLI entry point for the frequency-weighted drawing generator

use clap::Parser;
use drawsmith::io::cli::{Cli, CommandRunner};

fn main() -> drawsmith::Result<()> {
    let cli = Cli::parse();
    drawsmith::io::logging::init_logging(cli.verbose, cli.quiet);
    let runner = CommandRunner::new(cli);
    runner.run()
}

//! CLI entry point for simulating and validating slit diffraction patterns

use clap::Parser;
use doubleslit::io::cli::{Cli, init_tracing, run};

fn main() -> doubleslit::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level());
    let stdout = std::io::stdout();
    run(&cli, &mut stdout.lock())
}

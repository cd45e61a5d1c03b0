//! CLI entry point for the falling-letter word grid solver

use clap::Parser;
use wordfall::io::cli::{Cli, SolveSession};

fn main() -> wordfall::Result<()> {
    let cli = Cli::parse();
    let session = SolveSession::new(cli, std::io::stdin().lock(), std::io::stdout().lock());
    session.run()
}

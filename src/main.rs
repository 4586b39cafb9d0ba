//! CLI entry point for the N-Queens strategy comparison

use clap::Parser;
use queenswalk::io::cli::{Cli, SolverSession};

fn main() -> queenswalk::Result<()> {
    let cli = Cli::parse();
    let mut session = SolverSession::new(cli);
    session.run()
}

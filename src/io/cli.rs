//! Command-line interface for the strategy comparison driver

use std::io::{self, Write};

use clap::Parser;

use crate::io::configuration::DEFAULT_SEED;
use crate::io::error::Result;
use crate::io::progress::ProgressManager;
use crate::io::prompt::read_board_size;
use crate::io::report::write_strategy_report;
use crate::search::Strategy;

#[derive(Parser)]
#[command(name = "queenswalk")]
#[command(
    author,
    version,
    about = "Compare six search strategies on the N-Queens puzzle"
)]
/// Command-line arguments for the strategy comparison tool
pub struct Cli {
    /// Board size; prompts on stdin when omitted
    #[arg(value_name = "SIZE")]
    pub size: Option<i64>,

    /// Random seed for the best-first heuristic
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Runs every strategy for one board size and writes the report
///
/// The session owns the process streams: the size comes from the CLI
/// argument or, failing that, the interactive prompt on stdin; the report
/// goes to stdout and progress to stderr.
pub struct SolverSession {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl SolverSession {
    /// Create a new session from parsed CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli
            .should_show_progress()
            .then(|| ProgressManager::new(Strategy::ALL.len()));

        Self {
            cli,
            progress_manager,
        }
    }

    /// Resolve the board size, run all strategies, and write the report
    ///
    /// Strategies run to completion one after another in the fixed
    /// reporting order; each allocates its own frontier.
    ///
    /// # Errors
    ///
    /// Returns an error when the prompt exchange or a report write fails
    pub fn run(&mut self) -> Result<()> {
        let size = self.resolve_size()?;

        let stdout = io::stdout();
        let mut output = stdout.lock();
        for strategy in Strategy::ALL {
            if let Some(ref progress) = self.progress_manager {
                progress.start_strategy(strategy.label());
            }

            let solutions = strategy.solve(size, self.cli.seed);
            write_strategy_report(&mut output, strategy, &solutions)?;

            if let Some(ref progress) = self.progress_manager {
                progress.complete_strategy();
            }
        }
        if let Some(ref progress) = self.progress_manager {
            progress.finish();
        }
        output
            .flush()
            .map_err(|source| crate::io::error::SolverError::Write { source })?;

        Ok(())
    }

    fn resolve_size(&self) -> Result<i64> {
        if let Some(size) = self.cli.size {
            return Ok(size);
        }
        let stdin = io::stdin();
        let stdout = io::stdout();
        read_board_size(&mut stdin.lock(), &mut stdout.lock())
    }
}

//! Command-line interface for solving a puzzle from arguments or interactive prompts

use crate::algorithm::solver::{Puzzle, distinct_sorted};
use crate::analysis::sizes::WordSizes;
use crate::io::configuration::DEFAULT_DICTIONARY_PATH;
use crate::io::error::{Result, invalid_parameter};
use crate::io::progress::ProgressReporter;
use crate::io::prompt::Prompter;
use crate::io::report::{write_grid_banner, write_solutions};
use crate::io::wordlist::load_word_list;
use crate::spatial::grid::LetterGrid;
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wordfall")]
#[command(
    author,
    version,
    about = "Find word sequences in a letter grid where used letters fall away"
)]
/// Command-line arguments for the solver
pub struct Cli {
    /// Grid rows, one argument per row (prompted for when omitted)
    #[arg(value_name = "ROW")]
    pub rows: Vec<String>,

    /// Comma separated word sizes, e.g. 4,5 (prompted for when omitted)
    #[arg(short, long, value_parser = WordSizes::parse)]
    pub sizes: Option<WordSizes>,

    /// Word list with one word per line
    #[arg(short, long, default_value = DEFAULT_DICTIONARY_PATH)]
    pub dictionary: PathBuf,

    /// Stop after this many raw solutions
    #[arg(short, long)]
    pub limit: Option<usize>,

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

/// Runs one solve: gathers input, searches, and prints the result
pub struct SolveSession<R, W> {
    cli: Cli,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> SolveSession<R, W> {
    /// Create a session reading answers from `input` and printing to `output`
    pub const fn new(cli: Cli, input: R, output: W) -> Self {
        Self {
            cli,
            prompter: Prompter::new(input, output),
        }
    }

    /// Gather input, solve, and print the sorted distinct solutions
    ///
    /// # Errors
    ///
    /// Returns an error if the input is invalid, the word list cannot be read,
    /// or the terminal cannot be used
    pub fn run(self) -> Result<()> {
        let Self { cli, mut prompter } = self;

        let sizes = match cli.sizes.clone() {
            Some(sizes) => sizes,
            None => prompter.word_sizes()?,
        };
        let size = sizes.grid_size()?;

        let rows = if cli.rows.is_empty() {
            prompter.grid_rows(size)?
        } else {
            Self::check_rows(&cli.rows, size)?;
            cli.rows.clone()
        };
        let grid = LetterGrid::from_rows(&rows)?;

        let mut dictionary = load_word_list(&cli.dictionary)?;
        dictionary.retain_lengths(&sizes);
        let puzzle = Puzzle::from_parts(grid, dictionary, sizes);

        let (_input, mut output) = prompter.into_inner();
        write_grid_banner(&mut output, puzzle.grid())?;

        let mut reporter = if cli.should_show_progress() {
            ProgressReporter::new()
        } else {
            ProgressReporter::hidden()
        };
        let solutions = {
            let raw = puzzle.solve_with(&mut reporter);
            match cli.limit {
                Some(limit) => distinct_sorted(raw.take(limit)),
                None => distinct_sorted(raw),
            }
        };
        reporter.finish();

        write_solutions(&mut output, &solutions)?;
        output.flush()?;

        if cli.should_show_progress() {
            Self::print_summary(&reporter);
        }

        Ok(())
    }

    // Allow print for the closing summary, kept off stdout so results stay clean
    #[allow(clippy::print_stderr)]
    fn print_summary(reporter: &ProgressReporter) {
        let stats = reporter.stats();
        eprintln!(
            "Searched {} paths, matched {} words, {} raw solutions",
            stats.paths_enumerated, stats.words_matched, stats.solutions_found
        );
    }

    fn check_rows(rows: &[String], size: usize) -> Result<()> {
        if rows.len() != size {
            return Err(invalid_parameter(
                "rows",
                &rows.len(),
                &format!("the word sizes call for {size} rows"),
            ));
        }
        for row in rows {
            let length = row.chars().count();
            if length != size {
                return Err(invalid_parameter(
                    "rows",
                    row,
                    &format!("row has {length} letters, need {size} per row"),
                ));
            }
        }
        Ok(())
    }
}

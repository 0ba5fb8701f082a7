use clap::{ArgAction, Parser, Subcommand};
use env_logger::Env;
use indicatif::ProgressBar;
use std::path::PathBuf;
use std::process;

use pdfsearch::report;
use pdfsearch::{MatchMode, PendingFiles, Searcher, SelectionPolicy};

#[derive(Parser)]
#[command(author, version, about = "Find which pages of which PDF files contain a term")]
struct Cli {
    /// Log more (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search PDF files for a term, case-insensitively
    Search {
        /// Term to look for, interpreted as a regular expression unless --literal is given
        #[arg(short, long)]
        term: String,

        /// Directory whose PDF files are searched (not recursive)
        #[arg(short, long)]
        directory: Option<PathBuf>,

        /// PDF files to search, after those found in --directory
        files: Vec<PathBuf>,

        /// Match the term as plain text
        #[arg(short, long)]
        literal: bool,

        /// Number of files searched in parallel (0 = one per CPU)
        #[arg(short, long, default_value_t = 1)]
        jobs: usize,

        /// Show a progress bar while searching
        #[arg(long)]
        progress: bool,
    },

    /// Print the PDF files a search would look at
    List {
        /// Directory whose PDF files are listed (not recursive)
        #[arg(short, long)]
        directory: Option<PathBuf>,

        /// Explicit PDF files, listed after those found in --directory
        files: Vec<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Search {
            term,
            directory,
            files,
            literal,
            jobs,
            progress,
        } => run_search(&term, directory, files, literal, jobs, progress),
        Commands::List { directory, files } => run_list(directory, files),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();
}

/// Directory picks and explicit files accumulate within one invocation
fn select(directory: Option<PathBuf>, files: Vec<PathBuf>) -> anyhow::Result<PendingFiles> {
    let mut pending = PendingFiles::new(SelectionPolicy::Append);
    if let Some(dir) = directory {
        pending.select_directory(&dir)?;
    }
    pending.select_files(files);
    Ok(pending)
}

fn run_search(
    term: &str,
    directory: Option<PathBuf>,
    files: Vec<PathBuf>,
    literal: bool,
    jobs: usize,
    progress: bool,
) -> anyhow::Result<()> {
    let mut pending = select(directory, files)?;
    let file_list = pending.take();

    let pb = if progress {
        ProgressBar::new(file_list.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    let mode = if literal {
        MatchMode::Literal
    } else {
        MatchMode::Regex
    };

    let outcome = Searcher::new()
        .match_mode(mode)
        .jobs(jobs)
        .progress(pb.clone())
        .search(file_list, term)?;
    pb.finish_and_clear();

    eprint!("{}", report::render_skipped(&outcome.skipped));
    print!("{}", report::render(&outcome.result));
    Ok(())
}

fn run_list(directory: Option<PathBuf>, files: Vec<PathBuf>) -> anyhow::Result<()> {
    let pending = select(directory, files)?;
    for path in pending.files() {
        println!("{}", path.display());
    }
    Ok(())
}

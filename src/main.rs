//! CLI entry point for the grade ledger.
//!
//! Provides subcommands for creating the grade file, recording a student's
//! scores, listing stored grades and running an interactive session.

use anyhow::Result;
use clap::{Parser, Subcommand};
use grade_ledger::input::{DEFAULT_MAX_ATTEMPTS, SubmissionGuard};
use grade_ledger::output::{render_json, render_table};
use grade_ledger::shell::Shell;
use grade_ledger::store::{DEFAULT_FILE, GradeStore};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "grade_ledger")]
#[command(about = "Record student test scores and letter grades in a CSV file", long_about = None)]
struct Cli {
    /// CSV file holding the grades
    #[arg(short, long, env = "GRADES_FILE", default_value = DEFAULT_FILE, global = true)]
    file: PathBuf,

    /// Consecutive invalid submissions allowed before input is refused
    #[arg(long, env = "GRADES_MAX_ATTEMPTS", default_value_t = DEFAULT_MAX_ATTEMPTS, global = true)]
    max_attempts: u32,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the grade file with its header if it does not exist
    Init,
    /// Record one student's scores
    Add {
        /// Student name
        #[arg(short, long)]
        name: String,

        /// Comma-separated scores between 0 and 100, e.g. "90, 85.5, 70"
        #[arg(short, long, allow_hyphen_values = true)]
        scores: String,
    },
    /// Print all stored grades
    View {
        /// Print rows as JSON instead of a table
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Add and view grades interactively
    Shell,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/grade_ledger.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("grade_ledger.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("warn".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            let store = GradeStore::new(&cli.file);
            if store.initialize()? {
                println!("Created {}", cli.file.display());
            } else {
                println!("{} already exists", cli.file.display());
            }
        }
        Commands::Add { name, scores } => {
            let store = GradeStore::open(&cli.file)?;
            let mut guard = SubmissionGuard::new(cli.max_attempts);
            let record = guard.submit(&store, &name, &scores)?;

            println!("Grades for {} added successfully.", record.name);
            info!(name = %record.name, grade = %record.final_grade, "Student added");
        }
        Commands::View { json } => {
            let store = GradeStore::open(&cli.file)?;
            let rows = store.list_all()?;

            if json {
                println!("{}", render_json(&rows)?);
            } else {
                println!("{}", render_table(&rows));
            }
        }
        Commands::Shell => {
            let store = GradeStore::open(&cli.file)?;
            let mut shell = Shell::new(&store, SubmissionGuard::new(cli.max_attempts));

            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut out = std::io::stdout().lock();
            shell.run(&mut input, &mut out)?;
        }
    }

    Ok(())
}

//! Interactive gradebook.
//!
//! Parses command-line options, opens the gradebook and runs the main menu
//! on stdin/stdout until the user exits or input ends.

mod menu;
mod menus;
mod session;
mod terminal;

use std::io::{self, ErrorKind};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use gradebook_core::{Gradebook, GradebookConfig};
use tracing::Level;

use crate::session::Session;
use crate::terminal::StdTerminal;

/// Command-line arguments for the gradebook.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding students.json, labs.json and submissions.json
    #[arg(long, default_value = "./data")]
    data_dir: PathBuf,

    /// Load from and write back to the data directory
    #[arg(long)]
    persist: bool,

    /// Dataset used by "Load sample data"
    #[arg(long, default_value = "data/sample.json")]
    sample: PathBuf,

    /// Average below which a student is failing
    #[arg(long, default_value_t = 5.0)]
    passing_average: f64,

    /// Log level written to stderr
    #[arg(long, default_value = "warn")]
    log_level: Level,

    /// Do not clear the screen between menus
    #[arg(long)]
    no_clear: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(io::stderr)
        .init();

    let config = GradebookConfig {
        data_dir: args.data_dir,
        persist: args.persist,
        passing_average: args.passing_average,
        ..GradebookConfig::default()
    };
    let gradebook = Gradebook::open(config).context("failed to open gradebook")?;
    tracing::info!(
        students = gradebook.student_count(),
        labs = gradebook.lab_count(),
        submissions = gradebook.submission_count(),
        "gradebook opened"
    );

    let mut session = Session::new(gradebook, args.sample);
    let stdin = io::stdin();
    let mut term = StdTerminal::new(stdin.lock(), io::stdout()).with_clear_screen(!args.no_clear);

    match menus::main_menu().run(&mut session, &mut term) {
        Ok(()) => Ok(()),
        Err(err) if is_end_of_input(&err) => {
            tracing::debug!("input closed");
            Ok(())
        }
        Err(err) => Err(err),
    }
}

fn is_end_of_input(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == ErrorKind::UnexpectedEof)
}

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use course_roster::menu::Menu;
use course_roster::{LoadOutcome, Roster, DEFAULT_DATA_FILE};

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Track students and the courses they are enrolled in")]
struct Cli {
    /// JSON file loaded at startup and written on save
    #[arg(long, global = true, env = "ROSTER_DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    data_file: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every student and exit without saving
    List,
}

/// Initialize tracing on stderr; stdout carries the interactive menu.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "course_roster=warn".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut roster = Roster::new();
    if let LoadOutcome::Missing = roster.load(&cli.data_file)? {
        println!("No previous data found.");
    }

    match cli.command {
        Some(Commands::List) => {
            print!("{}", roster);
        }
        None => {
            let stdin = io::stdin();
            let mut menu = Menu::new(roster, cli.data_file, stdin.lock(), io::stdout());
            menu.run()?;
        }
    }

    Ok(())
}

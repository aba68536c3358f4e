use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roster::config::AppConfig;
use roster::menu::Menu;
use roster::models::{Person, Student, Worker};
use roster::render;
use roster::repository::Repository;

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Keep track of students and workers in a local JSON file")]
struct Cli {
    /// Roster file to use instead of the configured one
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive menu (default)
    Menu,
    /// Print every record
    List,
    /// Print records whose first or last name contains QUERY
    Find { query: String },
    /// Add a record without the menu
    #[command(subcommand)]
    Add(AddCommand),
}

#[derive(Subcommand)]
enum AddCommand {
    /// Add a student
    Student {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        /// Grade to record, may be repeated
        #[arg(long = "grade")]
        grades: Vec<f64>,
    },
    /// Add a worker
    Worker {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        /// Total wage for all hours worked
        #[arg(long)]
        wage: f64,
        #[arg(long)]
        hours: i32,
    },
}

/// Logs go to stderr so stdout stays clean for the menu.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "roster=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = AppConfig::load().with_data_file(cli.file);

    let mut repo = Repository::load(&config.data_file).context("Failed to load roster")?;
    tracing::debug!(
        path = %repo.path().display(),
        records = repo.len(),
        "Roster ready"
    );

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let stdin = io::stdin();
            let mut menu = Menu::new(&mut repo, stdin.lock(), io::stdout());
            menu.run()?;
        }
        Commands::List => {
            if repo.is_empty() {
                println!("No users found.");
            } else {
                print!("{}", render::render_all(repo.records()));
            }
        }
        Commands::Find { query } => {
            let matches = repo.find(&query);
            if matches.is_empty() {
                println!("No users found.");
            } else {
                print!("{}", render::render_all(matches));
            }
        }
        Commands::Add(AddCommand::Student {
            first_name,
            last_name,
            grades,
        }) => {
            let person = parse_person(&first_name, &last_name)?;
            if grades.iter().any(|g| !g.is_finite()) {
                bail!("Grades must be finite numbers");
            }
            repo.add(Student::with_grades(person, grades))?;
            println!("Student added successfully!");
        }
        Commands::Add(AddCommand::Worker {
            first_name,
            last_name,
            wage,
            hours,
        }) => {
            let person = parse_person(&first_name, &last_name)?;
            if !wage.is_finite() {
                bail!("Wage must be a finite number");
            }
            repo.add(Worker::new(person, wage, hours))?;
            println!("Worker added successfully!");
        }
    }

    Ok(())
}

fn parse_person(first_name: &str, last_name: &str) -> anyhow::Result<Person> {
    let first_name = first_name.trim();
    let last_name = last_name.trim();
    if first_name.is_empty() {
        bail!("First name cannot be empty.");
    }
    if last_name.is_empty() {
        bail!("Last name cannot be empty.");
    }
    Ok(Person::new(first_name, last_name))
}

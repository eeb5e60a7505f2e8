use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use gator::application::{exit_status, CommandRegistry, Outcome, State, USAGE_EXIT_STATUS};
use gator::domain::entities::Command;
use gator::infrastructure::config::{FileConfig, DEFAULT_CONFIG_FILE};
use gator::infrastructure::database::SqliteRepository;
use gator::infrastructure::fetcher::FeedFetcher;

#[derive(Parser)]
#[command(name = "gator")]
#[command(about = "A command-line RSS feed aggregator", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Command to run followed by its arguments; everything after the
    /// command name is passed through untouched, including `-h`
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    command: Vec<String>,
}

fn main() -> ExitCode {
    // Logs go to stderr so command output stays clean
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let registry = CommandRegistry::with_defaults();

    let Some(command) = Command::from_args(cli.command) else {
        eprintln!("No arguments provided");
        eprintln!("{}", registry.usage());
        return ExitCode::from(USAGE_EXIT_STATUS);
    };

    let config = FileConfig::load_or_default(&cli.config);
    let db_url = config.config().resolved_db_url();
    let timeout = config.config().fetch_timeout();

    let repo = match SqliteRepository::open(&db_url) {
        Ok(repo) => repo,
        Err(e) => {
            tracing::error!("Failed to open database {}: {}", db_url, e);
            eprintln!("error connecting to the db: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let fetcher = match FeedFetcher::new(timeout) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut state = State::new(repo, config, fetcher);

    let result = registry.run(&mut state, &command);
    match &result {
        Ok(Outcome::Done(output)) | Ok(Outcome::Empty(output)) => println!("{}", output),
        Err(e) => {
            if e.is_fatal() {
                tracing::debug!("{} stopped with a fatal outcome", command.name);
            }
            eprintln!("Error: {}", e);
        }
    }

    ExitCode::from(exit_status(&result))
}

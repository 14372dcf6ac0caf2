use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use demoapp::application::errors::AppError;
use demoapp::domain::traits::OutputSink;
use demoapp::infrastructure::adapters::ConsoleSink;
use demoapp::infrastructure::config::Config;

#[derive(Parser)]
#[command(name = "demoapp")]
#[command(about = "Prints a message from each planet", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Layout config file (only read when given)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the planet messages (default)
    Run,
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only the messages
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_messages(cli.config.as_deref()),
        Commands::Version => print_line(&format!("demoapp v{}", env!("CARGO_PKG_VERSION"))),
        Commands::InitConfig => init_config(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_messages(config_path: Option<&Path>) -> Result<(), AppError> {
    let config = demoapp::load_config(config_path)?;
    tracing::info!("Starting demoapp");

    let mut sink = ConsoleSink::stdout();
    demoapp::run(&config, &mut sink)
}

fn init_config() -> Result<(), AppError> {
    let yaml = Config::default().to_yaml()?;
    print_line(yaml.trim_end_matches('\n'))?;
    tracing::info!("Save this to demoapp.yaml and pass it with --config");
    Ok(())
}

/// Write through the console sink so a closed stdout is an error, not a panic
fn print_line(line: &str) -> Result<(), AppError> {
    let mut sink = ConsoleSink::stdout();
    sink.write_line(line)?;
    sink.flush()?;
    Ok(())
}

use clap::Parser;
use tracing_subscriber::EnvFilter;

use solaudit::cli::{self, Cli, Commands};
use solaudit::errors::SolauditError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .init();

    let result = match cli.command {
        Commands::Analyze(args) => cli::analyze::handle_analyze(args).await,
        Commands::Import(args) => cli::import::handle_import(args).await,
        Commands::ExportHtml(args) => cli::export::handle_export_html(args).await,
        Commands::Render(args) => cli::render::handle_render(args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let exit_code = match &e {
            SolauditError::Config(_) => 2,
            SolauditError::UnsupportedInput(_) => 3,
            SolauditError::Validation(_) => 4,
            SolauditError::Transport(_) => 5,
            _ => 1,
        };
        std::process::exit(exit_code);
    }
}

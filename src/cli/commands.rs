use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "solaudit", version, about = "Client for a Solidity smart-contract security analyzer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a Solidity source file on the remote analyzer
    Analyze(AnalyzeArgs),
    /// Validate and re-import a previously exported JSON report
    Import(ImportArgs),
    /// Analyze a source file and save the server-rendered HTML report
    ExportHtml(AnalyzeArgs),
    /// Render an exported JSON report to HTML locally, without a server
    Render(RenderArgs),
}

#[derive(Args, Clone)]
pub struct AnalyzeArgs {
    /// Solidity source file to analyze
    pub file: String,

    /// Write the result to this path (JSON for analyze, HTML for
    /// export-html) instead of only printing the summary
    #[arg(short, long)]
    pub output: Option<String>,

    /// Analyzer service base URL
    #[arg(short, long)]
    pub server: Option<String>,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,
}

#[derive(Args, Clone)]
pub struct ImportArgs {
    /// Previously exported JSON report
    pub file: String,

    /// Analyzer service base URL
    #[arg(short, long)]
    pub server: Option<String>,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,
}

#[derive(Args, Clone)]
pub struct RenderArgs {
    /// Previously exported JSON report
    pub file: String,

    /// Output HTML path
    #[arg(short, long, default_value = "report.html")]
    pub output: String,
}

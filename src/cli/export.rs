use std::path::Path;

use tracing::info;

use crate::cli::commands::AnalyzeArgs;
use crate::cli::resolve_config;
use crate::client::AnalyzerClient;
use crate::errors::SolauditError;

pub async fn handle_export_html(args: AnalyzeArgs) -> Result<(), SolauditError> {
    let config = resolve_config(args.config.as_deref(), args.server, args.timeout).await?;
    let client = AnalyzerClient::new(&config)?;

    let html = client.export_html(Path::new(&args.file)).await?;

    let output = args.output.as_deref().unwrap_or("report.html");
    tokio::fs::write(output, html).await?;
    info!(path = %output, "HTML report exported");
    println!("HTML report written to {}", output);

    Ok(())
}

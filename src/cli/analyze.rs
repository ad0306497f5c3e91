use std::path::Path;

use tracing::info;

use crate::cli::commands::AnalyzeArgs;
use crate::cli::output::print_report_summary;
use crate::cli::resolve_config;
use crate::client::AnalyzerClient;
use crate::errors::SolauditError;
use crate::reporting::serialize_report;

pub async fn handle_analyze(args: AnalyzeArgs) -> Result<(), SolauditError> {
    let config = resolve_config(args.config.as_deref(), args.server, args.timeout).await?;
    let client = AnalyzerClient::new(&config)?;

    let report = client.analyze(Path::new(&args.file)).await?;
    print_report_summary(&report);

    if let Some(output) = &args.output {
        let bytes = serialize_report(&report)?;
        tokio::fs::write(output, bytes).await?;
        info!(path = %output, "Report exported");
        println!("\nReport written to {}", output);
    }

    Ok(())
}

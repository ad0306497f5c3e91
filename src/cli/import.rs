use std::path::Path;

use crate::cli::commands::ImportArgs;
use crate::cli::output::print_report_summary;
use crate::cli::resolve_config;
use crate::client::AnalyzerClient;
use crate::errors::SolauditError;

pub async fn handle_import(args: ImportArgs) -> Result<(), SolauditError> {
    let config = resolve_config(args.config.as_deref(), args.server, args.timeout).await?;
    let client = AnalyzerClient::new(&config)?;

    let report = client.import_report(Path::new(&args.file)).await?;
    print_report_summary(&report);

    Ok(())
}

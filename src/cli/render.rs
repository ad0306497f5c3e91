use tracing::info;

use crate::cli::commands::RenderArgs;
use crate::errors::SolauditError;
use crate::reporting::{deserialize_report, render_html};

/// Offline path: exported JSON in, HTML out, no analyzer round-trip.
pub async fn handle_render(args: RenderArgs) -> Result<(), SolauditError> {
    let bytes = tokio::fs::read(&args.file).await?;
    let report = deserialize_report(&bytes)?;

    let html = render_html(&report);
    tokio::fs::write(&args.output, html).await?;
    info!(path = %args.output, "HTML report rendered");
    println!("HTML report written to {}", args.output);

    Ok(())
}

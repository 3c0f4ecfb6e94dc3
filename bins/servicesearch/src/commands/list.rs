//! List command

use crate::output;
use crate::OutputFormat;
use anyhow::Result;
use servicesearch_core::service::SearchService;
use servicesearch_search::Document;

/// Print every document in the catalog
pub fn run(service: &SearchService, documents: &[Document], format: OutputFormat) -> Result<()> {
    let listing = service.list(documents);

    match format {
        OutputFormat::Json => output::print_json(&listing)?,
        OutputFormat::Text => output::print_listing(&listing),
    }

    Ok(())
}

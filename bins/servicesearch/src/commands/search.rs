//! Search command

use crate::output;
use crate::OutputFormat;
use anyhow::Result;
use servicesearch_core::service::SearchService;
use servicesearch_core::validation::SearchRequest;
use servicesearch_geo::GeoPoint;
use servicesearch_search::{Document, Query};

/// Build the request from CLI arguments and validate it
///
/// The origin is present only when both coordinates are given.
pub fn validate(
    service: &SearchService,
    name: Option<String>,
    lat: Option<f64>,
    lng: Option<f64>,
) -> Result<Query> {
    let request = SearchRequest {
        service_name: name,
        geolocation: lat.zip(lng).map(|(lat, lng)| GeoPoint::new(lat, lng)),
    };

    Ok(service.validate(&request)?)
}

/// Rank a validated query and print
pub fn run(
    service: &SearchService,
    documents: &[Document],
    query: &Query,
    format: OutputFormat,
) -> Result<()> {
    let response = service.search_query(documents, query);

    match format {
        OutputFormat::Json => output::print_json(&response)?,
        OutputFormat::Text => output::print_ranked(&response, &query.term, service.config().sort),
    }

    Ok(())
}

//! Terminal output

use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use servicesearch_core::service::CatalogListing;
use servicesearch_core::Error;
use servicesearch_search::{RankedResponse, SortOrder};

/// Pretty-print any serializable value on stdout
pub fn print_json<T: Serialize>(value: &T) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Error report as JSON on stderr
pub fn print_error_report(err: &Error) {
    match serde_json::to_string_pretty(&err.to_report()) {
        Ok(json) => eprintln!("{json}"),
        Err(_) => eprintln!("{err}"),
    }
}

fn header(message: &str) {
    println!();
    println!("{}", message.if_supports_color(Stream::Stdout, |t| t.bold()));
    println!("{}", "─".repeat(message.chars().count()));
}

/// Ranked results as a table
pub fn print_ranked(response: &RankedResponse, term: &str, sort: SortOrder) {
    header(&format!("Results for \"{term}\""));
    println!(
        "{} of {} ({} order)",
        format_count(response.total_hits, "hit", "hits")
            .if_supports_color(Stream::Stdout, |t| t.bold()),
        format_count(response.total_documents, "document", "documents"),
        sort
    );

    if response.results.is_empty() {
        println!(
            "{}",
            "No matching services".if_supports_color(Stream::Stdout, |t| t.dimmed())
        );
        return;
    }

    println!();
    for result in &response.results {
        println!(
            "  {:>6}  {:<32}  {:>10}  {}",
            format!("#{}", result.id),
            result.name,
            format!("{:.2} km", result.distance_km),
            format!("score {:.3}", result.similarity)
                .if_supports_color(Stream::Stdout, |t| t.green())
        );
    }
}

/// The whole catalog as a table
pub fn print_listing(listing: &CatalogListing) {
    header("Catalog");
    println!(
        "{}",
        format_count(listing.total_documents, "document", "documents")
            .if_supports_color(Stream::Stdout, |t| t.bold())
    );

    if listing.documents.is_empty() {
        return;
    }

    println!();
    for doc in &listing.documents {
        println!(
            "  {:>6}  {:<32}  {:>9.4}, {:>9.4}",
            format!("#{}", doc.id),
            doc.name,
            doc.position.latitude,
            doc.position.longitude
        );
    }
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count_singular() {
        assert_eq!(format_count(1, "hit", "hits"), "1 hit");
    }

    #[test]
    fn test_format_count_plural() {
        assert_eq!(format_count(0, "hit", "hits"), "0 hits");
        assert_eq!(format_count(5, "document", "documents"), "5 documents");
    }
}

//! servicesearch: rank a geolocated service catalog by name and distance.

use clap::{Parser, Subcommand, ValueEnum};
use owo_colors::{OwoColorize, Stream};
use servicesearch_catalog::{CatalogClient, CatalogConfig};
use servicesearch_core::config::Config;
use servicesearch_core::error::exit_codes;
use servicesearch_core::service::SearchService;
use servicesearch_search::{Document, SortOrder};
use servicesearch_telemetry::{TelemetryConfig, Timer};
use std::process::ExitCode;

mod commands;
mod output;

/// Search a geolocated service catalog by name and distance
#[derive(Parser)]
#[command(name = "servicesearch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file (defaults to .servicesearch.toml when present)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Catalog URL or JSON file, overriding the configuration
    #[arg(short, long, global = true)]
    source: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find services whose name contains a term, with distance from a point
    Search {
        /// Text to look for in service names (case-insensitive)
        #[arg(short, long)]
        name: Option<String>,

        /// Latitude of the search origin
        #[arg(long, allow_negative_numbers = true)]
        lat: Option<f64>,

        /// Longitude of the search origin
        #[arg(long, allow_negative_numbers = true)]
        lng: Option<f64>,

        /// Result ordering: input, score or distance
        #[arg(long)]
        sort: Option<SortOrder>,
    },

    /// Print the whole catalog
    List,
}

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Text,
    /// The JSON wire shape
    Json,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let format = cli.format;

    if cli.no_color {
        owo_colors::set_override(false);
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let core_error = e.downcast_ref::<servicesearch_core::Error>();
            match (format, core_error) {
                (OutputFormat::Json, Some(err)) => output::print_error_report(err),
                _ => eprintln!(
                    "{} {}",
                    "Error:".if_supports_color(Stream::Stderr, |t| t.red()),
                    e
                ),
            }
            let code = core_error.map_or(exit_codes::FAILURE, |err| err.code.exit_code());
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(source) = cli.source {
        config.schema.catalog.source = source;
        config.validate()?;
    }

    let level = if cli.verbose {
        "debug".to_string()
    } else {
        config.schema.logging.level.clone()
    };
    servicesearch_telemetry::init_with_config(
        TelemetryConfig::with_level(level).json(config.schema.logging.json),
    )?;

    tracing::debug!(
        config = config.path.as_deref().unwrap_or("<defaults>"),
        source = %config.schema.catalog.source,
        "Configuration resolved"
    );

    let client = CatalogClient::with_config(CatalogConfig::from_settings(&config.schema.catalog))
        .map_err(servicesearch_core::Error::from)?;

    match cli.command {
        Commands::Search { name, lat, lng, sort } => {
            let mut settings = config.schema.search.clone();
            if let Some(sort) = sort {
                settings.sort = sort;
            }
            let service = SearchService::new(settings);
            // Client errors are reported before any fetch
            let query = commands::search::validate(&service, name, lat, lng)?;
            let documents = load_catalog(&client).await;
            commands::search::run(&service, &documents, &query, cli.format)
        }
        Commands::List => {
            let service = SearchService::new(config.schema.search.clone());
            let documents = load_catalog(&client).await;
            commands::list::run(&service, &documents, cli.format)
        }
    }
}

async fn load_catalog(client: &CatalogClient) -> Vec<Document> {
    let timer = Timer::start("catalog load");
    let documents = client.load().await;
    timer.stop();
    documents
}

//! # FBI Most Wanted Example Runner
//!
//! Runs example queries against the FBI Most Wanted listing API and prints
//! the results. Without a subcommand all four examples run in order with a
//! pause between them, to stay polite with the public endpoint.
//!
//! Configuration precedence: built-in defaults, then the JSON file given by
//! `--config`, then `--base-url`. A `.env` file is loaded before argument
//! parsing so every `env` fallback can come from it.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lib_wanted::loggers::{setup_logging, LoggingOptions};
use lib_wanted::{ApiCallFbi, ClientConfig, SearchCriteria};
use tracing::info;

mod demos;

#[derive(Parser, Debug)]
#[command(name = "wanted", version, about = "Query the FBI Most Wanted listing API")]
struct Args {
    /// Listing endpoint, overriding the config file and the default.
    #[arg(long, env = "WANTED_BASE_URL")]
    base_url: Option<String>,

    /// JSON client configuration (camelCase keys, all optional).
    #[arg(long, env = "WANTED_CONFIG")]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, env = "WANTED_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Directory for rotated JSON log files. Console only when unset.
    #[arg(long, env = "WANTED_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Seconds to pause between examples when running all of them.
    #[arg(long, default_value_t = 2)]
    pause_secs: u64,

    #[command(subcommand)]
    example: Option<Example>,
}

#[derive(Subcommand, Debug, Clone)]
enum Example {
    /// Unfiltered listing: total and first title.
    Basic,
    /// Listing restricted to one field office.
    FieldOffice {
        #[arg(default_value = "miami")]
        office: String,
    },
    /// A specific result page.
    Paginated {
        #[arg(default_value_t = 2)]
        page: u32,
    },
    /// Search by crime type, nationality and age range.
    Search {
        #[arg(long, default_value = "Violent Crime")]
        crime_type: String,
        #[arg(long, default_value = "American")]
        nationality: String,
        #[arg(long, default_value_t = 25)]
        age_min: u32,
        #[arg(long, default_value_t = 40)]
        age_max: u32,
    },
}

impl Example {
    fn heading(&self) -> String {
        match self {
            Example::Basic => "Basic Example".to_string(),
            Example::FieldOffice { office } => {
                format!("Search by Field Office ({})", demos::capitalize(office))
            }
            Example::Paginated { page } => format!("Paginated Example (Page {page})"),
            Example::Search { .. } => "Custom Search Example".to_string(),
        }
    }

    async fn run(&self, api: &ApiCallFbi) {
        match self {
            Example::Basic => demos::basic_example(api).await,
            Example::FieldOffice { office } => demos::field_office_example(api, office).await,
            Example::Paginated { page } => demos::paginated_example(api, *page).await,
            Example::Search {
                crime_type,
                nationality,
                age_min,
                age_max,
            } => {
                let criteria = SearchCriteria {
                    crime_type: Some(crime_type.clone()),
                    nationality: Some(nationality.clone()),
                    age_min: Some(*age_min),
                    age_max: Some(*age_max),
                };
                demos::search_example(api, &criteria).await
            }
        }
    }
}

fn default_sequence() -> Vec<Example> {
    vec![
        Example::Basic,
        Example::FieldOffice {
            office: "miami".to_string(),
        },
        Example::Paginated { page: 2 },
        Example::Search {
            crime_type: "Violent Crime".to_string(),
            nationality: "American".to_string(),
            age_min: 25,
            age_max: 40,
        },
    ]
}

fn load_client_config(args: &Args) -> Result<ClientConfig> {
    let mut config = match &args.config {
        Some(path) => ClientConfig::from_json_file(path)
            .with_context(|| format!("Failed to load client config from {}", path.display()))?,
        None => ClientConfig::default(),
    };
    if let Some(url) = &args.base_url {
        config.base_url = url.clone();
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let _guard = setup_logging(&LoggingOptions {
        level: args.log_level.clone(),
        log_dir: args.log_dir.clone(),
        file_prefix: "wanted".to_string(),
    })
    .context("Failed to initialize logging")?;

    let config = load_client_config(&args)?;
    let api = ApiCallFbi::with_config(&config).context("Failed to build the API client")?;
    info!(base_url = api.base_url(), "Client ready");

    let examples = match &args.example {
        Some(example) => vec![example.clone()],
        None => default_sequence(),
    };

    for (index, example) in examples.iter().enumerate() {
        if index > 0 {
            tokio::time::sleep(Duration::from_secs(args.pause_secs)).await;
            println!();
        }
        println!("=== {} ===", example.heading());
        example.run(&api).await;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn subcommand_defaults_match_reference_examples() {
        let args = Args::try_parse_from(["wanted", "search"]).unwrap();
        match args.example {
            Some(Example::Search {
                crime_type,
                nationality,
                age_min,
                age_max,
            }) => {
                assert_eq!(crime_type, "Violent Crime");
                assert_eq!(nationality, "American");
                assert_eq!((age_min, age_max), (25, 40));
            }
            other => panic!("unexpected example: {other:?}"),
        }
    }

    #[test]
    fn base_url_flag_overrides_default_config() {
        let args = Args::try_parse_from(["wanted", "--base-url", "http://localhost:9999/list", "basic"]).unwrap();
        let config = load_client_config(&args).unwrap();
        assert_eq!(config.base_url, "http://localhost:9999/list");
        assert_eq!(config.max_retries, 3);
    }

    #[test]
    fn field_office_heading_capitalizes_the_office() {
        let args = Args::try_parse_from(["wanted", "field-office", "newyork"]).unwrap();
        let example = args.example.unwrap();
        assert_eq!(example.heading(), "Search by Field Office (Newyork)");
    }

    #[test]
    fn default_sequence_runs_all_four_examples() {
        let headings: Vec<String> = default_sequence().iter().map(Example::heading).collect();
        assert_eq!(
            headings,
            vec![
                "Basic Example",
                "Search by Field Office (Miami)",
                "Paginated Example (Page 2)",
                "Custom Search Example",
            ]
        );
    }
}

//! archive-router CLI
//!
//! Resolves paths against the archive's route tables.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

use archive_router::{PathParams, RouteConfig, RouteTable, Variant, View};

/// Route table resolver for the archive front end.
#[derive(Parser)]
#[command(name = "archive-router")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Built-in route configuration to use.
    #[arg(long, env = "ARCHIVE_ROUTER_VARIANT", default_value_t = Variant::Full)]
    variant: Variant,

    /// JSON route configuration file (overrides --variant).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve one or more paths.
    Resolve {
        /// Paths or locations (query strings and fragments are ignored).
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// List the routes of the table in match order.
    Routes {
        /// Print the table as a JSON route configuration.
        #[arg(long)]
        json: bool,
    },

    /// Generate the URL of a named route.
    Url {
        /// Route name.
        name: String,

        /// Parameters as KEY=VALUE.
        #[arg(value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
}

fn parse_param(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{s}`"))?;
    Ok((key.to_string(), value.to_string()))
}

fn load_table(cli: &Cli) -> anyhow::Result<RouteTable<View>> {
    let table = if let Some(path) = &cli.config {
        RouteConfig::load(path)
            .and_then(RouteConfig::into_table)
            .with_context(|| format!("loading routes from {}", path.display()))?
    } else {
        cli.variant
            .table()
            .with_context(|| format!("building `{}` routes", cli.variant))?
    };
    debug!(routes = table.len(), "route table ready");
    Ok(table)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let table = load_table(&cli)?;

    match cli.command {
        Commands::Resolve { paths } => {
            for path in &paths {
                match table.resolve_location(path) {
                    Some(m) => println!(
                        "{path} -> {} {}",
                        m.view,
                        serde_json::to_string(&m.params)?
                    ),
                    None => println!("{path} -> not found"),
                }
            }
        }

        Commands::Routes { json } => {
            if json {
                let config = RouteConfig::from(&table);
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                print!("{table}");
            }
        }

        Commands::Url { name, params } => {
            let params: PathParams = params.into_iter().collect();
            let url = table.url_for(&name, &params)?;
            info!(route = %name, "generated URL");
            println!("{url}");
        }
    }

    Ok(())
}

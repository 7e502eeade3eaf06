use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use map_harness::MapHarness;
use routefinder::config::{self, Config};
use routefinder::render;
use std::process::ExitCode;
use store::{RouteMap, SearchStrategy};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "routefinder")]
#[command(about = "Find connecting flights on an airline route map", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Route map URL or file path
    #[arg(long, global = true)]
    feed: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// List every served city (default)
    List,

    /// Find a connecting route between two airports
    Route {
        from: String,
        to: String,

        /// Search for the fewest hops instead of the first route found
        #[arg(long)]
        shortest: bool,
    },

    Stats,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config::log_level(cli.verbose)));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::resolve(cli.feed.as_deref(), cli.timeout)?;
    info!("Using route map feed {}", config.feed);

    let harness = MapHarness::new(config.timeout)?;
    let records = harness
        .load(&config.feed)
        .await
        .with_context(|| format!("Failed to load route map from {}", config.feed))?;

    let map = RouteMap::build(&records);

    match cli.command.unwrap_or(Commands::List) {
        Commands::List => {
            if cli.json {
                println!("{}", render::city_list_json(&map)?);
            } else if !map.is_empty() {
                println!("{}", render::city_list(&map));
            }
        }

        Commands::Stats => {
            let stats = map.stats();
            if cli.json {
                println!("{}", render::stats_json(&stats)?);
            } else {
                println!("{}", render::stats(&stats));
            }
        }

        Commands::Route { from, to, shortest } => {
            let strategy = if shortest {
                SearchStrategy::ShortestHops
            } else {
                SearchStrategy::Backtracking
            };

            let path = map.find_path_with(&from, &to, strategy);

            if cli.json {
                println!(
                    "{}",
                    render::route_json(&map, &from, &to, strategy, path.as_deref())?
                );
            } else {
                if let Some(notice) = render::unserved_notice(map.unserved()) {
                    println!("{}\n", notice);
                }
                match &path {
                    Some(path) => println!("{}", render::route(&map, path)),
                    None => println!("{}", render::route_not_found(&map, &from, &to)),
                }
            }

            if path.is_none() {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

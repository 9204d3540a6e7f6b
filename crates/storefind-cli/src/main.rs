mod search;
mod seed;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "storefind-cli")]
#[command(about = "Storefind command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search for grocery stores near a postal code and recommend three.
    Search {
        /// Postal code (or free-form location containing one).
        #[arg(long)]
        location: String,
        /// Grocery item to shop for.
        #[arg(long)]
        item: String,
        /// Emit the raw search result as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Estimate how likely a store is to carry an item.
    Availability {
        #[arg(long)]
        store: String,
        #[arg(long)]
        item: String,
        /// Emit the estimate as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Run migrations and seed the store catalog.
    Seed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Search {
            location,
            item,
            json,
        } => search::run_search(&location, &item, json).await,
        Commands::Availability { store, item, json } => {
            search::run_availability(&store, &item, json)
        }
        Commands::Seed => seed::run_seed().await,
    }
}

use anyhow::{Context, Result};
use car_search_api::config::{database_url_from_env, init_tracing, LlmConfig, LogSink};
use car_search_api::database::{Database, DEFAULT_SEED_COUNT};
use car_search_api::parser::{OpenAiClient, QueryParser};
use car_search_api::service::SearchService;
use car_search_api::tools::ToolServer;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "car-search-server")]
#[command(about = "Natural-language car search over a SQLite catalog")]
struct Cli {
    /// Append logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the search_cars tool over stdio
    Serve,
    /// Replace the catalog with random cars
    Seed {
        #[arg(long, default_value_t = DEFAULT_SEED_COUNT)]
        count: usize,
    },
    /// Run a single search and print the result
    Search {
        /// Free-text query, e.g. "red Honda under 50,000 km"
        query: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load .env file if it exists
    dotenv::dotenv().ok();

    let sink = match cli.log_file {
        Some(path) => LogSink::File(path),
        None => LogSink::Stderr,
    };
    init_tracing(&sink)?;

    match cli.command {
        Commands::Serve => serve_command().await,
        Commands::Seed { count } => seed_command(count).await,
        Commands::Search { query } => search_command(&query).await,
    }
}

async fn open_database() -> Result<Database> {
    let database_url = database_url_from_env();
    let database = Database::new(&database_url)
        .await
        .with_context(|| format!("Database initialization failed for {}", database_url))?;
    tracing::info!("Database initialized at {}", database_url);
    Ok(database)
}

async fn setup_service() -> Result<SearchService> {
    let llm_config = LlmConfig::from_env()?;
    tracing::info!(
        "Using model {} at {}",
        llm_config.model,
        llm_config.api_url
    );
    let llm = Arc::new(OpenAiClient::from_config(&llm_config));
    let database = Arc::new(open_database().await?);
    Ok(SearchService::new(QueryParser::new(llm), database))
}

async fn serve_command() -> Result<()> {
    let service = setup_service().await?;
    ToolServer::new(Arc::new(service)).run_stdio().await
}

async fn seed_command(count: usize) -> Result<()> {
    let database = open_database().await?;
    let mut rng = rand::rng();
    database.seed_random(count, &mut rng).await?;
    database.close().await;
    Ok(())
}

async fn search_command(query: &str) -> Result<()> {
    let service = setup_service().await?;
    println!("{}", service.search(query).await);
    Ok(())
}

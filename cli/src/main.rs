mod argparse;

use argparse::parse_args;
use car_agent::utils::{self, prompts};
use car_agent::{ClientError, ToolSession};
use std::io::IsTerminal;

#[tokio::main]
async fn main() {
    let cli = parse_args();
    utils::init_logger(cli.verbose);

    prompts::print_banner();
    let user_query = prompts::prompt_query(&cli.query, std::io::stdin().is_terminal());
    if user_query.is_empty() {
        println!("{}", prompts::EMPTY_QUERY_MESSAGE);
        return;
    }
    println!("\nAnalyzing your request...\n");

    match run_search(&cli.server, &cli.server_args, &user_query).await {
        Ok(text) => {
            println!("Results:\n");
            println!("{}", text);
        }
        Err(e) => {
            log::error!("Error connecting to server: {}", e);
            println!("Error connecting to server: {}", e);
        }
    }
}

async fn run_search(
    program: &str,
    args: &[String],
    user_query: &str,
) -> Result<String, ClientError> {
    let session = ToolSession::spawn(program, args).await?;
    println!("Searching for cars that match your preferences...\n");
    let result = session.search_cars(user_query).await;
    session.shutdown().await;
    result
}

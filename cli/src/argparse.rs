use clap::Parser;

pub const DEFAULT_SERVER: &str = "car-search-server";

#[derive(Parser, Debug)]
#[command(
    name = "car-agent",
    about = "Ask for a car in plain words and search the catalog",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Server executable to spawn
    #[arg(long, default_value = DEFAULT_SERVER)]
    pub server: String,

    /// Arguments passed to the server executable
    #[arg(
        long = "server-arg",
        allow_hyphen_values = true,
        default_values_t = [String::from("serve")]
    )]
    pub server_args: Vec<String>,

    /// Query to run instead of prompting for one
    pub query: Option<String>,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

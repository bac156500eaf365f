/// Results are printed on stdout, so logs go to stderr and stay quiet unless asked for.
/// `RUST_LOG` overrides the default filter.
pub fn init_logger(verbose: bool) {
    let filters = std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter(verbose).to_string());
    pretty_env_logger::formatted_builder()
        .parse_filters(&filters)
        .init();
}

fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "warn,car_agent=debug"
    } else {
        "error"
    }
}

mod logger;
pub mod prompts;

pub use logger::init_logger;

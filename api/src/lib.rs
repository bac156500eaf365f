//! Natural-language car search: free text in, filtered catalog rows out.

pub mod config;
pub mod database;
pub mod error;
pub mod format;
pub mod parser;
pub mod search;
pub mod service;
pub mod tools;

pub use database::{CarCatalog, CarRecord, Database};
pub use error::SearchError;
pub use parser::{ChatCompletion, OpenAiClient, QueryParser};
pub use search::FilterRequest;
pub use service::SearchService;

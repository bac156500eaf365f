//! Tool protocol surface: the car search as an MCP tool on stdio.

mod server;

pub use server::{tool_result_text, ToolServer, SEARCH_CARS_TOOL, SERVER_NAME};

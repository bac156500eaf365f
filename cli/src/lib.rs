//! Client side of the car search tool: spawns the server and calls it over MCP.

pub mod session;
pub mod utils;

pub use session::ToolSession;

use rmcp::service::ServiceError;

/// Failures while talking to the tool server
#[derive(Debug)]
pub enum ClientError {
    Spawn {
        program: String,
        source: std::io::Error,
    },
    Handshake(std::io::Error),
    Service(ServiceError),
    EmptyResult,
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Spawn { program, source } => {
                write!(
                    f,
                    "Failed to start '{program}': {source}. Use --server to point at the car-search-server binary."
                )
            }
            ClientError::Handshake(e) => write!(f, "MCP handshake failed: {e}"),
            ClientError::Service(e) => write!(f, "Tool call failed: {e}"),
            ClientError::EmptyResult => write!(f, "Tool result contained no text"),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Spawn { source, .. } => Some(source),
            ClientError::Handshake(e) => Some(e),
            ClientError::Service(e) => Some(e),
            ClientError::EmptyResult => None,
        }
    }
}

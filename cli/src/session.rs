use car_search_api::tools::{tool_result_text, SEARCH_CARS_TOOL};
use rmcp::model::{
    CallToolRequestParam, ClientCapabilities, ClientInfo, Implementation, JsonObject,
};
use rmcp::service::RunningService;
use rmcp::transport::TokioChildProcess;
use rmcp::{RoleClient, ServiceExt};
use serde_json::Value;
use tokio::process::Command;

use crate::ClientError;

const CLIENT_NAME: &str = "car-agent";

pub fn client_info() -> ClientInfo {
    ClientInfo {
        protocol_version: Default::default(),
        capabilities: ClientCapabilities::default(),
        client_info: Implementation {
            name: CLIENT_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    }
}

/// An initialized MCP client session with a tool server
pub struct ToolSession {
    service: RunningService<RoleClient, ClientInfo>,
}

impl ToolSession {
    pub fn new(service: RunningService<RoleClient, ClientInfo>) -> Self {
        log::info!("Connected to server: {:?}", service.peer_info());
        Self { service }
    }

    /// Starts `program` with piped stdio and performs the MCP handshake.
    /// The child is killed if the session is dropped without `shutdown`.
    pub async fn spawn(program: &str, args: &[String]) -> Result<Self, ClientError> {
        log::debug!("Spawning {} {:?}", program, args);
        let mut cmd = Command::new(program);
        cmd.args(args);
        cmd.kill_on_drop(true);

        let transport = TokioChildProcess::new(&mut cmd).map_err(|source| ClientError::Spawn {
            program: program.to_string(),
            source,
        })?;
        let service = client_info()
            .serve(transport)
            .await
            .map_err(ClientError::Handshake)?;
        Ok(Self::new(service))
    }

    pub async fn call_tool(&self, name: &str, arguments: JsonObject) -> Result<String, ClientError> {
        let result = self
            .service
            .call_tool(CallToolRequestParam {
                name: name.to_string().into(),
                arguments: Some(arguments),
            })
            .await
            .map_err(ClientError::Service)?;
        tool_result_text(&result)
            .map(str::to_string)
            .ok_or(ClientError::EmptyResult)
    }

    pub async fn search_cars(&self, user_query: &str) -> Result<String, ClientError> {
        let mut arguments = JsonObject::new();
        arguments.insert(
            "user_query".to_string(),
            Value::String(user_query.to_string()),
        );
        self.call_tool(SEARCH_CARS_TOOL, arguments).await
    }

    /// Closes the session; the server sees EOF on stdin and exits
    pub async fn shutdown(self) {
        match self.service.cancel().await {
            Ok(reason) => log::debug!("Session closed: {:?}", reason),
            Err(e) => log::error!("error cancelling stdio service: {:?}", e),
        }
    }
}

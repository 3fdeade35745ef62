//! Line-delimited JSON-RPC 2.0 dispatch over stdio.
//!
//! One request per line in, one response per line out, in the same order.
//! Notifications get no response. Tool execution failures are returned
//! in-band as `CallToolResult { isError: true }` so the calling agent can
//! read them as text; JSON-RPC errors are reserved for protocol-level
//! problems such as unparseable lines or unknown methods.

use std::sync::Arc;

use serde_json::{json, Value};
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

use cargo_mcp_core::{
    CallToolParams, CallToolResult, Implementation, InitializeParams, InitializeResult,
    JsonRpcError, JsonRpcNotification, JsonRpcRequest, JsonRpcResponse, ListToolsResult,
    ServerCapabilities, ToolRegistry, ToolsCapability, PROTOCOL_VERSION,
};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub struct McpServer {
    registry: Arc<ToolRegistry>,
    server_name: String,
    server_version: String,
}

impl McpServer {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self {
            registry,
            server_name: env!("CARGO_PKG_NAME").to_string(),
            server_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Serve requests until the reader reaches EOF.
    ///
    /// Dispatch is sequential: a `tools/call` that spawns Cargo suspends the
    /// loop until the subprocess exits, so at most one child process is
    /// alive at a time.
    pub async fn serve<R, W>(&self, reader: R, mut writer: W) -> Result<(), ServerError>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = BufReader::new(reader).lines();

        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(response) = self.handle_line(line).await {
                let serialized = serde_json::to_string(&response)?;
                writer.write_all(serialized.as_bytes()).await?;
                writer.write_all(b"\n").await?;
                writer.flush().await?;
            }
        }

        log::info!("stdin closed, shutting down");
        Ok(())
    }

    /// Handle one wire line. Returns `None` for notifications.
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        // A request carries an id, a notification does not; try in that order.
        if let Ok(request) = serde_json::from_str::<JsonRpcRequest>(line) {
            return Some(self.handle_request(request).await);
        }

        if let Ok(notification) = serde_json::from_str::<JsonRpcNotification>(line) {
            log::debug!("ignoring notification: {}", notification.method);
            return None;
        }

        let (code, message) = if serde_json::from_str::<Value>(line).is_ok() {
            (JsonRpcError::INVALID_REQUEST, "Invalid request")
        } else {
            (JsonRpcError::PARSE_ERROR, "Parse error")
        };
        log::warn!("rejecting unparseable message");
        Some(JsonRpcResponse::failure(
            Value::Null,
            JsonRpcError::new(code, message),
        ))
    }

    async fn handle_request(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        let id = request.id.clone();
        log::debug!("request {}: {}", id, request.method);

        match request.method.as_str() {
            "initialize" => self.handle_initialize(id, request.params),
            "ping" => JsonRpcResponse::success(id, json!({})),
            "tools/list" => self.handle_list_tools(id),
            "tools/call" => self.handle_call_tool(id, request.params).await,
            other => JsonRpcResponse::failure(
                id,
                JsonRpcError::new(
                    JsonRpcError::METHOD_NOT_FOUND,
                    format!("Method not found: {}", other),
                ),
            ),
        }
    }

    fn handle_initialize(&self, id: Value, params: Option<Value>) -> JsonRpcResponse {
        let params: InitializeParams = params
            .and_then(|value| serde_json::from_value(value).ok())
            .unwrap_or_default();

        if let Some(client) = &params.client_info {
            log::info!(
                "initialize from {} {} (protocol {})",
                client.name,
                client.version,
                params.protocol_version
            );
        }

        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: false,
                }),
            },
            server_info: Implementation {
                name: self.server_name.clone(),
                version: self.server_version.clone(),
            },
            instructions: Some(
                "Drive Cargo against the server's Rust project: build, run, test, lint, \
                 format, and manage dependencies. A nonzero exit code in a result means \
                 the cargo invocation itself failed; read the captured output for details."
                    .to_string(),
            ),
        };

        JsonRpcResponse::success(id, serde_json::to_value(result).unwrap_or(Value::Null))
    }

    fn handle_list_tools(&self, id: Value) -> JsonRpcResponse {
        let result = ListToolsResult {
            tools: self.registry.list_tools(),
        };
        JsonRpcResponse::success(id, serde_json::to_value(result).unwrap_or(Value::Null))
    }

    async fn handle_call_tool(&self, id: Value, params: Option<Value>) -> JsonRpcResponse {
        let params: CallToolParams = match params.map(serde_json::from_value) {
            Some(Ok(params)) => params,
            Some(Err(e)) => {
                return JsonRpcResponse::failure(
                    id,
                    JsonRpcError::new(
                        JsonRpcError::INVALID_PARAMS,
                        format!("Invalid params: {}", e),
                    ),
                )
            }
            None => {
                return JsonRpcResponse::failure(
                    id,
                    JsonRpcError::new(JsonRpcError::INVALID_PARAMS, "Missing params"),
                )
            }
        };

        let tool = match self.registry.get(&params.name) {
            Some(tool) => tool,
            None => {
                return JsonRpcResponse::failure(
                    id,
                    JsonRpcError::new(
                        JsonRpcError::INVALID_PARAMS,
                        format!("Unknown tool: {}", params.name),
                    ),
                )
            }
        };

        log::info!("tools/call {}", params.name);
        let arguments = params.arguments.unwrap_or(Value::Null);

        let result = match tool.execute(arguments).await {
            Ok(result) => CallToolResult::from(result),
            Err(error) => {
                log::warn!("tool {} failed: {}", params.name, error);
                CallToolResult::text(error.to_string(), true)
            }
        };

        JsonRpcResponse::success(id, serde_json::to_value(result).unwrap_or(Value::Null))
    }
}

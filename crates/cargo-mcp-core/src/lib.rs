pub mod error;
pub mod protocol;
pub mod registry;
pub mod types;

pub use error::{Result, ToolError};
pub use protocol::{
    CallToolParams, CallToolResult, Implementation, InitializeParams, InitializeResult,
    JsonRpcError, JsonRpcNotification, JsonRpcRequest, JsonRpcResponse, ListToolsResult,
    ServerCapabilities, ToolContent, ToolInfo, ToolsCapability, PROTOCOL_VERSION,
};
pub use registry::{RegistryError, SharedTool, Tool, ToolRegistry};
pub use types::ToolResult;

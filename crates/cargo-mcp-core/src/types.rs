use serde::{Deserialize, Serialize};

/// Outcome of a single tool invocation, handed back to the dispatch layer.
///
/// `success` reflects what the tool itself reported (for Cargo tools, exit
/// code zero); `result` is the fully formatted text block returned to the
/// client verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolResult {
    pub success: bool,
    pub result: String,
}

impl ToolResult {
    pub fn ok(result: impl Into<String>) -> Self {
        Self {
            success: true,
            result: result.into(),
        }
    }

    pub fn failure(result: impl Into<String>) -> Self {
        Self {
            success: false,
            result: result.into(),
        }
    }
}

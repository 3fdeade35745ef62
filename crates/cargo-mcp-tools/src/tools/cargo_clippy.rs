use std::path::{Path, PathBuf};

use async_trait::async_trait;
use cargo_mcp_core::{Tool, ToolError, ToolResult};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{parse_args, resolve_dir, run_and_format};

/// Tool for linting a project with `cargo clippy`.
pub struct CargoClippyTool {
    root: PathBuf,
}

/// Arguments for cargo_clippy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClippyArgs {
    #[serde(default)]
    pub all_targets: bool,
    /// Apply machine-fixable suggestions (`--fix`).
    #[serde(default)]
    pub fix: bool,
    #[serde(default)]
    pub working_directory: Option<String>,
}

impl ClippyArgs {
    pub fn cli_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if self.all_targets {
            args.push("--all-targets".to_string());
        }
        if self.fix {
            args.push("--fix".to_string());
        }
        args
    }
}

impl CargoClippyTool {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }
}

#[async_trait]
impl Tool for CargoClippyTool {
    fn name(&self) -> &str {
        "cargo_clippy"
    }

    fn description(&self) -> &str {
        "Run the Clippy linter over the project. With fix enabled, machine-applicable suggestions are written back to the source"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "all_targets": {
                    "type": "boolean",
                    "description": "Lint all targets, including tests and examples"
                },
                "fix": {
                    "type": "boolean",
                    "description": "Automatically apply machine-fixable suggestions"
                },
                "working_directory": {
                    "type": "string",
                    "description": "Directory to run cargo in; if not provided, uses the server's project root"
                }
            }
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<ToolResult, ToolError> {
        let args: ClippyArgs = parse_args(args)?;
        let dir = resolve_dir(&self.root, args.working_directory.as_deref());
        run_and_format("clippy", args.cli_args(), &dir).await
    }
}

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use cargo_mcp_core::{Tool, ToolError, ToolResult};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{parse_args, resolve_dir, run_and_format};

/// Tool for deleting build artifacts with `cargo clean`.
pub struct CargoCleanTool {
    root: PathBuf,
}

/// Arguments for cargo_clean.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CleanArgs {
    /// Only delete the release artifacts.
    #[serde(default)]
    pub release: bool,
    #[serde(default)]
    pub working_directory: Option<String>,
}

impl CleanArgs {
    pub fn cli_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if self.release {
            args.push("--release".to_string());
        }
        args
    }
}

impl CargoCleanTool {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }
}

#[async_trait]
impl Tool for CargoCleanTool {
    fn name(&self) -> &str {
        "cargo_clean"
    }

    fn description(&self) -> &str {
        "Delete the project's target directory with cargo clean"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "release": {
                    "type": "boolean",
                    "description": "Only delete release build artifacts"
                },
                "working_directory": {
                    "type": "string",
                    "description": "Directory to run cargo in; if not provided, uses the server's project root"
                }
            }
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<ToolResult, ToolError> {
        let args: CleanArgs = parse_args(args)?;
        let dir = resolve_dir(&self.root, args.working_directory.as_deref());
        run_and_format("clean", args.cli_args(), &dir).await
    }
}

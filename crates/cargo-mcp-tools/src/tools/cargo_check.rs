use std::path::{Path, PathBuf};

use async_trait::async_trait;
use cargo_mcp_core::{Tool, ToolError, ToolResult};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{parse_args, resolve_dir, run_and_format};

/// Tool for type-checking a project with `cargo check`.
pub struct CargoCheckTool {
    root: PathBuf,
}

/// Arguments for cargo_check.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckArgs {
    #[serde(default)]
    pub release: bool,
    #[serde(default)]
    pub package: Option<String>,
    /// Check all targets (libs, bins, tests, benches, examples).
    #[serde(default)]
    pub all_targets: bool,
    #[serde(default)]
    pub working_directory: Option<String>,
}

impl CheckArgs {
    pub fn cli_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if self.release {
            args.push("--release".to_string());
        }
        if let Some(package) = &self.package {
            args.push("--package".to_string());
            args.push(package.clone());
        }
        if self.all_targets {
            args.push("--all-targets".to_string());
        }
        args
    }
}

impl CargoCheckTool {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }
}

#[async_trait]
impl Tool for CargoCheckTool {
    fn name(&self) -> &str {
        "cargo_check"
    }

    fn description(&self) -> &str {
        "Type-check the project with cargo check without producing artifacts. Faster than a full build for catching compile errors"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "release": {
                    "type": "boolean",
                    "description": "Check with the release profile"
                },
                "package": {
                    "type": "string",
                    "description": "Check only this workspace package"
                },
                "all_targets": {
                    "type": "boolean",
                    "description": "Check all targets, including tests and examples"
                },
                "working_directory": {
                    "type": "string",
                    "description": "Directory to run cargo in; if not provided, uses the server's project root"
                }
            }
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<ToolResult, ToolError> {
        let args: CheckArgs = parse_args(args)?;
        let dir = resolve_dir(&self.root, args.working_directory.as_deref());
        run_and_format("check", args.cli_args(), &dir).await
    }
}

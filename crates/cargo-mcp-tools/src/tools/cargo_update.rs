use std::path::{Path, PathBuf};

use async_trait::async_trait;
use cargo_mcp_core::{Tool, ToolError, ToolResult};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{parse_args, resolve_dir, run_and_format};

/// Tool for updating the lockfile with `cargo update`.
pub struct CargoUpdateTool {
    root: PathBuf,
}

/// Arguments for cargo_update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateArgs {
    /// Limit the update to one dependency.
    #[serde(default)]
    pub package: Option<String>,
    #[serde(default)]
    pub working_directory: Option<String>,
}

impl UpdateArgs {
    pub fn cli_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(package) = &self.package {
            args.push("--package".to_string());
            args.push(package.clone());
        }
        args
    }
}

impl CargoUpdateTool {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }
}

#[async_trait]
impl Tool for CargoUpdateTool {
    fn name(&self) -> &str {
        "cargo_update"
    }

    fn description(&self) -> &str {
        "Update dependencies in Cargo.lock with cargo update, optionally limited to a single package"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "package": {
                    "type": "string",
                    "description": "Update only this dependency"
                },
                "working_directory": {
                    "type": "string",
                    "description": "Directory to run cargo in; if not provided, uses the server's project root"
                }
            }
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<ToolResult, ToolError> {
        let args: UpdateArgs = parse_args(args)?;
        let dir = resolve_dir(&self.root, args.working_directory.as_deref());
        run_and_format("update", args.cli_args(), &dir).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_args_default_is_empty() {
        assert!(UpdateArgs::default().cli_args().is_empty());
    }

    #[test]
    fn package_limits_the_update() {
        let args = UpdateArgs {
            package: Some("serde".to_string()),
            working_directory: None,
        };

        assert_eq!(args.cli_args(), vec!["--package", "serde"]);
    }
}

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use cargo_mcp_core::{Tool, ToolError, ToolResult};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{parse_args, resolve_dir, run_and_format};

/// Tool for removing a dependency with `cargo remove`.
pub struct CargoRemoveTool {
    root: PathBuf,
}

/// Arguments for cargo_remove.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoveArgs {
    /// Name of the dependency to remove.
    pub name: String,
    /// Remove from dev-dependencies.
    #[serde(default)]
    pub dev: bool,
    #[serde(default)]
    pub working_directory: Option<String>,
}

impl RemoveArgs {
    pub fn cli_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if self.dev {
            args.push("--dev".to_string());
        }
        args.push(self.name.clone());
        args
    }
}

impl CargoRemoveTool {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }
}

#[async_trait]
impl Tool for CargoRemoveTool {
    fn name(&self) -> &str {
        "cargo_remove"
    }

    fn description(&self) -> &str {
        "Remove a dependency from Cargo.toml with cargo remove"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "Name of the dependency to remove"
                },
                "dev": {
                    "type": "boolean",
                    "description": "Remove from dev-dependencies"
                },
                "working_directory": {
                    "type": "string",
                    "description": "Directory to run cargo in; if not provided, uses the server's project root"
                }
            },
            "required": ["name"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<ToolResult, ToolError> {
        let args: RemoveArgs = parse_args(args)?;
        if args.name.trim().is_empty() {
            return Err(ToolError::InvalidArguments(
                "dependency name required".to_string(),
            ));
        }

        let dir = resolve_dir(&self.root, args.working_directory.as_deref());
        run_and_format("remove", args.cli_args(), &dir).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_remove_is_just_the_name() {
        let args = RemoveArgs {
            name: "serde".to_string(),
            ..Default::default()
        };

        assert_eq!(args.cli_args(), vec!["serde"]);
    }

    #[test]
    fn dev_flag_precedes_the_dependency_name() {
        let args = RemoveArgs {
            name: "tempfile".to_string(),
            dev: true,
            ..Default::default()
        };

        assert_eq!(args.cli_args(), vec!["--dev", "tempfile"]);
    }
}

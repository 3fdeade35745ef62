use std::path::{Path, PathBuf};

use async_trait::async_trait;
use cargo_mcp_core::{Tool, ToolError, ToolResult};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{parse_args, resolve_dir, run_and_format};

/// Tool for building documentation with `cargo doc`.
pub struct CargoDocTool {
    root: PathBuf,
}

/// Arguments for cargo_doc.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocArgs {
    /// Do not build documentation for dependencies.
    #[serde(default)]
    pub no_deps: bool,
    #[serde(default)]
    pub working_directory: Option<String>,
}

impl DocArgs {
    pub fn cli_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if self.no_deps {
            args.push("--no-deps".to_string());
        }
        args
    }
}

impl CargoDocTool {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }
}

#[async_trait]
impl Tool for CargoDocTool {
    fn name(&self) -> &str {
        "cargo_doc"
    }

    fn description(&self) -> &str {
        "Build the project's documentation with cargo doc"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "no_deps": {
                    "type": "boolean",
                    "description": "Skip documentation for dependencies"
                },
                "working_directory": {
                    "type": "string",
                    "description": "Directory to run cargo in; if not provided, uses the server's project root"
                }
            }
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<ToolResult, ToolError> {
        let args: DocArgs = parse_args(args)?;
        let dir = resolve_dir(&self.root, args.working_directory.as_deref());
        run_and_format("doc", args.cli_args(), &dir).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_args_default_is_empty() {
        assert!(DocArgs::default().cli_args().is_empty());
    }

    #[test]
    fn no_deps_adds_the_flag() {
        let args = DocArgs {
            no_deps: true,
            working_directory: None,
        };

        assert_eq!(args.cli_args(), vec!["--no-deps"]);
    }

    #[test]
    fn schema_exposes_the_working_directory_parameter() {
        let tool = CargoDocTool::new(Path::new("."));
        let schema = tool.parameters_schema();

        assert!(schema["properties"]["working_directory"].is_object());
    }
}

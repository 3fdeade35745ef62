use std::path::{Path, PathBuf};

use async_trait::async_trait;
use cargo_mcp_core::{Tool, ToolError, ToolResult};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{parse_args, resolve_dir, run_and_format};

/// Tool for formatting a project with `cargo fmt`.
pub struct CargoFmtTool {
    root: PathBuf,
}

/// Arguments for cargo_fmt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FmtArgs {
    /// Report formatting differences without rewriting files.
    #[serde(default)]
    pub check: bool,
    #[serde(default)]
    pub working_directory: Option<String>,
}

impl FmtArgs {
    pub fn cli_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if self.check {
            args.push("--check".to_string());
        }
        args
    }
}

impl CargoFmtTool {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }
}

#[async_trait]
impl Tool for CargoFmtTool {
    fn name(&self) -> &str {
        "cargo_fmt"
    }

    fn description(&self) -> &str {
        "Format the project's sources with cargo fmt. In check mode, reports formatting differences without rewriting any files"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "check": {
                    "type": "boolean",
                    "description": "Only report differences, do not rewrite files"
                },
                "working_directory": {
                    "type": "string",
                    "description": "Directory to run cargo in; if not provided, uses the server's project root"
                }
            }
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<ToolResult, ToolError> {
        let args: FmtArgs = parse_args(args)?;
        let dir = resolve_dir(&self.root, args.working_directory.as_deref());
        run_and_format("fmt", args.cli_args(), &dir).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_args_default_is_empty() {
        assert!(FmtArgs::default().cli_args().is_empty());
    }

    #[test]
    fn check_mode_adds_the_flag() {
        let args = FmtArgs {
            check: true,
            working_directory: None,
        };

        assert_eq!(args.cli_args(), vec!["--check"]);
    }

    #[test]
    fn tool_name_and_description() {
        let tool = CargoFmtTool::new(Path::new("."));
        assert_eq!(tool.name(), "cargo_fmt");
        assert!(tool.description().contains("cargo fmt"));
    }
}

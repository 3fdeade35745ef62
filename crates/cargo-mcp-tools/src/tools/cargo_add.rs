//! Add a dependency with `cargo add`.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use cargo_mcp_core::{Tool, ToolError, ToolResult};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{parse_args, resolve_dir, run_and_format};

/// Tool for adding a dependency with `cargo add`.
pub struct CargoAddTool {
    root: PathBuf,
}

/// Arguments for cargo_add.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddArgs {
    /// Name of the dependency to add.
    pub name: String,
    /// Add as a dev-dependency.
    #[serde(default)]
    pub dev: bool,
    /// Version requirement, rendered as `name@version`.
    #[serde(default)]
    pub version: Option<String>,
    /// Features of the dependency to enable.
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub working_directory: Option<String>,
}

impl AddArgs {
    pub fn cli_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if self.dev {
            args.push("--dev".to_string());
        }
        match &self.version {
            Some(version) => args.push(format!("{}@{}", self.name, version)),
            None => args.push(self.name.clone()),
        }
        if !self.features.is_empty() {
            args.push("--features".to_string());
            args.push(self.features.join(","));
        }
        args
    }
}

impl CargoAddTool {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }
}

#[async_trait]
impl Tool for CargoAddTool {
    fn name(&self) -> &str {
        "cargo_add"
    }

    fn description(&self) -> &str {
        "Add a dependency to Cargo.toml with cargo add. Supports dev-dependencies, version requirements, and feature selection"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "Name of the dependency to add, e.g. 'serde'"
                },
                "dev": {
                    "type": "boolean",
                    "description": "Add as a dev-dependency"
                },
                "version": {
                    "type": "string",
                    "description": "Version requirement, e.g. '1.0'"
                },
                "features": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Features of the dependency to enable"
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
        let args: AddArgs = parse_args(args)?;
        if args.name.trim().is_empty() {
            return Err(ToolError::InvalidArguments(
                "dependency name required".to_string(),
            ));
        }

        let dir = resolve_dir(&self.root, args.working_directory.as_deref());
        run_and_format("add", args.cli_args(), &dir).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dev_flag_precedes_the_dependency_name() {
        let args = AddArgs {
            name: "some-lib".to_string(),
            dev: true,
            ..Default::default()
        };

        assert_eq!(args.cli_args(), vec!["--dev", "some-lib"]);
    }

    #[test]
    fn plain_add_is_just_the_name() {
        let args = AddArgs {
            name: "serde".to_string(),
            ..Default::default()
        };

        assert_eq!(args.cli_args(), vec!["serde"]);
    }

    #[test]
    fn version_renders_as_name_at_version() {
        let args = AddArgs {
            name: "tokio".to_string(),
            version: Some("1.0".to_string()),
            features: vec!["rt".to_string(), "macros".to_string()],
            ..Default::default()
        };

        assert_eq!(
            args.cli_args(),
            vec!["tokio@1.0", "--features", "rt,macros"]
        );
    }

    #[tokio::test]
    async fn execute_requires_a_name() {
        let tool = CargoAddTool::new(Path::new("."));

        let missing = tool.execute(json!({})).await.unwrap_err();
        assert!(matches!(missing, ToolError::InvalidArguments(_)));

        let blank = tool.execute(json!({"name": "  "})).await.unwrap_err();
        assert!(matches!(blank, ToolError::InvalidArguments(_)));
    }
}

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use cargo_mcp_core::{Tool, ToolError, ToolResult};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{parse_args, resolve_dir, run_and_format};

/// Tool for running a binary with `cargo run`.
pub struct CargoRunTool {
    root: PathBuf,
}

/// Arguments for cargo_run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunArgs {
    #[serde(default)]
    pub release: bool,
    #[serde(default)]
    pub package: Option<String>,
    /// Name of the binary target to run.
    #[serde(default)]
    pub bin: Option<String>,
    /// Arguments passed to the program itself, after `--`.
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default)]
    pub working_directory: Option<String>,
}

impl RunArgs {
    pub fn cli_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if self.release {
            args.push("--release".to_string());
        }
        if let Some(package) = &self.package {
            args.push("--package".to_string());
            args.push(package.clone());
        }
        if let Some(bin) = &self.bin {
            args.push("--bin".to_string());
            args.push(bin.clone());
        }
        if !self.args.is_empty() {
            args.push("--".to_string());
            args.extend(self.args.iter().cloned());
        }
        args
    }
}

impl CargoRunTool {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }
}

#[async_trait]
impl Tool for CargoRunTool {
    fn name(&self) -> &str {
        "cargo_run"
    }

    fn description(&self) -> &str {
        "Compile and run a binary with cargo run. Program arguments are passed through after --. The call blocks until the program exits, so do not start long-running servers with it"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "release": {
                    "type": "boolean",
                    "description": "Run an optimized build (--release)"
                },
                "package": {
                    "type": "string",
                    "description": "Workspace package containing the binary"
                },
                "bin": {
                    "type": "string",
                    "description": "Name of the binary target to run"
                },
                "args": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Arguments passed to the program after --"
                },
                "working_directory": {
                    "type": "string",
                    "description": "Directory to run cargo in; if not provided, uses the server's project root"
                }
            }
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<ToolResult, ToolError> {
        let args: RunArgs = parse_args(args)?;
        let dir = resolve_dir(&self.root, args.working_directory.as_deref());
        run_and_format("run", args.cli_args(), &dir).await
    }
}

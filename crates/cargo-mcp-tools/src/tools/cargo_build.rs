//! Compile the project with `cargo build`.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use cargo_mcp_core::{Tool, ToolError, ToolResult};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{parse_args, resolve_dir, run_and_format};

/// Tool for compiling a project with `cargo build`.
pub struct CargoBuildTool {
    root: PathBuf,
}

/// Arguments for cargo_build.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildArgs {
    /// Build with optimizations (`--release`).
    #[serde(default)]
    pub release: bool,
    /// Restrict the build to one workspace package.
    #[serde(default)]
    pub package: Option<String>,
    /// Features to activate.
    #[serde(default)]
    pub features: Vec<String>,
    /// Activate all available features.
    #[serde(default)]
    pub all_features: bool,
    /// Target triple to build for.
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub working_directory: Option<String>,
}

impl BuildArgs {
    pub fn cli_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if self.release {
            args.push("--release".to_string());
        }
        if let Some(package) = &self.package {
            args.push("--package".to_string());
            args.push(package.clone());
        }
        if !self.features.is_empty() {
            args.push("--features".to_string());
            args.push(self.features.join(","));
        }
        if self.all_features {
            args.push("--all-features".to_string());
        }
        if let Some(target) = &self.target {
            args.push("--target".to_string());
            args.push(target.clone());
        }
        args
    }
}

impl CargoBuildTool {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }
}

#[async_trait]
impl Tool for CargoBuildTool {
    fn name(&self) -> &str {
        "cargo_build"
    }

    fn description(&self) -> &str {
        "Compile the current project with cargo build. Supports release mode, package selection, feature flags, and cross-compilation targets. Returns the captured compiler output and exit code"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "release": {
                    "type": "boolean",
                    "description": "Build with optimizations (--release)"
                },
                "package": {
                    "type": "string",
                    "description": "Build only this workspace package"
                },
                "features": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Features to activate"
                },
                "all_features": {
                    "type": "boolean",
                    "description": "Activate all available features"
                },
                "target": {
                    "type": "string",
                    "description": "Target triple to build for, e.g. 'x86_64-unknown-linux-gnu'"
                },
                "working_directory": {
                    "type": "string",
                    "description": "Directory to run cargo in; if not provided, uses the server's project root"
                }
            }
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<ToolResult, ToolError> {
        let args: BuildArgs = parse_args(args)?;
        let dir = resolve_dir(&self.root, args.working_directory.as_deref());
        run_and_format("build", args.cli_args(), &dir).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_args_default_is_empty() {
        assert!(BuildArgs::default().cli_args().is_empty());
    }

    #[test]
    fn cli_args_keeps_flag_order() {
        let args = BuildArgs {
            release: true,
            package: Some("core".to_string()),
            features: vec!["tls".to_string(), "http2".to_string()],
            all_features: false,
            target: Some("wasm32-unknown-unknown".to_string()),
            working_directory: None,
        };

        assert_eq!(
            args.cli_args(),
            vec![
                "--release",
                "--package",
                "core",
                "--features",
                "tls,http2",
                "--target",
                "wasm32-unknown-unknown",
            ]
        );
    }

    #[test]
    fn cli_args_all_features() {
        let args = BuildArgs {
            all_features: true,
            ..Default::default()
        };

        assert_eq!(args.cli_args(), vec!["--all-features"]);
    }

    #[tokio::test]
    async fn execute_rejects_malformed_arguments() {
        let tool = CargoBuildTool::new(Path::new("."));
        let error = tool
            .execute(json!({"release": "yes"}))
            .await
            .unwrap_err();

        assert!(matches!(error, ToolError::InvalidArguments(_)));
    }
}

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use cargo_mcp_core::{Tool, ToolError, ToolResult};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{parse_args, resolve_dir, run_and_format};

/// Tool for running tests with `cargo test`.
pub struct CargoTestTool {
    root: PathBuf,
}

/// Arguments for cargo_test.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestArgs {
    #[serde(default)]
    pub release: bool,
    #[serde(default)]
    pub package: Option<String>,
    /// Only run tests whose names contain this string.
    #[serde(default)]
    pub test_name: Option<String>,
    /// Show test output even for passing tests (`-- --nocapture`).
    #[serde(default)]
    pub no_capture: bool,
    #[serde(default)]
    pub working_directory: Option<String>,
}

impl TestArgs {
    pub fn cli_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if self.release {
            args.push("--release".to_string());
        }
        if let Some(package) = &self.package {
            args.push("--package".to_string());
            args.push(package.clone());
        }
        if let Some(test_name) = &self.test_name {
            args.push(test_name.clone());
        }
        if self.no_capture {
            args.push("--".to_string());
            args.push("--nocapture".to_string());
        }
        args
    }
}

impl CargoTestTool {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }
}

#[async_trait]
impl Tool for CargoTestTool {
    fn name(&self) -> &str {
        "cargo_test"
    }

    fn description(&self) -> &str {
        "Run the project's tests with cargo test. An optional filter narrows the run to tests whose names contain it"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "release": {
                    "type": "boolean",
                    "description": "Run tests against an optimized build (--release)"
                },
                "package": {
                    "type": "string",
                    "description": "Run only this workspace package's tests"
                },
                "test_name": {
                    "type": "string",
                    "description": "Only run tests whose names contain this string"
                },
                "no_capture": {
                    "type": "boolean",
                    "description": "Show test output even for passing tests"
                },
                "working_directory": {
                    "type": "string",
                    "description": "Directory to run cargo in; if not provided, uses the server's project root"
                }
            }
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<ToolResult, ToolError> {
        let args: TestArgs = parse_args(args)?;
        let dir = resolve_dir(&self.root, args.working_directory.as_deref());
        run_and_format("test", args.cli_args(), &dir).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_args_default_is_empty() {
        assert!(TestArgs::default().cli_args().is_empty());
    }

    #[test]
    fn filter_is_a_positional_argument() {
        let args = TestArgs {
            test_name: Some("locator".to_string()),
            ..Default::default()
        };

        assert_eq!(args.cli_args(), vec!["locator"]);
    }

    #[test]
    fn no_capture_goes_to_the_test_harness() {
        let args = TestArgs {
            no_capture: true,
            ..Default::default()
        };

        assert_eq!(args.cli_args(), vec!["--", "--nocapture"]);
    }

    #[test]
    fn combined_arguments_keep_harness_flags_last() {
        let args = TestArgs {
            release: true,
            package: Some("core".to_string()),
            test_name: Some("parses".to_string()),
            no_capture: true,
            working_directory: None,
        };

        assert_eq!(
            args.cli_args(),
            vec![
                "--release",
                "--package",
                "core",
                "parses",
                "--",
                "--nocapture",
            ]
        );
    }
}

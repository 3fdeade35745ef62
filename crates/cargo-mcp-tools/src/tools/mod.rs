//! One file per exposed Cargo operation.

pub mod cargo_add;
pub mod cargo_build;
pub mod cargo_check;
pub mod cargo_clean;
pub mod cargo_clippy;
pub mod cargo_doc;
pub mod cargo_fmt;
pub mod cargo_remove;
pub mod cargo_run;
pub mod cargo_test;
pub mod cargo_update;

pub use cargo_add::CargoAddTool;
pub use cargo_build::CargoBuildTool;
pub use cargo_check::CargoCheckTool;
pub use cargo_clean::CargoCleanTool;
pub use cargo_clippy::CargoClippyTool;
pub use cargo_doc::CargoDocTool;
pub use cargo_fmt::CargoFmtTool;
pub use cargo_remove::CargoRemoveTool;
pub use cargo_run::CargoRunTool;
pub use cargo_test::CargoTestTool;
pub use cargo_update::CargoUpdateTool;

use std::path::{Path, PathBuf};

use cargo_mcp_core::{RegistryError, ToolError, ToolRegistry, ToolResult};
use serde::de::DeserializeOwned;

use crate::runner::run_cargo;

/// Register the full Cargo tool catalog. `root` is the project directory
/// used when a call does not name a `working_directory` of its own.
pub fn register_cargo_tools(registry: &ToolRegistry, root: &Path) -> Result<(), RegistryError> {
    registry.register(CargoBuildTool::new(root))?;
    registry.register(CargoRunTool::new(root))?;
    registry.register(CargoTestTool::new(root))?;
    registry.register(CargoCheckTool::new(root))?;
    registry.register(CargoClippyTool::new(root))?;
    registry.register(CargoFmtTool::new(root))?;
    registry.register(CargoAddTool::new(root))?;
    registry.register(CargoRemoveTool::new(root))?;
    registry.register(CargoUpdateTool::new(root))?;
    registry.register(CargoCleanTool::new(root))?;
    registry.register(CargoDocTool::new(root))?;
    Ok(())
}

/// Deserialize a tool's typed arguments. Absent arguments parse as `{}`.
pub(crate) fn parse_args<T: DeserializeOwned>(args: serde_json::Value) -> Result<T, ToolError> {
    let args = if args.is_null() {
        serde_json::Value::Object(serde_json::Map::new())
    } else {
        args
    };
    serde_json::from_value(args).map_err(|e| ToolError::InvalidArguments(e.to_string()))
}

/// Resolve the directory a call runs in: an absolute `working_directory` is
/// taken as-is, a relative one is joined onto the server root.
pub(crate) fn resolve_dir(root: &Path, working_directory: Option<&str>) -> PathBuf {
    match working_directory {
        Some(dir) => {
            let path = Path::new(dir);
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                root.join(path)
            }
        }
        None => root.to_path_buf(),
    }
}

pub(crate) async fn run_and_format(
    subcommand: &str,
    args: Vec<String>,
    dir: &Path,
) -> Result<ToolResult, ToolError> {
    log::info!("cargo {} (cwd: {})", subcommand, dir.display());

    let result = run_cargo(subcommand, &args, dir).await.map_err(|e| {
        ToolError::Execution(format!("failed to launch cargo {}: {}", subcommand, e))
    })?;

    Ok(ToolResult {
        success: result.success(),
        result: result.format(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize)]
    struct DemoArgs {
        #[serde(default)]
        release: bool,
    }

    #[test]
    fn parse_args_accepts_null_as_empty() {
        let args: DemoArgs = parse_args(serde_json::Value::Null).unwrap();
        assert!(!args.release);
    }

    #[test]
    fn parse_args_rejects_wrong_types() {
        let error = parse_args::<DemoArgs>(json!({"release": "yes"})).unwrap_err();
        assert!(matches!(error, ToolError::InvalidArguments(_)));
    }

    #[test]
    fn resolve_dir_defaults_to_root() {
        assert_eq!(resolve_dir(Path::new("/project"), None), PathBuf::from("/project"));
    }

    #[test]
    fn resolve_dir_joins_relative_paths() {
        assert_eq!(
            resolve_dir(Path::new("/project"), Some("member")),
            PathBuf::from("/project/member")
        );
    }

    #[test]
    fn resolve_dir_keeps_absolute_paths() {
        assert_eq!(
            resolve_dir(Path::new("/project"), Some("/elsewhere")),
            PathBuf::from("/elsewhere")
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    #[serial_test::serial]
    async fn run_and_format_wraps_launch_failures() {
        // A file without the executable bit resolves but cannot be spawned.
        let dir = tempfile::TempDir::new().unwrap();
        let not_executable = dir.path().join("cargo");
        std::fs::write(&not_executable, "").unwrap();

        std::env::set_var(crate::locator::CARGO_PATH_ENV, &not_executable);
        let result = run_and_format("check", Vec::new(), dir.path()).await;
        std::env::remove_var(crate::locator::CARGO_PATH_ENV);

        let error = result.unwrap_err();
        assert!(
            matches!(error, ToolError::Execution(message) if message.contains("failed to launch cargo check"))
        );
    }
}

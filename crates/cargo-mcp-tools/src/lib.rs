//! Cargo tools for the MCP server.
//!
//! Each exposed operation wraps one Cargo subcommand: the tool deserializes
//! its typed arguments, derives the command line, runs Cargo through the
//! shared runner, and hands back the formatted output. Cargo itself is an
//! opaque collaborator; nothing here parses what it prints.

pub mod locator;
pub mod runner;
pub mod tools;

pub use locator::{cargo_executable, CARGO_PATH_ENV};
pub use runner::{run_cargo, CommandResult};

pub use tools::{
    register_cargo_tools, CargoAddTool, CargoBuildTool, CargoCheckTool, CargoCleanTool,
    CargoClippyTool, CargoDocTool, CargoFmtTool, CargoRemoveTool, CargoRunTool, CargoTestTool,
    CargoUpdateTool,
};

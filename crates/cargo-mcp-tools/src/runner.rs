//! Spawns Cargo and captures what it said.

use std::io;
use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;

use crate::locator::cargo_executable;

/// Captured outcome of one Cargo invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    /// Exit code of the process, or 0 if it terminated without one.
    pub exit_code: i32,
}

impl CommandResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Render the result as a single text block: a labeled STDOUT section
    /// when stdout is non-empty, a labeled STDERR section when stderr is
    /// non-empty, and always a final exit-code line.
    pub fn format(&self) -> String {
        let mut output = String::new();

        if !self.stdout.is_empty() {
            output.push_str("STDOUT:\n");
            output.push_str(&self.stdout);
            output.push('\n');
        }

        if !self.stderr.is_empty() {
            output.push_str("STDERR:\n");
            output.push_str(&self.stderr);
            output.push('\n');
        }

        output.push_str(&format!("Exit code: {}\n", self.exit_code));

        output
    }
}

/// Run `cargo <subcommand> <args...>` in `dir` and capture its output.
///
/// The calling task suspends until Cargo exits; there is no timeout and no
/// output cap. Stdout and stderr are captured separately, each in arrival
/// order. The child's stdin is closed so Cargo can never read the server's
/// own protocol stream. A failure to launch the binary at all comes back as
/// the platform `io::Error`.
pub async fn run_cargo(subcommand: &str, args: &[String], dir: &Path) -> io::Result<CommandResult> {
    let cargo = cargo_executable();
    log::debug!(
        "running {} {} {:?} in {}",
        cargo.display(),
        subcommand,
        args,
        dir.display()
    );

    let mut full_args = Vec::with_capacity(args.len() + 1);
    full_args.push(subcommand.to_string());
    full_args.extend_from_slice(args);

    let result = run_program(cargo.as_ref(), &full_args, dir).await?;
    log::debug!(
        "cargo {} finished with exit code {}",
        subcommand,
        result.exit_code
    );
    Ok(result)
}

async fn run_program(program: &Path, args: &[String], dir: &Path) -> io::Result<CommandResult> {
    let output = Command::new(program)
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await?;

    Ok(CommandResult {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_code: output.status.code().unwrap_or(0),
    })
}

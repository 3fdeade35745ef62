//! Locates the Cargo binary to invoke.
//!
//! Resolution order: the `CARGO_PATH` environment variable (honored only
//! when the path it names exists), then conventional install locations,
//! then the bare command name for the caller's PATH lookup. This step never
//! fails; a genuinely missing binary surfaces later, when the spawn does.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable naming an explicit Cargo binary to use.
pub const CARGO_PATH_ENV: &str = "CARGO_PATH";

#[cfg(windows)]
const CARGO_BINARY: &str = "cargo.exe";
#[cfg(not(windows))]
const CARGO_BINARY: &str = "cargo";

/// Resolve the Cargo binary for the next invocation.
pub fn cargo_executable() -> PathBuf {
    resolve(env::var_os(CARGO_PATH_ENV), &candidate_paths())
}

fn resolve(override_path: Option<OsString>, candidates: &[PathBuf]) -> PathBuf {
    if let Some(path) = override_path {
        let path = PathBuf::from(path);
        if path.exists() {
            return path;
        }
        log::warn!(
            "{} points to {}, which does not exist; ignoring",
            CARGO_PATH_ENV,
            path.display()
        );
    }

    for candidate in candidates {
        if candidate.exists() {
            return candidate.clone();
        }
    }

    PathBuf::from(CARGO_BINARY)
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(".cargo").join("bin").join(CARGO_BINARY));
    }

    if cfg!(not(windows)) {
        candidates.push(PathBuf::from("/usr/local/bin/cargo"));
        candidates.push(PathBuf::from("/opt/homebrew/bin/cargo"));
        candidates.push(PathBuf::from("/usr/bin/cargo"));
    }

    candidates
}

//! Identity binary resolution and validation.
//!
//! This module resolves the identity query binary from a shorthand name or an
//! explicit path, and checks that it exists and is executable before any node
//! is queried.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Result, SetupError};

fn unavailable(name: &str) -> SetupError {
    SetupError::IdentityCommandUnavailable {
        binary: name.to_string(),
    }
}

/// Resolve a binary path from a shorthand name or explicit path.
///
/// Resolution rules:
/// 1. If the value contains `/` or starts with `~`: treat as explicit path,
///    expanding a leading `~` to the home directory
/// 2. Otherwise: search each directory of `PATH` for an executable of that name
///
/// # Examples
///
/// ```ignore
/// resolve_binary_path("cometbft") -> /usr/local/bin/cometbft
/// resolve_binary_path("~/go/bin/cometbft") -> /home/user/go/bin/cometbft
/// resolve_binary_path("/opt/cometbft/cometbft") -> /opt/cometbft/cometbft
/// ```
pub fn resolve_binary_path(name_or_path: &str) -> Result<PathBuf> {
    if name_or_path.contains('/') || name_or_path.starts_with('~') {
        let expanded = match name_or_path.strip_prefix("~/") {
            Some(rest) => {
                let home = env::var("HOME").map_err(|_| unavailable(name_or_path))?;
                PathBuf::from(home).join(rest)
            }
            None => PathBuf::from(name_or_path),
        };
        validate_binary(&expanded)?;
        return Ok(expanded);
    }

    let search_path = env::var_os("PATH").ok_or_else(|| unavailable(name_or_path))?;
    env::split_paths(&search_path)
        .map(|dir| dir.join(name_or_path))
        .find(|candidate| validate_binary(candidate).is_ok())
        .ok_or_else(|| unavailable(name_or_path))
}

/// Validate that a binary exists and is executable.
pub fn validate_binary(path: &Path) -> Result<()> {
    let display = path.display().to_string();
    let metadata = path.metadata().map_err(|_| unavailable(&display))?;
    if !metadata.is_file() {
        return Err(unavailable(&display));
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Any execute bit
        if metadata.permissions().mode() & 0o111 == 0 {
            return Err(unavailable(&display));
        }
    }

    Ok(())
}

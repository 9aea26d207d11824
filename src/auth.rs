// ABOUTME: Token discovery with precedence chain
// ABOUTME: CLI flag → XDG token file → TODOIST_TOKEN env var

use crate::{Error, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const TOKEN_ENV_VAR: &str = "TODOIST_TOKEN";

/// Location of the token file: `<config-home>/org-todoist/token.txt`.
pub fn default_token_path() -> PathBuf {
    let config_home = env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|dir| !dir.is_empty())
        .unwrap_or_else(|| {
            let home = env::var("HOME").unwrap_or_default();
            format!("{}/.config", home)
        });

    PathBuf::from(config_home).join("org-todoist/token.txt")
}

/// Resolves the bearer token from the flag, the token file, or the environment.
///
/// Reads at most one file. Fails with [`Error::MissingToken`] when none of the
/// sources yields a token, so the caller can print guidance before any network
/// access happens.
pub fn resolve_token(cli_token: Option<String>, token_file: Option<PathBuf>) -> Result<String> {
    let path = token_file.unwrap_or_else(default_token_path);
    resolve_token_from(cli_token, &path, env::var(TOKEN_ENV_VAR).ok())
}

fn resolve_token_from(
    cli_token: Option<String>,
    token_file: &Path,
    env_token: Option<String>,
) -> Result<String> {
    // 1. CLI flag
    if let Some(token) = cli_token {
        debug!("using token from --token");
        return Ok(token);
    }

    // 2. Token file
    if let Some(token) = read_token_file(token_file)? {
        debug!(path = %token_file.display(), "using token from file");
        return Ok(token);
    }

    // 3. Environment variable
    if let Some(token) = env_token {
        debug!("using token from {}", TOKEN_ENV_VAR);
        return Ok(token);
    }

    Err(Error::MissingToken {
        config_path: token_file.to_path_buf(),
    })
}

fn read_token_file(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)?;
    let first_line = content.lines().next().unwrap_or_default();
    Ok(Some(first_line.trim().to_string()))
}

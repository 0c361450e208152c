//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. Attempts to load from `WORKDECK_*` environment variables
//! 2. If the required ones are missing, falls back to a config file
//! 3. Probes multiple paths for config files (JSON or TOML)
//!
//! ## Environment Variables
//! Required:
//! - `WORKDECK_TABBY_URL`: OpenAI-compatible chat completions endpoint
//! - `WORKDECK_OLLAMA_URL`: Ollama generate endpoint
//!
//! Optional (defaults apply when unset):
//! - `WORKDECK_TABBY_MODEL`, `WORKDECK_OLLAMA_MODEL`
//! - `WORKDECK_AUTH_TOKEN`: bearer token for the chat completions endpoint
//! - `WORKDECK_OLLAMA_STREAM`: request a streamed Ollama answer (true/false)
//! - `WORKDECK_CHAT_TIMEOUT_SECS`
//! - `WORKDECK_WORK_ITEM_BASE_URL`
//! - `WORKDECK_PROXY_LISTEN_ADDR`, `WORKDECK_PROXY_UPSTREAM_URL`
//! - `WORKDECK_LOG_LEVEL`
//!
//! When some `WORKDECK_*` variable is set but a required one is missing, the
//! fallback to a file is logged as a warning.
//!
//! ## File Locations
//! The loader probes `workdeck.json` then `workdeck.toml`, first in the
//! working directory and then next to the executable.

use std::path::{Path, PathBuf};

use workdeck_domain::{Config, Result, WorkdeckError};

const CONFIG_FILE_NAMES: [&str; 2] = ["workdeck.json", "workdeck.toml"];

const REQUIRED_ENV_VARS: [&str; 2] = ["WORKDECK_TABBY_URL", "WORKDECK_OLLAMA_URL"];

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `WorkdeckError::Config` if neither source yields a configuration
/// or the file found is malformed.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            if let Some(missing) = incomplete_env_config() {
                tracing::warn!(
                    missing,
                    error = %e,
                    "Environment configuration is incomplete, trying file"
                );
            } else {
                tracing::debug!(error = %e, "Failed to load from environment, trying file");
            }
            load_from_file(None)
        }
    }
}

/// Like [`load`], but falls back to [`Config::default`] when no source exists.
///
/// A config file that exists but cannot be parsed is still an error.
pub fn load_or_default(path: Option<PathBuf>) -> Result<Config> {
    if path.is_some() {
        return load_from_file(path);
    }

    match load() {
        Ok(config) => Ok(config),
        Err(_) if probe_config_paths().is_none() => {
            tracing::info!("No configuration found, using defaults");
            Ok(Config::default())
        }
        Err(e) => Err(e),
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `WorkdeckError::Config` if a required variable is missing or a
/// numeric value does not parse.
pub fn load_from_env() -> Result<Config> {
    let mut config = Config::default();

    config.chat.tabby_url = env_var(REQUIRED_ENV_VARS[0])?;
    config.chat.ollama_url = env_var(REQUIRED_ENV_VARS[1])?;

    if let Some(model) = env_opt("WORKDECK_TABBY_MODEL") {
        config.chat.tabby_model = model;
    }
    if let Some(model) = env_opt("WORKDECK_OLLAMA_MODEL") {
        config.chat.ollama_model = model;
    }
    config.chat.auth_token = env_opt("WORKDECK_AUTH_TOKEN");
    config.chat.ollama_stream = env_bool("WORKDECK_OLLAMA_STREAM", config.chat.ollama_stream);

    if let Some(raw) = env_opt("WORKDECK_CHAT_TIMEOUT_SECS") {
        config.chat.timeout_secs = raw
            .parse::<u64>()
            .map_err(|e| WorkdeckError::Config(format!("Invalid chat timeout: {}", e)))?;
    }

    if let Some(url) = env_opt("WORKDECK_WORK_ITEM_BASE_URL") {
        config.calendar.work_item_base_url = url;
    }
    if let Some(addr) = env_opt("WORKDECK_PROXY_LISTEN_ADDR") {
        config.proxy.listen_addr = addr;
    }
    if let Some(url) = env_opt("WORKDECK_PROXY_UPSTREAM_URL") {
        config.proxy.upstream_url = url;
    }
    if let Some(level) = env_opt("WORKDECK_LOG_LEVEL") {
        config.log_level = level;
    }

    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. Format is chosen by
/// file extension.
///
/// # Errors
/// Returns `WorkdeckError::Config` if the file is missing, unreadable or
/// malformed.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(WorkdeckError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            WorkdeckError::Config("No config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| WorkdeckError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| WorkdeckError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| WorkdeckError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(WorkdeckError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// First existing config file in the working directory or next to the
/// executable.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd);
    }

    if let Some(exe_dir) = std::env::current_exe().ok().and_then(|p| p.parent().map(Path::to_path_buf)) {
        roots.push(exe_dir);
    }

    find_config_in(&roots)
}

fn find_config_in(roots: &[PathBuf]) -> Option<PathBuf> {
    roots
        .iter()
        .flat_map(|root| CONFIG_FILE_NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.is_file())
}

/// First missing required variable, if any `WORKDECK_*` variable is set.
///
/// `None` when the environment is not being used for configuration at all.
fn incomplete_env_config() -> Option<&'static str> {
    let env_in_use = std::env::vars_os()
        .any(|(key, _)| key.to_str().is_some_and(|key| key.starts_with("WORKDECK_")));
    if !env_in_use {
        return None;
    }

    REQUIRED_ENV_VARS.into_iter().find(|key| env_opt(key).is_none())
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        WorkdeckError::Config(format!("Missing required environment variable: {}", key))
    })
}

fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Accepts `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive).
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}

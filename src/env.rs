//! Fns to read variables from the environment more conveniently, and the config a run of the
//! updater needs.

use std::env;

use lazy_static::lazy_static;
use thiserror::Error;
use tracing::debug;

const SECRET_LOG_BLACKLIST: [&str; 1] = ["DUNE_API_KEY"];

const DEFAULT_DUNE_API_URL: &str = "https://api.dune.com";

lazy_static! {
    pub static ref ENV_CONFIG: EnvConfig = get_env_config();
}

fn obfuscate_if_secret(blacklist: &[&str], key: &str, value: &str) -> String {
    if blacklist.contains(&key) {
        let mut last_four = value.to_string();
        last_four.drain(0..value.len().saturating_sub(4));
        format!("****{last_four}")
    } else {
        value.to_string()
    }
}

/// Get an environment variable, encoding found or missing as Option, and panic otherwise.
pub fn get_env_var(key: &str) -> Option<String> {
    let var = match env::var(key) {
        Err(env::VarError::NotPresent) => None,
        Err(e) => panic!("{e}"),
        Ok(var) => Some(var),
    };

    if let Some(ref existing_var) = var {
        let output = obfuscate_if_secret(&SECRET_LOG_BLACKLIST, key, existing_var);
        debug!("env var {key}: {output}");
    } else {
        debug!("env var {key} requested but not found")
    };

    var
}

pub fn get_env_bool(key: &str) -> Option<bool> {
    get_env_var(key).map(|var| match var.to_lowercase().as_str() {
        "true" => true,
        "false" => false,
        "t" => true,
        "f" => false,
        "1" => true,
        "0" => false,
        str => panic!("invalid bool value {str} for {key}"),
    })
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("DUNE_API_KEY environment variable is not set")]
    MissingApiKey,
}

pub struct EnvConfig {
    // Empty counts as missing.
    pub dune_api_key: Option<String>,
    pub dune_api_url: String,
    pub log_json: bool,
    pub log_perf: bool,
}

impl EnvConfig {
    pub fn require_dune_api_key(&self) -> Result<&str, ConfigError> {
        self.dune_api_key
            .as_deref()
            .ok_or(ConfigError::MissingApiKey)
    }
}

pub fn get_env_config() -> EnvConfig {
    EnvConfig {
        dune_api_key: get_env_var("DUNE_API_KEY").filter(|key| !key.is_empty()),
        dune_api_url: get_env_var("DUNE_API_URL")
            .unwrap_or_else(|| DEFAULT_DUNE_API_URL.to_string()),
        log_json: get_env_bool("LOG_JSON").unwrap_or(false),
        log_perf: get_env_bool("LOG_PERF").unwrap_or(false),
    }
}

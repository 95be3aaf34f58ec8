use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::log;

use anyhow::Context;

/// What the batch collector does when one game fails.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    #[default]
    Skip,
    Abort,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default="default_base_url")]
    pub base_url: String,

    #[serde(default="default_concurrency")]
    pub concurrency: usize,

    #[serde(default)]
    pub failure_policy: FailurePolicy,

    #[serde(default="default_timeout_s")]
    pub timeout_s: u64,
}

fn default_base_url() -> String {
    "https://statsapi.web.nhl.com/api/v1".to_string()
}

fn default_concurrency() -> usize {
    4
}

fn default_timeout_s() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: default_base_url(),
            concurrency: default_concurrency(),
            failure_policy: FailurePolicy::default(),
            timeout_s: default_timeout_s(),
        }
    }
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_s)
    }

    pub fn from_path(path: &Path) -> anyhow::Result<Config> {
        if !path.exists() {
            log::info!("[CONFIG] No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        let data = fs::read_to_string(path)
            .with_context(|| format!("Unable to read {}", path.display()))?;
        serde_json::from_str(&data)
            .with_context(|| format!("Could not parse JSON at {}", path.display()))
    }
}

pub fn get_config() -> anyhow::Result<Config> {
    let path = std::env::var("CONFIG_PATH").ok()
        .unwrap_or_else(|| "./config.json".to_string());
    let mut result = Config::from_path(Path::new(&path))?;
    if let Ok(base_url) = std::env::var("STATS_BASE_URL") {
        result.base_url = base_url;
        log::info!("[CONFIG] STATS_BASE_URL {}", result.base_url);
    }
    log::info!("[CONFIG] {:?}", result);
    Ok(result)
}

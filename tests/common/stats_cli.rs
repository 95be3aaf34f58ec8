use std::process::Command;

use assert_cmd::{assert::Assert, prelude::{CommandCargoExt, OutputAssertExt}};
use nhl_stats_rs::config_handler::Config;

/// Runs the `nhl-stats-rs` binary against a config file written to `path`.
pub struct StatsCli {
    config_path: String,
}

impl StatsCli {
    pub fn new(path: &str, external_url: &str) -> StatsCli {
        let config = Config {
            base_url: external_url.to_string(),
            concurrency: 2,
            timeout_s: 5,
            ..Default::default()
        };
        let config_str = serde_json::to_string(&config).unwrap();
        let config_path = format!("{path}/config.json");
        std::fs::write(&config_path, config_str).unwrap();
        StatsCli { config_path }
    }

    /// Blocks on the child process, so it runs off the async runtime.
    pub async fn run(&self, args: &[&str]) -> Assert {
        let config_path = self.config_path.clone();
        let args: Vec<String> = args.iter().map(|e| e.to_string()).collect();
        tokio::task::spawn_blocking(move || {
            Command::cargo_bin("nhl-stats-rs")
                .unwrap()
                .env("CONFIG_PATH", config_path)
                .env_remove("STATS_BASE_URL")
                .args(args)
                .assert()
        })
        .await
        .expect("cli to run")
    }
}

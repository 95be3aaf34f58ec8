use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::log;
use tracing_subscriber::EnvFilter;

use nhl_stats_rs::config_handler::{self, FailurePolicy};
use nhl_stats_rs::game_stats_service::GameStatsService;
use nhl_stats_rs::games_service::{BatchOptions, GamesService};
use nhl_stats_rs::models::{DateRange, GameId, TeamId};
use nhl_stats_rs::rest_client::StatsClient;
use nhl_stats_rs::teams_service::TeamsService;

#[derive(Parser, Debug)]
#[command(name = "nhl-stats-rs", version, about = "Per game team stats from the NHL stats API, one row per team per game")]
struct Cli {
    /// Write the JSON result to this file instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Every game scheduled between two dates, inclusive
    Games {
        start_date: NaiveDate,
        end_date: NaiveDate,

        /// Stop at the first failing game instead of skipping it
        #[arg(long)]
        abort_on_error: bool,

        #[arg(long)]
        concurrency: Option<usize>,
    },
    /// A single game
    Game {
        game_id: GameId,
    },
    Teams,
    TeamStats {
        team_id: TeamId,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        // Set the RUST_LOG, if it hasn't been explicitly defined
        std::env::set_var("RUST_LOG", "info")
    }

    // stdout is reserved for the result
    let format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_target(false)
        .with_ansi(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .compact();
    tracing_subscriber::fmt()
        .event_format(format)
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = config_handler::get_config()?;
    let client = StatsClient::from_config(&config)?;

    let json = match cli.command {
        Commands::Games { start_date, end_date, abort_on_error, concurrency } => {
            let range = DateRange::new(start_date, end_date)?;
            let mut options = BatchOptions::from(&config);
            if abort_on_error {
                options.failure_policy = FailurePolicy::Abort;
            }
            if let Some(concurrency) = concurrency {
                options.concurrency = concurrency;
            }
            let table = GamesService::update(&client, &range, &options).await
                .with_context(|| format!("Failed to collect games {range}"))?;
            serde_json::to_string_pretty(&table)?
        },
        Commands::Game { game_id } => {
            let table = GameStatsService::update(&client, game_id).await
                .with_context(|| format!("Failed to collect game {game_id}"))?;
            serde_json::to_string_pretty(&table)?
        },
        Commands::Teams => {
            let teams = TeamsService::read_all(&client).await.context("Failed to read teams")?;
            serde_json::to_string_pretty(&teams)?
        },
        Commands::TeamStats { team_id } => {
            let stats = TeamsService::read_stats(&client, team_id).await
                .with_context(|| format!("Failed to read stats for team {team_id}"))?;
            serde_json::to_string_pretty(&stats)?
        },
    };

    write_output(cli.output.as_deref(), &json)
}

fn write_output(path: Option<&Path>, json: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Unable to write {}", path.display()))?;
            log::info!("[OUTPUT] Wrote {}", path.display());
        },
        None => println!("{json}"),
    }
    Ok(())
}

#![allow(non_snake_case)]

use std::fmt::Display;

use tracing::log;

pub mod config_handler;
pub mod error;
pub mod game_stats_service;
pub mod games_service;
pub mod models;
pub mod models_api;
pub mod models_external;
pub mod rest_client;
pub mod schedule_service;
pub mod teams_service;

pub trait LogResult<T, E: Display> {
    fn ok_log(self, msg: &str) -> Option<T>;
}

impl<T, E: Display> LogResult<T, E> for Result<T, E> {
    fn ok_log(self, msg: &str) -> Option<T> {
        match self {
            Ok(o) => Some(o),
            Err(e) => {
                log::error!("{}: {}", msg, e);
                None
            }
        }
    }
}

pub mod external_server;
pub mod fixtures;
pub mod stats_cli;

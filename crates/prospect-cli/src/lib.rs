// Command-line front end for the player profile generator: config files,
// the SQLite record store, export formats and the command runner.

pub mod app;
pub mod cli;
pub mod config;
pub mod db;
pub mod export;

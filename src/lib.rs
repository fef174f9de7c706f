pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod orbit;
pub mod ui;

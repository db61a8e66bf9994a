pub mod api;
pub mod commands;
pub mod config;
pub mod models;
pub mod notify;
pub mod session;
pub mod ui;
pub mod utils;

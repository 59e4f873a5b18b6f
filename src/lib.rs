// Library for tests to access modules

pub mod cli;
pub mod collector;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod rates;
pub mod report;
pub mod scheduler;
pub mod state;
pub mod tui;
pub mod version;

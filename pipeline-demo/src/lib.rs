//! Terminal dashboard for the simulated agent pipeline

pub mod app;
pub mod cli;
pub mod headless;
pub mod logging;
pub mod ui;

// src/lib.rs
pub mod app;
pub mod args;
pub mod logging;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

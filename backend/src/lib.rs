pub mod app;
pub mod config;
pub mod draw;
pub mod error;
pub mod event_loop;
pub mod logger;
pub mod math;
pub mod platform;
pub mod system;

#[cfg(test)]
mod fake;

pub use app::{run, Demo};
pub use error::{Error, Result};

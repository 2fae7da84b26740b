pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod yt;

pub use config::Config;
pub use error::{Error, Result};

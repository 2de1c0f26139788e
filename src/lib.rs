pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;
pub mod quran;
pub mod rate_limit;
pub mod serve;
pub mod storage;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};

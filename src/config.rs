use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackend {
    /// Files under `--data-dir`
    Local,
    /// An S3 (or S3-compatible) bucket; needs the `s3` feature
    S3,
    /// A remote HTTP origin; needs the `http` feature
    Http,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "quranapi")]
#[command(about = "Quran audio, text and tafseer API server")]
pub struct Config {
    /// Host address to bind to
    #[arg(long, env = "QURANAPI_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "QURANAPI_PORT", default_value = "8080")]
    pub port: u16,

    /// Where objects are read from
    #[arg(long, env = "QURANAPI_STORAGE", value_enum, default_value = "local")]
    pub storage: StorageBackend,

    /// Directory containing data files (local storage)
    #[arg(long, env = "QURANAPI_DATA_DIR", default_value = "./data")]
    pub data_dir: PathBuf,

    /// S3 bucket name
    #[arg(long, env = "QURANAPI_S3_BUCKET")]
    pub s3_bucket: Option<String>,

    /// Key prefix inside the bucket
    #[arg(long, env = "QURANAPI_S3_PREFIX", default_value = "")]
    pub s3_prefix: String,

    /// AWS region
    #[arg(long, env = "QURANAPI_S3_REGION")]
    pub s3_region: Option<String>,

    /// Custom endpoint for S3-compatible services (R2, MinIO)
    #[arg(long, env = "QURANAPI_S3_ENDPOINT")]
    pub s3_endpoint: Option<String>,

    /// Origin base URL (http storage)
    #[arg(long, env = "QURANAPI_HTTP_BASE_URL")]
    pub http_base_url: Option<String>,

    /// Enable CORS for all origins
    #[arg(long, env = "QURANAPI_CORS", default_value = "true")]
    pub cors: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Requests allowed per client per window; 0 disables rate limiting
    #[arg(long, env = "QURANAPI_RATE_LIMIT", default_value = "100")]
    pub rate_limit: u32,

    /// Rate limit window length in seconds
    #[arg(
        long = "rate-limit-window",
        env = "QURANAPI_RATE_LIMIT_WINDOW",
        default_value = "60"
    )]
    pub rate_limit_window_secs: u64,

    /// Maximum number of clients tracked by the rate limiter
    #[arg(long, env = "QURANAPI_RATE_LIMIT_CAPACITY", default_value = "10000")]
    pub rate_limit_capacity: usize,
}

impl Config {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn rate_limit_enabled(&self) -> bool {
        self.rate_limit > 0
    }

    pub fn rate_limit_window(&self) -> Duration {
        Duration::from_secs(self.rate_limit_window_secs.max(1))
    }
}

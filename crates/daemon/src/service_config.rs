use std::path::PathBuf;

use common::vault::DEFAULT_MAX_SIZE_BYTES;

#[derive(Debug)]
pub struct Config {
    // http server configuration
    /// Port for the HTTP server.
    pub port: u16,

    // storage configuration
    /// Directory for stored blobs, created if absent.
    pub storage_dir: PathBuf,
    /// Upper bound on accepted uploads, in bytes.
    pub max_upload_size: u64,

    // url configuration
    /// External URL for generated share links (e.g. "https://drops.example.com").
    /// When unset, links are built from the request's Host header.
    pub public_url: Option<url::Url>,

    // logging
    pub log_level: tracing::Level,
    /// Directory for log files (optional, logs to stdout only if not set)
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            storage_dir: PathBuf::from("uploads"),
            max_upload_size: DEFAULT_MAX_SIZE_BYTES,
            public_url: None,
            log_level: tracing::Level::INFO,
            log_dir: None,
        }
    }
}

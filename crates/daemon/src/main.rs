//! burnbox - one-time, password-gated file drops
//!
//! Each upload gets a shareable link and a short one-time password; the
//! first successful password attempt wins the file and destroys it.

use std::path::PathBuf;

use clap::Parser;
use url::Url;

use burnbox_daemon::{process, ServiceConfig};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on for HTTP requests (env PORT is honored when unset)
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory for stored blobs (created if absent)
    #[arg(short, long, default_value = "uploads")]
    storage_dir: PathBuf,

    /// Upper bound on accepted uploads, in bytes
    #[arg(long, default_value_t = common::vault::DEFAULT_MAX_SIZE_BYTES)]
    max_upload_size: u64,

    /// External URL for generated share links (defaults to the request host)
    #[arg(long)]
    public_url: Option<Url>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: tracing::Level,

    /// Directory for log files (logs to stdout only if not set)
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let port = args.port.unwrap_or_else(|| {
        std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000)
    });

    let config = ServiceConfig {
        port,
        storage_dir: args.storage_dir,
        max_upload_size: args.max_upload_size,
        public_url: args.public_url,
        log_level: args.log_level,
        log_dir: args.log_dir,
    };

    process::spawn_service(&config).await;
}

use std::net::SocketAddr;

use url::Url;

#[derive(Debug, Clone)]
pub struct Config {
    // Listen address
    pub listen_addr: SocketAddr,
    // External URL for generated share links; falls back to the request
    // Host header when unset
    pub public_url: Option<Url>,
    // log level for http tracing
    pub log_level: tracing::Level,
}

impl Config {
    pub fn new(listen_addr: SocketAddr, public_url: Option<Url>) -> Self {
        Self {
            listen_addr,
            public_url,
            log_level: tracing::Level::INFO,
        }
    }
}

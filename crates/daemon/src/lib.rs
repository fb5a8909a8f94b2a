pub mod http_server;
pub mod process;
mod service_config;
mod state;
pub mod version;

pub use service_config::Config as ServiceConfig;
pub use state::{State as ServiceState, StateSetupError};

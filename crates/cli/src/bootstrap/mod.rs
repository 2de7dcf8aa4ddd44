pub mod clients;
pub mod config;
pub mod logging;

pub use clients::build_clients;
pub use config::{load_config, load_resolvers};
pub use logging::init_logging;

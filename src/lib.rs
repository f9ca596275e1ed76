pub mod config;
pub mod games;
pub mod logger;

pub use config::{load_config, SessionConfig, Validate};
pub use games::SessionRng;

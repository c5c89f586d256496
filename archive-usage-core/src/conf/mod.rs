mod error;
mod loader;
mod settings;

pub use error::ConfigError;
pub use loader::load_config;
pub use settings::*;

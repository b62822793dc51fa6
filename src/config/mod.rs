mod loader;
mod seed;
mod types;

pub use loader::ConfigError;
pub use seed::seeded_menu;
pub use types::{Config, LoggingConfig, SeedItem, UiConfig};

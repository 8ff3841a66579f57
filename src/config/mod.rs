//! Viewer configuration: TOML file under the user config dir, CLI
//! overrides applied by the binary.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, UiConfig};

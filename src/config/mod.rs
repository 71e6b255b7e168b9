//! Configuration loading, resolution and persistence.

mod manager;

pub use manager::{
    ConfigFile, ConfigManager, DEFAULT_ENDPOINT, QuoConfig, ResolveOptions, ResolvedConfig,
    resolve_config,
};

//! Configuration file management and provider settings.

mod manager;

pub use manager::{
    BavardConfig, ConfigFile, ConfigManager, DEFAULT_MODEL, DEFAULT_PROVIDER, ProviderConfig,
    ResolveOptions, ResolvedConfig, resolve_config,
};

#[cfg(feature = "cli")]
pub mod cli;
pub mod local_storage;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use local_storage::LocalStorage;
pub use toml_config::TomlConfig;

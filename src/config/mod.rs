//! Configuration module.
//!
//! Key bindings for the terminal host and the layered config loader
//! (defaults, TOML file, environment, command line).

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, load_config_with_precedence, merge_config,
    CliOverrides, ConfigError, ConfigFile, ResolvedConfig,
};

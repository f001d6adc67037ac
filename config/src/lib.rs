//! Load configuration from XDG `config.toml` and a project `.env`, then
//! apply it to the process environment with priority:
//! **existing env > .env > XDG**.
//!
//! Binaries call [`load_and_apply`] once at startup so that everything
//! downstream (gateway key, remote URL, model override) can be read with
//! plain `std::env::var`.

mod env_file;
mod xdg;

use std::path::Path;
use thiserror::Error;

/// App name used for the XDG path `~/.config/promptforge/config.toml`.
pub const APP_NAME: &str = "promptforge";

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("read .env: {0}")]
    EnvFileRead(std::io::Error),
    #[error("read xdg config: {0}")]
    XdgRead(std::io::Error),
    #[error("parse xdg toml: {0}")]
    XdgParse(#[from] toml::de::Error),
}

/// Loads the `[env]` table from `$XDG_CONFIG_HOME/<app_name>/config.toml`
/// and the `.env` of the project directory, then sets each key that is
/// **not** already present in the process environment.
///
/// When a key appears in both sources, `.env` wins; a key already set in
/// the environment is never touched.
///
/// * `app_name`: usually [`APP_NAME`].
/// * `override_dir`: when `Some`, look for `.env` there instead of the
///   current directory (used by tests).
pub fn load_and_apply(app_name: &str, override_dir: Option<&Path>) -> Result<(), LoadError> {
    let xdg_map = xdg::load_env_map(app_name)?;
    let env_map = env_file::load_env_map(override_dir).map_err(LoadError::EnvFileRead)?;

    let mut keys: Vec<&String> = xdg_map.keys().chain(env_map.keys()).collect();
    keys.sort();
    keys.dedup();

    for key in keys {
        if std::env::var(key).is_ok() {
            continue; // existing env wins
        }
        if let Some(value) = env_map.get(key).or_else(|| xdg_map.get(key)) {
            std::env::set_var(key, value);
        }
    }
    Ok(())
}

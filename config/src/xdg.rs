//! Load the `[env]` table from `$XDG_CONFIG_HOME/<app>/config.toml`.

use std::collections::HashMap;

use crate::LoadError;

#[derive(serde::Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    env: HashMap<String, String>,
}

/// Returns the `[env]` pairs for `app_name`. A missing config dir or file
/// yields an empty map; an unreadable or unparseable file is an error.
pub(crate) fn load_env_map(app_name: &str) -> Result<HashMap<String, String>, LoadError> {
    let Some(config_dir) = dirs::config_dir() else {
        return Ok(HashMap::new());
    };
    let path = config_dir.join(app_name).join("config.toml");
    if !path.is_file() {
        return Ok(HashMap::new());
    }
    let content = std::fs::read_to_string(&path).map_err(LoadError::XdgRead)?;
    let config: ConfigFile = toml::from_str(&content)?;
    Ok(config.env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn with_xdg_home<T>(dir: &std::path::Path, f: impl FnOnce() -> T) -> T {
        let prev = env::var("XDG_CONFIG_HOME").ok();
        env::set_var("XDG_CONFIG_HOME", dir);
        let out = f();
        match prev {
            Some(v) => env::set_var("XDG_CONFIG_HOME", v),
            None => env::remove_var("XDG_CONFIG_HOME"),
        }
        out
    }

    #[test]
    fn missing_config_yields_empty_map() {
        let map = load_env_map("promptforge-test-nonexistent-54321").unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn reads_env_table() {
        let dir = tempfile::tempdir().unwrap();
        let app_dir = dir.path().join("pf-test-app");
        std::fs::create_dir_all(&app_dir).unwrap();
        std::fs::write(
            app_dir.join("config.toml"),
            "[env]\nFOO = \"from_toml\"\nBAR = \"baz\"\n",
        )
        .unwrap();

        let map = with_xdg_home(dir.path(), || load_env_map("pf-test-app")).unwrap();
        assert_eq!(map.get("FOO"), Some(&"from_toml".to_string()));
        assert_eq!(map.get("BAR"), Some(&"baz".to_string()));
    }

    #[test]
    fn config_without_env_table_yields_empty_map() {
        let dir = tempfile::tempdir().unwrap();
        let app_dir = dir.path().join("pf-noenv");
        std::fs::create_dir_all(&app_dir).unwrap();
        std::fs::write(app_dir.join("config.toml"), "[other]\nkey = \"x\"\n").unwrap();

        let map = with_xdg_home(dir.path(), || load_env_map("pf-noenv")).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let app_dir = dir.path().join("pf-bad");
        std::fs::create_dir_all(&app_dir).unwrap();
        std::fs::write(app_dir.join("config.toml"), "not toml [[[\n").unwrap();

        let result = with_xdg_home(dir.path(), || load_env_map("pf-bad"));
        assert!(matches!(result, Err(LoadError::XdgParse(_))));
    }
}

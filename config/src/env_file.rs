//! Parse a project `.env` into a key-value map. Nothing is written to the
//! process environment here; precedence is applied in the crate root.

use std::collections::HashMap;
use std::path::Path;

/// Loads `.env` from `override_dir` (or the current directory) into a map.
/// A missing file is not an error; it yields an empty map.
pub(crate) fn load_env_map(
    override_dir: Option<&Path>,
) -> std::io::Result<HashMap<String, String>> {
    let dir = match override_dir {
        Some(d) => d.to_path_buf(),
        None => match std::env::current_dir() {
            Ok(d) => d,
            Err(_) => return Ok(HashMap::new()),
        },
    };
    let path = dir.join(".env");
    if !path.is_file() {
        return Ok(HashMap::new());
    }
    let content = std::fs::read_to_string(path)?;
    Ok(parse(&content))
}

/// Line-oriented parser: `KEY=VALUE`, `#` comment lines and blank lines
/// skipped, keys and values trimmed, surrounding quotes stripped.
/// No multiline values or line continuations.
fn parse(content: &str) -> HashMap<String, String> {
    content.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<(String, String)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key.to_string(), unquote(value.trim())))
}

/// Strips one pair of surrounding quotes. Double-quoted values support the
/// `\"` escape; single-quoted values are taken literally.
fn unquote(value: &str) -> String {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        return value[1..value.len() - 1].replace("\\\"", "\"");
    }
    if value.len() >= 2 && value.starts_with('\'') && value.ends_with('\'') {
        return value[1..value.len() - 1].to_string();
    }
    value.to_string()
}

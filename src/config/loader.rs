//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{RegistrarError, RegistrarResult};

use super::types::{Config, ConfigWarning, LogLevel};

/// Project config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "registrar.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> RegistrarResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| RegistrarError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults.
///
/// The first file that exists wins; a file that exists but does not parse is
/// an error rather than a silent fallback.
pub fn load_or_default(project_root: Option<&Path>) -> RegistrarResult<(Config, Vec<ConfigWarning>)> {
    let candidates = project_root
        .map(|root| root.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(user_config_path());

    for path in candidates {
        if path.exists() {
            tracing::debug!(path = %path.display(), "loading config");
            let (config, warnings) = load_with_warnings(&path)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// Apply environment variable overrides (REGISTRAR_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    // REGISTRAR_DATA_FILE
    if let Ok(path) = std::env::var("REGISTRAR_DATA_FILE") {
        if !path.trim().is_empty() {
            config.storage.data_file = PathBuf::from(path);
        }
    }

    // REGISTRAR_LOG
    if let Ok(level) = std::env::var("REGISTRAR_LOG") {
        if let Ok(level) = level.parse::<LogLevel>() {
            config.logging.level = level;
        }
    }

    config
}

/// `<config_dir>/registrar/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("registrar").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

/// Known key closest to `unknown`, if it is at most two edits away.
pub(super) fn suggest_key(unknown: &str) -> Option<String> {
    const KNOWN_KEYS: &[&str] = &["storage", "data_file", "logging", "level"];

    KNOWN_KEYS
        .iter()
        .map(|key| (edit_distance(unknown, key), *key))
        .filter(|(distance, _)| *distance <= 2)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, key)| key.to_string())
}

/// Levenshtein distance over chars, one row at a time.
fn edit_distance(from: &str, to: &str) -> usize {
    let target: Vec<char> = to.chars().collect();
    let mut row: Vec<usize> = (0..=target.len()).collect();

    for (i, source) in from.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &ch) in target.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if source == ch {
                diagonal
            } else {
                1 + diagonal.min(above).min(row[j])
            };
            diagonal = above;
        }
    }

    row[target.len()]
}

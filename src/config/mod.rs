mod init;

pub use init::{render_config, write_default_config};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

use crate::scoring::{resolve, EstimateConfig, PartialConfig, Task};

/// Project-local override file, looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = ".spconfig.json";

/// Get the user config directory path (~/.config/sp-estimate/)
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("sp-estimate"))
}

/// Get the user config file path (~/.config/sp-estimate/config.yaml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.yaml"))
}

/// Effective configuration plus the file it was read from, if any.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: EstimateConfig,
    pub source: Option<PathBuf>,
}

/// Locate the override file.
///
/// An explicit path must exist. Otherwise `.spconfig.json` in `cwd` wins over
/// the user config file. Returns `None` when there is nothing to load.
pub fn find_config_path(explicit: Option<PathBuf>, cwd: &Path) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        if !path.exists() {
            anyhow::bail!("Config file not found at {}", path.display());
        }
        return Ok(Some(path));
    }

    let local = cwd.join(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Ok(Some(local));
    }

    Ok(get_config_path().filter(|p| p.exists()))
}

/// Read a JSON or YAML document, chosen by file extension (`.json` is JSON,
/// anything else is parsed as YAML).
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    if is_json(path) {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}: invalid JSON", path.display()))
    } else {
        serde_saphyr::from_str(&content)
            .with_context(|| format!("Failed to parse {}: invalid YAML", path.display()))
    }
}

pub(crate) fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

/// Load the partial override, if an override file can be found.
pub fn load_overrides(explicit: Option<PathBuf>, cwd: &Path) -> Result<Option<(PartialConfig, PathBuf)>> {
    match find_config_path(explicit, cwd)? {
        Some(path) => {
            let partial: PartialConfig = read_document(&path)?;
            Ok(Some((partial, path)))
        }
        None => Ok(None),
    }
}

/// Load the effective configuration: defaults overlaid with the override file.
///
/// # Errors
///
/// Returns an error if:
/// - An explicit config path does not exist
/// - The override file cannot be read
/// - The override file cannot be parsed
pub fn load_config(explicit: Option<PathBuf>) -> Result<LoadedConfig> {
    let cwd = std::env::current_dir().context("Failed to determine working directory")?;
    load_config_from(explicit, &cwd)
}

pub fn load_config_from(explicit: Option<PathBuf>, cwd: &Path) -> Result<LoadedConfig> {
    let loaded = match load_overrides(explicit, cwd)? {
        Some((partial, path)) => LoadedConfig {
            config: resolve(Some(partial)),
            source: Some(path),
        },
        None => LoadedConfig {
            config: resolve(None),
            source: None,
        },
    };
    Ok(loaded)
}

/// Load a task description (slices plus flags) from a JSON or YAML file.
pub fn load_task(path: &Path) -> Result<Task> {
    if !path.exists() {
        anyhow::bail!("Task file not found at {}", path.display());
    }
    read_document(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::SliceType;
    use std::env;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(name);
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_explicit_missing_path_errors() {
        let dir = temp_dir("sp_estimate_test_missing_explicit");
        let result = find_config_path(Some(dir.join("nope.yaml")), &dir);
        assert!(result.is_err());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_local_json_override_is_loaded() {
        let dir = temp_dir("sp_estimate_test_local_json");
        fs::write(
            dir.join(LOCAL_CONFIG_FILE),
            r#"{ "basePoint": { "api": 10 }, "maxDependencyPenalty": 5 }"#,
        )
        .unwrap();

        let loaded = load_config_from(None, &dir).unwrap();
        assert_eq!(loaded.source, Some(dir.join(LOCAL_CONFIG_FILE)));
        assert_eq!(loaded.config.base_point.get(SliceType::Api), Some(10.0));
        assert_eq!(loaded.config.base_point.get(SliceType::Ui), None);
        assert_eq!(loaded.config.max_dependency_penalty, 5.0);
        assert_eq!(loaded.config.layer_weight, EstimateConfig::default().layer_weight);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_override_with_extra_keys_still_loads() {
        let dir = temp_dir("sp_estimate_test_extra_keys");
        fs::write(
            dir.join(LOCAL_CONFIG_FILE),
            r#"{ "$schema": "x", "basePoint": { "api": 3, "graphql": 4 }, "dependencyWeight": 0.3 }"#,
        )
        .unwrap();

        let loaded = load_config_from(None, &dir).unwrap();
        assert_eq!(loaded.config.base_point.get(SliceType::Api), Some(3.0));
        assert_eq!(loaded.config.dependency_weight, 0.3);
        assert_eq!(loaded.config.bonus, EstimateConfig::default().bonus);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_explicit_yaml_override_wins() {
        let dir = temp_dir("sp_estimate_test_explicit_yaml");
        fs::write(dir.join(LOCAL_CONFIG_FILE), r#"{ "dependencyWeight": 1 }"#).unwrap();
        let explicit = dir.join("team.yaml");
        fs::write(&explicit, "dependencyWeight: 0.5\n").unwrap();

        let loaded = load_config_from(Some(explicit.clone()), &dir).unwrap();
        assert_eq!(loaded.source, Some(explicit));
        assert_eq!(loaded.config.dependency_weight, 0.5);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_invalid_json_reports_path() {
        let dir = temp_dir("sp_estimate_test_invalid_json");
        fs::write(dir.join(LOCAL_CONFIG_FILE), "{ not json").unwrap();

        let err = load_config_from(None, &dir).unwrap_err();
        assert!(format!("{:#}", err).contains(LOCAL_CONFIG_FILE));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_task_yaml() {
        let dir = temp_dir("sp_estimate_test_task_yaml");
        let path = dir.join("task.yaml");
        fs::write(
            &path,
            r#"
slices:
  - type: api
    complexity: medium
    layer: features
hasTest: true
"#,
        )
        .unwrap();

        let task = load_task(&path).unwrap();
        assert_eq!(task.slices.len(), 1);
        assert!(task.has_test);
        assert!(!task.is_refactor);
        assert_eq!(task.estimate(&EstimateConfig::default()).story_points, 5);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_task_missing_file() {
        let path = env::temp_dir().join("sp_estimate_test_no_such_task.json");
        let _ = fs::remove_file(&path);
        assert!(load_task(&path).is_err());
    }

    #[test]
    fn test_is_json_by_extension() {
        assert!(is_json(Path::new("a/.spconfig.json")));
        assert!(is_json(Path::new("task.JSON")));
        assert!(!is_json(Path::new("config.yaml")));
        assert!(!is_json(Path::new("config")));
    }
}

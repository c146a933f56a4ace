use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::io::Write;
use std::path::Path;

use super::is_json;
use crate::scoring::EstimateConfig;

/// Serialize a configuration as JSON or YAML, chosen by the target extension.
pub fn render_config(config: &EstimateConfig, path: &Path) -> Result<String> {
    if is_json(path) {
        let mut json = serde_json::to_string_pretty(config).context("Failed to serialize config")?;
        json.push('\n');
        Ok(json)
    } else {
        serde_saphyr::to_string(config).map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))
    }
}

/// Write the built-in defaults to `path` so they can be tuned by hand.
///
/// Refuses to replace an existing file unless `force` is set. The file is
/// written atomically and never left half-written.
pub fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    let content = render_config(&EstimateConfig::default(), path)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    file.commit()
        .with_context(|| format!("Failed to save config to {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::read_document;
    use crate::scoring::{resolve, PartialConfig};
    use std::env;
    use std::fs;

    #[test]
    fn test_write_json_and_reload() {
        let path = env::temp_dir().join("sp_estimate_test_init.json");
        let _ = fs::remove_file(&path);

        write_default_config(&path, false).unwrap();
        let partial: PartialConfig = read_document(&path).unwrap();
        assert_eq!(resolve(Some(partial)), EstimateConfig::default());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_write_yaml_and_reload() {
        let path = env::temp_dir().join("sp_estimate_test_init_dir").join("config.yaml");
        let _ = fs::remove_file(&path);

        write_default_config(&path, false).unwrap();
        let config: EstimateConfig = read_document(&path).unwrap();
        assert_eq!(config, EstimateConfig::default());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_refuses_to_overwrite_without_force() {
        let path = env::temp_dir().join("sp_estimate_test_init_existing.json");
        fs::write(&path, "{}").unwrap();

        assert!(write_default_config(&path, false).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");

        write_default_config(&path, true).unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("basePoint"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_render_uses_wire_names() {
        let yaml = render_config(&EstimateConfig::default(), Path::new("config.yaml")).unwrap();
        assert!(yaml.contains("complexityMultiplier"));
        assert!(yaml.contains("maxDependencyPenalty"));
        assert!(yaml.contains("sharedAcrossFeatures"));
    }
}

// Configuration loader
// Loads engine settings from ~/.haven/config.toml when present

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::settings::EngineConfig;

/// Load configuration from the Haven config file, falling back to
/// defaults when no file exists. A crisis engine must come up even on a
/// fresh machine, so an absent file is not an error.
pub fn load_config() -> Result<EngineConfig> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    let config_path = home.join(".haven/config.toml");

    if !config_path.exists() {
        return Ok(EngineConfig::default());
    }

    load_from_path(&config_path)
}

/// Load configuration from an explicit TOML file
pub fn load_from_path(path: &Path) -> Result<EngineConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    #[derive(serde::Deserialize)]
    struct TomlConfig {
        #[serde(default = "default_intervention_threshold")]
        intervention_threshold: u8,
        #[serde(default = "default_store_timeout_ms")]
        store_timeout_ms: u64,
        #[serde(default)]
        log_below_threshold: bool,
        #[serde(default)]
        lexicon_path: Option<PathBuf>,
    }

    fn default_intervention_threshold() -> u8 {
        EngineConfig::default().intervention_threshold
    }

    fn default_store_timeout_ms() -> u64 {
        EngineConfig::default().store_timeout_ms
    }

    let toml_config: TomlConfig =
        toml::from_str(&contents).context("Failed to parse config.toml")?;

    Ok(EngineConfig {
        intervention_threshold: toml_config.intervention_threshold,
        store_timeout_ms: toml_config.store_timeout_ms,
        log_below_threshold: toml_config.log_below_threshold,
        lexicon_path: toml_config.lexicon_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_toml_file() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "intervention_threshold = 7")?;
        writeln!(file, "log_below_threshold = true")?;

        let config = load_from_path(file.path())?;
        assert_eq!(config.intervention_threshold, 7);
        assert!(config.log_below_threshold);
        // unset keys fall back to defaults
        assert_eq!(config.store_timeout_ms, 2_000);
        Ok(())
    }

    #[test]
    fn test_malformed_toml_fails_with_context() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "intervention_threshold = [not a number")?;
        assert!(load_from_path(file.path()).is_err());
        Ok(())
    }
}

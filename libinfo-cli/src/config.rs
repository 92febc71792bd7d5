use std::path::{Path, PathBuf};

use serde::Deserialize;

/// CLI configuration read from `~/.config/libinfo/config.toml`.
///
/// Supplies the package namespace of the hosting application when it is
/// not passed on the command line.
#[derive(Debug, Deserialize, Default)]
pub struct CliConfig {
    pub package_name: Option<String>,
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .expect("Could not determine config directory")
        .join("libinfo")
        .join("config.toml")
}

/// Load configuration. An explicitly given path must exist; the default
/// path is optional and falls back to an empty config.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<CliConfig> {
    match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found at {}", path.display());
            }
            read_config(path)
        }
        None => {
            let path = config_path();
            if !path.exists() {
                return Ok(CliConfig::default());
            }
            read_config(&path)
        }
    }
}

fn read_config(path: &Path) -> anyhow::Result<CliConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: CliConfig = toml::from_str(&content)?;
    Ok(config)
}

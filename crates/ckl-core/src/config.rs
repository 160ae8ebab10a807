use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/ckl/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CklConfig {
    /// Width of the rendered progress meter in characters (0 = label only).
    pub progress_bar_width: usize,
    /// Override for the state database file; defaults to the XDG state dir.
    #[serde(default)]
    pub state_db_path: Option<PathBuf>,
}

impl Default for CklConfig {
    fn default() -> Self {
        Self {
            progress_bar_width: 20,
            state_db_path: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ckl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CklConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = CklConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: CklConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = CklConfig::default();
        assert_eq!(cfg.progress_bar_width, 20);
        assert!(cfg.state_db_path.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = CklConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: CklConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.progress_bar_width, cfg.progress_bar_width);
        assert_eq!(parsed.state_db_path, cfg.state_db_path);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            progress_bar_width = 10
            state_db_path = "/tmp/ckl-test/state.db"
        "#;
        let cfg: CklConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.progress_bar_width, 10);
        assert_eq!(
            cfg.state_db_path.as_deref(),
            Some(std::path::Path::new("/tmp/ckl-test/state.db"))
        );
    }

    #[test]
    fn config_toml_db_path_optional() {
        let toml = "progress_bar_width = 30";
        let cfg: CklConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.progress_bar_width, 30);
        assert!(cfg.state_db_path.is_none());
    }
}

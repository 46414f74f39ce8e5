use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/dref/config.toml`.
///
/// The plain-HTTP handler's 30 s timeout is part of its contract and is not
/// configurable; these knobs cover the authenticated-service path, which
/// would otherwise block the caller indefinitely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrefConfig {
    /// Total request timeout for authenticated control-plane fetches, in seconds.
    pub service_timeout_secs: u64,
    /// TCP connect timeout for authenticated control-plane fetches, in seconds.
    pub connect_timeout_secs: u64,
    /// Optional static bearer token for authenticated services.
    /// `DREF_TOKEN` in the environment takes precedence.
    #[serde(default)]
    pub service_token: Option<String>,
}

impl Default for DrefConfig {
    fn default() -> Self {
        Self {
            service_timeout_secs: 120,
            connect_timeout_secs: 15,
            service_token: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dref")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DrefConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = DrefConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: DrefConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = DrefConfig::default();
        assert_eq!(cfg.service_timeout_secs, 120);
        assert_eq!(cfg.connect_timeout_secs, 15);
        assert!(cfg.service_token.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = DrefConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: DrefConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.service_timeout_secs, cfg.service_timeout_secs);
        assert_eq!(parsed.connect_timeout_secs, cfg.connect_timeout_secs);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            service_timeout_secs = 45
            connect_timeout_secs = 5
            service_token = "abc123"
        "#;
        let cfg: DrefConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.service_timeout_secs, 45);
        assert_eq!(cfg.connect_timeout_secs, 5);
        assert_eq!(cfg.service_token.as_deref(), Some("abc123"));
    }

    #[test]
    fn config_toml_token_optional() {
        let toml = r#"
            service_timeout_secs = 60
            connect_timeout_secs = 10
        "#;
        let cfg: DrefConfig = toml::from_str(toml).unwrap();
        assert!(cfg.service_token.is_none());
    }
}

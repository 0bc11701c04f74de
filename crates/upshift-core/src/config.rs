use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/upshift/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpshiftConfig {
    /// Default site address for checks; `None` means derive it from the
    /// page being checked.
    #[serde(default)]
    pub site_address: Option<String>,
    /// Switch toward HTTPS (default) instead of HTTP.
    #[serde(default = "default_http_to_https")]
    pub http_to_https: bool,
}

fn default_http_to_https() -> bool {
    true
}

impl Default for UpshiftConfig {
    fn default() -> Self {
        Self {
            site_address: None,
            http_to_https: true,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("upshift")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UpshiftConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UpshiftConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: UpshiftConfig = toml::from_str(&data)?;
    Ok(cfg)
}

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::transport::HttpClientConfig;

/// Endpoint the document URLs are templated onto.
pub const DEFAULT_BASE_URL: &str =
    "https://zehsonesdsext-tjd0i1flxa.dispatcher.sa1.hana.ondemand.com/v1/SDS//DocContentSet";

/// Listing endpoint used by `sdsdl scrape` to refresh the local snapshot.
pub const DEFAULT_LISTING_URL: &str =
    "https://zehsonesdsext-tjd0i1flxa.dispatcher.sa1.hana.ondemand.com/v1/SDS/DocHeaderSet";

/// HTTP client parameters (optional `[http]` section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    /// Connect timeout in seconds (None = bounded only by `timeout_secs`).
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    /// Maximum number of redirects followed.
    pub max_redirects: u32,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            connect_timeout_secs: None,
            max_redirects: 10,
        }
    }
}

impl HttpConfig {
    pub fn client_config(&self) -> HttpClientConfig {
        HttpClientConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
            max_redirects: self.max_redirects,
        }
    }
}

/// Global configuration loaded from `~/.config/sdsdl/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SdsConfig {
    /// Snapshot file the records are read from (relative paths resolve against the working dir).
    pub input_path: PathBuf,
    /// Directory the PDFs are written into.
    pub output_dir: PathBuf,
    /// Base endpoint for document URLs.
    pub base_url: String,
    /// Listing endpoint for the scrape helper.
    pub listing_url: String,
    /// Abort the run when the snapshot cannot be read or parsed (default: run with zero records).
    #[serde(default)]
    pub strict_input: bool,
    #[serde(default)]
    pub http: HttpConfig,
}

impl Default for SdsConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("main.json"),
            output_dir: PathBuf::from("PDFs"),
            base_url: DEFAULT_BASE_URL.to_string(),
            listing_url: DEFAULT_LISTING_URL.to_string(),
            strict_input: false,
            http: HttpConfig::default(),
        }
    }
}

impl SdsConfig {
    /// Rejects endpoints that are not absolute http(s) URLs.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("base_url", &self.base_url), ("listing_url", &self.listing_url)] {
            let parsed =
                url::Url::parse(value).with_context(|| format!("{} is not a URL: {}", name, value))?;
            if parsed.scheme() != "http" && parsed.scheme() != "https" {
                anyhow::bail!("{} must be http or https, got {}", name, parsed.scheme());
            }
        }
        if self.http.timeout_secs == 0 {
            anyhow::bail!("http.timeout_secs must be greater than zero");
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sdsdl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from an explicit path.
pub fn load_from_path(path: &Path) -> Result<SdsConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: SdsConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SdsConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SdsConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(&path)
}

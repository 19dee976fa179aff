//! CLI configuration — where the API lives.
//!
//! Resolution order: `--api-url` flag, then the `FOLIO_API_URL` environment
//! variable, then `api_url` in `<config dir>/folio/config.toml`.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    api_url: Option<String>,
}

/// The default config file location: `<config dir>/folio/config.toml`.
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("folio").join("config.toml"))
}

fn from_file() -> Result<Option<String>> {
    let Some(path) = config_file_path() else {
        return Ok(None);
    };
    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e).with_context(|| format!("reading {}", path.display())),
    };
    let config: FileConfig =
        toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
    Ok(config.api_url)
}

/// Resolve the API base URL or explain how to configure one.
pub fn resolve_api_url(flag: Option<String>) -> Result<String> {
    if let Some(url) = flag {
        return Ok(url);
    }
    if let Ok(url) = std::env::var("FOLIO_API_URL") {
        if !url.is_empty() {
            return Ok(url);
        }
    }
    if let Some(url) = from_file()? {
        return Ok(url);
    }
    bail!(
        "no API URL configured — pass --api-url, set FOLIO_API_URL, \
         or put `api_url = \"…\"` in the config file"
    );
}

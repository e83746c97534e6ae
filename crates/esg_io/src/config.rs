//! crates/esg_io/src/config.rs
//! Site configuration. Every field has a default so an absent or partial
//! config file is valid.

use std::fs;
use std::path::Path;

use esg_core::{TopicId, DEFAULT_TOPIC};
use serde::{Deserialize, Serialize};

use crate::{IoError, IoResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Appended to the page title: "{topic} — {product_name}".
    pub product_name: String,
    /// Topic shown when no selection exists.
    pub default_topic: String,
    /// Fixed suffix of the report header tag.
    pub header_suffix: String,
    /// `<html lang>` value; dates are always rendered day-month-year.
    pub lang: String,
    /// Cosmetic delay between activation and navigation.
    pub nav_delay_ms: u64,
    /// Delay before the integrity bar fill is applied.
    pub bar_delay_ms: u64,
    /// Region ids the page template does not provide.
    pub omit_regions: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            product_name: "ESG Narrative Intelligence".to_string(),
            default_topic: DEFAULT_TOPIC.to_string(),
            header_suffix: "ESG Intelligence Brief".to_string(),
            lang: "en-GB".to_string(),
            nav_delay_ms: 1100,
            bar_delay_ms: 300,
            omit_regions: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Parsed default topic. Validated in [`load_config`].
    pub fn default_topic_id(&self) -> Result<TopicId, IoError> {
        self.default_topic
            .parse()
            .map_err(|e: esg_core::CoreError| IoError::Invalid(format!("default_topic: {e}")))
    }
}

/// Load config from `path`, or defaults when `path` is `None`.
pub fn load_config(path: Option<&Path>) -> IoResult<SiteConfig> {
    let Some(path) = path else {
        return Ok(SiteConfig::default());
    };
    let bytes = fs::read(path).map_err(|e| IoError::Path(format!("{}: {e}", path.display())))?;
    let cfg: SiteConfig = serde_json::from_slice(&bytes).map_err(|e| IoError::Json {
        pointer: "/".to_string(),
        msg: format!("{}: {e}", path.display()),
    })?;
    cfg.default_topic_id()?;
    if cfg.product_name.trim().is_empty() {
        return Err(IoError::Invalid("product_name must not be empty".into()));
    }
    Ok(cfg)
}

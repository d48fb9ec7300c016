//! Server configuration

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Settings read from the environment at startup
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub log_filter: String,
    pub assets_dir: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_filter: std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "beart_marketing=debug,beart_contact=debug,tower_http=debug".to_string()),
            assets_dir: std::env::var("ASSETS_DIR")
                .unwrap_or_else(|_| "assets".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_covers_site_crates() {
        let config = SiteConfig::default();
        if std::env::var("RUST_LOG").is_err() {
            assert!(config.log_filter.contains("beart_marketing"));
        }
        assert!(!config.assets_dir.is_empty());
    }
}

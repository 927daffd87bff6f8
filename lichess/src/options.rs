use std::path::PathBuf;

use anyhow::Result;
use common::{Config, ConfigLoader, FsExt};
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_ENDPOINT: &str = "https://lichess.org/api/";
pub const DEFAULT_CACHE_DIR: &str = ".lichess_cache";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LichessOptions {
    pub api_endpoint: String,
    pub page_size: usize,
    pub request_interval_ms: u64,
    pub user_agent: String,
    pub cache_dir: PathBuf,
}

impl Config for LichessOptions {
    fn load(config: &ConfigLoader) -> Result<Self> {
        let cache_dir = match config.get_relative_path("cache_dir") {
            Ok(cache_dir) => cache_dir,
            Err(_) => DEFAULT_CACHE_DIR.relative_to_cwd()?,
        };

        Ok(Self {
            api_endpoint: config
                .get("api_endpoint")
                .and_then(|v| v.as_string())
                .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string()),
            page_size: config
                .get("page_size")
                .and_then(|v| v.as_usize())
                .filter(|&v| v > 0)
                .unwrap_or(100),
            request_interval_ms: config
                .get("request_interval_ms")
                .and_then(|v| v.as_u64())
                .unwrap_or(1500),
            user_agent: config
                .get("user_agent")
                .and_then(|v| v.as_string())
                .unwrap_or_else(|| {
                    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
                }),
            cache_dir,
        })
    }
}

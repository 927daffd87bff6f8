use anyhow::Result;
use common::{Config, ConfigLoader};
use move_tree::PlyFilter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerOptions {
    pub plies: PlyFilter,
    /// Width the move list is wrapped to. Also read from `COLUMNS`.
    pub columns: usize,
    /// Listing at least this many games asks for confirmation first.
    pub games_confirm_threshold: usize,
}

impl Default for ExplorerOptions {
    fn default() -> Self {
        Self {
            plies: PlyFilter::default(),
            columns: 80,
            games_confirm_threshold: 10,
        }
    }
}

impl Config for ExplorerOptions {
    fn load(config: &ConfigLoader) -> Result<Self> {
        let defaults = Self::default();

        let plies = match config.get("plies").and_then(|v| v.as_string()) {
            Some(plies) => plies.parse()?,
            None => defaults.plies,
        };

        Ok(Self {
            plies,
            columns: config
                .get("columns")
                .and_then(|v| v.as_usize())
                .filter(|&v| v > 0)
                .unwrap_or(defaults.columns),
            games_confirm_threshold: config
                .get("games_confirm_threshold")
                .and_then(|v| v.as_usize())
                .unwrap_or(defaults.games_confirm_threshold),
        })
    }
}

use anyhow::{bail, Context, Result};
use chrono::Utc;
use log::{info, warn};

use crate::{
    process_game, GameCount, GameFilter, GameJson, GamesApi, GamesPage, LichessGame, PageKey,
};

/// Fetches every finished standard game of `username`, one page at a time, and applies `filter`.
pub async fn fetch_all_games<A: GamesApi>(
    api: &A,
    username: &str,
    page_size: usize,
    filter: &GameFilter,
) -> Result<Vec<LichessGame>> {
    if page_size == 0 {
        bail!("page_size must be greater than zero");
    }

    info!("Requesting profile information for {}", username);
    let count_page = api.fetch_page(&PageKey::game_count(username)).await?;
    let count: GameCount = serde_json::from_value(count_page)
        .context("Unexpected response to the game count request")?;

    let total_pages = count.nb_results.div_ceil(page_size);
    info!(
        "{} has {} games over {} pages",
        username, count.nb_results, total_pages
    );

    let mut games = Vec::new();
    for page in 1..=total_pages {
        info!("Requesting page {} of {}", page, total_pages);

        let key = PageKey::games_page(username, page, page_size);
        let data: GamesPage = serde_json::from_value(api.fetch_page(&key).await?)
            .with_context(|| format!("Unexpected response for page {}", page))?;

        for raw in data.current_page_results {
            match serde_json::from_value::<GameJson>(raw) {
                Ok(game) => games.extend(process_game(username, game)),
                Err(err) => warn!("Skipping unreadable game on page {}: {}", page, err),
            }
        }
    }

    let fetched = games.len();
    let games = filter.apply(games, Utc::now().timestamp_millis());
    info!("Kept {} of {} finished games", games.len(), fetched);

    Ok(games)
}

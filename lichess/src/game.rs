use log::debug;
use move_tree::{Color, GameRecord, Outcome};
use serde::Deserialize;

const LICHESS_URL: &str = "https://lichess.org/";
const COMPUTER_NAME: &str = "Stockfish";

/// Statuses of games that ended in a win, draw or loss. Aborted or unfinished games are skipped.
const FINISHED_STATUSES: [&str; 4] = ["mate", "resign", "stalemate", "draw"];
const DRAW_STATUSES: [&str; 2] = ["stalemate", "draw"];

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GameCount {
    #[serde(default)]
    pub nb_results: usize,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GamesPage {
    #[serde(default)]
    pub current_page_results: Vec<serde_json::Value>,
}

/// A game as returned by the API. Only the fields the explorer uses are read.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GameJson {
    #[serde(default)]
    pub id: String,
    pub variant: String,
    #[serde(default)]
    pub moves: String,
    pub status: String,
    pub players: PlayersJson,
    #[serde(default)]
    pub winner: Option<Color>,
    #[serde(default)]
    pub speed: String,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PlayersJson {
    pub white: PlayerJson,
    pub black: PlayerJson,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PlayerJson {
    /// Absent for the computer opponent.
    #[serde(rename = "userId", default)]
    pub user_id: Option<String>,
}

/// A finished standard game of the tracked user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LichessGame {
    pub record: GameRecord,
    pub id: String,
    pub white: Option<String>,
    pub black: Option<String>,
    pub url: String,
    pub speed: String,
    pub created_at: i64,
}

impl LichessGame {
    pub fn against_computer(&self) -> bool {
        self.white.is_none() || self.black.is_none()
    }

    pub fn white_name(&self) -> &str {
        self.white.as_deref().unwrap_or(COMPUTER_NAME)
    }

    pub fn black_name(&self) -> &str {
        self.black.as_deref().unwrap_or(COMPUTER_NAME)
    }
}

/// Converts an API game into a game of `username`, or `None` for games that do not count:
/// variants, games without moves, and games that did not finish.
pub fn process_game(username: &str, game: GameJson) -> Option<LichessGame> {
    if game.variant != "standard" || game.moves.trim().is_empty() {
        debug!("Skipping {} game {}", game.variant, game.id);
        return None;
    }

    if !FINISHED_STATUSES.contains(&game.status.as_str()) {
        debug!("Skipping game {} with status {}", game.id, game.status);
        return None;
    }

    let is_user = |player: &PlayerJson| {
        player
            .user_id
            .as_deref()
            .is_some_and(|id| id.eq_ignore_ascii_case(username))
    };

    let color = if is_user(&game.players.white) {
        Color::White
    } else {
        Color::Black
    };

    let outcome = if DRAW_STATUSES.contains(&game.status.as_str()) {
        Outcome::Draw
    } else if game.winner == Some(color) {
        Outcome::Win
    } else {
        Outcome::Loss
    };

    let moves = game.moves.split_whitespace().map(String::from).collect();
    let url = game
        .url
        .unwrap_or_else(|| format!("{}{}", LICHESS_URL, game.id));

    Some(LichessGame {
        record: GameRecord::new(moves, color, outcome),
        id: game.id,
        white: game.players.white.user_id,
        black: game.players.black.user_id,
        url,
        speed: game.speed,
        created_at: game.created_at,
    })
}

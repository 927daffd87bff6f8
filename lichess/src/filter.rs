use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use anyhow::anyhow;
use chrono::Duration;

use crate::LichessGame;

/// Lichess time control categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Speed {
    UltraBullet,
    Bullet,
    Blitz,
    Rapid,
    Classical,
    Unlimited,
    Correspondence,
}

impl Speed {
    pub const ALL: [Speed; 7] = [
        Speed::UltraBullet,
        Speed::Bullet,
        Speed::Blitz,
        Speed::Rapid,
        Speed::Classical,
        Speed::Unlimited,
        Speed::Correspondence,
    ];

    /// The name used by the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Speed::UltraBullet => "ultraBullet",
            Speed::Bullet => "bullet",
            Speed::Blitz => "blitz",
            Speed::Rapid => "rapid",
            Speed::Classical => "classical",
            Speed::Unlimited => "unlimited",
            Speed::Correspondence => "correspondence",
        }
    }
}

impl Display for Speed {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Speed {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Speed::ALL
            .into_iter()
            .find(|speed| speed.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                anyhow!(
                    "{} is not a speed, expected one of {}",
                    s,
                    Speed::ALL.map(|s| s.as_str()).join(", ")
                )
            })
    }
}

const DAYS_PER_MONTH: i64 = 30;

/// Restricts which fetched games take part in the tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameFilter {
    /// Keep only these time controls. Empty keeps all.
    pub speeds: Vec<Speed>,
    /// Keep only games created in the last `months` months of 30 days.
    pub months: Option<u32>,
    /// Drop games in which either side has no account.
    pub exclude_computer: bool,
}

impl GameFilter {
    /// `now_ms` is the current time as milliseconds since the epoch, like `createdAt`.
    pub fn matches(&self, game: &LichessGame, now_ms: i64) -> bool {
        if !self.speeds.is_empty() && !self.speeds.iter().any(|s| s.as_str() == game.speed) {
            return false;
        }

        // A window too long to represent keeps every game.
        let oldest = self
            .months
            .and_then(|months| Duration::try_days(DAYS_PER_MONTH * months as i64))
            .and_then(|window| now_ms.checked_sub(window.num_milliseconds()));
        if let Some(oldest) = oldest {
            if game.created_at < oldest {
                return false;
            }
        }

        if self.exclude_computer && game.against_computer() {
            return false;
        }

        true
    }

    pub fn apply(&self, games: Vec<LichessGame>, now_ms: i64) -> Vec<LichessGame> {
        games
            .into_iter()
            .filter(|game| self.matches(game, now_ms))
            .collect()
    }
}

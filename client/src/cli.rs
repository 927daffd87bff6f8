use clap::Parser;
use lichess::{CacheMode, GameFilter, Speed};
use move_tree::PlyFilter;

#[derive(Parser, Debug)]
#[clap(author, version)]
#[clap(name = "Lichess Opening Explorer")]
#[clap(about = "Explore the openings of a Lichess player's games one move at a time", long_about = None)]
pub struct Cli {
    /// Lichess username. Asked for when not given.
    pub username: Option<String>,

    /// Limit games to certain time controls.
    #[clap(long, num_args = 1..)]
    pub speeds: Vec<Speed>,

    /// Limit games to those played in the past X months.
    #[clap(long, value_name = "X")]
    pub months: Option<u32>,

    /// Exclude games against the computer.
    #[clap(long)]
    pub exclude_computer: bool,

    /// Refresh the API cache for the current user.
    #[clap(long, conflicts_with = "no_cache")]
    pub refresh_cache: bool,

    /// Do not read from or write to the cache.
    #[clap(long)]
    pub no_cache: bool,

    /// Directory for the cache.
    #[clap(long)]
    pub cachedir: Option<String>,

    /// Which plies form the tree: own or all.
    #[clap(long)]
    pub plies: Option<PlyFilter>,

    #[clap(short, long, default_value_t = String::from("explorer.conf"))]
    pub config: String,

    #[clap(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn cache_mode(&self) -> CacheMode {
        if self.no_cache {
            CacheMode::Disabled
        } else if self.refresh_cache {
            CacheMode::Refresh
        } else {
            CacheMode::ReadWrite
        }
    }

    pub fn game_filter(&self) -> GameFilter {
        GameFilter {
            speeds: self.speeds.clone(),
            months: self.months,
            exclude_computer: self.exclude_computer,
        }
    }
}

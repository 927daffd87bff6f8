mod cli;

use std::io::{stdin, stdout, BufRead, Write};

use anyhow::{bail, Result};
use clap::Parser;
use cli::Cli;
use common::{get_env_usize, ConfigLoader, FsExt};
use dotenv::dotenv;
use env_logger::Env;
use explorer::{run_explorer, ExploredGame, ExplorerOptions, Session};
use lichess::{
    fetch_all_games, CacheMode, CachedApi, DirCache, LichessClient, LichessGame, LichessOptions,
    NoCache,
};
use log::{debug, info};

fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    let config_path = cli.config.relative_to_cwd()?;
    let config = ConfigLoader::from_optional_file(config_path, "explorer".to_string())?;

    let mut lichess_options: LichessOptions = config.load()?;
    if let Some(cachedir) = &cli.cachedir {
        lichess_options.cache_dir = cachedir.relative_to_cwd()?;
    }

    let mut explorer_options: ExplorerOptions = config.load()?;
    if let Some(plies) = cli.plies {
        explorer_options.plies = plies;
    }

    let username = match &cli.username {
        Some(username) => username.clone(),
        None => prompt_username()?,
    };

    let mut builder = tokio::runtime::Builder::new_multi_thread();

    builder.enable_all();

    if let Some(worker_threads) = get_env_usize("TOKIO_THREADS")? {
        builder.worker_threads(worker_threads);
    }

    debug!("{:?}", builder);

    println!("\nLoading user data...");
    let games = builder
        .build()?
        .block_on(load_games(&cli, &lichess_options, &username))?;

    info!("Exploring {} games of {}", games.len(), username);

    let games = games.into_iter().map(to_explored_game).collect();
    let mut session = Session::new(games, explorer_options);

    run_explorer(&mut session, stdin().lock(), stdout().lock())
}

async fn load_games(
    cli: &Cli,
    options: &LichessOptions,
    username: &str,
) -> Result<Vec<LichessGame>> {
    let client = LichessClient::new(options)?;
    let filter = cli.game_filter();

    match cli.cache_mode() {
        CacheMode::Disabled => {
            let api = CachedApi::new(client, NoCache, CacheMode::Disabled);
            fetch_all_games(&api, username, options.page_size, &filter).await
        }
        mode => {
            let cache = DirCache::new(options.cache_dir.clone())?;
            let api = CachedApi::new(client, cache, mode);
            fetch_all_games(&api, username, options.page_size, &filter).await
        }
    }
}

fn to_explored_game(game: LichessGame) -> ExploredGame {
    ExploredGame {
        white: game.white_name().to_owned(),
        black: game.black_name().to_owned(),
        url: game.url,
        record: game.record,
    }
}

fn prompt_username() -> Result<String> {
    print!("Please enter your Lichess username: ");
    stdout().flush()?;

    let mut username = String::new();
    stdin().lock().read_line(&mut username)?;

    let username = username.trim();
    if username.is_empty() {
        bail!("A username is required");
    }

    Ok(username.to_owned())
}

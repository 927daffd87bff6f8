use std::future::Future;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use log::{debug, info, warn};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tokio::sync::Mutex;
use tokio::time::{sleep_until, Instant};

use crate::{CacheMode, LichessOptions, PageCache, PageKey};

/// Source of raw API pages.
#[allow(async_fn_in_trait)]
pub trait GamesApi {
    async fn fetch_page(&self, key: &PageKey) -> Result<Value>;
}

/// Spaces out the requests run through it by a minimum interval.
struct Throttle {
    interval: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl Throttle {
    fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_request: Mutex::new(None),
        }
    }

    /// Waits until `interval` has passed since the previous request finished, then runs `request`.
    /// The lock is held for the whole request so concurrent callers are spaced out as well.
    async fn run<F: Future>(&self, request: F) -> F::Output {
        let mut last_request = self.last_request.lock().await;
        if let Some(last) = *last_request {
            sleep_until(last + self.interval).await;
        }

        let output = request.await;
        *last_request = Some(Instant::now());

        output
    }
}

fn check_status(status: StatusCode, url: &str) -> Result<()> {
    match status {
        status if status.is_success() => Ok(()),
        StatusCode::TOO_MANY_REQUESTS => {
            bail!("Lichess is rate limiting requests (HTTP 429), wait a minute and try again")
        }
        StatusCode::NOT_FOUND => bail!("{} was not found (HTTP 404)", url),
        status => bail!("Request to {} returned HTTP {}", url, status),
    }
}

/// HTTP client for the Lichess API that keeps a minimum interval between requests.
pub struct LichessClient {
    client: Client,
    endpoint: String,
    throttle: Throttle,
}

impl LichessClient {
    pub fn new(options: &LichessOptions) -> Result<Self> {
        let client = Client::builder()
            .user_agent(options.user_agent.as_str())
            .build()
            .context("Failed to build the HTTP client")?;

        let mut endpoint = options.api_endpoint.clone();
        if !endpoint.ends_with('/') {
            endpoint.push('/');
        }

        Ok(Self {
            client,
            endpoint,
            throttle: Throttle::new(Duration::from_millis(options.request_interval_ms)),
        })
    }

    pub fn url(&self, key: &PageKey) -> String {
        format!("{}{}", self.endpoint, key.path())
    }
}

impl GamesApi for LichessClient {
    async fn fetch_page(&self, key: &PageKey) -> Result<Value> {
        let url = self.url(key);
        info!("Sending request to {} {:?}", url, key.query());

        let request = self.client.get(&url).query(&key.query()).send();
        let response = self
            .throttle
            .run(request)
            .await
            .with_context(|| format!("Request to {} failed", url))?;

        check_status(response.status(), &url)?;

        let page = response
            .json::<Value>()
            .await
            .with_context(|| format!("Response from {} was not valid JSON", url))?;
        debug!("Received response from {}", url);

        Ok(page)
    }
}

/// Memoizes the pages of another [`GamesApi`].
pub struct CachedApi<A, C> {
    api: A,
    cache: C,
    mode: CacheMode,
}

impl<A, C> CachedApi<A, C> {
    pub fn new(api: A, cache: C, mode: CacheMode) -> Self {
        Self { api, cache, mode }
    }
}

impl<A: GamesApi, C: PageCache> GamesApi for CachedApi<A, C> {
    async fn fetch_page(&self, key: &PageKey) -> Result<Value> {
        if self.mode.reads() {
            if let Some(page) = self.cache.load(key) {
                return Ok(page);
            }
        }

        let page = self.api.fetch_page(key).await?;

        if self.mode.writes() {
            if let Err(err) = self.cache.store(key, &page) {
                warn!("Failed to cache {}: {:#}", key.file_stem(), err);
            }
        }

        Ok(page)
    }
}

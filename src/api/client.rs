use crate::config::Config;
use crate::error::AppError;
use governor::{Quota, RateLimiter, state::{InMemoryState, NotKeyed}, clock::DefaultClock};
use log::{debug, warn};
use std::num::NonZeroU32;
use std::thread;
use std::time::Duration;

use super::endpoints;

const USER_AGENT: &str = "nba_forecast/0.1.0";
const MAX_RETRIES: u32 = 3;

/// Source of raw page markup. Paths are site-relative (`/teams/BOS/2025.html`).
pub trait PageFetcher {
    fn fetch_page(&self, path: &str) -> Result<String, AppError>;

    fn fetch_player_log_page(
        &self,
        last: &str,
        first: &str,
        index: u32,
        season: i32,
    ) -> Result<String, AppError> {
        self.fetch_page(&endpoints::player_game_log_path(last, first, index, season))
    }
}

pub struct BasketballReferenceClient {
    site: String,
    agent: ureq::Agent,
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
}

impl BasketballReferenceClient {
    pub fn new(config: &Config) -> Self {
        let per_minute = NonZeroU32::new(config.requests_per_minute).unwrap_or(NonZeroU32::MIN);
        let rate_limiter = RateLimiter::direct(Quota::per_minute(per_minute));
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(15))
            .user_agent(USER_AGENT)
            .build();

        BasketballReferenceClient {
            site: config.site.clone(),
            agent,
            rate_limiter,
        }
    }

    fn wait_for_slot(&self) {
        while self.rate_limiter.check().is_err() {
            thread::sleep(Duration::from_millis(250));
        }
    }

    fn execute_request(&self, url: &str) -> Result<String, AppError> {
        let mut retry_count = 0;

        loop {
            self.wait_for_slot();
            debug!("GET {}", url);

            match self.agent.get(url).call() {
                Ok(resp) => {
                    return resp.into_string().map_err(|e| {
                        AppError::HttpError(e.to_string())
                    });
                }
                Err(ureq::Error::Status(404, _)) => {
                    return Err(AppError::PageNotFound(url.to_string()));
                }
                Err(ureq::Error::Status(429, _)) => {
                    if retry_count >= MAX_RETRIES {
                        return Err(AppError::RateLimited);
                    }
                    let wait_ms = 5000 * (retry_count + 1) as u64;
                    warn!("rate limited, waiting {}ms before retry", wait_ms);
                    thread::sleep(Duration::from_millis(wait_ms));
                    retry_count += 1;
                }
                Err(e) => {
                    return Err(AppError::HttpError(e.to_string()));
                }
            }
        }
    }
}

impl PageFetcher for BasketballReferenceClient {
    fn fetch_page(&self, path: &str) -> Result<String, AppError> {
        let url = endpoints::absolute_url(&self.site, path);
        self.execute_request(&url)
    }
}

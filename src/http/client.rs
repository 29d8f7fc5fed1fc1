use anyhow::{Context, Result};
use log::debug;
use reqwest::{Client, Response};
use std::time::Duration;
use tokio::time::sleep;

use crate::errors::with_fetch_context;

/// HTTP client that pauses for a fixed delay between successive requests
pub struct PoliteClient {
    client: Client,
    delay: Duration,
    request_count: usize,
}

impl PoliteClient {
    /// `timeout_secs` of `None` keeps reqwest's own default (no overall timeout)
    pub fn new(user_agent: &str, timeout_secs: Option<u64>, delay_ms: u64) -> Result<Self> {
        let client = Self::build_client(user_agent, timeout_secs)?;

        Ok(Self {
            client,
            delay: Duration::from_millis(delay_ms),
            request_count: 0,
        })
    }

    /// GET a page and return its body; non-success statuses are errors
    pub async fn get_text(&mut self, url: &str) -> Result<String> {
        self.wait().await;

        let response = with_fetch_context(self.client.get(url).send().await, url)?;
        let response = Self::check_status(response, url)?;

        with_fetch_context(response.text().await, url)
    }

    fn build_client(user_agent: &str, timeout_secs: Option<u64>) -> Result<Client> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder.build().context("Failed to build HTTP client")
    }

    async fn wait(&mut self) {
        if let Some(pause) = self.next_pause() {
            debug!("Waiting {:?} before next request", pause);
            sleep(pause).await;
        }
    }

    /// Pause owed before the request about to be sent; the first one goes out immediately
    fn next_pause(&mut self) -> Option<Duration> {
        let pause = (self.request_count > 0 && !self.delay.is_zero()).then_some(self.delay);
        self.request_count += 1;
        pause
    }

    fn check_status(response: Response, url: &str) -> Result<Response> {
        with_fetch_context(response.error_for_status(), url)
    }
}

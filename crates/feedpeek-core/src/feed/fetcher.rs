use std::time::Duration;

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_ENCODING, ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::{Client, Proxy};
use url::Url;

use super::models::FeedItem;
use super::parser::parse_feed;
use crate::config::AppConfig;
use crate::{Error, Result};

const MAX_FEED_BYTES: usize = 5 * 1024 * 1024;

/// Feed fetcher wrapping a configured HTTP client
pub struct FeedFetcher {
    client: Client,
    user_agent: String,
}

impl FeedFetcher {
    /// Create a new feed fetcher with configuration
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client =
            Self::build_client(config.fetch.request_timeout_secs, &config.fetch.proxy_url)?;

        Ok(Self {
            client,
            user_agent: config.fetch.user_agent.clone(),
        })
    }

    /// Build HTTP client with optional proxy
    fn build_client(timeout_secs: u64, proxy_url: &Option<String>) -> Result<Client> {
        let mut builder = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .redirect(reqwest::redirect::Policy::limited(10));

        if let Some(ref proxy) = proxy_url {
            let proxy = Proxy::all(proxy)
                .map_err(|e| Error::Config(format!("Invalid proxy URL: {}", e)))?;
            builder = builder.proxy(proxy);
            tracing::info!("Using HTTP proxy for feed fetching");
        }

        builder.build().map_err(Error::Http)
    }

    /// Build request headers for a feed fetch
    fn build_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "application/rss+xml,application/atom+xml,application/xml;q=0.9,text/xml;q=0.8,*/*;q=0.5",
            ),
        );
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static("en-US,en;q=0.9"),
        );
        headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip, deflate, br"));
        if let Ok(ua) = HeaderValue::from_str(&self.user_agent) {
            headers.insert(USER_AGENT, ua);
        }
        headers
    }

    /// Fetch feed content as raw bytes; one request, no retries
    pub async fn fetch_raw(&self, url: &str) -> Result<Bytes> {
        Url::parse(url)?;

        tracing::info!("Fetching feed from: {}", url);

        let response = self
            .client
            .get(url)
            .headers(self.build_headers())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                status,
                url: url.to_string(),
            });
        }

        let content = response.bytes().await?;
        self.ensure_content_size(content.len(), url)?;

        Ok(content)
    }

    /// Fetch and parse a feed from URL
    pub async fn fetch(&self, url: &str) -> Result<Vec<FeedItem>> {
        let content = self.fetch_raw(url).await?;
        parse_feed(&content)
    }

    fn ensure_content_size(&self, size: usize, url: &str) -> Result<()> {
        if size > MAX_FEED_BYTES {
            return Err(Error::FeedTooLarge {
                size,
                url: url.to_string(),
            });
        }
        Ok(())
    }
}

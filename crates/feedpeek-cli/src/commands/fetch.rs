use anyhow::Result;

use feedpeek_core::feed::FeedFetcher;
use feedpeek_core::AppConfig;

pub async fn run(config: &AppConfig, url: Option<&str>) -> Result<()> {
    let url = url.unwrap_or(&config.feed.url);

    let fetcher = FeedFetcher::new(config)?;
    let items = fetcher.fetch(url).await?;

    tracing::info!("Fetched {} items from {}", items.len(), url);

    super::print_items(&items);

    Ok(())
}

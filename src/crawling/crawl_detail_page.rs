use std::time::Duration;

use anyhow::{Context, Result};
use fantoccini::{Client, Locator};

use crate::config::config::CrawlerConfig;
use crate::extract_data::{extract_data, PriceRecord};
use crate::utilities::generate_random_delay::generate_random_delay;

/// Opens a product detail page and parses its option rows into price
/// records.
pub async fn crawl_detail_page(
    client: &Client,
    url: &str,
    crawler: &CrawlerConfig,
) -> Result<Vec<PriceRecord>> {
    // Pause before navigating to avoid tripping the blocker
    generate_random_delay(crawler.min_delay, crawler.max_delay).await;

    client
        .goto(url)
        .await
        .with_context(|| format!("Failed to open detail page {}", url))?;

    client
        .wait()
        .at_most(Duration::from_secs(3))
        .for_element(Locator::Css("span.title"))
        .await
        .with_context(|| format!("Product title never appeared on {}", url))?;

    let html = client
        .source()
        .await
        .with_context(|| format!("Failed to read page source of {}", url))?;

    extract_data(&html, url)
}

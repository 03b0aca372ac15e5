use std::time::Duration;

use anyhow::{Context, Result};
use colored::Colorize;
use fantoccini::{Client, Locator};

use crate::config::config::CrawlerConfig;
use crate::crawling::goto_page::goto_page;
use crate::extractors::extract_product_links;
use crate::utilities::generate_random_delay::generate_random_delay;

/// Walks the category listing page by page and collects every product
/// detail URL, up to `max_pages` pages.
pub async fn crawl_category_pages(
    client: &Client,
    category_url: &str,
    crawler: &CrawlerConfig,
) -> Result<Vec<String>> {
    println!("{}", format!("Starting category {}", category_url).green());

    client
        .goto(category_url)
        .await
        .with_context(|| format!("Failed to open category page {}", category_url))?;

    let _ = client
        .wait()
        .at_most(Duration::from_secs(5))
        .for_element(Locator::Css("li.prod_item"))
        .await;

    generate_random_delay(crawler.min_delay, crawler.max_delay).await;

    let mut product_urls = Vec::new();

    for page_number in 1..=crawler.max_pages {
        println!("Crawling category page {}", page_number);

        let html = client
            .source()
            .await
            .context("Failed to read the listing page source")?;
        let links = extract_product_links::extract_product_links(&html);

        if links.is_empty() {
            println!("{}", "No products found on this page, stopping".yellow());
            break;
        }

        println!(" -> collected {} products", links.len());
        product_urls.extend(links);

        if !goto_page(client, page_number + 1, crawler).await {
            println!("{}", "No further page, stopping".yellow());
            break;
        }
    }

    Ok(product_urls)
}

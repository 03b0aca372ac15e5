use anyhow::Context;
use chrono::Local;
use colored::Colorize;
use fantoccini::ClientBuilder;
use futures::stream::{self, StreamExt};

use crate::crawling::crawl_category_pages::crawl_category_pages;
use crate::crawling::crawl_detail_page::crawl_detail_page;
use crate::extract_data::PriceRecord;
use crate::utilities::check_webdriver::check_webdriver;
use crate::utilities::write_csv::write_csv;

mod config;
mod crawling;
mod extract_data;
mod extractors;
mod utilities;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration settings
    let config = match config::load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{}", format!("Failed to load configuration: {}", e).red());
            return Err(e.into());
        }
    };

    println!(
        "{}",
        format!(
            "{} v{} started at {}",
            config.base.name,
            config.base.version,
            Local::now().format("%Y-%m-%d %H:%M:%S")
        )
        .green()
    );

    // Fail fast when the WebDriver server is not answering
    check_webdriver(&config.crawler.webdriver_url).await?;

    let client = ClientBuilder::native()
        .connect(&config.crawler.webdriver_url)
        .await
        .context("Failed to connect to the WebDriver server")?;

    // Collect detail page links across the category
    let urls =
        crawl_category_pages(&client, &config.target.category_url, &config.crawler).await?;
    println!("{}", format!("Collected {} product URLs", urls.len()).green());

    // Visit detail pages one at a time; a failed URL is logged and skipped
    let total = urls.len();
    let results: Vec<PriceRecord> = stream::iter(urls.iter().enumerate())
        .fold(Vec::new(), |mut acc, (idx, url)| {
            let client = &client;
            let crawler = &config.crawler;
            async move {
                println!("Detail {}/{} -> {}", idx + 1, total, url);

                match crawl_detail_page(client, url, crawler).await {
                    Ok(records) => acc.extend(records),
                    Err(e) => {
                        eprintln!("{}", format!("Error on {}: {:?}", url, e).red())
                    }
                }

                acc
            }
        })
        .await;

    if let Err(e) = client.close().await {
        eprintln!("{}", format!("Failed to close the WebDriver session: {}", e).yellow());
    }

    write_csv(&results, &config.file.output_csv).await?;

    println!(
        "{}",
        format!(
            "Done, {} records written to {}",
            results.len(),
            config.file.output_csv
        )
        .green()
    );

    Ok(())
}

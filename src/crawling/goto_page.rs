use std::time::Duration;

use fantoccini::{Client, Locator};

use crate::config::config::CrawlerConfig;
use crate::utilities::generate_random_delay::generate_random_delay;

/// Moves the listing to the given page number by clicking the numbered
/// pagination control whose label matches. Returns false when no further
/// page exists or the control cannot be clicked.
pub async fn goto_page(client: &Client, page_number: u32, crawler: &CrawlerConfig) -> bool {
    let controls = match client.find_all(Locator::Css("a.num")).await {
        Ok(controls) => controls,
        Err(_) => return false,
    };

    let label = page_number.to_string();
    let mut target = None;

    for control in controls {
        match control.text().await {
            Ok(text) if text.trim() == label => {
                target = Some(control);
                break;
            }
            _ => continue,
        }
    }

    let Some(control) = target else {
        return false;
    };

    // Same anti-blocking pause as before a detail visit
    generate_random_delay(crawler.min_delay, crawler.max_delay).await;

    if control.click().await.is_err() {
        return false;
    }

    // Wait for the result list to come back; a timeout means we proceed anyway
    let _ = client
        .wait()
        .at_most(Duration::from_secs(5))
        .for_element(Locator::Css("li.prod_item"))
        .await;

    true
}

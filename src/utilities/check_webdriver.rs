use anyhow::{bail, Context, Result};
use colored::Colorize;
use reqwest::Client;
use serde_json::Value;

/// Probes the WebDriver server's /status endpoint before a session is
/// created, so a missing chromedriver/geckodriver fails fast with a clear
/// message instead of a session error.
pub async fn check_webdriver(webdriver_url: &str) -> Result<()> {
    let client = Client::new();
    let status_url = format!("{}/status", webdriver_url.trim_end_matches('/'));

    let response = client
        .get(&status_url)
        .send()
        .await
        .with_context(|| format!("WebDriver not reachable at {}", status_url))?;

    if !response.status().is_success() {
        bail!("WebDriver status endpoint returned {}", response.status());
    }

    let body: Value = response
        .json()
        .await
        .context("Failed to parse WebDriver status response")?;

    let ready = body
        .get("value")
        .and_then(|value| value.get("ready"))
        .and_then(|ready| ready.as_bool())
        .unwrap_or(false);

    if ready {
        println!("{}", "WebDriver is up and ready".green());
    } else {
        println!("{}", "WebDriver reachable but reports not ready".yellow());
    }

    Ok(())
}

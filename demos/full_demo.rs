//! Full SDK Demo - exercises every endpoint
//!
//! Run with: `SHOTAPI_API_KEY=your-key cargo run --example full_demo`
//! (`SHOTAPI_BASE_URL` overrides the API host.)

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;
use shotapi::{CaptureOptions, Client, DiffOptions, Error, SDK_VERSION};
use std::time::Duration;

const TEST_URL: &str = "https://example.com";
const OTHER_URL: &str = "https://example.org";

fn section(title: &str) {
    println!("\n{}\n", format!(" {} ", title).on_blue().bold());
}

fn field(label: &str, value: impl std::fmt::Display) {
    println!("  {}: {}", label.dimmed(), value);
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Stop the spinner and print the outcome; errors are reported, not returned.
fn finish<T>(pb: ProgressBar, result: Result<T, Error>) -> Option<T> {
    pb.finish_and_clear();
    match result {
        Ok(value) => Some(value),
        Err(Error::Authentication { .. }) => {
            println!("{} Invalid API key - check SHOTAPI_API_KEY", "✖".red());
            None
        }
        Err(Error::FeatureNotAvailable { message, .. }) => {
            println!("{} Not available on this plan: {}", "⚠".yellow(), message);
            None
        }
        Err(Error::RateLimit { .. }) => {
            println!("{} Rate limit exceeded - try again later", "⚠".yellow());
            None
        }
        Err(other) => {
            println!("{} {}", "✖".red(), other);
            None
        }
    }
}

fn print_json(value: &Value) {
    let formatted = serde_json::to_string_pretty(value).unwrap_or_default();
    println!("{}", formatted.dimmed());
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    println!("\n{}", "  ShotAPI Rust SDK - Full Demo  ".magenta().bold());

    let api_key = std::env::var("SHOTAPI_API_KEY").expect("SHOTAPI_API_KEY must be set");
    let mut builder = Client::builder(api_key);
    if let Ok(base_url) = std::env::var("SHOTAPI_BASE_URL") {
        builder = builder.base_url(base_url);
    }
    let client = builder.build()?;

    section("Configuration");
    field("SDK Version", SDK_VERSION);
    field("Base URL", client.base_url());
    field("Timeout", format!("{}s", client.timeout().as_secs()));

    section("Screenshot");
    let options = CaptureOptions {
        full_page: Some(true),
        block_ads: Some(true),
        ..Default::default()
    };
    let pb = spinner(&format!("Capturing {}...", TEST_URL));
    if let Some(image) = finish(pb, client.screenshot(TEST_URL, &options).await) {
        field("Image", format!("{} bytes", image.len()));
    }

    section("HTML Render");
    let html = "<html><body><h1>Hello from Rust</h1></body></html>";
    let pb = spinner("Rendering HTML...");
    let result = client
        .render(html, &CaptureOptions::new().option("darkMode", true))
        .await;
    if let Some(image) = finish(pb, result) {
        field("Image", format!("{} bytes", image.len()));
    }

    section("Metadata");
    let pb = spinner("Extracting metadata...");
    let result = client
        .metadata(TEST_URL, &CaptureOptions::new().option("extractMarkdown", true))
        .await;
    if let Some(metadata) = finish(pb, result) {
        print_json(&Value::Object(metadata));
    }

    section("Batch");
    let pb = spinner("Capturing batch...");
    let result = client
        .batch(
            &[TEST_URL, OTHER_URL],
            &CaptureOptions::new().option("fullPage", true),
        )
        .await;
    if let Some(batch) = finish(pb, result) {
        print_json(&batch);
    }

    section("Visual Diff");
    field("A", TEST_URL);
    field("B", OTHER_URL);
    let pb = spinner("Comparing pages...");
    let result = client
        .diff(TEST_URL, OTHER_URL, &DiffOptions::default())
        .await;
    if let Some(diff) = finish(pb, result) {
        field("Changed", format!("{:.2}%", diff.percentage));
        field("Image", format!("{} bytes", diff.image.len()));
    }

    println!();
    Ok(())
}

//! Basic screenshot example.
//!
//! This example captures a full-page screenshot and writes it to disk.
//!
//! Run with: `SHOTAPI_API_KEY=your-key cargo run --example basic_screenshot`

use shotapi::{CaptureOptions, Client};

#[tokio::main]
async fn main() -> Result<(), shotapi::Error> {
    // Create a client with your API key
    let api_key = std::env::var("SHOTAPI_API_KEY").expect("SHOTAPI_API_KEY must be set");
    let client = Client::new(api_key)?;

    // camelCase and snake_case option names are both accepted
    let options = CaptureOptions {
        full_page: Some(true),
        ..Default::default()
    }
    .option("blockAds", true);

    let image = client.screenshot("https://example.com", &options).await?;

    std::fs::write("screenshot.png", &image).expect("failed to write screenshot.png");
    println!("Saved screenshot.png ({} bytes)", image.len());

    Ok(())
}

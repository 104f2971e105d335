//! Rust SDK for ShotAPI.
//!
//! ShotAPI captures screenshots of web pages, renders HTML to images,
//! extracts page metadata, captures URLs in batches and computes visual
//! diffs between two pages.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use shotapi::{CaptureOptions, Client, DiffOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), shotapi::Error> {
//!     let client = Client::new("sk_your_api_key")?;
//!
//!     let image = client
//!         .screenshot("https://example.com", &CaptureOptions::new().option("fullPage", true))
//!         .await?;
//!     println!("{} bytes", image.len());
//!
//!     let diff = client
//!         .diff("https://example.com", "https://example.org", &DiffOptions::default())
//!         .await?;
//!     println!("{:.1}% changed", diff.percentage);
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! Non-2xx responses map to [`Error::Authentication`] (401),
//! [`Error::FeatureNotAvailable`] (403), [`Error::RateLimit`] (429) or
//! [`Error::Api`]. Transport failures are returned untouched as
//! [`Error::Http`].

mod client;
mod error;
mod options;
mod types;
mod version;

pub use client::{Client, ClientBuilder};
pub use error::{Error, Result};
pub use options::{normalize_option_key, normalize_options, CaptureOptions};
pub use types::{DiffOptions, DiffResult, DEFAULT_DIFF_HEIGHT, DEFAULT_DIFF_WIDTH};
pub use version::{build_user_agent, SDK_VERSION};

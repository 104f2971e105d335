//! Request payloads and response types for the ShotAPI SDK.

use serde::Serialize;
use serde_json::{Map, Value};

/// Default diff viewport width.
pub const DEFAULT_DIFF_WIDTH: u32 = 1280;

/// Default diff viewport height.
pub const DEFAULT_DIFF_HEIGHT: u32 = 720;

/// Payload for `/v1/screenshot` and `/v1/metadata`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct UrlRequest<'a> {
    pub url: &'a str,
    #[serde(flatten)]
    pub options: Map<String, Value>,
}

/// Payload for `/v1/render`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct RenderRequest<'a> {
    pub html: &'a str,
    #[serde(flatten)]
    pub options: Map<String, Value>,
}

/// Payload for `/v1/batch`. Options are nested, not merged.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct BatchRequest<'a> {
    pub urls: Vec<&'a str>,
    pub options: Map<String, Value>,
}

/// Payload for `/v1/diff`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct DiffRequest<'a> {
    pub url_a: &'a str,
    pub url_b: &'a str,
    pub width: u32,
    pub height: u32,
}

/// Options for visual diffs.
///
/// Only the viewport size is sent; capture options are not accepted here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffOptions {
    /// Viewport width, 1280 when unset.
    pub width: Option<u32>,
    /// Viewport height, 720 when unset.
    pub height: Option<u32>,
}

impl DiffOptions {
    pub(crate) fn resolved(&self) -> (u32, u32) {
        (
            self.width.unwrap_or(DEFAULT_DIFF_WIDTH),
            self.height.unwrap_or(DEFAULT_DIFF_HEIGHT),
        )
    }
}

/// Result of a visual diff.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffResult {
    /// Diff image bytes.
    pub image: Vec<u8>,
    /// Share of the page that differs, from the `X-Diff-Percentage` header.
    ///
    /// The header must be a complete float literal after trimming (`"42.5"`,
    /// `"1e2"`). Values with trailing text such as `"12%"`, missing headers
    /// and non-finite values all yield `0.0`.
    pub percentage: f64,
}

/// Parse the `X-Diff-Percentage` header value.
pub(crate) fn parse_diff_percentage(value: Option<&str>) -> Option<f64> {
    value
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|p| p.is_finite())
}

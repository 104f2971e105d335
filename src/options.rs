//! Capture options and option-key normalization.

use serde::Serialize;
use serde_json::{Map, Value};

/// Recognized option keys: (camelCase alias, canonical wire key).
const OPTION_KEYS: &[(&str, &str)] = &[
    ("fullPage", "full_page"),
    ("deviceScaleFactor", "device_scale_factor"),
    ("darkMode", "dark_mode"),
    ("customCss", "custom_css"),
    ("customJs", "custom_js"),
    ("userAgent", "user_agent"),
    ("waitForSelector", "wait_for_selector"),
    ("clickSelector", "click_selector"),
    ("hideSelectors", "hide_selectors"),
    ("blockAds", "block_ads"),
    ("extractMarkdown", "extract_markdown"),
];

/// Map a caller-supplied option key to its canonical wire key.
///
/// Both spellings of a recognized option (`fullPage`, `full_page`) map to the
/// snake_case form. Unrecognized keys are returned unchanged.
pub fn normalize_option_key(key: &str) -> &str {
    OPTION_KEYS
        .iter()
        .find(|(alias, canonical)| *alias == key || *canonical == key)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(key)
}

/// Normalize every key of an option map. Values are left untouched.
pub fn normalize_options(options: Map<String, Value>) -> Map<String, Value> {
    options
        .into_iter()
        .map(|(key, value)| (normalize_option_key(&key).to_string(), value))
        .collect()
}

/// Options for screenshot, render, metadata and batch requests.
///
/// Recognized options have typed fields. Anything else goes into `extra` and
/// is sent to the server as-is, so options added server-side can be used
/// before the SDK knows about them.
///
/// ```
/// use shotapi::CaptureOptions;
/// use serde_json::json;
///
/// let options = CaptureOptions {
///     full_page: Some(true),
///     ..Default::default()
/// }
/// .option("darkMode", true)
/// .option("format", "webp");
///
/// let wire = options.to_wire();
/// assert_eq!(wire["full_page"], json!(true));
/// assert_eq!(wire["dark_mode"], json!(true));
/// assert_eq!(wire["format"], json!("webp"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CaptureOptions {
    /// Capture the full scrollable page instead of the viewport.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_page: Option<bool>,
    /// Device pixel ratio.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_scale_factor: Option<f64>,
    /// Emulate `prefers-color-scheme: dark`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<bool>,
    /// CSS injected before capture.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_css: Option<String>,
    /// JavaScript evaluated before capture.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_js: Option<String>,
    /// User-Agent used by the rendering browser.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Wait until this selector is present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_for_selector: Option<String>,
    /// Click this selector before capture.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub click_selector: Option<String>,
    /// Hide elements matching these selectors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_selectors: Option<Vec<String>>,
    /// Block ads and trackers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_ads: Option<bool>,
    /// Also extract the page content as Markdown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extract_markdown: Option<bool>,
    /// Passthrough options, keyed by caller-supplied name.
    #[serde(skip)]
    pub extra: Map<String, Value>,
}

impl CaptureOptions {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build options from a loose key/value map. Keys are normalized and kept
    /// in the passthrough slot.
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self {
            extra: normalize_options(map),
            ..Default::default()
        }
    }

    /// Add a loosely-typed option. Either naming convention is accepted.
    pub fn option(mut self, key: impl AsRef<str>, value: impl Into<Value>) -> Self {
        let key = normalize_option_key(key.as_ref()).to_string();
        self.extra.insert(key, value.into());
        self
    }

    /// Whether no option is set.
    pub fn is_empty(&self) -> bool {
        self.to_wire().is_empty()
    }

    /// The JSON object sent to the server.
    ///
    /// Passthrough keys are normalized, then typed fields are applied on top.
    pub fn to_wire(&self) -> Map<String, Value> {
        let mut wire = normalize_options(self.extra.clone());
        // Plain options and strings only; serializing them cannot fail.
        if let Ok(Value::Object(typed)) = serde_json::to_value(self) {
            wire.extend(typed);
        }
        wire
    }
}

impl From<Map<String, Value>> for CaptureOptions {
    fn from(map: Map<String, Value>) -> Self {
        Self::from_map(map)
    }
}

//! Service response envelopes and client-side enums.

use serde::Deserialize;

use feedlift_core::ProductInput;

/// Outcome of the startup liveness/credential check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceStatus {
    /// The service reported `status: "success"`.
    Ready { message: Option<String> },
    /// The service answered but reported a non-ready condition. Non-fatal;
    /// other workflows are not blocked.
    Degraded { message: String },
    /// The check could not complete at the transport level.
    Unreachable { reason: String },
}

/// An export feed format consumable by third-party advertising platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedType {
    GoogleMerchant,
    MetaTiktok,
}

impl FeedType {
    /// URL path segment under `export/`.
    #[must_use]
    pub fn path_segment(self) -> &'static str {
        match self {
            FeedType::GoogleMerchant => "google-merchant",
            FeedType::MetaTiktok => "meta-csv",
        }
    }

    /// Fixed filename the exported payload is saved as.
    #[must_use]
    pub fn filename(self) -> &'static str {
        match self {
            FeedType::GoogleMerchant => "google_merchant.xml",
            FeedType::MetaTiktok => "meta_feed.csv",
        }
    }
}

impl std::fmt::Display for FeedType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path_segment())
    }
}

impl std::str::FromStr for FeedType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "google-merchant" | "google" => Ok(FeedType::GoogleMerchant),
            "meta-csv" | "meta" | "tiktok" => Ok(FeedType::MetaTiktok),
            other => Err(format!(
                "unknown feed type '{other}' (expected 'google-merchant' or 'meta-csv')"
            )),
        }
    }
}

/// Envelope returned by the `test-key` endpoint:
/// `{"status": "success" | ..., "message": ...}`.
#[derive(Debug, Deserialize)]
pub(crate) struct StatusEnvelope {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Envelope returned by `upload-csv`: `{"products": [...]}`.
#[derive(Debug, Deserialize)]
pub(crate) struct CsvUploadResponse {
    #[serde(default)]
    pub products: Vec<ProductInput>,
}

//! Product and batch types exchanged with the optimization service.
//!
//! [`ProductInput`] is the outgoing shape; everything else models service
//! responses. Response types use `#[serde(default)]` on list fields so a
//! batch with no failures (or no successes) still deserializes cleanly.

use serde::{Deserialize, Serialize};

/// A candidate product to be optimized.
///
/// Every field is optional at the type level and skipped during
/// serialization when absent: the service must never receive a `null` or
/// empty-string field. Call [`ProductInput::sanitized`] before building a
/// request body to enforce that invariant on user-supplied data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// ISO 4217 currency code (e.g., `"USD"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    /// Shipping weight in kilograms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl ProductInput {
    /// Returns a copy with empty and degenerate fields normalized away.
    ///
    /// String fields that are empty or whitespace-only become `None`;
    /// numeric fields that are non-finite become `None`. Combined with
    /// `skip_serializing_if`, a sanitized input serializes with absent
    /// fields omitted entirely rather than sent as `null` or `""`.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        Self {
            product_id: clean(&self.product_id),
            title: clean(&self.title),
            description: clean(&self.description),
            price: self.price.filter(|p| p.is_finite()),
            category: clean(&self.category),
            brand: clean(&self.brand),
            currency: clean(&self.currency),
            sku: clean(&self.sku),
            color: clean(&self.color),
            size: clean(&self.size),
            material: clean(&self.material),
            weight: self.weight.filter(|w| w.is_finite()),
        }
    }

    /// Returns `true` if no field carries a value after sanitization.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Best-effort display label: product id, then title, then a placeholder.
    #[must_use]
    pub fn label(&self) -> &str {
        self.product_id
            .as_deref()
            .or(self.title.as_deref())
            .unwrap_or("(unnamed product)")
    }
}

fn clean(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
}

/// AI-generated content for one product, as returned by the service.
///
/// Immutable once received; the renderer borrows it for display and the
/// batch history owns it afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizedProduct {
    pub product_id: String,
    pub ai_title: String,
    pub ai_description: String,
    /// Semantic tags; unordered, duplicates tolerated.
    #[serde(default)]
    pub semantic_tags: Vec<String>,
    #[serde(default)]
    pub use_cases: Vec<String>,
    #[serde(default)]
    pub faq_content: Vec<FaqEntry>,
    #[serde(default)]
    pub ai_summary: String,
    /// Service-reported quality metric in `[0, 1]`.
    pub optimization_score: f64,
}

/// One generated question/answer pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// A per-product failure reported inside an otherwise-successful batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemFailure {
    pub product_id: String,
    pub error: String,
}

/// Aggregate counters the service reports for one batch run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total_products: u32,
    pub successful: u32,
    pub failed: u32,
    /// Mean optimization score over successful items only, in `[0, 1]`.
    #[serde(default)]
    pub average_score: f64,
    /// Service-reported wall-clock seconds.
    #[serde(default)]
    pub processing_time: f64,
}

/// The result of one batch optimization run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResult {
    /// Server-assigned unique identifier; required for feed exports.
    pub batch_id: String,
    /// Successful per-product results, in submission order.
    #[serde(default)]
    pub results: Vec<OptimizedProduct>,
    /// Per-product failures; these never abort the batch.
    #[serde(default)]
    pub errors: Vec<ItemFailure>,
    pub summary: BatchSummary,
}

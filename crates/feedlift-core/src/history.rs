//! In-memory history of completed batches and derived dashboard metrics.
//!
//! The history is newest-first: every completed batch is prepended, so
//! index 0 is always the most recently completed batch. Growth is
//! unbounded within a session; there is no eviction.

use chrono::{DateTime, Utc};

use crate::product::BatchResult;

/// A completed batch as held in history, stamped with its completion time.
#[derive(Debug, Clone)]
pub struct StoredBatch {
    pub batch: BatchResult,
    pub completed_at: DateTime<Utc>,
}

/// Ordered collection of completed batch results for the current session.
///
/// Only the orchestrator mutates this, and only on the success path of a
/// batch workflow — failed workflows never touch it.
#[derive(Debug, Default)]
pub struct BatchHistory {
    entries: Vec<StoredBatch>,
}

impl BatchHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a completed batch at the front of the history.
    pub fn record(&mut self, batch: BatchResult) {
        self.entries.insert(
            0,
            StoredBatch {
                batch,
                completed_at: Utc::now(),
            },
        );
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recently completed batch, if any.
    #[must_use]
    pub fn latest(&self) -> Option<&StoredBatch> {
        self.entries.first()
    }

    /// Iterates batches newest-first.
    pub fn iter(&self) -> impl Iterator<Item = &StoredBatch> {
        self.entries.iter()
    }

    /// Recomputes all dashboard aggregates from the full history.
    ///
    /// Pure and idempotent: never incrementally maintained, so the
    /// aggregates cannot drift from the entries they summarize. An empty
    /// history yields all zeros (no division by zero).
    ///
    /// The average score is the arithmetic mean of each batch's own
    /// `average_score`, NOT a mean weighted by product count.
    #[must_use]
    pub fn compute_aggregates(&self) -> DashboardAggregates {
        let mut total_products: u32 = 0;
        let mut total_optimized: u32 = 0;
        let mut score_sum: f64 = 0.0;

        for entry in &self.entries {
            let summary = &entry.batch.summary;
            total_products = total_products.saturating_add(summary.total_products);
            total_optimized = total_optimized.saturating_add(summary.successful);
            score_sum += summary.average_score;
        }

        let total_batches = self.entries.len();
        #[allow(clippy::cast_precision_loss)]
        let average_score = if total_batches == 0 {
            0.0
        } else {
            score_sum / total_batches as f64
        };

        DashboardAggregates {
            total_products,
            total_optimized,
            average_score,
            total_batches,
        }
    }
}

/// Derived statistics across all batches in the session's history.
///
/// Never stored — always recomputed via [`BatchHistory::compute_aggregates`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardAggregates {
    pub total_products: u32,
    pub total_optimized: u32,
    /// Mean of per-batch average scores, in `[0, 1]`; 0 when history is empty.
    pub average_score: f64,
    pub total_batches: usize,
}

impl DashboardAggregates {
    /// Average score as a whole-number percentage for display.
    #[must_use]
    pub fn average_score_percent(&self) -> f64 {
        (self.average_score * 100.0).round()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::{BatchResult, BatchSummary};

    fn batch(id: &str, total: u32, successful: u32, failed: u32, score: f64) -> BatchResult {
        BatchResult {
            batch_id: id.to_string(),
            results: Vec::new(),
            errors: Vec::new(),
            summary: BatchSummary {
                total_products: total,
                successful,
                failed,
                average_score: score,
                processing_time: 1.47,
            },
        }
    }

    #[test]
    fn empty_history_aggregates_to_zeros() {
        let history = BatchHistory::new();
        let agg = history.compute_aggregates();
        assert_eq!(agg.total_products, 0);
        assert_eq!(agg.total_optimized, 0);
        assert_eq!(agg.total_batches, 0);
        assert!((agg.average_score - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn record_prepends_newest_first() {
        let mut history = BatchHistory::new();
        history.record(batch("first", 1, 1, 0, 0.5));
        history.record(batch("second", 1, 1, 0, 0.5));
        history.record(batch("third", 1, 1, 0, 0.5));

        let ids: Vec<&str> = history.iter().map(|e| e.batch.batch_id.as_str()).collect();
        assert_eq!(ids, ["third", "second", "first"]);
        assert_eq!(history.latest().map(|e| e.batch.batch_id.as_str()), Some("third"));
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn compute_aggregates_is_idempotent() {
        let mut history = BatchHistory::new();
        history.record(batch("a", 3, 2, 1, 0.82));
        let first = history.compute_aggregates();
        let second = history.compute_aggregates();
        assert_eq!(first, second);
    }

    #[test]
    fn average_score_is_unweighted_mean_of_batch_averages() {
        let mut history = BatchHistory::new();
        // 1 product at 1.0 and 3 products at 0.5: a product-weighted mean
        // would be 0.625, but the dashboard averages per-batch averages.
        history.record(batch("small", 1, 1, 0, 1.0));
        history.record(batch("large", 3, 3, 0, 0.5));

        let agg = history.compute_aggregates();
        assert!((agg.average_score - 0.75).abs() < 1e-12);
        assert_eq!(agg.total_products, 4);
        assert_eq!(agg.total_optimized, 4);
    }

    #[test]
    fn partial_failure_batch_counts_toward_totals() {
        let mut history = BatchHistory::new();
        history.record(batch("b", 3, 2, 1, 0.82));

        let agg = history.compute_aggregates();
        assert_eq!(agg.total_products, 3);
        assert_eq!(agg.total_optimized, 2);
        assert_eq!(agg.total_batches, 1);
        assert!((agg.average_score_percent() - 82.0).abs() < f64::EPSILON);
    }
}

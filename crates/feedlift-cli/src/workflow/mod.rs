//! Orchestrator: drives the user-triggered workflows against the
//! optimization service and owns the session's batch history.
//!
//! Each workflow is an explicit state machine. The async functions here
//! walk the states sequentially and return the terminal state, so callers
//! (and tests) observe completion deterministically. Every exit path
//! clears the busy indicator, and the batch history is mutated only on
//! the full-success path of the batch workflow.

use std::path::{Path, PathBuf};

use feedlift_client::{ApiClient, FeedType, ServiceStatus};
use feedlift_core::{BatchHistory, ProductInput};

use crate::render::{Present, View};

/// States of the single-product workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SingleState {
    Idle,
    Submitting,
    Displayed,
    Failed(String),
}

/// States of the CSV-batch workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchState {
    Idle,
    Uploading,
    Parsed,
    BatchSubmitting,
    BatchDisplayed,
    Failed(String),
}

/// The orchestrator: sequences transport calls, owns the batch history,
/// and renders through the presentation sink.
pub struct Workflows<P: Present> {
    client: ApiClient,
    history: BatchHistory,
    presenter: P,
}

impl<P: Present> Workflows<P> {
    pub fn new(client: ApiClient, presenter: P) -> Self {
        Self {
            client,
            history: BatchHistory::new(),
            presenter,
        }
    }

    /// The session's batch history, newest-first.
    pub fn history(&self) -> &BatchHistory {
        &self.history
    }

    /// Batch id of the most recently completed batch, if any.
    pub fn latest_batch_id(&self) -> Option<String> {
        self.history.latest().map(|e| e.batch.batch_id.clone())
    }

    /// Startup status check. Renders the indicator; degraded and
    /// unreachable states additionally surface a non-fatal error and
    /// never block the other workflows.
    pub async fn startup_check(&mut self) -> ServiceStatus {
        let status = self.client.check_status().await;
        self.presenter.status(&status);
        match &status {
            ServiceStatus::Ready { .. } => {}
            ServiceStatus::Degraded { message } => {
                self.presenter.error(&format!("Service degraded: {message}"));
            }
            ServiceStatus::Unreachable { reason } => {
                self.presenter
                    .error(&format!("Service unreachable: {reason}"));
            }
        }
        status
    }

    /// Single-product workflow: `Idle → Submitting → {Displayed, Failed}`.
    ///
    /// The input is sanitized first so empty fields never reach the wire;
    /// a form with no populated fields at all stays `Idle`.
    pub async fn optimize_single(&mut self, input: &ProductInput) -> SingleState {
        let product = input.sanitized();
        if product.is_empty() {
            return SingleState::Idle;
        }

        tracing::debug!(state = ?SingleState::Submitting, product = product.label(), "single workflow");
        self.presenter.busy(true);

        let state = match self.client.optimize_single(&product).await {
            Ok(result) => {
                self.presenter.single_result(&result);
                self.presenter.view(View::SingleResult);
                SingleState::Displayed
            }
            Err(e) => {
                let message = format!("Optimization failed: {e}");
                self.presenter.error(&message);
                SingleState::Failed(message)
            }
        };

        self.presenter.busy(false);
        state
    }

    /// CSV-batch workflow:
    /// `Idle → Uploading → Parsed → BatchSubmitting → {BatchDisplayed, Failed}`.
    ///
    /// With no file selected the workflow stays `Idle` and renders nothing.
    /// Upload and batch-optimize run strictly in sequence; a failure at
    /// either step leaves the history untouched.
    pub async fn run_csv_batch(&mut self, file: Option<&Path>) -> BatchState {
        let Some(path) = file else {
            return BatchState::Idle;
        };

        self.presenter.busy(true);
        let state = self.csv_batch_steps(path).await;
        if let BatchState::Failed(message) = &state {
            self.presenter.error(message);
        }
        self.presenter.busy(false);
        state
    }

    async fn csv_batch_steps(&mut self, path: &Path) -> BatchState {
        tracing::debug!(state = ?BatchState::Uploading, file = %path.display(), "batch workflow");
        let contents = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                return BatchState::Failed(format!(
                    "CSV upload failed: cannot read {}: {e}",
                    path.display()
                ))
            }
        };
        let filename = path
            .file_name()
            .map_or_else(|| "upload.csv".to_string(), |f| f.to_string_lossy().into_owned());

        let products = match self.client.upload_csv(&filename, contents).await {
            Ok(products) => products,
            Err(e) => return BatchState::Failed(format!("CSV upload failed: {e}")),
        };

        // Parsed products go straight into batch submission.
        tracing::debug!(state = ?BatchState::Parsed, count = products.len(), "batch workflow");
        tracing::debug!(state = ?BatchState::BatchSubmitting, "batch workflow");
        let batch = match self.client.optimize_batch(&products).await {
            Ok(batch) => batch,
            Err(e) => return BatchState::Failed(format!("Batch optimization failed: {e}")),
        };

        // Full success: this is the only place the history is mutated.
        tracing::info!(batch_id = %batch.batch_id, "batch workflow complete");
        self.history.record(batch);
        let aggregates = self.history.compute_aggregates();
        self.presenter.dashboard(&aggregates, &self.history);
        if let Some(entry) = self.history.latest() {
            self.presenter.batch_detail(entry);
        }
        self.presenter.view(View::Dashboard);
        BatchState::BatchDisplayed
    }

    /// Export workflow: stateless request/save. Failures surface an error
    /// and mutate nothing. The payload is saved under the feed's fixed
    /// filename regardless of any server-side naming.
    pub async fn export_feed(
        &mut self,
        batch_id: &str,
        feed: FeedType,
        out_dir: &Path,
    ) -> Option<PathBuf> {
        let payload = match self.client.export_feed(batch_id, feed).await {
            Ok(payload) => payload,
            Err(e) => {
                self.presenter.error(&format!("Export failed: {e}"));
                return None;
            }
        };

        let target = out_dir.join(feed.filename());
        match std::fs::write(&target, payload) {
            Ok(()) => {
                self.presenter.saved_file(&target);
                Some(target)
            }
            Err(e) => {
                self.presenter
                    .error(&format!("Export failed: cannot write {}: {e}", target.display()));
                None
            }
        }
    }
}

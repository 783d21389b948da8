//! Presentation boundary: the orchestrator renders through [`Present`]
//! and never writes output directly. [`TermPresenter`] is the terminal
//! implementation; tests substitute a recording one. No business logic
//! lives on either side of this trait.

use std::path::Path;

use feedlift_client::ServiceStatus;
use feedlift_core::{BatchHistory, DashboardAggregates, OptimizedProduct, StoredBatch};

/// Which panel currently has the user's attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    SingleResult,
}

/// Rendering sink for fully-computed workflow output.
pub trait Present {
    fn status(&mut self, status: &ServiceStatus);
    /// Busy indicator; the orchestrator guarantees `busy(false)` on every
    /// workflow exit path.
    fn busy(&mut self, active: bool);
    fn single_result(&mut self, product: &OptimizedProduct);
    fn batch_detail(&mut self, entry: &StoredBatch);
    fn dashboard(&mut self, aggregates: &DashboardAggregates, history: &BatchHistory);
    fn view(&mut self, view: View);
    fn error(&mut self, message: &str);
    fn saved_file(&mut self, path: &Path);
}

/// Human-readable terminal renderer.
#[derive(Debug, Default)]
pub struct TermPresenter;

impl TermPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Present for TermPresenter {
    fn status(&mut self, status: &ServiceStatus) {
        match status {
            ServiceStatus::Ready { message } => {
                println!("service: ready{}", suffix(message.as_deref()));
            }
            ServiceStatus::Degraded { message } => println!("service: degraded — {message}"),
            ServiceStatus::Unreachable { reason } => println!("service: unreachable — {reason}"),
        }
    }

    fn busy(&mut self, active: bool) {
        if active {
            println!("working...");
        }
    }

    fn single_result(&mut self, product: &OptimizedProduct) {
        println!("\n== {} ==", product.product_id);
        println!("score:       {:.0}%", product.optimization_score * 100.0);
        println!("title:       {}", product.ai_title);
        println!("description: {}", product.ai_description);
        if !product.semantic_tags.is_empty() {
            println!("tags:        {}", product.semantic_tags.join(", "));
        }
        for use_case in &product.use_cases {
            println!("use case:    {use_case}");
        }
        for faq in &product.faq_content {
            println!("Q: {}\nA: {}", faq.question, faq.answer);
        }
        if !product.ai_summary.is_empty() {
            println!("summary:     {}", product.ai_summary);
        }
    }

    fn batch_detail(&mut self, entry: &StoredBatch) {
        let summary = &entry.batch.summary;
        println!(
            "\nbatch {} — {} products, {} optimized, {} failed, avg {:.0}%, {:.2}s",
            entry.batch.batch_id,
            summary.total_products,
            summary.successful,
            summary.failed,
            summary.average_score * 100.0,
            summary.processing_time,
        );
        for product in &entry.batch.results {
            println!("  {}: {} ({:.0}%)", product.product_id, product.ai_title,
                product.optimization_score * 100.0);
        }
        for failure in &entry.batch.errors {
            println!("  {}: FAILED — {}", failure.product_id, failure.error);
        }
    }

    fn dashboard(&mut self, aggregates: &DashboardAggregates, history: &BatchHistory) {
        println!("\n-- dashboard --");
        println!("total products:  {}", aggregates.total_products);
        println!("total optimized: {}", aggregates.total_optimized);
        println!("average score:   {:.0}%", aggregates.average_score_percent());
        println!("batches:         {}", aggregates.total_batches);
        for entry in history.iter() {
            println!(
                "  {}  {}  ({} products)",
                entry.completed_at.format("%H:%M:%S"),
                entry.batch.batch_id,
                entry.batch.summary.total_products,
            );
        }
    }

    fn view(&mut self, _view: View) {
        // The terminal has no panel to switch; output above already scrolled in.
    }

    fn error(&mut self, message: &str) {
        eprintln!("error: {message}");
    }

    fn saved_file(&mut self, path: &Path) {
        println!("saved {}", path.display());
    }
}

fn suffix(message: Option<&str>) -> String {
    message.map_or_else(String::new, |m| format!(" — {m}"))
}

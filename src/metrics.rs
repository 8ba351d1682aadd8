//! Render metrics.
//!
//! Counts what the dispatcher did across all pages served by this process.
//! Exposed on `/metrics` as a `MetricsReport`.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Render counters.
#[derive(Debug, Default)]
pub struct RenderMetrics {
    /// Pages rendered
    pages_rendered: AtomicUsize,

    /// Sections routed to a handler
    sections_rendered: AtomicUsize,

    /// Sections dropped (unknown kind or undecodable payload)
    sections_skipped: AtomicUsize,

    /// Sections and layout documents that fell back to their default variant
    variant_defaults: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<RenderMetrics> = OnceLock::new();

impl RenderMetrics {
    /// Create a detached set of counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the global render metrics instance.
    pub fn global() -> &'static RenderMetrics {
        METRICS.get_or_init(RenderMetrics::new)
    }

    pub fn record_page_rendered(&self) {
        self.pages_rendered.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_section_rendered(&self) {
        self.sections_rendered.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_section_skipped(&self) {
        self.sections_skipped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_variant_default(&self) {
        self.variant_defaults.fetch_add(1, Ordering::Relaxed);
    }

    pub fn pages_rendered(&self) -> usize {
        self.pages_rendered.load(Ordering::Relaxed)
    }

    pub fn sections_rendered(&self) -> usize {
        self.sections_rendered.load(Ordering::Relaxed)
    }

    pub fn sections_skipped(&self) -> usize {
        self.sections_skipped.load(Ordering::Relaxed)
    }

    pub fn variant_defaults(&self) -> usize {
        self.variant_defaults.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let rendered = self.sections_rendered();
        let skipped = self.sections_skipped();
        let total = rendered + skipped;
        let skip_rate = if total > 0 {
            (skipped as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            pages_rendered: self.pages_rendered(),
            sections_rendered: rendered,
            sections_skipped: skipped,
            section_skip_rate: skip_rate,
            variant_defaults: self.variant_defaults(),
        }
    }
}

/// Snapshot of the render counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub pages_rendered: usize,
    pub sections_rendered: usize,
    pub sections_skipped: usize,

    /// Skipped sections as a percentage of all sections seen (0-100)
    pub section_skip_rate: f64,

    pub variant_defaults: usize,
}

//! # Packing Observer
//!
//! Hooks for callers that want to trace packing calls.
//!
//! The core never writes to a global log sink. A caller that wants logs
//! passes an observer into [`crate::pack_products_observed`]; the CLI ships
//! one backed by `tracing`.
//!
//! ## Call Order
//! ```text
//! on_start(items, catalog)
//!      │
//!      ├── on_round(report)   ← once per round, 0..n times
//!      │
//! on_finish(summary)
//! ```
//! `on_start`/`on_finish` are not called when validation rejects the input.

use crate::types::{Container, Item, PackingSummary};

/// What a single packing round did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundReport {
    /// 1-based round number.
    pub round: usize,
    /// Ship-alone items given their own container this round.
    pub ship_alone_packed: usize,
    /// Catalog position of the winning container, if any container packed
    /// anything this round.
    pub container_index: Option<usize>,
    /// Items placed in the winning container.
    pub packed: usize,
    /// Items handed on to the next round.
    pub remaining: usize,
}

/// Receives entry, per-round and exit notifications from the orchestrator.
pub trait PackingObserver {
    /// Called once before packing starts, with the validated input.
    fn on_start(&self, items: &[Item], catalog: &[Container]);

    /// Called after each round.
    fn on_round(&self, _report: &RoundReport) {}

    /// Called once with the final summary.
    fn on_finish(&self, summary: &PackingSummary);
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PackingObserver for NoopObserver {
    fn on_start(&self, _items: &[Item], _catalog: &[Container]) {}

    fn on_finish(&self, _summary: &PackingSummary) {}
}

//! `tracing`-backed packing observer.

use cartpack_core::{Container, Item, PackingObserver, PackingSummary, RoundReport};
use tracing::{debug, info, warn};

/// Emits structured log events for each packing call.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl PackingObserver for TracingObserver {
    fn on_start(&self, items: &[Item], catalog: &[Container]) {
        info!(
            items = items.len(),
            ship_alone = items.iter().filter(|i| i.ship_alone).count(),
            containers = catalog.len(),
            "Packing started"
        );
    }

    fn on_round(&self, report: &RoundReport) {
        debug!(
            round = report.round,
            ship_alone = report.ship_alone_packed,
            container = ?report.container_index,
            packed = report.packed,
            remaining = report.remaining,
            "Packing round complete"
        );
    }

    fn on_finish(&self, summary: &PackingSummary) {
        info!(
            packages = summary.container_count(),
            packed = summary.packed_item_count(),
            unpacked = summary.unpacked.len(),
            "Packing finished"
        );

        if !summary.is_fully_packed() {
            warn!(
                count = summary.unpacked.len(),
                "Some items fit no container in the catalog"
            );
        }
    }
}

//! # Packing Orchestrator
//!
//! Entry point that turns items and a container catalog into packages.
//!
//! ## Round Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  pack_products(items, catalog)                                          │
//! │       │                                                                 │
//! │       ├── validate input ──────────────► Err(CoreError)                 │
//! │       │                                                                 │
//! │       ├── find_unfittable ─────────────► stashed for `unpacked`         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ROUND (at most one per remaining item)                                 │
//! │       │                                                                 │
//! │       ├── sort by volume, largest first                                 │
//! │       ├── ship-alone items ──► smallest_container each ──► `packed`     │
//! │       ├── pack_container once per catalog entry (one trial each)        │
//! │       ├── best trial: most items, then least space left, then earliest  │
//! │       ├── best trial's items ──► `packed`                               │
//! │       └── best trial's leftovers ──► next ROUND                         │
//! │                                                                         │
//! │  stashed unfittable items ──► `unpacked`                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Guarantees
//! - Every input item ends up exactly once, in one entry or in `unpacked`
//! - A ship-alone item is always the only item in its entry
//! - Items are never dropped: anything left when rounds run out, or that no
//!   container accepts, goes to `unpacked`
//!
//! ## Example
//! ```rust
//! use cartpack_core::{pack_products, Container, Item};
//!
//! let items = vec![
//!     Item::new(3.0, 2.0, 1.0),
//!     Item::new(3.0, 4.0, 1.0),
//!     Item::new(3.0, 4.0, 1.0),
//! ];
//! let catalog = vec![
//!     Container::new(3.0, 4.0, 2.0),
//!     Container::new(3.0, 5.0, 2.0),
//!     Container::new(3.0, 6.0, 2.0),
//!     Container::new(3.0, 2.0, 1.0),
//! ];
//!
//! let summary = pack_products(&items, &catalog).unwrap();
//! assert_eq!(summary.packed.len(), 1);
//! assert_eq!(summary.packed[0].container.volume_cm, 30.0);
//! assert_eq!(summary.packed[0].remaining_volume_cm, 0.0);
//! ```

use crate::error::CoreResult;
use crate::fit::{find_unfittable, smallest_container};
use crate::observer::{NoopObserver, PackingObserver, RoundReport};
use crate::packer::{pack_container, sort_by_volume, ContainerTrial, SortOrder};
use crate::types::{Container, Item, PackingEntry, PackingSummary};
use crate::validation::validate_packing_input;

// =============================================================================
// Entry Points
// =============================================================================

/// Packs `items` into containers from `catalog`.
///
/// ## Errors
/// Returns `Err` only when the input is rejected (empty catalog,
/// non-positive dimensions, too many items). Items that fit nowhere are
/// reported in [`PackingSummary::unpacked`].
pub fn pack_products(items: &[Item], catalog: &[Container]) -> CoreResult<PackingSummary> {
    pack_products_observed(items, catalog, &NoopObserver)
}

/// Same as [`pack_products`], reporting progress to `observer`.
pub fn pack_products_observed(
    items: &[Item],
    catalog: &[Container],
    observer: &dyn PackingObserver,
) -> CoreResult<PackingSummary> {
    validate_packing_input(items, catalog)?;

    observer.on_start(items, catalog);
    let summary = pack_validated(items, catalog, observer);
    observer.on_finish(&summary);

    Ok(summary)
}

// =============================================================================
// Round Loop
// =============================================================================

fn pack_validated(
    items: &[Item],
    catalog: &[Container],
    observer: &dyn PackingObserver,
) -> PackingSummary {
    let mut unfittable = find_unfittable(items, catalog).into_iter().peekable();
    let mut stranded = Vec::new();
    let mut working = Vec::with_capacity(items.len());

    for (i, item) in items.iter().enumerate() {
        if unfittable.next_if_eq(&i).is_some() {
            stranded.push(item.clone());
        } else {
            working.push(item.clone());
        }
    }

    let mut summary = PackingSummary::new();
    let max_rounds = working.len();
    pack_rounds(working, catalog, max_rounds, &mut summary, observer);

    summary.unpacked.extend(stranded);
    summary
}

/// Runs packing rounds until no items remain or `max_rounds` is spent.
///
/// Each round packs at least one item when every item fits some container
/// on its own, so `max_rounds = items.len()` is never the limiting factor.
fn pack_rounds(
    mut items: Vec<Item>,
    catalog: &[Container],
    max_rounds: usize,
    summary: &mut PackingSummary,
    observer: &dyn PackingObserver,
) {
    let mut round = 0;

    while !items.is_empty() {
        if round >= max_rounds {
            summary.unpacked.append(&mut items);
            break;
        }
        round += 1;

        let sorted = sort_by_volume(&items, SortOrder::Descending);
        let (mut alone, rest): (Vec<Item>, Vec<Item>) =
            sorted.into_iter().partition(|item| item.ship_alone);
        // Smallest ship-alone item first
        alone.reverse();

        let ship_alone_packed = pack_ship_alone(alone, catalog, summary);

        let mut report = RoundReport {
            round,
            ship_alone_packed,
            container_index: None,
            packed: 0,
            remaining: 0,
        };

        if rest.is_empty() {
            observer.on_round(&report);
            break;
        }

        let Some((index, trial)) = best_trial(&rest, catalog) else {
            report.remaining = rest.len();
            observer.on_round(&report);
            summary.unpacked.extend(rest);
            break;
        };

        report.container_index = Some(index);
        report.packed = trial.packed.len();
        report.remaining = trial.unpacked.len();
        observer.on_round(&report);

        summary.packed.push(PackingEntry {
            container: catalog[index].clone(),
            items: trial.packed,
            remaining_volume_cm: trial.remaining_volume_cm,
        });
        items = trial.unpacked;
    }
}

/// Gives each ship-alone item its own smallest container.
///
/// Returns how many were packed; the rest go to `unpacked`.
fn pack_ship_alone(alone: Vec<Item>, catalog: &[Container], summary: &mut PackingSummary) -> usize {
    let mut packed = 0;

    for item in alone {
        match smallest_container(&item, catalog) {
            Some(container) => {
                summary.packed.push(PackingEntry {
                    container: container.clone(),
                    remaining_volume_cm: container.volume_cm - item.volume_cm,
                    items: vec![item],
                });
                packed += 1;
            }
            None => summary.unpacked.push(item),
        }
    }

    packed
}

/// Tries every container against `items` and returns the best trial.
///
/// ## Ranking
/// 1. Most items packed
/// 2. Least remaining volume
/// 3. Earliest in the catalog
///
/// Trials that packed nothing are ignored; `None` if all packed nothing.
fn best_trial(items: &[Item], catalog: &[Container]) -> Option<(usize, ContainerTrial)> {
    let mut best: Option<(usize, ContainerTrial)> = None;

    for (index, container) in catalog.iter().enumerate() {
        let trial = pack_container(items, container);
        if trial.packed.is_empty() {
            continue;
        }

        let better = match &best {
            None => true,
            Some((_, current)) => {
                trial.packed.len() > current.packed.len()
                    || (trial.packed.len() == current.packed.len()
                        && trial.remaining_volume_cm < current.remaining_volume_cm)
            }
        };

        if better {
            best = Some((index, trial));
        }
    }

    best
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use proptest::prelude::*;

    use super::*;
    use crate::error::CoreError;

    fn volumes(items: &[Item]) -> Vec<f64> {
        items.iter().map(|i| i.volume_cm).collect()
    }

    #[derive(Default)]
    struct RecordingObserver {
        events: RefCell<Vec<String>>,
    }

    impl PackingObserver for RecordingObserver {
        fn on_start(&self, items: &[Item], catalog: &[Container]) {
            self.events
                .borrow_mut()
                .push(format!("start {} {}", items.len(), catalog.len()));
        }

        fn on_round(&self, report: &RoundReport) {
            self.events.borrow_mut().push(format!(
                "round {} alone={} container={:?} packed={} remaining={}",
                report.round,
                report.ship_alone_packed,
                report.container_index,
                report.packed,
                report.remaining
            ));
        }

        fn on_finish(&self, summary: &PackingSummary) {
            self.events.borrow_mut().push(format!(
                "finish {} {}",
                summary.packed.len(),
                summary.unpacked.len()
            ));
        }
    }

    #[test]
    fn test_multi_item_consolidation() {
        let items = vec![
            Item::new(3.0, 2.0, 1.0),
            Item::new(3.0, 4.0, 1.0),
            Item::new(3.0, 4.0, 1.0),
        ];
        let catalog = vec![
            Container::new(3.0, 4.0, 2.0),
            Container::new(3.0, 5.0, 2.0),
            Container::new(3.0, 6.0, 2.0),
            Container::new(3.0, 2.0, 1.0),
        ];

        let summary = pack_products(&items, &catalog).unwrap();

        assert_eq!(summary.packed.len(), 1);
        assert!(summary.unpacked.is_empty());
        let entry = &summary.packed[0];
        assert_eq!(entry.container.volume_cm, 30.0);
        assert_eq!(entry.remaining_volume_cm, 0.0);
        assert_eq!(volumes(&entry.items), vec![12.0, 12.0, 6.0]);
    }

    #[test]
    fn test_ship_alone_isolation() {
        let items = vec![
            Item::new(3.0, 2.0, 1.0).with_ship_alone(true),
            Item::new(3.0, 3.0, 2.0).with_ship_alone(true),
            Item::new(3.0, 4.0, 2.0).with_ship_alone(true),
        ];
        let catalog = vec![
            Container::new(3.0, 4.0, 1.0),
            Container::new(3.0, 3.0, 2.0),
            Container::new(3.0, 4.0, 4.0),
        ];

        let summary = pack_products(&items, &catalog).unwrap();

        assert!(summary.unpacked.is_empty());
        assert_eq!(summary.packed.len(), 3);
        for entry in &summary.packed {
            assert_eq!(entry.items.len(), 1);
        }

        let picked: Vec<(f64, f64)> = summary
            .packed
            .iter()
            .map(|e| (e.container.volume_cm, e.remaining_volume_cm))
            .collect();
        assert_eq!(picked, vec![(12.0, 6.0), (18.0, 0.0), (48.0, 24.0)]);
    }

    #[test]
    fn test_ship_alone_entries_come_first() {
        let items = vec![
            Item::new(1.0, 1.0, 1.0).with_sku("loose-1"),
            Item::new(2.0, 2.0, 2.0).with_sku("fragile").with_ship_alone(true),
            Item::new(1.0, 1.0, 1.0).with_sku("loose-2"),
        ];
        let catalog = vec![Container::new(4.0, 4.0, 4.0)];

        let summary = pack_products(&items, &catalog).unwrap();

        assert_eq!(summary.packed.len(), 2);
        assert_eq!(summary.packed[0].items.len(), 1);
        assert_eq!(summary.packed[0].items[0].sku.as_deref(), Some("fragile"));
        assert_eq!(summary.packed[1].items.len(), 2);
        assert_eq!(summary.packed[1].remaining_volume_cm, 62.0);
    }

    #[test]
    fn test_unfittable_item_goes_to_unpacked() {
        let items = vec![
            Item::new(1.0, 1.0, 1.0),
            Item::new(7.0, 2.0, 1.0).with_sku("too-long"),
        ];
        let catalog = vec![Container::new(2.0, 2.0, 2.0), Container::new(3.0, 4.0, 4.0)];

        let summary = pack_products(&items, &catalog).unwrap();

        assert_eq!(summary.unpacked.len(), 1);
        assert_eq!(summary.unpacked[0].volume_cm, 14.0);
        assert_eq!(summary.unpacked[0].sku.as_deref(), Some("too-long"));
        assert!(summary
            .packed
            .iter()
            .flat_map(|e| &e.items)
            .all(|i| i.sku.as_deref() != Some("too-long")));
    }

    #[test]
    fn test_unfittable_ship_alone_item_goes_to_unpacked() {
        let items = vec![Item::new(7.0, 2.0, 1.0).with_ship_alone(true)];
        let catalog = vec![Container::new(3.0, 4.0, 4.0)];

        let summary = pack_products(&items, &catalog).unwrap();

        assert!(summary.packed.is_empty());
        assert_eq!(volumes(&summary.unpacked), vec![14.0]);
    }

    #[test]
    fn test_leftovers_go_to_next_round() {
        let items = vec![
            Item::new(3.0, 2.0, 1.0),
            Item::new(3.0, 2.0, 1.0),
            Item::new(3.0, 2.0, 1.0),
        ];
        let catalog = vec![Container::new(3.0, 4.0, 1.0)];

        let summary = pack_products(&items, &catalog).unwrap();

        assert_eq!(summary.packed.len(), 2);
        assert_eq!(summary.packed[0].items.len(), 2);
        assert_eq!(summary.packed[0].remaining_volume_cm, 0.0);
        assert_eq!(summary.packed[1].items.len(), 1);
        assert_eq!(summary.packed[1].remaining_volume_cm, 6.0);
    }

    #[test]
    fn test_leftover_round_picks_tighter_container() {
        // Round 1 fills the big box with the 24; the 6 then gets the small box.
        let items = vec![Item::new(3.0, 4.0, 2.0), Item::new(3.0, 2.0, 1.0)];
        let catalog = vec![Container::new(3.0, 4.0, 2.0), Container::new(3.0, 2.0, 1.0)];

        let summary = pack_products(&items, &catalog).unwrap();

        let picked: Vec<f64> = summary.packed.iter().map(|e| e.container.volume_cm).collect();
        assert_eq!(picked, vec![24.0, 6.0]);
        assert!(summary.packed.iter().all(|e| e.remaining_volume_cm == 0.0));
    }

    #[test]
    fn test_identical_containers_earliest_wins() {
        let items = vec![Item::new(1.0, 1.0, 1.0)];
        let catalog = vec![
            Container::new(2.0, 2.0, 2.0).with_name("first"),
            Container::new(2.0, 2.0, 2.0).with_name("second"),
        ];

        let summary = pack_products(&items, &catalog).unwrap();
        assert_eq!(summary.packed[0].container.name.as_deref(), Some("first"));
    }

    #[test]
    fn test_empty_items() {
        let observer = RecordingObserver::default();
        let summary =
            pack_products_observed(&[], &[Container::new(1.0, 1.0, 1.0)], &observer).unwrap();

        assert_eq!(summary, PackingSummary::default());
        assert_eq!(*observer.events.borrow(), vec!["start 0 1", "finish 0 0"]);
    }

    #[test]
    fn test_large_cart_is_packed_not_rejected() {
        let items = vec![Item::new(1.0, 1.0, 1.0); 1001];
        let summary = pack_products(&items, &[Container::new(20.0, 20.0, 20.0)]).unwrap();

        assert_eq!(summary.packed.len(), 1);
        assert_eq!(summary.packed[0].items.len(), 1001);
        assert!(summary.unpacked.is_empty());
    }

    #[test]
    fn test_rejects_empty_catalog() {
        let result = pack_products(&[Item::new(1.0, 1.0, 1.0)], &[]);
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[test]
    fn test_rejects_zero_dimension_without_observing() {
        let observer = RecordingObserver::default();
        let result = pack_products_observed(
            &[Item::new(1.0, 0.0, 1.0)],
            &[Container::new(1.0, 1.0, 1.0)],
            &observer,
        );

        assert!(result.is_err());
        assert!(observer.events.borrow().is_empty());
    }

    #[test]
    fn test_observer_sees_every_round() {
        let items = vec![
            Item::new(3.0, 2.0, 1.0).with_ship_alone(true),
            Item::new(3.0, 2.0, 1.0),
            Item::new(3.0, 2.0, 1.0),
            Item::new(3.0, 2.0, 1.0),
        ];
        let catalog = vec![Container::new(3.0, 4.0, 1.0)];
        let observer = RecordingObserver::default();

        let summary = pack_products_observed(&items, &catalog, &observer).unwrap();

        assert_eq!(summary.packed.len(), 3);
        assert_eq!(
            *observer.events.borrow(),
            vec![
                "start 4 1",
                "round 1 alone=1 container=Some(0) packed=2 remaining=1",
                "round 2 alone=0 container=Some(0) packed=1 remaining=0",
                "finish 3 0",
            ]
        );
    }

    #[test]
    fn test_exhausted_rounds_route_items_to_unpacked() {
        let mut summary = PackingSummary::new();
        let items = vec![Item::new(1.0, 1.0, 1.0), Item::new(1.0, 1.0, 1.0)];

        pack_rounds(
            items,
            &[Container::new(1.0, 1.0, 1.0)],
            1,
            &mut summary,
            &NoopObserver,
        );

        assert_eq!(summary.packed.len(), 1);
        assert_eq!(summary.unpacked.len(), 1);
    }

    #[test]
    fn test_round_without_any_fit_routes_items_to_unpacked() {
        let mut summary = PackingSummary::new();
        let items = vec![Item::new(5.0, 5.0, 5.0)];

        pack_rounds(
            items,
            &[Container::new(1.0, 1.0, 1.0)],
            1,
            &mut summary,
            &NoopObserver,
        );

        assert!(summary.packed.is_empty());
        assert_eq!(volumes(&summary.unpacked), vec![125.0]);
    }

    #[test]
    fn test_best_trial_prefers_count_then_space() {
        let items = vec![Item::new(1.0, 1.0, 1.0), Item::new(1.0, 1.0, 1.0)];
        let catalog = vec![
            Container::new(1.0, 1.0, 1.0),
            Container::new(3.0, 1.0, 1.0),
            Container::new(2.0, 1.0, 1.0),
        ];

        let (index, trial) = best_trial(&items, &catalog).unwrap();
        assert_eq!(index, 2);
        assert_eq!(trial.packed.len(), 2);
        assert_eq!(trial.remaining_volume_cm, 0.0);
    }

    fn arb_item() -> impl Strategy<Value = Item> {
        (1u8..10, 1u8..10, 1u8..10, any::<bool>()).prop_map(|(l, w, h, alone)| {
            Item::new(f64::from(l), f64::from(w), f64::from(h)).with_ship_alone(alone)
        })
    }

    fn arb_container() -> impl Strategy<Value = Container> {
        (1u8..12, 1u8..12, 1u8..12)
            .prop_map(|(l, w, h)| Container::new(f64::from(l), f64::from(w), f64::from(h)))
    }

    proptest! {
        #[test]
        fn prop_every_item_accounted_for_once(
            items in prop::collection::vec(arb_item(), 0..20),
            catalog in prop::collection::vec(arb_container(), 1..5),
        ) {
            let labeled: Vec<Item> = items
                .into_iter()
                .enumerate()
                .map(|(i, item)| item.with_sku(i.to_string()))
                .collect();

            let summary = pack_products(&labeled, &catalog).unwrap();
            prop_assert_eq!(summary.item_count(), labeled.len());

            let mut seen: Vec<usize> = summary
                .packed
                .iter()
                .flat_map(|e| &e.items)
                .chain(&summary.unpacked)
                .map(|i| i.sku.as_deref().unwrap().parse().unwrap())
                .collect();
            seen.sort_unstable();
            prop_assert_eq!(seen, (0..labeled.len()).collect::<Vec<_>>());

            for entry in &summary.packed {
                let used = entry.used_volume_cm();
                prop_assert!(used <= entry.container.volume_cm);
                prop_assert_eq!(entry.remaining_volume_cm, entry.container.volume_cm - used);
                if entry.items.iter().any(|i| i.ship_alone) {
                    prop_assert_eq!(entry.items.len(), 1);
                }
            }
        }
    }
}

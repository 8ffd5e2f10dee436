//! # Fit Module
//!
//! Decides whether an item fits a container, and picks containers for items.
//!
//! ## Tested Orientations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Container axis:      LENGTH      WIDTH       HEIGHT                    │
//! │  ─────────────────────────────────────────────────────────────────────  │
//! │  1. As-is             length      width       height                    │
//! │  2. Rotated flat      width       length      height                    │
//! │  3. On end            height      width       length                    │
//! │  4. On end, rotated   width       height      length                    │
//! │                                                                         │
//! │  Orientations that put the item's width on the vertical axis are       │
//! │  never tried: 4 of the 6 permutations, not all of them.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operations
//! - [`test_fit`] - one item × one container
//! - [`smallest_container`] - the smallest fitting container (ship-alone items)
//! - [`rank_containers`] - every fitting container, tightest first
//! - [`find_unfittable`] - items no container can hold

use std::cmp::Ordering;

use crate::types::{Container, FitResult, Item};

/// Item axis placed along each container axis `[length, width, height]`.
///
/// Axis indices: 0 = length, 1 = width, 2 = height.
const ORIENTATIONS: [[usize; 3]; 4] = [[0, 1, 2], [1, 0, 2], [2, 1, 0], [1, 2, 0]];

// =============================================================================
// Fit Tester
// =============================================================================

/// Tests whether `item` fits inside `container` in any supported orientation.
///
/// ## Returns
/// - No fit: `fit_items == 0.0`, `remaining_box_volume_cm` = container volume
/// - Fit: `fit_items` = product of `container_dim / item_dim` over the axes
///   of the first matching orientation, and `remaining_box_volume_cm` =
///   container volume minus item volume
///
/// ## Example
/// ```rust
/// use cartpack_core::fit::test_fit;
/// use cartpack_core::{Container, Item};
///
/// let fit = test_fit(&Item::new(3.0, 2.0, 1.0), &Container::new(4.0, 3.0, 2.0));
/// assert!(fit.fits());
///
/// let fit = test_fit(&Item::new(5.0, 2.0, 1.0), &Container::new(4.0, 2.0, 1.0));
/// assert_eq!(fit.fit_items, 0.0);
/// ```
pub fn test_fit(item: &Item, container: &Container) -> FitResult {
    let no_fit = FitResult {
        fit_items: 0.0,
        container_volume_cm: container.volume_cm,
        item_volume_cm: item.volume_cm,
        remaining_box_volume_cm: container.volume_cm,
    };

    if container.volume_cm < item.volume_cm {
        return no_fit;
    }

    let item_dims = item.dimensions();
    let box_dims = container.dimensions();

    let matched = ORIENTATIONS
        .iter()
        .find(|axes| (0..3).all(|k| item_dims[axes[k]] <= box_dims[k]));

    match matched {
        Some(axes) => FitResult {
            fit_items: (0..3).map(|k| box_dims[k] / item_dims[axes[k]]).product(),
            container_volume_cm: container.volume_cm,
            item_volume_cm: item.volume_cm,
            remaining_box_volume_cm: container.volume_cm - item.volume_cm,
        },
        None => no_fit,
    }
}

// =============================================================================
// Smallest-Container Selector
// =============================================================================

/// Returns the smallest-volume container that fits `item`.
///
/// Ties on volume go to the earlier catalog entry. Returns `None` when no
/// container fits.
pub fn smallest_container<'a>(item: &Item, catalog: &'a [Container]) -> Option<&'a Container> {
    let mut best: Option<&'a Container> = None;

    for container in catalog {
        if !test_fit(item, container).fits() {
            continue;
        }
        if best.is_none_or(|b| container.volume_cm < b.volume_cm) {
            best = Some(container);
        }
    }

    best
}

// =============================================================================
// Container Ranker
// =============================================================================

/// A fitting container together with its capacity metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerFit<'a> {
    /// Position in the catalog.
    pub index: usize,
    pub container: &'a Container,
    pub fit_items: f64,
}

/// Ranks every container that fits `item`, tightest fit first.
///
/// Smaller `fit_items` is tighter (an exact fit is `1.0`). The sort is
/// stable, so containers with identical `fit_items` keep catalog order and
/// none is dropped.
pub fn rank_containers<'a>(item: &Item, catalog: &'a [Container]) -> Vec<ContainerFit<'a>> {
    let mut ranked: Vec<ContainerFit<'a>> = catalog
        .iter()
        .enumerate()
        .filter_map(|(index, container)| {
            let fit = test_fit(item, container);
            fit.fits().then_some(ContainerFit {
                index,
                container,
                fit_items: fit.fit_items,
            })
        })
        .collect();

    ranked.sort_by(|a, b| a.fit_items.partial_cmp(&b.fit_items).unwrap_or(Ordering::Equal));
    ranked
}

// =============================================================================
// Unfittable-Item Filter
// =============================================================================

/// Returns the positions of items that no catalog container can hold.
///
/// Each item is judged on its own, regardless of what else is packed.
pub fn find_unfittable(items: &[Item], catalog: &[Container]) -> Vec<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| rank_containers(item, catalog).is_empty())
        .map(|(i, _)| i)
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(c: &Container) -> [f64; 3] {
        c.dimensions()
    }

    #[test]
    fn test_fit_succeeds_as_is() {
        let fit = test_fit(&Item::new(3.0, 2.0, 1.0), &Container::new(4.0, 3.0, 2.0));
        assert!(fit.fits());
        assert_eq!(fit.fit_items, (4.0 / 3.0) * (3.0 / 2.0) * 2.0);
        assert_eq!(fit.container_volume_cm, 24.0);
        assert_eq!(fit.item_volume_cm, 6.0);
        assert_eq!(fit.remaining_box_volume_cm, 18.0);
    }

    #[test]
    fn test_fit_fails_when_too_long() {
        let fit = test_fit(&Item::new(5.0, 2.0, 1.0), &Container::new(4.0, 2.0, 1.0));
        assert_eq!(fit.fit_items, 0.0);
        assert!(!fit.fits());
        assert_eq!(fit.remaining_box_volume_cm, 8.0);
    }

    #[test]
    fn test_fit_exact_match_is_one() {
        let fit = test_fit(&Item::new(2.0, 3.0, 1.0), &Container::new(2.0, 3.0, 1.0));
        assert_eq!(fit.fit_items, 1.0);
        assert_eq!(fit.remaining_box_volume_cm, 0.0);
    }

    #[test]
    fn test_fit_rotated_flat() {
        // Only fits with length and width swapped
        let fit = test_fit(&Item::new(2.0, 5.0, 1.0), &Container::new(5.0, 2.0, 1.0));
        assert_eq!(fit.fit_items, 1.0);
    }

    #[test]
    fn test_fit_standing_on_end() {
        let fit = test_fit(&Item::new(5.0, 2.0, 1.0), &Container::new(1.0, 2.0, 5.0));
        assert_eq!(fit.fit_items, 1.0);
    }

    #[test]
    fn test_fit_standing_on_end_rotated() {
        let fit = test_fit(&Item::new(5.0, 1.0, 2.0), &Container::new(1.0, 2.0, 5.0));
        assert_eq!(fit.fit_items, 1.0);
    }

    #[test]
    fn test_fit_skips_width_vertical_orientations() {
        // Fits only by standing the item on its width: (l, h, w)
        let fit = test_fit(&Item::new(5.0, 3.0, 1.0), &Container::new(5.0, 1.0, 3.0));
        assert!(!fit.fits());
    }

    #[test]
    fn test_fit_fails_when_container_volume_too_small() {
        let mut container = Container::new(4.0, 3.0, 2.0);
        container.volume_cm = 5.0;
        assert!(!test_fit(&Item::new(3.0, 2.0, 1.0), &container).fits());
    }

    #[test]
    fn test_smallest_container_perfect_match() {
        let catalog = vec![
            Container::new(1.0, 3.0, 1.0),
            Container::new(1.0, 4.0, 1.0),
            Container::new(1.0, 3.0, 2.0),
            Container::new(1.0, 2.0, 1.0),
        ];
        let best = smallest_container(&Item::new(1.0, 3.0, 1.0), &catalog).unwrap();
        assert_eq!(dims(best), [1.0, 3.0, 1.0]);
    }

    #[test]
    fn test_smallest_container_no_exact_match() {
        let catalog = vec![
            Container::new(1.0, 4.0, 1.0),
            Container::new(1.0, 3.0, 2.0),
            Container::new(1.0, 2.0, 1.0),
        ];
        let best = smallest_container(&Item::new(1.0, 3.0, 1.0), &catalog).unwrap();
        assert_eq!(dims(best), [1.0, 4.0, 1.0]);
    }

    #[test]
    fn test_smallest_container_none_fit() {
        let catalog = vec![
            Container::new(2.0, 2.0, 1.0),
            Container::new(2.0, 1.0, 2.0),
            Container::new(1.0, 1.0, 1.0),
        ];
        assert!(smallest_container(&Item::new(2.0, 3.0, 1.0), &catalog).is_none());
    }

    #[test]
    fn test_smallest_container_tie_goes_to_catalog_order() {
        let catalog = vec![
            Container::new(1.0, 4.0, 1.0).with_name("first"),
            Container::new(4.0, 1.0, 1.0).with_name("second"),
        ];
        let best = smallest_container(&Item::new(1.0, 3.0, 1.0), &catalog).unwrap();
        assert_eq!(best.name.as_deref(), Some("first"));
    }

    #[test]
    fn test_rank_containers_order() {
        let catalog = vec![
            Container::new(2.0, 3.0, 2.0),
            Container::new(3.0, 3.0, 1.0),
            Container::new(2.0, 4.0, 1.0),
            Container::new(2.0, 1.0, 2.0),
            Container::new(1.0, 1.0, 1.0),
        ];
        let ranked = rank_containers(&Item::new(2.0, 3.0, 1.0), &catalog);

        let order: Vec<usize> = ranked.iter().map(|r| r.index).collect();
        assert_eq!(order, vec![2, 1, 0]);
        assert_eq!(dims(ranked[0].container), [2.0, 4.0, 1.0]);
    }

    #[test]
    fn test_rank_containers_keeps_identical_fits() {
        let catalog = vec![
            Container::new(2.0, 4.0, 1.0).with_name("a"),
            Container::new(2.0, 4.0, 1.0).with_name("b"),
            Container::new(2.0, 3.0, 1.0).with_name("exact"),
        ];
        let ranked = rank_containers(&Item::new(2.0, 3.0, 1.0), &catalog);

        let names: Vec<_> = ranked
            .iter()
            .map(|r| r.container.name.as_deref().unwrap())
            .collect();
        assert_eq!(names, vec!["exact", "a", "b"]);
    }

    #[test]
    fn test_find_unfittable() {
        let catalog = vec![Container::new(3.0, 4.0, 4.0), Container::new(2.0, 2.0, 2.0)];
        let items = vec![
            Item::new(1.0, 1.0, 1.0),
            Item::new(7.0, 2.0, 1.0),
            Item::new(3.0, 4.0, 4.0),
            Item::new(5.0, 5.0, 5.0),
        ];
        assert_eq!(find_unfittable(&items, &catalog), vec![1, 3]);
    }

    #[test]
    fn test_find_unfittable_empty_catalog() {
        let items = vec![Item::new(1.0, 1.0, 1.0)];
        assert_eq!(find_unfittable(&items, &[]), vec![0]);
    }
}

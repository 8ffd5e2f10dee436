//! # Packer Module
//!
//! Volume ordering and the single-container greedy fill.
//!
//! ## Greedy Fill
//! ```text
//! Container (volume 12)        Items, in caller order
//!      │                       [ 6 ][ 12 ]
//!      ▼
//! remaining = 12
//!      │
//!      ├── item 6:  fits? yes, 12 >= 6  → packed, remaining = 6
//!      │
//!      └── item 12: fits? yes, 6 >= 12? no → unpacked
//!
//! Result: packed [6], unpacked [12], remaining 6
//! ```
//!
//! One pass, no backtracking, no reordering.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::fit::test_fit;
use crate::types::{Container, Item};

// =============================================================================
// Volume Sorter
// =============================================================================

/// Direction for [`sort_by_volume`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Smallest volume first.
    Ascending,
    /// Largest volume first.
    #[default]
    Descending,
}

/// Returns a copy of `items` ordered by volume.
///
/// The sort is stable: items of equal volume keep their input order.
/// The input slice is left untouched.
///
/// ## Example
/// ```rust
/// use cartpack_core::packer::{sort_by_volume, SortOrder};
/// use cartpack_core::Item;
///
/// let items = vec![Item::new(1.0, 1.0, 1.0), Item::new(2.0, 2.0, 2.0)];
/// let sorted = sort_by_volume(&items, SortOrder::Descending);
/// assert_eq!(sorted[0].volume_cm, 8.0);
/// ```
pub fn sort_by_volume(items: &[Item], order: SortOrder) -> Vec<Item> {
    let mut sorted = items.to_vec();
    match order {
        SortOrder::Ascending => sorted.sort_by(|a, b| a.volume_cm.total_cmp(&b.volume_cm)),
        SortOrder::Descending => sorted.sort_by(|a, b| b.volume_cm.total_cmp(&a.volume_cm)),
    }
    sorted
}

// =============================================================================
// Single-Container Greedy Packer
// =============================================================================

/// The outcome of filling one container from an item list.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerTrial {
    /// Items accepted, in acceptance order.
    pub packed: Vec<Item>,
    /// Items rejected, in input order.
    pub unpacked: Vec<Item>,
    pub remaining_volume_cm: f64,
}

/// Greedily fills `container` from `items`, walking them in order.
///
/// An item is accepted when it fits the container on its own and the
/// remaining volume is at least the item's volume.
pub fn pack_container(items: &[Item], container: &Container) -> ContainerTrial {
    let mut trial = ContainerTrial {
        packed: Vec::new(),
        unpacked: Vec::new(),
        remaining_volume_cm: container.volume_cm,
    };

    for item in items {
        if test_fit(item, container).fits() && trial.remaining_volume_cm >= item.volume_cm {
            trial.remaining_volume_cm -= item.volume_cm;
            trial.packed.push(item.clone());
        } else {
            trial.unpacked.push(item.clone());
        }
    }

    trial
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # Domain Types
//!
//! Core domain types used throughout the packing engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  INPUTS                                OUTPUTS                          │
//! │  ┌─────────────────┐                   ┌─────────────────────┐          │
//! │  │      Item       │                   │   PackingSummary    │          │
//! │  │  ─────────────  │                   │  ─────────────────  │          │
//! │  │  length_cm      │                   │  packed ──────┐     │          │
//! │  │  width_cm       │                   │  unpacked     │     │          │
//! │  │  height_cm      │                   └───────────────┼─────┘          │
//! │  │  volume_cm      │                                   ▼                │
//! │  │  ship_alone     │                   ┌─────────────────────┐          │
//! │  └─────────────────┘                   │    PackingEntry     │          │
//! │  ┌─────────────────┐                   │  ─────────────────  │          │
//! │  │   Container     │                   │  container          │          │
//! │  │  ─────────────  │                   │  items              │          │
//! │  │  length_cm      │                   │  remaining_volume_cm│          │
//! │  │  width_cm       │                   └─────────────────────┘          │
//! │  │  height_cm      │                                                    │
//! │  │  volume_cm      │   DERIVED: FitResult (one item × one container)   │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Units
//! All dimensions are centimeters and all volumes cubic centimeters. The
//! `_cm` suffix mirrors the field names the rate-quote service sends.
//!
//! ## Precomputed Volume
//! `volume_cm` is supplied by the caller, not recomputed. The constructors
//! here compute it as `length × width × height` for convenience.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Item
// =============================================================================

/// A single physical unit to be shipped.
///
/// One cart line with quantity 3 becomes three `Item`s (see
/// [`crate::shipment::expand_line_items`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    /// Stock Keeping Unit, for reporting only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub sku: Option<String>,

    /// Packing length in centimeters.
    pub length_cm: f64,

    /// Packing width in centimeters.
    pub width_cm: f64,

    /// Packing height in centimeters.
    pub height_cm: f64,

    /// Packing volume in cubic centimeters.
    pub volume_cm: f64,

    /// Must never share a container with another item.
    #[serde(default)]
    pub ship_alone: bool,
}

impl Item {
    /// Creates an item, computing its volume from the three dimensions.
    ///
    /// ## Example
    /// ```rust
    /// use cartpack_core::Item;
    ///
    /// let item = Item::new(3.0, 2.0, 1.0);
    /// assert_eq!(item.volume_cm, 6.0);
    /// assert!(!item.ship_alone);
    /// ```
    pub fn new(length_cm: f64, width_cm: f64, height_cm: f64) -> Self {
        Item {
            sku: None,
            length_cm,
            width_cm,
            height_cm,
            volume_cm: length_cm * width_cm * height_cm,
            ship_alone: false,
        }
    }

    /// Attaches a SKU label.
    pub fn with_sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = Some(sku.into());
        self
    }

    /// Sets the ship-alone flag.
    pub fn with_ship_alone(mut self, ship_alone: bool) -> Self {
        self.ship_alone = ship_alone;
        self
    }

    /// Returns `[length, width, height]`.
    #[inline]
    pub fn dimensions(&self) -> [f64; 3] {
        [self.length_cm, self.width_cm, self.height_cm]
    }
}

// =============================================================================
// Container
// =============================================================================

/// One shipping box type from the catalog.
///
/// The catalog is an ordered `&[Container]`; its order breaks ties
/// everywhere a choice between equally good containers is made.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Container {
    /// Package type name, for reporting only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub name: Option<String>,

    /// Inside length in centimeters.
    pub length_cm: f64,

    /// Inside width in centimeters.
    pub width_cm: f64,

    /// Inside height in centimeters.
    pub height_cm: f64,

    /// Usable volume in cubic centimeters. Compared against item volumes
    /// before any orientation is tried.
    pub volume_cm: f64,
}

impl Container {
    /// Creates a container, computing its volume from the three dimensions.
    pub fn new(length_cm: f64, width_cm: f64, height_cm: f64) -> Self {
        Container {
            name: None,
            length_cm,
            width_cm,
            height_cm,
            volume_cm: length_cm * width_cm * height_cm,
        }
    }

    /// Attaches a package type name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns `[length, width, height]`.
    #[inline]
    pub fn dimensions(&self) -> [f64; 3] {
        [self.length_cm, self.width_cm, self.height_cm]
    }
}

// =============================================================================
// Fit Result
// =============================================================================

/// Outcome of testing one item against one container.
///
/// `fit_items == 0.0` means the item does not fit. Otherwise it is the
/// product of `container_dim / item_dim` over the matched axes, a
/// continuous capacity estimate where `1.0` is an exact fit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FitResult {
    pub fit_items: f64,
    pub container_volume_cm: f64,
    pub item_volume_cm: f64,
    /// Container volume left after notionally placing the item.
    pub remaining_box_volume_cm: f64,
}

impl FitResult {
    /// Checks if the item fits at all.
    #[inline]
    pub fn fits(&self) -> bool {
        self.fit_items != 0.0
    }
}

// =============================================================================
// Packing Entry
// =============================================================================

/// One physical package: a container and the items assigned to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PackingEntry {
    pub container: Container,
    pub items: Vec<Item>,
    /// Container volume minus the summed item volumes.
    pub remaining_volume_cm: f64,
}

impl PackingEntry {
    /// Creates an entry, deriving the remaining volume from its items.
    pub fn new(container: Container, items: Vec<Item>) -> Self {
        let used: f64 = items.iter().map(|i| i.volume_cm).sum();
        let remaining_volume_cm = container.volume_cm - used;
        PackingEntry {
            container,
            items,
            remaining_volume_cm,
        }
    }

    /// Returns the summed volume of the packed items.
    pub fn used_volume_cm(&self) -> f64 {
        self.items.iter().map(|i| i.volume_cm).sum()
    }
}

// =============================================================================
// Packing Summary
// =============================================================================

/// The final result of a packing call.
///
/// ## Ordering
/// - `packed`: ship-alone entries of a round come before that round's
///   multi-item entry
/// - `unpacked`: concatenated as discovered, no ordering guarantee
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PackingSummary {
    pub packed: Vec<PackingEntry>,
    pub unpacked: Vec<Item>,
}

impl PackingSummary {
    /// Creates an empty summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of packages (one per entry).
    pub fn container_count(&self) -> usize {
        self.packed.len()
    }

    /// Number of items placed in some container.
    pub fn packed_item_count(&self) -> usize {
        self.packed.iter().map(|e| e.items.len()).sum()
    }

    /// Total number of items accounted for, packed or not.
    pub fn item_count(&self) -> usize {
        self.packed_item_count() + self.unpacked.len()
    }

    /// Checks if every item found a container.
    pub fn is_fully_packed(&self) -> bool {
        self.unpacked.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

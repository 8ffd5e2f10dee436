//! # Shipment Input
//!
//! Turns cart lines into the per-unit items the packer works on.
//!
//! ## Expansion
//! ```text
//! LineItem { sku: "MUG", quantity: 3, 10×8×8 }
//!      │
//!      ▼
//! expand_line_items() ← THIS MODULE
//!      │
//!      ▼
//! [ Item MUG 640cm³ ][ Item MUG 640cm³ ][ Item MUG 640cm³ ]
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::Item;
use crate::validation::{validate_quantity, ValidationResult};

/// One cart line: a product's packing dimensions and how many units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub sku: Option<String>,

    pub quantity: i64,

    pub length_cm: f64,
    pub width_cm: f64,
    pub height_cm: f64,

    #[serde(default)]
    pub ship_alone: bool,
}

/// Expands cart lines into one [`Item`] per unit, in line order.
///
/// Volume is computed from the line's dimensions. Dimensions are not
/// checked here; [`crate::pack_products`] validates the expanded items.
///
/// ## Errors
/// - Quantity is zero, negative, or above MAX_ITEM_QUANTITY (999)
///
/// ## Example
/// ```rust
/// use cartpack_core::shipment::{expand_line_items, LineItem};
///
/// let lines = vec![LineItem {
///     sku: Some("MUG".to_string()),
///     quantity: 3,
///     length_cm: 10.0,
///     width_cm: 8.0,
///     height_cm: 8.0,
///     ship_alone: false,
/// }];
///
/// let items = expand_line_items(&lines).unwrap();
/// assert_eq!(items.len(), 3);
/// assert_eq!(items[0].volume_cm, 640.0);
/// ```
pub fn expand_line_items(lines: &[LineItem]) -> ValidationResult<Vec<Item>> {
    let mut items = Vec::new();

    for line in lines {
        validate_quantity(line.quantity)?;

        let unit = Item {
            sku: line.sku.clone(),
            ..Item::new(line.length_cm, line.width_cm, line.height_cm)
        }
        .with_ship_alone(line.ship_alone);

        // validate_quantity bounds this to 1..=999
        let count = line.quantity as usize;
        items.extend(std::iter::repeat(unit).take(count));
    }

    Ok(items)
}

// =============================================================================
// Unit Tests
// =============================================================================

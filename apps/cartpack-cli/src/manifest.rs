//! # Packing Manifest
//!
//! The JSON document the CLI reads: cart contents plus the container catalog.
//!
//! ## Format
//! ```json
//! {
//!   "line_items": [
//!     { "sku": "MUG", "quantity": 2, "length_cm": 10, "width_cm": 8, "height_cm": 8 }
//!   ],
//!   "items": [
//!     { "length_cm": 40, "width_cm": 30, "height_cm": 30, "volume_cm": 36000, "ship_alone": true }
//!   ],
//!   "containers": [
//!     { "name": "Small", "length_cm": 20, "width_cm": 20, "height_cm": 10, "volume_cm": 4000 }
//!   ]
//! }
//! ```
//! `line_items` are expanded one item per unit and come first; `items` are
//! already-expanded units appended after them. Catalog order is preserved.
//!
//! The unit count is summed from the line quantities and checked against the
//! configured limit before any line is expanded.

use std::path::Path;

use cartpack_core::{expand_line_items, Container, Item, LineItem};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Cart contents and container catalog for one packing run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub line_items: Vec<LineItem>,

    #[serde(default)]
    pub items: Vec<Item>,

    #[serde(default)]
    pub containers: Vec<Container>,
}

impl Manifest {
    /// Reads and parses a manifest file.
    pub fn load(path: &Path) -> CliResult<Self> {
        debug!(?path, "Reading manifest");
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parses manifest JSON.
    pub fn from_json(contents: &str) -> CliResult<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Number of units the manifest expands to.
    ///
    /// Non-positive quantities count as zero; expansion rejects them later.
    pub fn unit_count(&self) -> u64 {
        let lines: u64 = self
            .line_items
            .iter()
            .map(|line| u64::try_from(line.quantity).unwrap_or(0))
            .fold(0, u64::saturating_add);
        lines.saturating_add(self.items.len() as u64)
    }

    /// Returns every unit to pack: expanded line items, then loose items.
    ///
    /// Fails with [`CliError::TooManyItems`] before allocating when the
    /// manifest holds more than `max_items` units.
    pub fn packing_items(&self, max_items: usize) -> CliResult<Vec<Item>> {
        let count = self.unit_count();
        if count > max_items as u64 {
            return Err(CliError::TooManyItems {
                count,
                max: max_items,
            });
        }

        let mut items = expand_line_items(&self.line_items)?;
        items.extend(self.items.iter().cloned());
        Ok(items)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

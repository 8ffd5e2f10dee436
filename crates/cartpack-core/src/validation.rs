//! # Validation Module
//!
//! Precondition checks run at the packing boundary.
//!
//! ## Why Validate Here?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE ZERO-DIMENSION PROBLEM                                             │
//! │                                                                         │
//! │  An item with a missing (zero) dimension passes nearly every           │
//! │  orientation check:  0 <= anything                                     │
//! │                                                                         │
//! │  Its volume is zero, so it also passes every volume check.             │
//! │  Result: it "fits" the smallest box and the summary lies.              │
//! │                                                                         │
//! │  OUR SOLUTION: reject non-positive dimensions up front                 │
//! │    validate_packing_input() ← runs before any packing                  │
//! │    fit / packer / orchestrator internals stay unchanged                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cartpack_core::validation::validate_packing_input;
//! use cartpack_core::{Container, Item};
//!
//! let items = vec![Item::new(3.0, 2.0, 1.0)];
//! let catalog = vec![Container::new(4.0, 3.0, 2.0)];
//! assert!(validate_packing_input(&items, &catalog).is_ok());
//!
//! // Empty catalog is refused
//! assert!(validate_packing_input(&items, &[]).is_err());
//! ```

use crate::error::{CoreResult, ValidationError};
use crate::types::{Container, Item};
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates one dimension or volume: finite and strictly positive.
///
/// ## Example
/// ```rust
/// use cartpack_core::validation::validate_measure;
///
/// assert!(validate_measure("length_cm", 2.5).is_ok());
/// assert!(validate_measure("length_cm", 0.0).is_err());
/// assert!(validate_measure("length_cm", f64::NAN).is_err());
/// ```
pub fn validate_measure(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    if value <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a line-item quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

// =============================================================================
// Entity Validators
// =============================================================================

/// Validates every dimension and the volume of the item at `index`.
pub fn validate_item(index: usize, item: &Item) -> ValidationResult<()> {
    validate_measure(&format!("items[{index}].length_cm"), item.length_cm)?;
    validate_measure(&format!("items[{index}].width_cm"), item.width_cm)?;
    validate_measure(&format!("items[{index}].height_cm"), item.height_cm)?;
    validate_measure(&format!("items[{index}].volume_cm"), item.volume_cm)
}

/// Validates every dimension and the volume of the container at `index`.
pub fn validate_container(index: usize, container: &Container) -> ValidationResult<()> {
    validate_measure(&format!("catalog[{index}].length_cm"), container.length_cm)?;
    validate_measure(&format!("catalog[{index}].width_cm"), container.width_cm)?;
    validate_measure(&format!("catalog[{index}].height_cm"), container.height_cm)?;
    validate_measure(&format!("catalog[{index}].volume_cm"), container.volume_cm)
}

/// Validates the container catalog: non-empty, every entry well-formed.
pub fn validate_catalog(catalog: &[Container]) -> ValidationResult<()> {
    if catalog.is_empty() {
        return Err(ValidationError::Required {
            field: "catalog".to_string(),
        });
    }

    catalog
        .iter()
        .enumerate()
        .try_for_each(|(i, c)| validate_container(i, c))
}

// =============================================================================
// Request Validator
// =============================================================================

/// Validates a complete packing request.
///
/// ## Rules
/// - Catalog must not be empty
/// - Every dimension and volume must be finite and positive
/// - An empty item list is fine (nothing to pack)
/// - Any number of items is accepted
pub fn validate_packing_input(items: &[Item], catalog: &[Container]) -> CoreResult<()> {
    validate_catalog(catalog)?;

    for (i, item) in items.iter().enumerate() {
        validate_item(i, item)?;
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

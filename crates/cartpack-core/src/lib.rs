//! # cartpack-core: Pure Packing Engine for Cart Shipments
//!
//! This crate decides how a cart's items are split across shipping
//! containers before the packages are quoted against a carrier rate API.
//! It contains only pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shipping Rate Flow                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Shipping-Rate Service (caller)                  │   │
//! │  │   cart lines ──► items        package types ──► catalog         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ cartpack-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌─────────────┐  ┌──────────┐  │   │
//! │  │   │    fit    │  │  packer   │  │orchestrator │  │validation│  │   │
//! │  │   │ test_fit  │  │ sort      │  │ rounds      │  │  rules   │  │   │
//! │  │   │ rank      │  │ greedy    │  │ ship-alone  │  │  checks  │  │   │
//! │  │   └───────────┘  └───────────┘  └─────────────┘  └──────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • NO GLOBAL LOGGER          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ PackingSummary                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │          Carrier rate-quote request (one package per entry)     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Item, Container, FitResult, PackingEntry, PackingSummary
//! - [`fit`] - Fit testing, container selection and ranking
//! - [`packer`] - Volume sorting and single-container greedy fill
//! - [`orchestrator`] - Round-based packing entry point
//! - [`observer`] - Injectable tracing hooks
//! - [`shipment`] - Cart line expansion
//! - [`validation`] - Input precondition checks
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: same items and catalog in, same packages out
//! 2. **No I/O**: callers own persistence, HTTP and carrier calls
//! 3. **Catalog order matters**: it breaks every tie
//! 4. **Unpackable is data**: items that fit nowhere land in `unpacked`
//!
//! ## Example Usage
//!
//! ```rust
//! use cartpack_core::{pack_products, Container, Item};
//!
//! let items = vec![
//!     Item::new(3.0, 2.0, 1.0).with_ship_alone(true),
//!     Item::new(7.0, 2.0, 1.0),
//! ];
//! let catalog = vec![Container::new(3.0, 4.0, 1.0), Container::new(3.0, 4.0, 4.0)];
//!
//! let summary = pack_products(&items, &catalog).unwrap();
//! assert_eq!(summary.packed.len(), 1);
//! assert_eq!(summary.unpacked[0].volume_cm, 14.0);
//! ```
//!
//! ## Caller Responsibility
//! The fit test treats dimensions at face value. [`pack_products`] rejects
//! non-positive dimensions up front; callers using [`fit`] or [`packer`]
//! directly must pass positive dimensions themselves.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod fit;
pub mod observer;
pub mod orchestrator;
pub mod packer;
pub mod shipment;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use observer::{NoopObserver, PackingObserver, RoundReport};
pub use orchestrator::{pack_products, pack_products_observed};
pub use shipment::{expand_line_items, LineItem};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single cart line.
pub const MAX_ITEM_QUANTITY: i64 = 999;

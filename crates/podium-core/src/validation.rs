//! # Validation Module
//!
//! The pre-aggregation input gate.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Loader (apps/cli)                                        │
//! │  ├── File exists / readable                                        │
//! │  └── serde: collections present, fields typed correctly            │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE (before any aggregation)                     │
//! │  ├── Four dataset collections are non-empty                        │
//! │  └── Analyzer options were supplied                                │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Aggregation pass (analyzer)                              │
//! │  └── Cross-references resolve (seller_id, sku)                     │
//! │                                                                     │
//! │  All-or-nothing: the first failure aborts the whole computation.    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The gate is pure: it reads its inputs, mutates nothing, and returns no
//! partial validation results.

use crate::calc::AnalyzerOptions;
use crate::error::{AnalyzerError, AnalyzerResult};
use crate::types::SalesData;

// =============================================================================
// Dataset Gate
// =============================================================================

/// Validates the dataset shape before aggregation begins.
///
/// ## Rules
/// - `customers`, `sellers`, `products`, `purchase_records` must all be
///   non-empty
///
/// ## Example
/// ```rust
/// use podium_core::types::SalesData;
/// use podium_core::validation::validate_dataset;
///
/// let empty = SalesData {
///     customers: vec![],
///     sellers: vec![],
///     products: vec![],
///     purchase_records: vec![],
/// };
/// assert!(validate_dataset(&empty).is_err());
/// ```
pub fn validate_dataset(data: &SalesData) -> AnalyzerResult<()> {
    if data.customers.is_empty() {
        return Err(AnalyzerError::EmptyCollection {
            collection: "customers".to_string(),
        });
    }

    if data.sellers.is_empty() {
        return Err(AnalyzerError::EmptyCollection {
            collection: "sellers".to_string(),
        });
    }

    if data.products.is_empty() {
        return Err(AnalyzerError::EmptyCollection {
            collection: "products".to_string(),
        });
    }

    if data.purchase_records.is_empty() {
        return Err(AnalyzerError::EmptyCollection {
            collection: "purchase_records".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Options Gate
// =============================================================================

/// Validates that analyzer options were supplied.
///
/// The computation itself reads nothing from the options beyond the
/// revenue/bonus hooks, but running without them is a caller bug and is
/// rejected up front.
pub fn validate_options<'a>(
    options: Option<&'a AnalyzerOptions>,
) -> AnalyzerResult<&'a AnalyzerOptions> {
    options.ok_or(AnalyzerError::MissingOptions)
}

// =============================================================================
// Unit Tests
// =============================================================================

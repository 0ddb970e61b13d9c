//! # Error Types
//!
//! Analyzer error types for podium-core.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Flow                                  │
//! │                                                                     │
//! │  validation gate                                                    │
//! │  ├── EmptyCollection  - a dataset collection has no entries        │
//! │  └── MissingOptions   - no analyzer options were supplied          │
//! │                                                                     │
//! │  aggregation pass                                                   │
//! │  ├── UnknownSeller    - purchase record → unresolvable seller_id   │
//! │  └── UnknownSku       - purchase item → unresolvable sku           │
//! │                                                                     │
//! │  Every kind is fatal: the analyzer returns no partial report.       │
//! │  The CLI renders these via Display; the core never logs or panics.  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (collection name, id, sku)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Analyzer Error
// =============================================================================

/// Fatal analyzer failures.
///
/// The whole computation is all-or-nothing: any of these aborts the run
/// with no partial results.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// A required dataset collection is empty.
    ///
    /// ## When This Occurs
    /// - An export produced a file with no sellers / products / customers /
    ///   purchase records
    /// - The loader pointed at the wrong file
    #[error("dataset collection '{collection}' is empty")]
    EmptyCollection { collection: String },

    /// No analyzer options were supplied.
    ///
    /// The options carry the revenue/bonus calculation hooks; without them
    /// there is nothing to compute with.
    #[error("analyzer options are required")]
    MissingOptions,

    /// A purchase record references a seller that is not in the seller set.
    ///
    /// Skipping the record instead would silently change revenue and profit
    /// totals, so the run is aborted.
    #[error("purchase record references unknown seller: {seller_id}")]
    UnknownSeller { seller_id: String },

    /// A purchase item references a SKU that is not in the product set.
    #[error("purchase item references unknown product sku: {sku}")]
    UnknownSku { sku: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with AnalyzerError.
pub type AnalyzerResult<T> = Result<T, AnalyzerError>;

// =============================================================================
// Unit Tests
// =============================================================================

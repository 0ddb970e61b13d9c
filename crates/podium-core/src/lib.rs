//! # podium-core: Pure Aggregation Logic for Podium
//!
//! This crate is the **heart** of Podium. It turns a batch of sales records
//! into a ranked seller performance report, as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Podium Architecture                           │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                     apps/cli (podium)                         │ │
//! │  │    load dataset JSON ──► analyze ──► render table / JSON      │ │
//! │  └─────────────────────────────┬─────────────────────────────────┘ │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐ │
//! │  │               ★ podium-core (THIS CRATE) ★                    │ │
//! │  │                                                               │ │
//! │  │   ┌──────────┐ ┌──────────┐ ┌────────────┐ ┌──────────────┐  │ │
//! │  │   │  types   │ │   calc   │ │ validation │ │   analyzer   │  │ │
//! │  │   │ SalesData│ │ revenue  │ │   gate     │ │ index/fold/  │  │ │
//! │  │   │ Report   │ │ bonus    │ │   checks   │ │ rank/enrich  │  │ │
//! │  │   └──────────┘ └──────────┘ └────────────┘ └──────────────┘  │ │
//! │  │                                                               │ │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS          │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Dataset and report types (Seller, Product, PurchaseRecord, ...)
//! - [`calc`] - Revenue and bonus calculators plus the options/strategy seam
//! - [`error`] - Analyzer error types
//! - [`validation`] - Pre-aggregation input gate
//! - [`analyzer`] - The aggregation/ranking engine itself
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: `analyze` is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Single-Point Rounding**: revenue and profit accumulate at full
//!    precision; the bonus is the only value rounded (to two decimals)
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use podium_core::{AnalyzerOptions, SalesAnalyzer};
//! use podium_core::types::{Customer, Product, PurchaseItem, PurchaseRecord, SalesData, Seller};
//!
//! let data = SalesData {
//!     customers: vec![Customer {
//!         id: "C1".into(),
//!         first_name: "Sam".into(),
//!         last_name: "Smith".into(),
//!     }],
//!     sellers: vec![Seller {
//!         id: "S1".into(),
//!         first_name: "Jane".into(),
//!         last_name: "Doe".into(),
//!     }],
//!     products: vec![Product { sku: "SKU1".into(), purchase_price: 5.0 }],
//!     purchase_records: vec![PurchaseRecord {
//!         seller_id: "S1".into(),
//!         total_amount: 20.0,
//!         items: vec![PurchaseItem {
//!             sku: "SKU1".into(),
//!             quantity: 2,
//!             sale_price: 10.0,
//!             discount: 0.0,
//!         }],
//!     }],
//! };
//!
//! let options = AnalyzerOptions::default();
//! let report = SalesAnalyzer::new().analyze(&data, Some(&options)).unwrap();
//!
//! assert_eq!(report[0].seller_id, "S1");
//! assert_eq!(report[0].profit, 10.0);
//! assert_eq!(report[0].bonus, 1.5);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod analyzer;
pub mod calc;
pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use podium_core::SalesAnalyzer` instead of
// `use podium_core::analyzer::SalesAnalyzer`

pub use analyzer::SalesAnalyzer;
pub use calc::{AnalyzerOptions, BonusCalculator, RevenueCalculator};
pub use error::{AnalyzerError, AnalyzerResult};
pub use types::{SalesData, SellerReport, TopProduct};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum number of entries in a seller's `top_products` list.
///
/// ## Business Reason
/// The report is meant to fit on a dashboard card; ten best-selling SKUs is
/// the agreed cut-off. Sellers with fewer distinct SKUs get shorter lists.
pub const TOP_PRODUCTS_LIMIT: usize = 10;

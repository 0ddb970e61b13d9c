//! # Domain Types
//!
//! Dataset and report types used throughout Podium.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Domain Types                               │
//! │                                                                     │
//! │  Input (reference data)           Input (transactions)             │
//! │  ┌─────────────────┐              ┌─────────────────────┐          │
//! │  │    Seller       │              │   PurchaseRecord    │          │
//! │  │  ─────────────  │◄─seller_id───│  ──────────────────│          │
//! │  │  id (key)       │              │  seller_id          │          │
//! │  │  first_name     │              │  total_amount       │          │
//! │  │  last_name      │              │  items[]            │          │
//! │  └─────────────────┘              └──────────┬──────────┘          │
//! │  ┌─────────────────┐                         │                     │
//! │  │    Product      │              ┌──────────▼──────────┐          │
//! │  │  ─────────────  │◄────sku──────│   PurchaseItem      │          │
//! │  │  sku (key)      │              │  ──────────────────│          │
//! │  │  purchase_price │              │  sku, quantity      │          │
//! │  └─────────────────┘              │  sale_price         │          │
//! │                                   │  discount (0..100)  │          │
//! │  Output                           └─────────────────────┘          │
//! │  ┌─────────────────┐  ┌─────────────────┐                          │
//! │  │  SellerReport   │  │   TopProduct    │                          │
//! │  │  revenue/profit │──│  sku, quantity  │                          │
//! │  │  bonus, rank ord│  └─────────────────┘                          │
//! │  └─────────────────┘                                               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Monetary Values
//! Prices and amounts are `f64` on purpose: the analyzer must accumulate
//! revenue and profit at full computed precision and round only once, at
//! bonus computation. Converting to integer cents at ingestion would change
//! totals.

use serde::{Deserialize, Serialize};

// =============================================================================
// Customer
// =============================================================================

/// A customer referenced by the input schema.
///
/// Customers take no part in the computation; the collection is required to
/// be present and non-empty, nothing more.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier.
    pub id: String,

    /// Given name.
    pub first_name: String,

    /// Family name.
    pub last_name: String,
}

// =============================================================================
// Product
// =============================================================================

/// Immutable product reference data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Stock Keeping Unit - the unique business key items resolve against.
    pub sku: String,

    /// What the product cost to acquire, per unit. Non-negative.
    pub purchase_price: f64,
}

// =============================================================================
// Seller
// =============================================================================

/// Immutable seller reference data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seller {
    /// Unique identifier purchase records resolve against.
    pub id: String,

    /// Given name.
    pub first_name: String,

    /// Family name.
    pub last_name: String,
}

impl Seller {
    /// Returns the display name used in reports: "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// =============================================================================
// Purchase Record
// =============================================================================

/// One product line within a purchase record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseItem {
    /// SKU of the product sold. Must resolve against the product set.
    pub sku: String,

    /// Units sold. Positive.
    pub quantity: i64,

    /// Per-unit sale price before discount.
    pub sale_price: f64,

    /// Discount percentage in [0, 100]. Values outside the range are the
    /// caller's responsibility; the revenue formula applies them as-is.
    pub discount: f64,
}

/// One transaction by one seller, containing one or more line items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseRecord {
    /// Seller who made the sale. Must resolve against the seller set.
    pub seller_id: String,

    /// Record-level gross amount. This is what seller revenue accumulates;
    /// it is distinct from the item-level discounted revenue used for profit.
    pub total_amount: f64,

    /// The line items of the transaction.
    pub items: Vec<PurchaseItem>,
}

// =============================================================================
// Dataset
// =============================================================================

/// The full input dataset: four named collections.
///
/// All four must be non-empty for the analyzer to accept the dataset; see
/// [`crate::validation`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesData {
    pub customers: Vec<Customer>,
    pub sellers: Vec<Seller>,
    pub products: Vec<Product>,
    pub purchase_records: Vec<PurchaseRecord>,
}

// =============================================================================
// Report Types
// =============================================================================

/// One entry of a seller's best-selling products list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    /// Product SKU.
    pub sku: String,

    /// Cumulative units of this SKU sold by the seller.
    pub quantity: i64,
}

/// Final per-seller report record.
///
/// The analyzer emits these in descending-profit rank order. `revenue` and
/// `profit` carry full computed precision; `bonus` is rounded to two
/// decimal places.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SellerReport {
    /// Seller identifier.
    pub seller_id: String,

    /// Seller display name ("First Last").
    pub name: String,

    /// Sum of `total_amount` across the seller's purchase records.
    pub revenue: f64,

    /// Sum of item-level discounted revenue minus cost, across all records.
    pub profit: f64,

    /// Number of purchase records attributed to the seller.
    pub sales_count: i64,

    /// Up to [`crate::TOP_PRODUCTS_LIMIT`] (sku, quantity) pairs, descending
    /// by quantity.
    pub top_products: Vec<TopProduct>,

    /// Rank-tiered reward, rounded to two decimals.
    pub bonus: f64,
}

// =============================================================================
// Unit Tests
// =============================================================================

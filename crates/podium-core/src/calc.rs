//! # Calculators
//!
//! Revenue and bonus calculation for Podium, plus the options seam that
//! lets a caller swap either formula without touching the engine.
//!
//! ## Rounding Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  SINGLE-POINT ROUNDING                                              │
//! │                                                                     │
//! │  item revenue ──► profit ──► seller totals    (full f64 precision)  │
//! │                                  │                                  │
//! │                                  ▼                                  │
//! │                          bonus = profit × rate                      │
//! │                                  │                                  │
//! │                                  ▼                                  │
//! │                        round_to_cents() ← the ONLY rounding         │
//! │                                                                     │
//! │  Rounding revenue or profit anywhere upstream would change totals.  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::types::{Product, PurchaseItem};

// =============================================================================
// Bonus Rate Tiers
// =============================================================================

/// Bonus rate for the top-ranked seller.
pub const BONUS_RATE_TOP: f64 = 0.15;

/// Bonus rate for ranks 1 and 2 (second and third place).
pub const BONUS_RATE_PODIUM: f64 = 0.10;

/// Bonus rate for every other rank except last place.
pub const BONUS_RATE_DEFAULT: f64 = 0.05;

// =============================================================================
// Rounding
// =============================================================================

/// Rounds a monetary value to two decimal places (half away from zero).
///
/// ## Example
/// ```rust
/// use podium_core::calc::round_to_cents;
///
/// assert_eq!(round_to_cents(6.1725), 6.17);
/// assert_eq!(round_to_cents(2.675000001), 2.68);
/// assert_eq!(round_to_cents(10.0), 10.0);
/// ```
#[inline]
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// =============================================================================
// Revenue Calculation
// =============================================================================

/// Strategy seam for item-level revenue.
///
/// The product reference is unused by the default formula but stays in the
/// signature so alternative strategies can price off reference data.
pub trait RevenueCalculator: Send + Sync {
    /// Returns the discounted revenue of one purchase item. No rounding.
    fn item_revenue(&self, item: &PurchaseItem, product: &Product) -> f64;
}

/// The standard formula: `sale_price × quantity × (1 − discount/100)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimpleRevenue;

impl RevenueCalculator for SimpleRevenue {
    fn item_revenue(&self, item: &PurchaseItem, _product: &Product) -> f64 {
        let discount = 1.0 - item.discount / 100.0;
        item.sale_price * item.quantity as f64 * discount
    }
}

// =============================================================================
// Bonus Calculation
// =============================================================================

/// Strategy seam for the rank-based bonus.
pub trait BonusCalculator: Send + Sync {
    /// Returns the bonus for the seller at zero-based rank `index` out of
    /// `total` sellers, given their accumulated `profit`. Rounded to two
    /// decimal places.
    fn bonus(&self, index: usize, total: usize, profit: f64) -> f64;
}

/// The tiered rank policy: 15% for first place, 10% for second and third,
/// nothing for last place, 5% for everyone in between.
#[derive(Debug, Default, Clone, Copy)]
pub struct RankTieredBonus;

impl BonusCalculator for RankTieredBonus {
    fn bonus(&self, index: usize, total: usize, profit: f64) -> f64 {
        // Branch order matters: with a single seller, index 0 is also the
        // last index, and the top-performer rule must win.
        if index == 0 {
            round_to_cents(profit * BONUS_RATE_TOP)
        } else if index == 1 || index == 2 {
            round_to_cents(profit * BONUS_RATE_PODIUM)
        } else if index == total - 1 {
            0.0
        } else {
            round_to_cents(profit * BONUS_RATE_DEFAULT)
        }
    }
}

// =============================================================================
// Analyzer Options
// =============================================================================

/// Configuration handed to [`crate::SalesAnalyzer::analyze`].
///
/// The engine reads nothing from it beyond dispatching to the two hooks, so
/// swapping a formula never requires touching the aggregation pass.
pub struct AnalyzerOptions {
    /// Item-level revenue hook.
    pub revenue: Box<dyn RevenueCalculator>,

    /// Rank-based bonus hook.
    pub bonus: Box<dyn BonusCalculator>,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        AnalyzerOptions {
            revenue: Box::new(SimpleRevenue),
            bonus: Box::new(RankTieredBonus),
        }
    }
}

impl std::fmt::Debug for AnalyzerOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalyzerOptions").finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # Sales Aggregation Engine
//!
//! The single-pass aggregation-then-rank pipeline at the center of Podium.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        analyze(data, options)                       │
//! │                                                                     │
//! │  1. validate   gate the dataset and options (all-or-nothing)        │
//! │  2. init       one accumulator per seller, seller-list order        │
//! │  3. index      seller_id → accumulator, sku → product (per call)    │
//! │  4. accumulate one pass over purchase records and their items       │
//! │  5. rank       stable sort by profit, descending                    │
//! │  6. enrich     bonus by rank tier, top products by quantity         │
//! │  7. project    SellerReport per seller, in rank order               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The indices exist so the pass stays O(records + items); resolving each
//! record by scanning the seller list would be O(records × sellers).
//! Both indices are built once per invocation and never outlive it.

use std::collections::HashMap;

use crate::calc::AnalyzerOptions;
use crate::error::{AnalyzerError, AnalyzerResult};
use crate::types::{Product, SalesData, SellerReport, TopProduct};
use crate::validation::{validate_dataset, validate_options};
use crate::TOP_PRODUCTS_LIMIT;

// =============================================================================
// Accumulator
// =============================================================================

/// Per-seller running totals.
///
/// Owned exclusively by one `analyze` invocation and never exposed; callers
/// only ever see the finalized [`SellerReport`].
struct SellerStat {
    id: String,
    name: String,
    revenue: f64,
    profit: f64,
    sales_count: i64,
    products_sold: HashMap<String, i64>,
}

impl SellerStat {
    /// Finalizes the accumulator at its rank position.
    fn into_report(
        self,
        index: usize,
        total: usize,
        options: &AnalyzerOptions,
    ) -> SellerReport {
        let bonus = options.bonus.bonus(index, total, self.profit);

        let mut top_products: Vec<TopProduct> = self
            .products_sold
            .into_iter()
            .map(|(sku, quantity)| TopProduct { sku, quantity })
            .collect();
        // Quantity is the sole sort key; sku order among equal quantities
        // is unspecified.
        top_products.sort_by(|a, b| b.quantity.cmp(&a.quantity));
        top_products.truncate(TOP_PRODUCTS_LIMIT);

        SellerReport {
            seller_id: self.id,
            name: self.name,
            revenue: self.revenue,
            profit: self.profit,
            sales_count: self.sales_count,
            top_products,
            bonus,
        }
    }
}

// =============================================================================
// Sales Analyzer
// =============================================================================

/// A stateless engine turning a sales dataset into a ranked seller report.
///
/// Holds no state between invocations; each call owns its own indices and
/// accumulators, so independent datasets can be analyzed concurrently.
#[derive(Debug, Default)]
pub struct SalesAnalyzer {}

impl SalesAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the full pipeline and returns one report per seller, ordered by
    /// descending profit.
    ///
    /// ## Errors
    ///
    /// - [`AnalyzerError::EmptyCollection`] if any dataset collection is empty
    /// - [`AnalyzerError::MissingOptions`] if `options` is `None`
    /// - [`AnalyzerError::UnknownSeller`] / [`AnalyzerError::UnknownSku`] if a
    ///   cross-reference does not resolve; the run aborts with no partial
    ///   output rather than silently skipping the record
    pub fn analyze(
        &self,
        data: &SalesData,
        options: Option<&AnalyzerOptions>,
    ) -> AnalyzerResult<Vec<SellerReport>> {
        validate_dataset(data)?;
        let options = validate_options(options)?;

        // One accumulator per seller, in seller-list order. The order is
        // invisible in the output except as the tie order for equal profits
        // (the rank sort below is stable).
        let mut stats: Vec<SellerStat> = data
            .sellers
            .iter()
            .map(|seller| SellerStat {
                id: seller.id.clone(),
                name: seller.full_name(),
                revenue: 0.0,
                profit: 0.0,
                sales_count: 0,
                products_sold: HashMap::new(),
            })
            .collect();

        // Per-invocation lookup indices.
        let seller_index: HashMap<&str, usize> = data
            .sellers
            .iter()
            .enumerate()
            .map(|(pos, seller)| (seller.id.as_str(), pos))
            .collect();

        let product_index: HashMap<&str, &Product> = data
            .products
            .iter()
            .map(|product| (product.sku.as_str(), product))
            .collect();

        self.accumulate(data, &seller_index, &product_index, options, &mut stats)?;

        // Rank by profit, descending. The sort is stable and total_cmp is a
        // total order, so equal profits keep seller-list order and the same
        // input always produces the same output ordering.
        stats.sort_by(|a, b| b.profit.total_cmp(&a.profit));

        let total = stats.len();
        Ok(stats
            .into_iter()
            .enumerate()
            .map(|(index, stat)| stat.into_report(index, total, options))
            .collect())
    }

    /// The single pass over all purchase records.
    fn accumulate(
        &self,
        data: &SalesData,
        seller_index: &HashMap<&str, usize>,
        product_index: &HashMap<&str, &Product>,
        options: &AnalyzerOptions,
        stats: &mut [SellerStat],
    ) -> AnalyzerResult<()> {
        for record in &data.purchase_records {
            let pos = *seller_index.get(record.seller_id.as_str()).ok_or_else(|| {
                AnalyzerError::UnknownSeller {
                    seller_id: record.seller_id.clone(),
                }
            })?;
            let stat = &mut stats[pos];

            stat.sales_count += 1;
            // Record-level gross amount; item-level discounted revenue below
            // feeds profit only.
            stat.revenue += record.total_amount;

            for item in &record.items {
                let product = product_index.get(item.sku.as_str()).ok_or_else(|| {
                    AnalyzerError::UnknownSku {
                        sku: item.sku.clone(),
                    }
                })?;

                let cost = product.purchase_price * item.quantity as f64;
                let item_revenue = options.revenue.item_revenue(item, product);
                stat.profit += item_revenue - cost;

                *stat.products_sold.entry(item.sku.clone()).or_insert(0) += item.quantity;
            }
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Customer, PurchaseItem, PurchaseRecord, Seller};
    use std::collections::HashSet;

    fn seller(id: &str, first: &str, last: &str) -> Seller {
        Seller {
            id: id.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
        }
    }

    fn product(sku: &str, purchase_price: f64) -> Product {
        Product {
            sku: sku.to_string(),
            purchase_price,
        }
    }

    fn item(sku: &str, quantity: i64, sale_price: f64, discount: f64) -> PurchaseItem {
        PurchaseItem {
            sku: sku.to_string(),
            quantity,
            sale_price,
            discount,
        }
    }

    fn record(seller_id: &str, total_amount: f64, items: Vec<PurchaseItem>) -> PurchaseRecord {
        PurchaseRecord {
            seller_id: seller_id.to_string(),
            total_amount,
            items,
        }
    }

    fn dataset(
        sellers: Vec<Seller>,
        products: Vec<Product>,
        purchase_records: Vec<PurchaseRecord>,
    ) -> SalesData {
        SalesData {
            customers: vec![Customer {
                id: "C1".to_string(),
                first_name: "Sam".to_string(),
                last_name: "Smith".to_string(),
            }],
            sellers,
            products,
            purchase_records,
        }
    }

    fn analyze(data: &SalesData) -> AnalyzerResult<Vec<SellerReport>> {
        let options = AnalyzerOptions::default();
        SalesAnalyzer::new().analyze(data, Some(&options))
    }

    #[test]
    fn test_single_seller_scenario() {
        // 1 seller, 1 product, 1 record: revenue 20, profit 2×10 − 2×5 = 10,
        // bonus 15% of 10 (a single seller takes the top rate, not last place)
        let data = dataset(
            vec![seller("S1", "Jane", "Doe")],
            vec![product("SKU1", 5.0)],
            vec![record("S1", 20.0, vec![item("SKU1", 2, 10.0, 0.0)])],
        );

        let report = analyze(&data).unwrap();
        assert_eq!(report.len(), 1);

        let jane = &report[0];
        assert_eq!(jane.seller_id, "S1");
        assert_eq!(jane.name, "Jane Doe");
        assert_eq!(jane.revenue, 20.0);
        assert_eq!(jane.profit, 10.0);
        assert_eq!(jane.sales_count, 1);
        assert_eq!(
            jane.top_products,
            vec![TopProduct {
                sku: "SKU1".to_string(),
                quantity: 2
            }]
        );
        assert_eq!(jane.bonus, 1.5);
    }

    #[test]
    fn test_output_covers_every_seller_exactly_once() {
        // Sellers without a single sale still appear, zeroed out
        let data = dataset(
            vec![
                seller("S1", "A", "A"),
                seller("S2", "B", "B"),
                seller("S3", "C", "C"),
            ],
            vec![product("P", 1.0)],
            vec![record("S2", 10.0, vec![item("P", 1, 5.0, 0.0)])],
        );

        let report = analyze(&data).unwrap();
        assert_eq!(report.len(), 3);

        let ids: HashSet<&str> = report.iter().map(|r| r.seller_id.as_str()).collect();
        assert_eq!(ids, HashSet::from(["S1", "S2", "S3"]));

        assert_eq!(report[0].seller_id, "S2");
        let idle = report.iter().find(|r| r.seller_id == "S1").unwrap();
        assert_eq!(idle.revenue, 0.0);
        assert_eq!(idle.profit, 0.0);
        assert_eq!(idle.sales_count, 0);
        assert!(idle.top_products.is_empty());
    }

    #[test]
    fn test_output_sorted_by_profit_descending() {
        let data = dataset(
            vec![
                seller("S1", "A", "A"),
                seller("S2", "B", "B"),
                seller("S3", "C", "C"),
                seller("S4", "D", "D"),
            ],
            vec![product("P", 0.0)],
            vec![
                record("S1", 0.0, vec![item("P", 1, 200.0, 0.0)]),
                record("S2", 0.0, vec![item("P", 1, 400.0, 0.0)]),
                record("S3", 0.0, vec![item("P", 1, 100.0, 0.0)]),
                record("S4", 0.0, vec![item("P", 1, 300.0, 0.0)]),
            ],
        );

        let report = analyze(&data).unwrap();
        for pair in report.windows(2) {
            assert!(pair[0].profit >= pair[1].profit);
        }
        let order: Vec<&str> = report.iter().map(|r| r.seller_id.as_str()).collect();
        assert_eq!(order, vec!["S2", "S4", "S1", "S3"]);
    }

    #[test]
    fn test_bonus_tiering_across_ranks() {
        // Distinct profits 500..100 via a zero-cost product
        let data = dataset(
            vec![
                seller("S1", "A", "A"),
                seller("S2", "B", "B"),
                seller("S3", "C", "C"),
                seller("S4", "D", "D"),
                seller("S5", "E", "E"),
            ],
            vec![product("P", 0.0)],
            vec![
                record("S1", 0.0, vec![item("P", 1, 500.0, 0.0)]),
                record("S2", 0.0, vec![item("P", 1, 400.0, 0.0)]),
                record("S3", 0.0, vec![item("P", 1, 300.0, 0.0)]),
                record("S4", 0.0, vec![item("P", 1, 200.0, 0.0)]),
                record("S5", 0.0, vec![item("P", 1, 100.0, 0.0)]),
            ],
        );

        let report = analyze(&data).unwrap();
        assert_eq!(report[0].bonus, 75.0); // 500 × 0.15
        assert_eq!(report[1].bonus, 40.0); // 400 × 0.10
        assert_eq!(report[2].bonus, 30.0); // 300 × 0.10
        assert_eq!(report[3].bonus, 10.0); // 200 × 0.05
        assert_eq!(report[4].bonus, 0.0); // last place
    }

    #[test]
    fn test_equal_profits_keep_seller_list_order() {
        let data = dataset(
            vec![
                seller("S1", "A", "A"),
                seller("S2", "B", "B"),
                seller("S3", "C", "C"),
            ],
            vec![product("P", 2.0)],
            vec![
                record("S3", 10.0, vec![item("P", 1, 7.0, 0.0)]),
                record("S1", 10.0, vec![item("P", 1, 7.0, 0.0)]),
                record("S2", 10.0, vec![item("P", 1, 7.0, 0.0)]),
            ],
        );

        // All profits equal (5.0); the stable rank sort keeps seller-list
        // order regardless of record order, deterministically.
        let first = analyze(&data).unwrap();
        let order: Vec<&str> = first.iter().map(|r| r.seller_id.as_str()).collect();
        assert_eq!(order, vec!["S1", "S2", "S3"]);

        let second = analyze(&data).unwrap();
        let again: Vec<&str> = second.iter().map(|r| r.seller_id.as_str()).collect();
        assert_eq!(order, again);
    }

    #[test]
    fn test_revenue_uses_record_total_not_item_revenue() {
        // total_amount is the gross record amount; items only drive profit
        let data = dataset(
            vec![seller("S1", "Jane", "Doe")],
            vec![product("SKU1", 5.0)],
            vec![record("S1", 999.0, vec![item("SKU1", 2, 10.0, 0.0)])],
        );

        let report = analyze(&data).unwrap();
        assert_eq!(report[0].revenue, 999.0);
        assert_eq!(report[0].profit, 10.0);
    }

    #[test]
    fn test_discount_reduces_profit_not_revenue() {
        // 4 × 25 × (1 − 0.5) = 50 item revenue, cost 4 × 10 = 40
        let data = dataset(
            vec![seller("S1", "Jane", "Doe")],
            vec![product("SKU1", 10.0)],
            vec![record("S1", 100.0, vec![item("SKU1", 4, 25.0, 50.0)])],
        );

        let report = analyze(&data).unwrap();
        assert_eq!(report[0].revenue, 100.0);
        assert_eq!(report[0].profit, 10.0);
    }

    #[test]
    fn test_products_sold_accumulates_across_records() {
        let data = dataset(
            vec![seller("S1", "Jane", "Doe")],
            vec![product("A", 0.0), product("B", 0.0), product("C", 0.0)],
            vec![
                record(
                    "S1",
                    0.0,
                    vec![item("A", 3, 1.0, 0.0), item("B", 1, 1.0, 0.0)],
                ),
                record(
                    "S1",
                    0.0,
                    vec![item("A", 2, 1.0, 0.0), item("C", 4, 1.0, 0.0)],
                ),
            ],
        );

        let report = analyze(&data).unwrap();
        assert_eq!(report[0].sales_count, 2);

        let top: Vec<(&str, i64)> = report[0]
            .top_products
            .iter()
            .map(|p| (p.sku.as_str(), p.quantity))
            .collect();
        assert_eq!(top, vec![("A", 5), ("C", 4), ("B", 1)]);
    }

    #[test]
    fn test_top_products_truncated_to_limit() {
        let products: Vec<Product> = (1..=12).map(|n| product(&format!("P{n:02}"), 0.0)).collect();
        let items: Vec<PurchaseItem> = (1..=12)
            .map(|n| item(&format!("P{n:02}"), n, 1.0, 0.0))
            .collect();
        let data = dataset(
            vec![seller("S1", "Jane", "Doe")],
            products,
            vec![record("S1", 0.0, items)],
        );

        let report = analyze(&data).unwrap();
        let top = &report[0].top_products;
        assert_eq!(top.len(), TOP_PRODUCTS_LIMIT);
        assert_eq!(top[0].quantity, 12);
        assert_eq!(top[9].quantity, 3);
        for pair in top.windows(2) {
            assert!(pair[0].quantity >= pair[1].quantity);
        }
    }

    #[test]
    fn test_unknown_seller_aborts_run() {
        let data = dataset(
            vec![seller("S1", "Jane", "Doe")],
            vec![product("SKU1", 5.0)],
            vec![record("GHOST", 20.0, vec![item("SKU1", 2, 10.0, 0.0)])],
        );

        match analyze(&data) {
            Err(AnalyzerError::UnknownSeller { seller_id }) => assert_eq!(seller_id, "GHOST"),
            other => panic!("expected UnknownSeller, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_sku_aborts_run() {
        let data = dataset(
            vec![seller("S1", "Jane", "Doe")],
            vec![product("SKU1", 5.0)],
            vec![record("S1", 20.0, vec![item("NOPE", 2, 10.0, 0.0)])],
        );

        match analyze(&data) {
            Err(AnalyzerError::UnknownSku { sku }) => assert_eq!(sku, "NOPE"),
            other => panic!("expected UnknownSku, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_options_rejected() {
        let data = dataset(
            vec![seller("S1", "Jane", "Doe")],
            vec![product("SKU1", 5.0)],
            vec![record("S1", 20.0, vec![item("SKU1", 2, 10.0, 0.0)])],
        );

        assert!(matches!(
            SalesAnalyzer::new().analyze(&data, None),
            Err(AnalyzerError::MissingOptions)
        ));
    }

    #[test]
    fn test_empty_collection_rejected_before_aggregation() {
        let mut data = dataset(
            vec![seller("S1", "Jane", "Doe")],
            vec![product("SKU1", 5.0)],
            vec![record("S1", 20.0, vec![item("SKU1", 2, 10.0, 0.0)])],
        );
        data.customers.clear();

        assert!(matches!(
            analyze(&data),
            Err(AnalyzerError::EmptyCollection { .. })
        ));
    }

    #[test]
    fn test_negative_profit_ranks_last() {
        // Selling below cost: 1 × 3 − 1 × 10 = −7
        let data = dataset(
            vec![seller("S1", "A", "A"), seller("S2", "B", "B")],
            vec![product("CHEAP", 0.0), product("DEAR", 10.0)],
            vec![
                record("S1", 3.0, vec![item("DEAR", 1, 3.0, 0.0)]),
                record("S2", 5.0, vec![item("CHEAP", 1, 5.0, 0.0)]),
            ],
        );

        let report = analyze(&data).unwrap();
        assert_eq!(report[0].seller_id, "S2");
        assert_eq!(report[1].seller_id, "S1");
        assert_eq!(report[1].profit, -7.0);
        // In a two-seller field rank 1 takes the 10% branch before the
        // last-place rule is consulted, so the loss carries through
        assert_eq!(report[1].bonus, -0.7);
    }

    #[test]
    fn test_profit_carries_full_precision() {
        // 3 × 9.99 × (1 − 0.15) = 25.4745; cost 3 × 2.5 = 7.5
        let data = dataset(
            vec![seller("S1", "Jane", "Doe")],
            vec![product("SKU1", 2.5)],
            vec![record("S1", 29.97, vec![item("SKU1", 3, 9.99, 15.0)])],
        );

        let report = analyze(&data).unwrap();
        assert!((report[0].profit - 17.9745).abs() < 1e-9);
        // Only the bonus is rounded: 17.9745 × 0.15 = 2.696175 → 2.70
        assert_eq!(report[0].bonus, 2.7);
    }
}

//! # Podium CLI
//!
//! Thin shell around podium-core: loads a dataset file, runs the analyzer,
//! renders the ranked seller report.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use tracing::info;
use tracing_subscriber::EnvFilter;

use podium_core::{AnalyzerOptions, SalesAnalyzer, SalesData, SellerReport};

/// Seller performance reports from sales record batches.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the ranked seller report from a dataset file.
    Analyze(AnalyzeArgs),
}

#[derive(Parser)]
struct AnalyzeArgs {
    /// Path to the dataset JSON file (customers, sellers, products,
    /// purchase_records).
    dataset: PathBuf,

    /// Emit the report as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    // RUST_LOG controls verbosity; default to warnings only so the report
    // stays the only stdout output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(args) => handle_analyze(args),
    }
}

/// Handles the orchestration of one analyze run.
fn handle_analyze(args: AnalyzeArgs) -> anyhow::Result<()> {
    let raw = fs::read_to_string(&args.dataset)
        .with_context(|| format!("failed to read dataset file {}", args.dataset.display()))?;
    let data: SalesData = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse dataset file {}", args.dataset.display()))?;

    info!(
        sellers = data.sellers.len(),
        products = data.products.len(),
        records = data.purchase_records.len(),
        "dataset loaded"
    );

    let options = AnalyzerOptions::default();
    let report = SalesAnalyzer::new()
        .analyze(&data, Some(&options))
        .context("sales analysis failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render_table(&report));
    }

    Ok(())
}

/// Renders the ranked report as a terminal table.
fn render_table(report: &[SellerReport]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        "Rank",
        "Seller",
        "Name",
        "Revenue",
        "Profit",
        "Sales",
        "Bonus",
        "Top products",
    ]);

    for (index, seller) in report.iter().enumerate() {
        // Display-only rounding; the underlying report keeps full precision
        table.add_row(vec![
            format!("{}", index + 1),
            seller.seller_id.clone(),
            seller.name.clone(),
            format!("{:.2}", seller.revenue),
            format!("{:.2}", seller.profit),
            format!("{}", seller.sales_count),
            format!("{:.2}", seller.bonus),
            seller
                .top_products
                .iter()
                .take(3)
                .map(|p| format!("{}×{}", p.sku, p.quantity))
                .collect::<Vec<_>>()
                .join(", "),
        ]);
    }

    table
}

// Snapshot export and run summaries
//
// The outcome is an in-memory handoff; these helpers give the CLI a concrete
// JSON (full outcome) and CSV (per-day table) shape for downstream charting.

use crate::error::SimResult;
use crate::simulator::SimulationOutcome;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write the full outcome (snapshots + traders) as pretty-printed JSON
pub fn write_json<P: AsRef<Path>>(outcome: &SimulationOutcome, path: P) -> SimResult<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), outcome)?;
    Ok(())
}

/// Write the per-day snapshot table as CSV
pub fn write_csv<P: AsRef<Path>>(outcome: &SimulationOutcome, path: P) -> SimResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(
        writer,
        "day,revnet_reserve,token_supply,price_ceiling,price_floor,\
         tokens_sent_to_boost,pool_currency_reserve,pool_token_reserve,\
         pool_spot_price,purchases,sales,unfulfilled_sales"
    )?;

    for s in &outcome.snapshots {
        writeln!(
            writer,
            "{},{},{},{},{},{},{},{},{},{},{},{}",
            s.day,
            s.revnet_reserve,
            s.token_supply,
            s.price_ceiling,
            s.price_floor,
            s.tokens_sent_to_boost,
            s.pool_currency_reserve,
            s.pool_token_reserve,
            s.pool_spot_price.unwrap_or(f64::NAN),
            s.purchases.len(),
            s.sales.len(),
            s.unfulfilled_sales,
        )?;
    }

    writer.flush()?;
    Ok(())
}

/// Print a human-readable end-of-run summary
pub fn print_summary(outcome: &SimulationOutcome) {
    let days = outcome.snapshots.len();
    let total_purchases: usize = outcome.snapshots.iter().map(|s| s.purchases.len()).sum();
    let total_sales: usize = outcome.snapshots.iter().map(|s| s.sales.len()).sum();
    let total_unfulfilled: u32 = outcome.snapshots.iter().map(|s| s.unfulfilled_sales).sum();

    println!("✅ Simulation complete: {} days", days);
    println!("📊 Purchases: {}", total_purchases);
    println!("📊 Sales: {} ({} unfulfilled attempts)", total_sales, total_unfulfilled);

    if let Some(last) = outcome.snapshots.last() {
        println!(
            "📊 Final Revnet: supply {:.4}, reserve {:.4}, boost allocation {:.4}",
            last.token_supply, last.revnet_reserve, last.tokens_sent_to_boost
        );
        println!(
            "📊 Final prices: ceiling {:.4}, floor {:.4}, pool spot {}",
            last.price_ceiling,
            last.price_floor,
            last.pool_spot_price
                .map(|p| format!("{:.4}", p))
                .unwrap_or_else(|| "n/a".to_string())
        );
    }
}

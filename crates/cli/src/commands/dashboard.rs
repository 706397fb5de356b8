//! Dashboard summary stats.

use arjuna_pos::error::PosError;
use arjuna_pos::state::PosState;

use super::catalog::require_session;

/// Fetch and print the dashboard summary.
///
/// # Errors
///
/// Returns a [`PosError`] when not logged in or the fetch fails.
pub async fn run(state: &PosState) -> Result<(), PosError> {
    let session = require_session(state)?;
    let summary = state.client().dashboard_summary().await?;

    println!("Ringkasan {} ", session.store.label());
    println!("Omset total     : {}", summary.total_revenue.display());
    println!("Transaksi       : {}", summary.transaction_count);
    println!("Item terjual    : {}", summary.items_sold);
    println!("Produk terlaris : {}", summary.top_selling_item);
    Ok(())
}

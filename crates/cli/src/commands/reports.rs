//! Sales history and aggregates.

use arjuna_pos::error::PosError;
use arjuna_pos::reports;
use arjuna_pos::state::PosState;

use super::catalog::require_session;

/// Show the sales history, or stage a past sale for the invoice view.
///
/// # Errors
///
/// Returns a [`PosError`] when not logged in, when the reprint id is
/// unknown, or when staging fails.
pub fn run(state: &PosState, reprint: Option<&str>) -> Result<(), PosError> {
    let session = require_session(state)?;
    let history = reports::sales_history();

    if let Some(invoice_id) = reprint {
        let sale = history
            .iter()
            .find(|record| record.id == invoice_id)
            .ok_or_else(|| PosError::NotFound(format!("riwayat {invoice_id}")))?;
        reports::reprint(state.storage(), sale, session.store)?;
        println!("Struk {invoice_id} disiapkan. Jalankan `arjuna invoice`.");
        return Ok(());
    }

    println!("Riwayat Transaksi");
    println!(
        "{:<14} {:<18} {:>12}  {:<8} {:>5}",
        "No", "Tanggal", "Total", "Metode", "Item"
    );
    for record in &history {
        println!(
            "{:<14} {:<18} {:>12}  {:<8} {:>5}",
            record.id,
            record.date.format("%d/%m/%Y %H:%M"),
            record.total.display(),
            record.method.to_string(),
            record.items,
        );
    }

    let summary = reports::summarize(&history);
    println!();
    println!("Total omset   : {}", summary.revenue.display());
    println!("Jumlah trx    : {}", summary.transactions);
    Ok(())
}

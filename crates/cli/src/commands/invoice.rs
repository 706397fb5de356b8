//! Render the last receipt.

use arjuna_pos::error::{ErrorKind, PosError};
use arjuna_pos::invoice;
use arjuna_pos::state::PosState;

/// Print the last transaction as a receipt, or the shareable digest.
///
/// With no staged transaction the command redirects back to the sell flow
/// (a hint, not a failure).
///
/// # Errors
///
/// Returns a [`PosError`] for storage failures.
pub fn run(state: &PosState, share: bool) -> Result<(), PosError> {
    let transaction = match invoice::load_last(state.storage()) {
        Ok(transaction) => transaction,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            println!("Belum ada transaksi. Jalankan `arjuna sell` dulu.");
            return Ok(());
        }
        Err(err) => return Err(err),
    };

    if share {
        println!("{}", invoice::share_text(&transaction));
        return Ok(());
    }

    let settings = state.settings();
    let receipt = invoice::receipt_text(
        &transaction,
        &settings.store_profile()?,
        &settings.printer()?,
    );
    println!("{receipt}");
    Ok(())
}

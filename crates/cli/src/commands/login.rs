//! Session commands: login and logout.

use arjuna_pos::error::PosError;
use arjuna_pos::state::PosState;
use arjuna_pos::transport::ApiError;

/// Log in against the mock API and persist the session.
///
/// # Errors
///
/// Returns the underlying [`PosError`] after reporting it; a wrong
/// email/password pair is surfaced as a banner, ready for the user to retry.
pub async fn login(state: &PosState, email: &str, password: &str) -> Result<(), PosError> {
    match state.client().login(email, password).await {
        Ok(data) => {
            let session = state.sessions().save(data.user, data.token)?;
            println!("Login berhasil. Selamat bekerja, {}!", session.user.name);
            println!("Mode toko: {}", session.store.label());
            Ok(())
        }
        Err(err @ ApiError::Unauthorized(_)) => {
            println!("ID Karyawan atau Password salah");
            Err(err.into())
        }
        Err(err) => Err(err.into()),
    }
}

/// End the session and wipe local state.
///
/// # Errors
///
/// Returns a [`PosError`] if the store cannot be cleared.
pub fn logout(state: &PosState) -> Result<(), PosError> {
    state.sessions().clear()?;
    println!("Sesi diakhiri. Sampai jumpa!");
    Ok(())
}

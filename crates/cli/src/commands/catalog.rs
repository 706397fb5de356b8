//! Catalog browsing.

use arjuna_core::CategoryId;
use arjuna_pos::catalog::Catalog;
use arjuna_pos::error::PosError;
use arjuna_pos::session::Session;
use arjuna_pos::state::PosState;

/// Load the session or tell the user to log in.
pub(crate) fn require_session(state: &PosState) -> Result<Session, PosError> {
    state
        .sessions()
        .load()?
        .ok_or_else(|| PosError::Unauthorized("jalankan `arjuna login` dulu".to_owned()))
}

/// Fetch the catalog through the mock API.
pub(crate) async fn fetch_catalog(state: &PosState) -> Result<Catalog, PosError> {
    let items = state.client().fetch_items().await?;
    let categories = state.client().fetch_categories().await?;
    Ok(Catalog::new(items, categories))
}

/// List the items and categories visible to this session.
///
/// # Errors
///
/// Returns a [`PosError`] when not logged in or the fetch fails.
pub async fn run(state: &PosState, category: Option<i64>, search: &str) -> Result<(), PosError> {
    let session = require_session(state)?;
    let catalog = fetch_catalog(state).await?;

    println!("Kategori ({}):", session.store.label());
    for category in catalog.visible_categories(session.store) {
        println!("  [{}] {}", category.id, category.name);
    }
    println!();

    let items = catalog.browse(session.store, category.map(CategoryId::new), search);
    if items.is_empty() {
        println!("Tidak ada produk yang cocok.");
        return Ok(());
    }

    println!("{:>5}  {:<28} {:>12}  {:>6}  {}", "ID", "Produk", "Harga", "Stok", "Satuan");
    for item in items {
        let marker = if item.is_customizable { " (ukur)" } else { "" };
        println!(
            "{:>5}  {:<28} {:>12}  {:>6}  /{}{}",
            item.id,
            item.name,
            item.price.display(),
            item.stock,
            item.unit,
            marker,
        );
    }
    Ok(())
}

//! End-to-end sell flows: login, catalog, cart, checkout, invoice.

#![allow(clippy::unwrap_used)]

use arjuna_core::{PaymentMethod, Rupiah, StoreKind};
use rust_decimal_macros::dec;

use arjuna_integration_tests::login_as;
use arjuna_pos::cart::Cart;
use arjuna_pos::catalog::Catalog;
use arjuna_pos::checkout::{CheckoutError, assess};
use arjuna_pos::invoice;
use arjuna_pos::state::PosState;

async fn catalog(state: &PosState) -> Catalog {
    Catalog::new(
        state.client().fetch_items().await.unwrap(),
        state.client().fetch_categories().await.unwrap(),
    )
}

/// Reference sale: an area-priced banner (15000/m², 2m × 3m) plus
/// two fixed-price mugs (45000/pcs), paid with Rp 200.000 cash.
#[tokio::test]
async fn cash_sale_end_to_end() {
    let state = PosState::in_memory();
    let session = login_as(&state, "budi@arjuna.digital").await.unwrap();
    assert_eq!(session.store, StoreKind::Printing);

    let catalog = catalog(&state).await;
    let flexi = catalog.item(arjuna_core::ItemId::new(101)).unwrap();
    let mug = catalog.item(arjuna_core::ItemId::new(107)).unwrap();
    assert_eq!(flexi.price, Rupiah::new(15_000));
    assert_eq!(mug.price, Rupiah::new(45_000));

    let mut cart = Cart::new();
    cart.add_custom(flexi, dec!(2), Some(dec!(3)), 1).unwrap();
    cart.add_simple(mug);
    cart.add_simple(mug);

    // Two simple adds merged into one line; the custom line stands alone.
    assert_eq!(cart.len(), 2);
    assert_eq!(cart.total(), Rupiah::new(180_000));

    let assessment = assess(cart.total(), PaymentMethod::Cash, "200000");
    assert!(assessment.sufficient);
    assert_eq!(assessment.change, Rupiah::new(20_000));

    let tx = state
        .checkout()
        .confirm(&mut cart, &session, PaymentMethod::Cash, "200000")
        .await
        .unwrap();
    assert!(cart.is_empty());

    // The invoice view reads exactly what checkout persisted.
    let loaded = invoice::load_last(state.storage()).unwrap();
    assert_eq!(loaded, tx);
    assert_eq!(loaded.payment.change, Rupiah::new(20_000));

    let digest = invoice::share_text(&loaded);
    assert!(digest.contains("*STRUK DIGITAL - ARJUNA PRINT*"));
    assert!(digest.contains("*Total: Rp 180.000*"));
}

#[tokio::test]
async fn short_cash_blocks_confirmation() {
    let state = PosState::in_memory();
    let session = login_as(&state, "budi@arjuna.digital").await.unwrap();
    let catalog = catalog(&state).await;
    let flexi = catalog.item(arjuna_core::ItemId::new(101)).unwrap();
    let mug = catalog.item(arjuna_core::ItemId::new(107)).unwrap();

    let mut cart = Cart::new();
    cart.add_custom(flexi, dec!(2), Some(dec!(3)), 1).unwrap();
    cart.add_simple(mug);
    cart.add_simple(mug);

    let assessment = assess(cart.total(), PaymentMethod::Cash, "100000");
    assert!(!assessment.sufficient);

    let err = state
        .checkout()
        .confirm(&mut cart, &session, PaymentMethod::Cash, "100000")
        .await
        .unwrap_err();
    assert!(matches!(err, CheckoutError::InsufficientCash { .. }));

    // Nothing finalized: cart intact, no invoice staged.
    assert_eq!(cart.len(), 2);
    assert!(invoice::load_last(state.storage()).is_err());
}

#[tokio::test]
async fn qris_sale_is_exact_payment() {
    let state = PosState::in_memory();
    let session = login_as(&state, "siti@arjuna.seragam").await.unwrap();
    assert_eq!(session.store, StoreKind::Retail);

    let catalog = catalog(&state).await;
    let uniform = catalog.item(arjuna_core::ItemId::new(104)).unwrap();

    let mut cart = Cart::new();
    cart.add_simple(uniform);

    let tx = state
        .checkout()
        .confirm(&mut cart, &session, PaymentMethod::Qris, "")
        .await
        .unwrap();

    assert_eq!(tx.payment.amount, tx.total);
    assert_eq!(tx.payment.change, Rupiah::ZERO);
    assert_eq!(tx.store, StoreKind::Retail);

    let digest = invoice::share_text(&tx);
    assert!(digest.contains("ARJUNA RETAIL"));
    assert!(digest.contains("Lunas via QRIS"));
}

#[tokio::test]
async fn next_sale_supersedes_last_transaction() {
    let state = PosState::in_memory();
    let session = login_as(&state, "andi@arjuna.digital").await.unwrap();
    let catalog = catalog(&state).await;
    let coffee = catalog.item(arjuna_core::ItemId::new(106)).unwrap();

    let mut cart = Cart::new();
    cart.add_simple(coffee);
    let first = state
        .checkout()
        .confirm(&mut cart, &session, PaymentMethod::Qris, "")
        .await
        .unwrap();

    cart.add_simple(coffee);
    cart.add_simple(coffee);
    let second = state
        .checkout()
        .confirm(&mut cart, &session, PaymentMethod::Qris, "")
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
    let staged = invoice::load_last(state.storage()).unwrap();
    assert_eq!(staged, second);
}

#[tokio::test]
async fn printing_session_does_not_see_retail_catalog() {
    let state = PosState::in_memory();
    let session = login_as(&state, "budi@arjuna.digital").await.unwrap();
    let catalog = catalog(&state).await;

    let visible = catalog.browse(session.store, None, "");
    assert!(visible.iter().all(|item| item.category_id.as_i64() != 2));
    // The uniform item exists in the fixture set but is hidden here.
    assert!(catalog.item(arjuna_core::ItemId::new(104)).is_some());
}

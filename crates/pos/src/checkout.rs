//! Payment assessment and transaction finalization.
//!
//! Cash input arrives as a raw string from the tendered-amount field and is
//! sanitized to digits before parsing; QRIS is always treated as exact
//! payment. Confirmation is gated on sufficiency for cash and on a non-empty
//! cart for both methods.

use std::sync::atomic::{AtomicI64, Ordering};

use arjuna_core::{PaymentMethod, Rupiah};
use chrono::Utc;
use serde_json::json;
use thiserror::Error;

use crate::cart::Cart;
use crate::models::{Payment, Transaction};
use crate::session::Session;
use crate::storage::{KeyValueStore, StorageError, keys, put_json};
use crate::transport::{ApiClient, ApiError};

/// Errors from the checkout flow.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Confirmation attempted on an empty cart.
    #[error("cart is empty")]
    EmptyCart,

    /// Cash tendered is below the bill. Reported inline; the checkout stays
    /// open for the cashier to correct.
    #[error("cash tendered is short by {short}")]
    InsufficientCash {
        /// How much more is needed.
        short: Rupiah,
    },

    /// The transaction post was rejected by the mock API.
    #[error("api error: {0}")]
    Api(#[from] ApiError),

    /// Persisting the transaction failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Sanitize a raw tendered-amount string to whole rupiah.
///
/// Non-digit characters are stripped (so `"Rp 200.000"` reads as 200000);
/// an empty or digit-free input normalizes to zero rather than erroring.
#[must_use]
pub fn sanitize_cash_input(raw: &str) -> Rupiah {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    Rupiah::new(digits.parse::<i64>().unwrap_or(0))
}

/// The derived state of a payment before confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentAssessment {
    pub method: PaymentMethod,
    /// What the customer pays: the sanitized cash amount, or the exact bill
    /// for QRIS.
    pub pay_value: Rupiah,
    /// `pay_value - total`; negative while cash is still short.
    pub change: Rupiah,
    /// Whether confirmation is permitted.
    pub sufficient: bool,
}

/// Assess a payment against the current bill.
#[must_use]
pub fn assess(total: Rupiah, method: PaymentMethod, cash_input: &str) -> PaymentAssessment {
    let pay_value = match method {
        PaymentMethod::Cash => sanitize_cash_input(cash_input),
        PaymentMethod::Qris => total,
    };
    PaymentAssessment {
        method,
        pay_value,
        change: pay_value - total,
        sufficient: pay_value >= total,
    }
}

/// Finalizes transactions: posts them through the mock API, persists the
/// invoice record, and clears the cart.
pub struct CheckoutService<'a> {
    client: &'a ApiClient,
    storage: &'a dyn KeyValueStore,
    /// Last issued invoice token, so ids stay unique within a millisecond.
    last_token: &'a AtomicI64,
}

impl<'a> CheckoutService<'a> {
    /// Create a checkout service over the shared collaborators.
    #[must_use]
    pub const fn new(
        client: &'a ApiClient,
        storage: &'a dyn KeyValueStore,
        last_token: &'a AtomicI64,
    ) -> Self {
        Self {
            client,
            storage,
            last_token,
        }
    }

    /// Confirm the payment and finalize the sale.
    ///
    /// On success the transaction has been posted (`POST /transactions`),
    /// persisted under `last_transaction` for the invoice view, and the cart
    /// has been cleared.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] when there is nothing to sell,
    /// [`CheckoutError::InsufficientCash`] when a cash payment is short,
    /// and transport/storage errors otherwise. On error the cart is left
    /// untouched.
    pub async fn confirm(
        &self,
        cart: &mut Cart,
        session: &Session,
        method: PaymentMethod,
        cash_input: &str,
    ) -> Result<Transaction, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let total = cart.total();
        let assessment = assess(total, method, cash_input);
        if !assessment.sufficient {
            return Err(CheckoutError::InsufficientCash {
                short: total - assessment.pay_value,
            });
        }

        let transaction = Transaction {
            id: format!("INV-{}", self.next_token()),
            date: Utc::now(),
            items: cart.lines().to_vec(),
            total,
            payment: Payment {
                method,
                amount: assessment.pay_value,
                change: assessment.change,
            },
            store: session.store,
        };

        let echo = self
            .client
            .create_transaction(json!({
                "items": transaction.items,
                "total": transaction.total,
                "payment_method": method,
                "cashier_name": session.user.name,
            }))
            .await?;
        tracing::info!(
            invoice = %transaction.id,
            upstream = %echo.transaction_id,
            total = %transaction.total,
            "transaction finalized"
        );

        put_json(self.storage, keys::LAST_TRANSACTION, &transaction)?;
        cart.clear();

        Ok(transaction)
    }

    /// Next monotonic millisecond token. Wall-clock when it advances,
    /// last + 1 when two confirms land in the same millisecond.
    fn next_token(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let prev = self
            .last_token
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |prev| {
                Some(prev.max(now - 1) + 1)
            });
        match prev {
            Ok(p) | Err(p) => p.max(now - 1) + 1,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use arjuna_core::{CategoryId, Email, ItemId, Role, StoreKind, UserId};
    use rust_decimal_macros::dec;

    use crate::catalog::Item;
    use crate::models::User;
    use crate::storage::{MemoryStore, get_json};

    fn session() -> Session {
        Session {
            user: User {
                id: UserId::new(3),
                name: "Andi Kasir".to_owned(),
                email: Email::parse("andi@arjuna.digital").unwrap(),
                role: Role::Operator,
            },
            token: "mock-token-3-1".to_owned(),
            store: StoreKind::Printing,
        }
    }

    fn flexi() -> Item {
        Item {
            id: ItemId::new(101),
            category_id: CategoryId::new(1),
            name: "Flexi China 280gsm".to_owned(),
            description: String::new(),
            image_url: String::new(),
            stock: 120,
            price: Rupiah::new(15_000),
            unit: "m²".to_owned(),
            is_customizable: true,
        }
    }

    fn mug() -> Item {
        Item {
            id: ItemId::new(107),
            category_id: CategoryId::new(3),
            name: "Mug Custom Polos".to_owned(),
            description: String::new(),
            image_url: String::new(),
            stock: 30,
            price: Rupiah::new(45_000),
            unit: "pcs".to_owned(),
            is_customizable: false,
        }
    }

    /// Reference cart: 15000/m² × 2×3 m + 45000/pcs × 2 = 180000.
    fn reference_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add_custom(&flexi(), dec!(2), Some(dec!(3)), 1).unwrap();
        cart.add_simple(&mug());
        cart.add_simple(&mug());
        cart
    }

    #[test]
    fn test_sanitize_cash_input() {
        assert_eq!(sanitize_cash_input("200000"), Rupiah::new(200_000));
        assert_eq!(sanitize_cash_input("Rp 200.000"), Rupiah::new(200_000));
        assert_eq!(sanitize_cash_input(""), Rupiah::ZERO);
        assert_eq!(sanitize_cash_input("uang"), Rupiah::ZERO);
    }

    #[test]
    fn test_assess_cash_sufficient() {
        let a = assess(Rupiah::new(180_000), PaymentMethod::Cash, "200000");
        assert_eq!(a.pay_value, Rupiah::new(200_000));
        assert_eq!(a.change, Rupiah::new(20_000));
        assert!(a.sufficient);
    }

    #[test]
    fn test_assess_cash_short() {
        let a = assess(Rupiah::new(180_000), PaymentMethod::Cash, "100000");
        assert_eq!(a.change, Rupiah::new(-80_000));
        assert!(!a.sufficient);
    }

    #[test]
    fn test_assess_qris_is_exact() {
        let a = assess(Rupiah::new(180_000), PaymentMethod::Qris, "");
        assert_eq!(a.pay_value, Rupiah::new(180_000));
        assert_eq!(a.change, Rupiah::ZERO);
        assert!(a.sufficient);
    }

    #[tokio::test]
    async fn test_confirm_cash_scenario() {
        let client = ApiClient::instant();
        let storage = MemoryStore::new();
        let counter = AtomicI64::new(0);
        let checkout = CheckoutService::new(&client, &storage, &counter);

        let mut cart = reference_cart();
        assert_eq!(cart.total(), Rupiah::new(180_000));

        let tx = checkout
            .confirm(&mut cart, &session(), PaymentMethod::Cash, "200000")
            .await
            .unwrap();

        assert_eq!(tx.total, Rupiah::new(180_000));
        assert_eq!(tx.payment.amount, Rupiah::new(200_000));
        assert_eq!(tx.payment.change, Rupiah::new(20_000));
        assert_eq!(tx.store, StoreKind::Printing);
        assert!(tx.id.starts_with("INV-"));
        assert!(cart.is_empty());

        let persisted: Option<Transaction> =
            get_json(&storage, keys::LAST_TRANSACTION).unwrap();
        assert_eq!(persisted.unwrap(), tx);
    }

    #[tokio::test]
    async fn test_confirm_blocked_when_cash_short() {
        let client = ApiClient::instant();
        let storage = MemoryStore::new();
        let counter = AtomicI64::new(0);
        let checkout = CheckoutService::new(&client, &storage, &counter);

        let mut cart = reference_cart();
        let err = checkout
            .confirm(&mut cart, &session(), PaymentMethod::Cash, "100000")
            .await
            .unwrap_err();

        match err {
            CheckoutError::InsufficientCash { short } => {
                assert_eq!(short, Rupiah::new(80_000));
            }
            other => panic!("unexpected error: {other}"),
        }
        // The cart is untouched and nothing was persisted.
        assert_eq!(cart.len(), 2);
        let persisted: Option<Transaction> =
            get_json(&storage, keys::LAST_TRANSACTION).unwrap();
        assert!(persisted.is_none());
    }

    #[tokio::test]
    async fn test_confirm_qris_always_allowed() {
        let client = ApiClient::instant();
        let storage = MemoryStore::new();
        let counter = AtomicI64::new(0);
        let checkout = CheckoutService::new(&client, &storage, &counter);

        let mut cart = reference_cart();
        let tx = checkout
            .confirm(&mut cart, &session(), PaymentMethod::Qris, "")
            .await
            .unwrap();

        assert_eq!(tx.payment.amount, tx.total);
        assert_eq!(tx.payment.change, Rupiah::ZERO);
    }

    #[tokio::test]
    async fn test_confirm_empty_cart_blocked() {
        let client = ApiClient::instant();
        let storage = MemoryStore::new();
        let counter = AtomicI64::new(0);
        let checkout = CheckoutService::new(&client, &storage, &counter);

        let mut cart = Cart::new();
        let err = checkout
            .confirm(&mut cart, &session(), PaymentMethod::Qris, "")
            .await
            .unwrap_err();
        assert!(matches!(err, CheckoutError::EmptyCart));
    }

    #[tokio::test]
    async fn test_invoice_ids_stay_unique_within_a_millisecond() {
        let client = ApiClient::instant();
        let storage = MemoryStore::new();
        let counter = AtomicI64::new(0);
        let checkout = CheckoutService::new(&client, &storage, &counter);

        let mut ids = Vec::new();
        for _ in 0..5 {
            let mut cart = Cart::new();
            cart.add_simple(&mug());
            let tx = checkout
                .confirm(&mut cart, &session(), PaymentMethod::Qris, "")
                .await
                .unwrap();
            ids.push(tx.id);
        }

        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }
}

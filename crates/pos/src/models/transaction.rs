//! Finalized sale transactions.

use arjuna_core::{PaymentMethod, Rupiah, StoreKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::Line;

/// How a transaction was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub method: PaymentMethod,
    /// Amount tendered (for QRIS, exactly the bill).
    pub amount: Rupiah,
    /// Change returned; zero for QRIS.
    pub change: Rupiah,
}

/// An immutable record of a completed sale.
///
/// Created once at checkout confirmation and persisted under the
/// `last_transaction` key for the invoice view; the next sale supersedes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique invoice number, `INV-` plus a monotonic millisecond token.
    pub id: String,
    pub date: DateTime<Utc>,
    /// Snapshot of the cart at confirmation time.
    pub items: Vec<Line>,
    pub total: Rupiah,
    pub payment: Payment,
    /// The store context the sale was made under.
    pub store: StoreKind,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_roundtrip() {
        let tx = Transaction {
            id: "INV-1707361".to_owned(),
            date: Utc::now(),
            items: Vec::new(),
            total: Rupiah::new(150_000),
            payment: Payment {
                method: PaymentMethod::Cash,
                amount: Rupiah::new(200_000),
                change: Rupiah::new(50_000),
            },
            store: StoreKind::Printing,
        };

        let json = serde_json::to_string(&tx).unwrap();
        let parsed: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, tx);
    }

    #[test]
    fn test_date_is_iso8601() {
        let tx = Transaction {
            id: "INV-1".to_owned(),
            date: "2026-02-08T10:30:00Z".parse().unwrap(),
            items: Vec::new(),
            total: Rupiah::ZERO,
            payment: Payment {
                method: PaymentMethod::Qris,
                amount: Rupiah::ZERO,
                change: Rupiah::ZERO,
            },
            store: StoreKind::General,
        };
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["date"], "2026-02-08T10:30:00Z");
        assert_eq!(json["payment"]["method"], "qris");
    }
}

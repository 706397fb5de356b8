//! Sales history and aggregates.
//!
//! History is fixture data for the process lifetime; the aggregates and the
//! reprint path are real logic over it. Reprint rebuilds a transaction from
//! a history row and drops it into the invoice slot, so the receipt view can
//! render past sales with the same code path as fresh ones.

use arjuna_core::{CategoryId, ItemId, LineId, PaymentMethod, Rupiah, StoreKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::{Line, LineKind};
use crate::catalog::Item;
use crate::models::{Payment, Transaction};
use crate::storage::{KeyValueStore, StorageError, keys, put_json};

/// Aggregate stats served by `GET /dashboard/summary`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_revenue: Rupiah,
    pub transaction_count: u32,
    pub items_sold: u32,
    pub top_selling_item: String,
}

/// One row of the sales history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub id: String,
    pub date: DateTime<Utc>,
    pub total: Rupiah,
    pub method: PaymentMethod,
    /// Number of units sold in the transaction.
    pub items: u32,
}

/// Totals over a history slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalesSummary {
    pub revenue: Rupiah,
    pub transactions: u32,
}

fn record(id: &str, date: &str, total: i64, method: PaymentMethod, items: u32) -> SalesRecord {
    SalesRecord {
        id: id.to_owned(),
        date: date
            .parse()
            .unwrap_or_else(|_| unreachable!("fixture date {date} is valid")),
        total: Rupiah::new(total),
        method,
        items,
    }
}

/// Fixture sales history shown on the reports screen.
#[must_use]
pub fn sales_history() -> Vec<SalesRecord> {
    vec![
        record("INV-1707361", "2026-02-08T10:30:00Z", 150_000, PaymentMethod::Cash, 3),
        record("INV-1707362", "2026-02-08T11:15:00Z", 45_000, PaymentMethod::Qris, 1),
        record("INV-1707363", "2026-02-08T13:00:00Z", 325_000, PaymentMethod::Qris, 5),
        record("INV-1707364", "2026-02-08T14:20:00Z", 12_000, PaymentMethod::Cash, 1),
        record("INV-1707365", "2026-02-08T15:45:00Z", 850_000, PaymentMethod::Qris, 2),
    ]
}

/// Sum revenue and count transactions over a history slice.
#[must_use]
pub fn summarize(records: &[SalesRecord]) -> SalesSummary {
    SalesSummary {
        revenue: records.iter().map(|r| r.total).sum(),
        transactions: u32::try_from(records.len()).unwrap_or(u32::MAX),
    }
}

/// Rebuild a past sale as a transaction and persist it for the invoice view.
///
/// The history rows only carry totals, so the rebuilt transaction has a
/// single recap line for the full amount, exact payment, and zero change.
///
/// # Errors
///
/// Returns [`StorageError`] if persisting fails.
pub fn reprint(
    storage: &dyn KeyValueStore,
    sale: &SalesRecord,
    store: StoreKind,
) -> Result<Transaction, StorageError> {
    let recap = Item {
        id: ItemId::new(0),
        category_id: CategoryId::new(3),
        name: format!("Rekap Penjualan ({} item)", sale.items),
        description: "Cetak ulang dari riwayat".to_owned(),
        image_url: String::new(),
        stock: 0,
        price: sale.total,
        unit: "pcs".to_owned(),
        is_customizable: false,
    };

    let transaction = Transaction {
        id: sale.id.clone(),
        date: sale.date,
        items: vec![Line {
            line_id: LineId::generate(),
            item: recap,
            kind: LineKind::Simple { qty: 1 },
        }],
        total: sale.total,
        payment: Payment {
            method: sale.method,
            amount: sale.total,
            change: Rupiah::ZERO,
        },
        store,
    };

    put_json(storage, keys::LAST_TRANSACTION, &transaction)?;
    tracing::info!(invoice = %transaction.id, "reprint staged for invoice view");
    Ok(transaction)
}

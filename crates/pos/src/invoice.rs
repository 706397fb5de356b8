//! Receipt rendering for the last transaction.
//!
//! The invoice view consumes the `last_transaction` key written at checkout
//! (or staged by a reprint). An absent record is a `NotFound` condition; the
//! caller redirects back to the sell flow.
//!
//! Two renderings exist: a monospace receipt sized to the configured printer
//! paper, and a plain-text digest for sharing over chat apps.

use std::fmt::Write as _;

use arjuna_core::PaymentMethod;

use crate::cart::Line;
use crate::error::PosError;
use crate::models::Transaction;
use crate::settings::{PrinterSettings, StoreProfile};
use crate::storage::{KeyValueStore, get_json, keys};

/// Load the transaction staged for the invoice view.
///
/// # Errors
///
/// Returns [`PosError::NotFound`] when no transaction is staged (the caller
/// redirects to the sell flow), or a storage error.
pub fn load_last(storage: &dyn KeyValueStore) -> Result<Transaction, PosError> {
    get_json::<Transaction>(storage, keys::LAST_TRANSACTION)?
        .ok_or_else(|| PosError::NotFound("no transaction to display".to_owned()))
}

/// Dimension note for a line, e.g. `Ukuran: 2x3m`, if area-priced.
fn dimension_note(line: &Line) -> Option<String> {
    line.dimensions()
        .map(|(length, width)| format!("Ukuran: {length}x{width}m"))
}

/// The shareable plain-text digest of a receipt.
#[must_use]
pub fn share_text(transaction: &Transaction) -> String {
    let divider = "-".repeat(32);
    let mut out = String::new();

    let _ = writeln!(out, "*STRUK DIGITAL - {}*", transaction.store.label());
    let _ = writeln!(out, "{divider}");
    let _ = writeln!(out, "No: {}", transaction.id);
    let _ = writeln!(out, "Tgl: {}", transaction.date.format("%d/%m/%Y"));
    let _ = writeln!(out, "{divider}");
    for line in &transaction.items {
        let _ = writeln!(out, "{} ({}x)", line.item.name, line.qty());
    }
    let _ = writeln!(out, "{divider}");
    let _ = writeln!(out, "*Total: {}*", transaction.total);
    match transaction.payment.method {
        PaymentMethod::Cash => {
            let _ = writeln!(out, "Tunai: {}", transaction.payment.amount);
        }
        PaymentMethod::Qris => {
            let _ = writeln!(out, "Lunas via QRIS");
        }
    }
    let _ = writeln!(out, "{divider}");
    out.push_str("Terima kasih! Simpan struk ini sebagai bukti sah.");
    out
}

/// Render the printable receipt at the configured paper width.
#[must_use]
pub fn receipt_text(
    transaction: &Transaction,
    profile: &StoreProfile,
    printer: &PrinterSettings,
) -> String {
    let width = printer.paper_size.columns();
    let divider = "-".repeat(width);
    let mut out = String::new();

    // Store header
    let _ = writeln!(out, "{}", center(&profile.name, width));
    let _ = writeln!(out, "{}", center(&profile.address, width));
    let _ = writeln!(out, "{}", center(&profile.phone, width));
    let _ = writeln!(out, "{divider}");

    // Transaction info
    let _ = writeln!(out, "{}", row("No. Invoice", &transaction.id, width));
    let _ = writeln!(
        out,
        "{}",
        row(
            "Tanggal",
            &transaction.date.format("%d/%m/%Y %H:%M").to_string(),
            width,
        )
    );
    let _ = writeln!(
        out,
        "{}",
        row("Metode", &transaction.payment.method.to_string(), width)
    );
    let _ = writeln!(out, "{divider}");

    // Line items
    for line in &transaction.items {
        let _ = writeln!(out, "{}", line.item.name);
        if let Some(note) = dimension_note(line) {
            let _ = writeln!(out, "  {note}");
        }
        let qty = format!("  {} x {}", line.qty(), line.item.price);
        let _ = writeln!(out, "{}", row(&qty, &line.total().to_string(), width));
    }
    let _ = writeln!(out, "{divider}");

    // Totals
    let _ = writeln!(
        out,
        "{}",
        row("Subtotal", &transaction.total.to_string(), width)
    );
    let _ = writeln!(out, "{}", row("Pajak (0%)", "Rp 0", width));
    let _ = writeln!(
        out,
        "{}",
        row("Total Bayar", &transaction.total.to_string(), width)
    );
    if transaction.payment.method == PaymentMethod::Cash {
        let _ = writeln!(
            out,
            "{}",
            row("Tunai", &transaction.payment.amount.to_string(), width)
        );
        let _ = writeln!(
            out,
            "{}",
            row("Kembali", &transaction.payment.change.to_string(), width)
        );
    }
    let _ = writeln!(out, "{divider}");

    // Footer
    let _ = writeln!(out, "{}", center(&printer.footer_msg, width));
    out.push_str(&center("Simpan struk ini sebagai bukti sah.", width));
    out
}

/// Center `text` within `width` columns (no-op when it does not fit).
fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_owned();
    }
    let pad = (width - len) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

/// Left/right aligned row; the left side is truncated when the line
/// overflows.
fn row(left: &str, right: &str, width: usize) -> String {
    let right_len = right.chars().count();
    let max_left = width.saturating_sub(right_len + 1);
    let left: String = left.chars().take(max_left).collect();
    let pad = width.saturating_sub(left.chars().count() + right_len);
    format!("{}{}{}", left, " ".repeat(pad), right)
}

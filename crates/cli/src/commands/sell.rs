//! Interactive cashier loop.
//!
//! The terminal stand-in for the POS screen: build a cart line by line, then
//! take a cash or QRIS payment. Insufficient cash keeps the loop open; a
//! confirmed payment prints the receipt and ends the sale.

use std::io::{BufRead, Write};

use arjuna_core::{ItemId, PaymentMethod};
use rust_decimal::Decimal;

use arjuna_pos::cart::Cart;
use arjuna_pos::catalog::Catalog;
use arjuna_pos::checkout::{CheckoutError, assess};
use arjuna_pos::error::PosError;
use arjuna_pos::invoice;
use arjuna_pos::session::Session;
use arjuna_pos::state::PosState;

use super::catalog::{fetch_catalog, require_session};

const HELP: &str = "\
Perintah:
  list                         tampilkan produk
  cart                         tampilkan isi keranjang
  add <id>                     tambah 1 pcs
  ukur <id> <p> [l] [qty]      tambah barang ukuran (meter)
  hapus <no>                   hapus baris keranjang
  bayar tunai <uang>           bayar tunai
  bayar qris                   bayar QRIS / transfer
  selesai                      keluar tanpa membayar";

/// Run the sell loop on stdin/stdout.
///
/// # Errors
///
/// Returns a [`PosError`] when not logged in, when the catalog fetch fails,
/// or when a confirmed checkout fails downstream.
pub async fn run(state: &PosState) -> Result<(), PosError> {
    let session = require_session(state)?;
    let catalog = fetch_catalog(state).await?;

    println!("Kasir {} — {}", session.store.label(), session.user.name);
    println!("{HELP}");

    let mut cart = Cart::new();
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("kasir> ");
        let _ = std::io::stdout().flush();

        let Some(Ok(input)) = lines.next() else {
            break;
        };
        let words: Vec<&str> = input.split_whitespace().collect();

        match words.as_slice() {
            [] => {}
            ["list"] => print_items(&catalog, &session),
            ["cart"] => print_cart(&cart),
            ["add", id] => add_simple(state, &catalog, &session, &mut cart, id),
            ["ukur", id, length, rest @ ..] => {
                add_custom(state, &catalog, &mut cart, id, length, rest);
            }
            ["hapus", index] => remove_line(&mut cart, index),
            ["bayar", "tunai", amount] => {
                if pay(state, &session, &mut cart, PaymentMethod::Cash, amount).await? {
                    return Ok(());
                }
            }
            ["bayar", "qris"] => {
                if pay(state, &session, &mut cart, PaymentMethod::Qris, "").await? {
                    return Ok(());
                }
            }
            ["selesai"] => break,
            _ => println!("Perintah tidak dikenal.\n{HELP}"),
        }
    }

    Ok(())
}

fn print_items(catalog: &Catalog, session: &Session) {
    for item in catalog.browse(session.store, None, "") {
        let marker = if item.is_customizable { " (ukur)" } else { "" };
        println!(
            "  [{}] {} — {}/{}{}",
            item.id,
            item.name,
            item.price.display(),
            item.unit,
            marker,
        );
    }
}

fn print_cart(cart: &Cart) {
    if cart.is_empty() {
        println!("Keranjang kosong.");
        return;
    }
    for (index, line) in cart.lines().iter().enumerate() {
        let note = line
            .dimensions()
            .map(|(length, width)| format!(" ({length}x{width}m)"))
            .unwrap_or_default();
        println!(
            "  {}. {}{} x{} = {}",
            index + 1,
            line.item.name,
            note,
            line.qty(),
            line.total().display(),
        );
    }
    println!("  Total: {}", cart.total().display());
}

/// Terminal bell, the add-to-cart feedback event. Gated by the notification
/// sound setting.
fn beep(state: &PosState) {
    if state.settings().sound_enabled() {
        print!("\x07");
        let _ = std::io::stdout().flush();
    }
}

fn add_simple(
    state: &PosState,
    catalog: &Catalog,
    session: &Session,
    cart: &mut Cart,
    raw_id: &str,
) {
    let Some(item) = parse_id(raw_id).and_then(|id| catalog.item(id)) else {
        println!("Produk tidak ditemukan.");
        return;
    };
    // Retail mode sells customizable goods per whole unit too.
    if item.is_customizable && session.store != arjuna_core::StoreKind::Retail {
        println!("Produk ini dijual per ukuran, pakai: ukur {raw_id} <p> [l] [qty]");
        return;
    }
    let qty = cart.add_simple(item);
    beep(state);
    println!("{} x{} di keranjang. Total: {}", item.name, qty, cart.total().display());
}

fn add_custom(
    state: &PosState,
    catalog: &Catalog,
    cart: &mut Cart,
    raw_id: &str,
    raw_length: &str,
    rest: &[&str],
) {
    let Some(item) = parse_id(raw_id).and_then(|id| catalog.item(id)) else {
        println!("Produk tidak ditemukan.");
        return;
    };
    let Ok(length) = raw_length.parse::<Decimal>() else {
        println!("Panjang tidak valid");
        return;
    };
    let width = match rest.first() {
        Some(raw) => match raw.parse::<Decimal>() {
            Ok(width) => Some(width),
            Err(_) => {
                println!("Lebar tidak valid");
                return;
            }
        },
        None => None,
    };
    let qty = rest
        .get(1)
        .and_then(|raw| raw.parse::<u32>().ok())
        .unwrap_or(1);

    match cart.add_custom(item, length, width, qty) {
        Ok(_) => {
            beep(state);
            println!("{} masuk keranjang. Total: {}", item.name, cart.total().display());
        }
        // Validation errors keep the sale open; the cashier corrects and retries.
        Err(err) => println!("{err}"),
    }
}

fn remove_line(cart: &mut Cart, raw_index: &str) {
    let Some(index) = raw_index.parse::<usize>().ok().and_then(|i| i.checked_sub(1)) else {
        println!("Nomor baris tidak valid.");
        return;
    };
    match cart.remove(index) {
        Ok(line) => println!("{} dihapus. Total: {}", line.item.name, cart.total().display()),
        Err(err) => println!("{err}"),
    }
}

/// Take a payment. Returns `true` when the sale is finalized.
async fn pay(
    state: &PosState,
    session: &Session,
    cart: &mut Cart,
    method: PaymentMethod,
    cash_input: &str,
) -> Result<bool, PosError> {
    if cart.is_empty() {
        println!("Keranjang masih kosong.");
        return Ok(false);
    }

    let assessment = assess(cart.total(), method, cash_input);
    if !assessment.sufficient {
        // Inline report; the checkout stays open.
        println!(
            "Uang kurang: diterima {}, tagihan {}.",
            assessment.pay_value.display(),
            cart.total().display(),
        );
        return Ok(false);
    }

    match state
        .checkout()
        .confirm(cart, session, method, cash_input)
        .await
    {
        Ok(transaction) => {
            let settings = state.settings();
            let receipt = invoice::receipt_text(
                &transaction,
                &settings.store_profile()?,
                &settings.printer()?,
            );
            println!();
            println!("{receipt}");
            if method == PaymentMethod::Cash {
                println!();
                println!("Kembalian: {}", transaction.payment.change.display());
            }
            Ok(true)
        }
        Err(err @ (CheckoutError::EmptyCart | CheckoutError::InsufficientCash { .. })) => {
            println!("{err}");
            Ok(false)
        }
        Err(err) => Err(err.into()),
    }
}

fn parse_id(raw: &str) -> Option<ItemId> {
    raw.parse::<i64>().ok().map(ItemId::new)
}

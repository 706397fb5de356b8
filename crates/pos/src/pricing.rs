//! Line and cart totals.
//!
//! Pricing is pure arithmetic over cart lines; input validation happens at
//! cart entry, so dimensions that reach here are strictly positive.
//!
//! Rounding rule: area prices are rounded half-up (`MidpointAwayFromZero`)
//! to whole rupiah once, at the `price × length × width` multiplication,
//! before the quantity multiply. The same rule applies everywhere an area
//! price is shown (cart rows, receipts, modals), so displayed line totals
//! always sum to the grand total.

use arjuna_core::Rupiah;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::cart::{Line, LineKind};

/// Total for one line.
///
/// - Simple lines: `price × qty`.
/// - Dimensioned lines: `round(price × length × width) × qty`.
#[must_use]
pub fn line_total(line: &Line) -> Rupiah {
    match line.kind {
        LineKind::Simple { qty } => line.item.price * qty,
        LineKind::Dimensioned { qty, length, width } => {
            area_price(line.item.price, length, width) * qty
        }
    }
}

/// Grand total over a set of lines. Invariant under reordering.
#[must_use]
pub fn cart_total(lines: &[Line]) -> Rupiah {
    lines.iter().map(line_total).sum()
}

/// Price of one `length × width` piece, rounded half-up to whole rupiah.
#[must_use]
pub fn area_price(unit_price: Rupiah, length: Decimal, width: Decimal) -> Rupiah {
    let rounded = (unit_price.as_decimal() * length * width)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    // Catalog prices and bench dimensions keep this far below i64::MAX.
    Rupiah::new(rounded.to_i64().unwrap_or(i64::MAX))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use arjuna_core::{CategoryId, ItemId, LineId};
    use rust_decimal_macros::dec;

    use crate::catalog::Item;

    fn item(price: i64) -> Item {
        Item {
            id: ItemId::new(101),
            category_id: CategoryId::new(1),
            name: "Flexi China 280gsm".to_owned(),
            description: String::new(),
            image_url: String::new(),
            stock: 100,
            price: Rupiah::new(price),
            unit: "m²".to_owned(),
            is_customizable: true,
        }
    }

    fn simple(price: i64, qty: u32) -> Line {
        Line {
            line_id: LineId::generate(),
            item: item(price),
            kind: LineKind::Simple { qty },
        }
    }

    fn dimensioned(price: i64, length: Decimal, width: Decimal, qty: u32) -> Line {
        Line {
            line_id: LineId::generate(),
            item: item(price),
            kind: LineKind::Dimensioned { qty, length, width },
        }
    }

    #[test]
    fn test_simple_line_is_price_times_qty() {
        assert_eq!(line_total(&simple(45_000, 2)), Rupiah::new(90_000));
        assert_eq!(line_total(&simple(18_000, 1)), Rupiah::new(18_000));
    }

    #[test]
    fn test_dimensioned_line_multiplies_area() {
        // 15000/m² × 2m × 3m = 90000
        let line = dimensioned(15_000, dec!(2), dec!(3), 1);
        assert_eq!(line_total(&line), Rupiah::new(90_000));
    }

    #[test]
    fn test_dimensioned_qty_multiplies_after_rounding() {
        // 15000 × 1.5 × 1 = 22500, × 3
        let line = dimensioned(15_000, dec!(1.5), dec!(1), 3);
        assert_eq!(line_total(&line), Rupiah::new(67_500));
    }

    #[test]
    fn test_fractional_area_rounds_half_up() {
        // 15000 × 0.33 × 0.33 = 1633.5 → 1634
        let line = dimensioned(15_000, dec!(0.33), dec!(0.33), 1);
        assert_eq!(line_total(&line), Rupiah::new(1_634));

        // 10000 × 0.25 × 0.25 = 625 exactly, no rounding needed
        let exact = dimensioned(10_000, dec!(0.25), dec!(0.25), 1);
        assert_eq!(line_total(&exact), Rupiah::new(625));

        // 9999 × 0.1 × 0.1 = 99.99 → 100
        let up = dimensioned(9_999, dec!(0.1), dec!(0.1), 1);
        assert_eq!(line_total(&up), Rupiah::new(100));
    }

    #[test]
    fn test_cart_total_sums_and_is_order_invariant() {
        let a = dimensioned(15_000, dec!(2), dec!(3), 1); // 90000
        let b = simple(45_000, 2); // 90000
        let c = simple(3_000, 4); // 12000

        let forward = cart_total(&[a.clone(), b.clone(), c.clone()]);
        let backward = cart_total(&[c, b, a]);

        assert_eq!(forward, Rupiah::new(192_000));
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_empty_cart_totals_zero() {
        assert_eq!(cart_total(&[]), Rupiah::ZERO);
    }
}

//! The working cart.
//!
//! A cart is an ordered collection of lines. A line is either *simple*
//! (per-unit price) or *dimensioned* (area price, length × width chosen at
//! add time). The tagged [`LineKind`] makes a width-without-length state
//! unrepresentable.
//!
//! Merge rules: adding a simple item that is already in the cart bumps its
//! quantity; dimensioned lines are never merged, even for the same item, so
//! each carries a fresh [`LineId`] and removal stays unambiguous.

use arjuna_core::{LineId, Rupiah};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::Item;
use crate::pricing;

/// Errors from cart mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// A dimension was zero, negative, or not a number.
    #[error("invalid {field}: must be greater than zero")]
    InvalidDimension {
        /// Which dimension was rejected (`length` or `width`).
        field: &'static str,
    },

    /// Quantity below one.
    #[error("quantity must be at least 1")]
    InvalidQuantity,

    /// No line at the given position.
    #[error("no cart line at index {0}")]
    LineNotFound(usize),
}

/// What a cart line is: a whole-unit entry or an area-priced entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LineKind {
    /// Priced per whole unit.
    Simple { qty: u32 },
    /// Priced per unit area; `width` is 1 for meterage goods.
    Dimensioned {
        qty: u32,
        length: Decimal,
        width: Decimal,
    },
}

/// One entry in the cart: an item snapshot plus its kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Synthetic id making removal unambiguous across duplicate items.
    pub line_id: LineId,
    pub item: Item,
    #[serde(flatten)]
    pub kind: LineKind,
}

impl Line {
    /// Quantity on this line.
    #[must_use]
    pub const fn qty(&self) -> u32 {
        match self.kind {
            LineKind::Simple { qty } | LineKind::Dimensioned { qty, .. } => qty,
        }
    }

    /// Dimensions of an area-priced line, if any.
    #[must_use]
    pub const fn dimensions(&self) -> Option<(Decimal, Decimal)> {
        match self.kind {
            LineKind::Simple { .. } => None,
            LineKind::Dimensioned { length, width, .. } => Some((length, width)),
        }
    }

    /// Total for this line.
    #[must_use]
    pub fn total(&self) -> Rupiah {
        pricing::line_total(self)
    }
}

/// The mutable cart owned by the sell flow.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<Line>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Whether the cart has no lines. An empty cart gates checkout.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of lines (not units).
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Read-only view of the lines.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Add one unit of a non-customized item.
    ///
    /// Merges into an existing simple line for the same item id, otherwise
    /// appends a new line with quantity 1. Returns the resulting quantity.
    /// The caller is expected to emit add-to-cart feedback (beep); the cart
    /// itself stays silent.
    pub fn add_simple(&mut self, item: &Item) -> u32 {
        let existing = self
            .lines
            .iter_mut()
            .find(|line| line.item.id == item.id && matches!(line.kind, LineKind::Simple { .. }));

        if let Some(line) = existing {
            if let LineKind::Simple { qty } = &mut line.kind {
                *qty += 1;
                return *qty;
            }
        }

        self.lines.push(Line {
            line_id: LineId::generate(),
            item: item.clone(),
            kind: LineKind::Simple { qty: 1 },
        });
        1
    }

    /// Add a dimensioned (area-priced) line.
    ///
    /// `width` defaults to 1 for meterage goods. Dimensioned lines are never
    /// merged: every call appends a distinct line with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidDimension`] for a non-positive length or
    /// width, and [`CartError::InvalidQuantity`] for a zero quantity.
    pub fn add_custom(
        &mut self,
        item: &Item,
        length: Decimal,
        width: Option<Decimal>,
        qty: u32,
    ) -> Result<LineId, CartError> {
        if qty == 0 {
            return Err(CartError::InvalidQuantity);
        }
        if length <= Decimal::ZERO {
            return Err(CartError::InvalidDimension { field: "length" });
        }
        let width = width.unwrap_or(Decimal::ONE);
        if width <= Decimal::ZERO {
            return Err(CartError::InvalidDimension { field: "width" });
        }

        let line_id = LineId::generate();
        self.lines.push(Line {
            line_id,
            item: item.clone(),
            kind: LineKind::Dimensioned { qty, length, width },
        });
        Ok(line_id)
    }

    /// Remove and return the line at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::LineNotFound`] if the index is out of range.
    pub fn remove(&mut self, index: usize) -> Result<Line, CartError> {
        if index >= self.lines.len() {
            return Err(CartError::LineNotFound(index));
        }
        Ok(self.lines.remove(index))
    }

    /// Empty the cart (after checkout).
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Grand total over all lines.
    #[must_use]
    pub fn total(&self) -> Rupiah {
        pricing::cart_total(&self.lines)
    }
}

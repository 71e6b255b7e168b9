//! Quote line items and subtotal aggregation.

use rust_decimal::Decimal;
use serde::Deserialize;

/// A priced, quantified product line returned by the quote service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuoteItem {
    /// Product name as reported by the service.
    pub name: String,
    /// Quoted quantity.
    pub qty: u32,
    /// Unit price in Rand.
    pub price: Decimal,
}

impl QuoteItem {
    /// Creates a new quote item.
    pub fn new(name: impl Into<String>, qty: u32, price: Decimal) -> Self {
        Self {
            name: name.into(),
            qty,
            price,
        }
    }

    /// Unit price multiplied by quantity.
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.qty)
    }
}

/// Sums price × qty over the given items.
///
/// The subtotal is always derived from the current item set, never stored;
/// an empty set yields zero.
pub fn subtotal(items: &[QuoteItem]) -> Decimal {
    items.iter().map(QuoteItem::line_total).sum()
}

/// Like [`subtotal`], but `None` when a line total or the running sum
/// does not fit in a `Decimal`. Lets the decoder reject payloads whose
/// amounts cannot be totalled.
pub fn checked_subtotal(items: &[QuoteItem]) -> Option<Decimal> {
    items.iter().try_fold(Decimal::ZERO, |total, item| {
        item.price
            .checked_mul(Decimal::from(item.qty))
            .and_then(|line| total.checked_add(line))
    })
}

/// Formats an amount as Rand with two decimal places (e.g. `R1000.00`).
pub fn format_rand(amount: Decimal) -> String {
    format!("R{amount:.2}")
}

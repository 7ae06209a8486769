//! Cart operation outcomes and summary computation.
//!
//! Operations report their result as explicit outcome variants instead of
//! raising; "nothing selected" and "empty cart" are ordinary states the
//! user can recover from within the same session.

use crate::catalog::Product;
use crate::session::CartItem;

/// Result of an add-to-cart attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    /// The product was appended to the cart.
    Added(Product),
    /// No id was given and no product had been viewed yet.
    NothingSelected,
}

/// Result of a checkout attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    /// Cart was paid and emptied.
    Completed { total: f64 },
    /// Checkout on an empty cart is refused; state is untouched.
    EmptyCart,
}

/// One display line of a cart summary: entries grouped by product name.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryLine {
    pub name: String,
    pub unit_price: f64,
    pub count: usize,
}

impl SummaryLine {
    pub fn subtotal(&self) -> f64 {
        self.unit_price * self.count as f64
    }
}

/// A computed view of a non-empty cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSummary {
    /// Grouped lines in first-occurrence order.
    pub lines: Vec<SummaryLine>,
    /// Sum of all entry prices.
    pub total: f64,
    /// Total number of entries, not distinct groups.
    pub item_count: usize,
}

/// Result of viewing the cart.
#[derive(Debug, Clone, PartialEq)]
pub enum CartView {
    Empty,
    Summary(CartSummary),
}

/// Computes the display summary for a cart.
///
/// Grouping is by product name, preserving the insertion order of each
/// name's first occurrence. The cart itself stays an ungrouped sequence;
/// this is presentation only.
pub fn summarize(cart: &[CartItem]) -> CartView {
    if cart.is_empty() {
        return CartView::Empty;
    }

    let mut lines: Vec<SummaryLine> = Vec::new();
    for item in cart {
        match lines.iter_mut().find(|l| l.name == item.name) {
            Some(line) => line.count += 1,
            None => lines.push(SummaryLine {
                name: item.name.clone(),
                unit_price: item.price,
                count: 1,
            }),
        }
    }

    let total = cart.iter().map(|i| i.price).sum();

    CartView::Summary(CartSummary {
        lines,
        total,
        item_count: cart.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, name: &str, price: f64) -> CartItem {
        CartItem {
            id,
            name: name.to_string(),
            price,
        }
    }

    #[test]
    fn test_summarize_empty_cart() {
        assert_eq!(summarize(&[]), CartView::Empty);
    }

    #[test]
    fn test_summarize_distinct_products() {
        let cart = vec![item(1, "Laptop", 999.99), item(2, "Mouse", 29.99)];

        let CartView::Summary(summary) = summarize(&cart) else {
            panic!("expected a summary");
        };

        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.total, 999.99 + 29.99);
        assert_eq!(summary.lines.len(), 2);
        assert_eq!(summary.lines[0].count, 1);
        assert_eq!(summary.lines[1].count, 1);
    }

    #[test]
    fn test_summarize_groups_duplicates_in_first_occurrence_order() {
        let cart = vec![
            item(2, "Mouse", 29.99),
            item(1, "Laptop", 999.99),
            item(2, "Mouse", 29.99),
        ];

        let CartView::Summary(summary) = summarize(&cart) else {
            panic!("expected a summary");
        };

        assert_eq!(summary.item_count, 3);
        assert_eq!(summary.lines.len(), 2);
        assert_eq!(summary.lines[0].name, "Mouse");
        assert_eq!(summary.lines[0].count, 2);
        assert_eq!(summary.lines[0].subtotal(), 29.99 * 2.0);
        assert_eq!(summary.lines[1].name, "Laptop");
    }
}

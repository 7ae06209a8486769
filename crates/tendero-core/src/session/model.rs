//! Session domain model.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// A cart entry: a full snapshot of a product taken at add-time.
///
/// Snapshotting decouples the cart from later catalog changes. Adding the
/// same product twice produces two distinct entries; grouping by name is a
/// display-time concern only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Id of the product this entry was copied from.
    pub id: u32,
    /// Product name at add-time.
    pub name: String,
    /// Unit price at add-time.
    pub price: f64,
}

impl From<&Product> for CartItem {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
        }
    }
}

/// Conversation state of a session.
///
/// Currently only `Browsing` exists; the enum is kept so the dialogue flow
/// can grow states without changing the session shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    #[default]
    Browsing,
}

/// Per-user mutable state.
///
/// A session holds the user's cart and the last product they looked at.
/// It is created lazily on first contact and lives for the process
/// lifetime; the [`SessionStore`](super::SessionStore) is its only owner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Ordered cart entries, duplicates included.
    pub cart: Vec<CartItem>,
    /// The most recently viewed or added product, if any.
    pub last_product: Option<Product>,
    /// Conversation state.
    pub state: SessionState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_item_snapshots_all_fields() {
        let product = Product::new(3, "Keyboard", 79.99);
        let item = CartItem::from(&product);

        assert_eq!(item.id, 3);
        assert_eq!(item.name, "Keyboard");
        assert_eq!(item.price, 79.99);
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::default();
        assert!(session.cart.is_empty());
        assert!(session.last_product.is_none());
        assert_eq!(session.state, SessionState::Browsing);
    }
}

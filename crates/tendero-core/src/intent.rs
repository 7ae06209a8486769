//! Free-text intent classification.
//!
//! Classification is plain case-insensitive substring matching over fixed
//! trigger lists (mixed Spanish/English). The predicates are independent;
//! precedence between them is the dispatcher's fixed routing order, encoded
//! here in [`classify`].

use crate::catalog::Catalog;

/// Trigger phrases for the add-to-cart intent.
///
/// Shorter triggers ("agregar") are substrings of longer ones ("agregar al
/// carrito"), so match order within the list does not matter.
const ADD_TO_CART_TRIGGERS: &[&str] = &[
    "agregar al carrito",
    "add to cart",
    "añadir al carrito",
    "agregar",
    "añadir",
];

/// Trigger phrases for viewing the cart.
const VIEW_CART_TRIGGERS: &[&str] = &["carrito", "cart", "ver carrito", "view cart"];

/// A recognized user goal for a free-text message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Add the last-viewed product to the cart.
    AddToCart,
    /// The message names a catalog product.
    ProductSearch,
    /// Show the cart contents.
    ViewCart,
    /// Nothing matched.
    Unknown,
}

/// True if `message` contains any add-to-cart trigger phrase.
///
/// Expects an already lowercased, trimmed message.
pub fn is_add_to_cart(message: &str) -> bool {
    ADD_TO_CART_TRIGGERS.iter().any(|t| message.contains(t))
}

/// True if `message` contains any catalog product name.
pub fn is_product_search(catalog: &Catalog, message: &str) -> bool {
    catalog.find_in_text(message).is_some()
}

/// True if `message` contains any cart-viewing trigger phrase.
pub fn is_view_cart(message: &str) -> bool {
    VIEW_CART_TRIGGERS.iter().any(|t| message.contains(t))
}

/// Classifies a lowercased, trimmed message.
///
/// Priority is fixed: add-to-cart, then product search, then view cart.
/// A message containing both a product name and "agregar" is therefore an
/// add, not a search.
pub fn classify(catalog: &Catalog, message: &str) -> Intent {
    if is_add_to_cart(message) {
        Intent::AddToCart
    } else if is_product_search(catalog, message) {
        Intent::ProductSearch
    } else if is_view_cart(message) {
        Intent::ViewCart
    } else {
        Intent::Unknown
    }
}

//! The shopping assistant: message dispatch and cart operations.

use crate::action::{ButtonAction, CallbackError, BUTTON_PREFIX};
use crate::cart::{self, AddOutcome, CartView, CheckoutOutcome};
use crate::catalog::{Catalog, Product};
use crate::intent::{self, Intent};
use crate::reply::{self, Reply};
use crate::session::{CartItem, SessionStore};

/// Dialogue handler for the shopping assistant.
///
/// `Assistant` owns the catalog and the session store (both supplied by
/// the host) and exposes a single inbound entry point,
/// [`handle_message`](Self::handle_message). Button presses and free text
/// are routed to the same underlying operations, so both entry paths
/// produce identical replies.
///
/// Every operation is a plain in-memory computation: the handler is a
/// total function that always produces a [`Reply`]. Invalid states such as
/// adding with nothing selected or checking out an empty cart are reported
/// back to the user, never raised.
pub struct Assistant {
    catalog: Catalog,
    sessions: SessionStore,
}

impl Assistant {
    /// Creates an assistant over a catalog and a session store.
    pub fn new(catalog: Catalog, sessions: SessionStore) -> Self {
        Self { catalog, sessions }
    }

    /// Creates an assistant over the built-in catalog and an empty store.
    pub fn with_defaults() -> Self {
        Self::new(Catalog::default(), SessionStore::new())
    }

    /// The inbound entry point: maps a raw user message to a reply.
    ///
    /// Messages starting with `btn_` are button callbacks and are routed
    /// by action; anything else is normalized and classified as free text.
    pub fn handle_message(&mut self, user_id: &str, message: &str) -> Reply {
        if message.starts_with(BUTTON_PREFIX) {
            return self.handle_button(user_id, message);
        }

        let normalized = message.to_lowercase();
        let normalized = normalized.trim();

        // Priority is fixed: a message carrying both a product name and an
        // add trigger is an add, not a search.
        match intent::classify(&self.catalog, normalized) {
            Intent::AddToCart => self.add_to_cart(user_id, None),
            Intent::ProductSearch => self.select_product(user_id, normalized),
            Intent::ViewCart => self.view_cart(user_id),
            Intent::Unknown => {
                tracing::debug!(user_id, message, "no intent matched");
                reply::not_understood()
            }
        }
    }

    /// Routes a parsed button callback to its operation.
    fn handle_button(&mut self, user_id: &str, callback: &str) -> Reply {
        match ButtonAction::parse(callback) {
            Ok(ButtonAction::Add(product_id)) => self.add_to_cart(user_id, Some(product_id)),
            Ok(ButtonAction::ViewCart) => self.view_cart(user_id),
            Ok(ButtonAction::Browse) => self.show_products(),
            Ok(ButtonAction::ClearCart) => self.clear_cart(user_id),
            Ok(ButtonAction::Checkout) => self.checkout(user_id),
            Err(CallbackError::InvalidProductId(raw)) => {
                tracing::debug!(user_id, callback = %raw, "malformed add callback");
                reply::button_error()
            }
            Err(CallbackError::UnknownCallback(raw)) => {
                tracing::debug!(user_id, callback = %raw, "unrecognized callback");
                reply::unknown_button()
            }
        }
    }

    /// Adds a product to the user's cart.
    ///
    /// With an explicit `product_id` the catalog is consulted; without one
    /// the last selected product is used. This is the single add path
    /// shared by button presses and text commands.
    pub fn add_to_cart(&mut self, user_id: &str, product_id: Option<u32>) -> Reply {
        let product = match product_id {
            Some(id) => self.catalog.find_by_id(id).cloned(),
            None => self.find_last_selected(user_id),
        };

        let outcome = match product {
            Some(product) => {
                let session = self.sessions.get_or_create(user_id);
                session.cart.push(CartItem::from(&product));
                session.last_product = Some(product.clone());
                tracing::info!(
                    user_id,
                    product = %product.name,
                    cart_len = session.cart.len(),
                    "product added to cart"
                );
                AddOutcome::Added(product)
            }
            None => AddOutcome::NothingSelected,
        };

        match outcome {
            AddOutcome::Added(product) => reply::added_to_cart(&product),
            AddOutcome::NothingSelected => reply::nothing_selected(),
        }
    }

    /// Returns the last product the user viewed or added, if any.
    pub fn find_last_selected(&mut self, user_id: &str) -> Option<Product> {
        self.sessions.get_or_create(user_id).last_product.clone()
    }

    /// Shows the user's cart, grouped for display.
    pub fn view_cart(&mut self, user_id: &str) -> Reply {
        let session = self.sessions.get_or_create(user_id);
        match cart::summarize(&session.cart) {
            CartView::Empty => reply::cart_empty(),
            CartView::Summary(summary) => reply::cart_summary(&summary),
        }
    }

    /// Resolves a free-text product mention and records it as selected.
    pub fn select_product(&mut self, user_id: &str, query: &str) -> Reply {
        match self.catalog.find_in_text(query).cloned() {
            Some(product) => {
                self.sessions.get_or_create(user_id).last_product = Some(product.clone());
                tracing::debug!(user_id, product = %product.name, "product selected");
                reply::product_detail(&product)
            }
            None => reply::product_not_found(),
        }
    }

    /// Lists the catalog with one add button per product.
    pub fn show_products(&self) -> Reply {
        reply::catalog_listing(self.catalog.products())
    }

    /// Empties the user's cart. Always succeeds.
    pub fn clear_cart(&mut self, user_id: &str) -> Reply {
        self.sessions.get_or_create(user_id).cart.clear();
        tracing::info!(user_id, "cart cleared");
        reply::cart_cleared()
    }

    /// Checks out the user's cart.
    ///
    /// On success the cart and the last selected product are both reset;
    /// no order history is kept. An empty cart is refused and left
    /// untouched.
    pub fn checkout(&mut self, user_id: &str) -> Reply {
        let session = self.sessions.get_or_create(user_id);

        let outcome = if session.cart.is_empty() {
            CheckoutOutcome::EmptyCart
        } else {
            let total = session.cart.iter().map(|i| i.price).sum();
            session.cart.clear();
            session.last_product = None;
            tracing::info!(user_id, total, "checkout completed");
            CheckoutOutcome::Completed { total }
        };

        match outcome {
            CheckoutOutcome::Completed { total } => reply::checkout_success(total),
            CheckoutOutcome::EmptyCart => reply::checkout_empty_cart(),
        }
    }

    /// Read-only access to the session store, for hosts and tests.
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }
}

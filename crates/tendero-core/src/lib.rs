//! Tendero core: an in-memory shopping-assistant dialogue handler.
//!
//! The crate maps free-text or button-triggered user messages to a reply
//! (response text plus follow-up buttons) while tracking a per-user cart
//! and last-viewed product. Everything is synchronous and in-process;
//! hosts supply the transport.
//!
//! # Module structure
//!
//! - `catalog`: the fixed product list and lookups
//! - `session`: per-user state and its store
//! - `intent`: free-text classification
//! - `action`: button callback parsing
//! - `cart`: cart operation outcomes and summary computation
//! - `reply`: the outbound contract and canonical renderings
//! - `assistant`: the dispatcher tying it all together

pub mod action;
pub mod assistant;
pub mod cart;
pub mod catalog;
pub mod intent;
pub mod reply;
pub mod session;


pub use action::{ButtonAction, CallbackError, BUTTON_PREFIX};
pub use assistant::Assistant;
pub use catalog::{Catalog, Product};
pub use reply::{Button, Reply};
pub use session::{CartItem, Session, SessionStore};

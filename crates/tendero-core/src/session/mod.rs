//! Per-user session state and its in-memory store.

mod model;
mod store;

pub use model::{CartItem, Session, SessionState};
pub use store::SessionStore;

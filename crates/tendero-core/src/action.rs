//! Button callback actions.
//!
//! Buttons carry a callback token (`btn_` prefix plus an action name).
//! Inbound callbacks are parsed once, at the dispatch boundary, into a
//! [`ButtonAction`] and routed via exhaustive matching; nothing downstream
//! inspects the raw string again.

use thiserror::Error;

/// Prefix that marks an inbound message as a button callback.
pub const BUTTON_PREFIX: &str = "btn_";

/// A parsed button callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Add the product with this id to the cart (`btn_add_<id>`).
    Add(u32),
    /// Show the cart (`btn_view_cart`).
    ViewCart,
    /// List the catalog (`btn_browse`).
    Browse,
    /// Empty the cart (`btn_clear_cart`).
    ClearCart,
    /// Start checkout (`btn_checkout`).
    Checkout,
}

/// Why a callback token could not be parsed.
///
/// These are reported back to the user as replies; they never propagate
/// past the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallbackError {
    /// The token after `btn_add_` is not a numeric product id.
    #[error("invalid product id in callback '{0}'")]
    InvalidProductId(String),
    /// The callback matches no known action.
    #[error("unrecognized callback '{0}'")]
    UnknownCallback(String),
}

impl ButtonAction {
    /// Renders the callback token for an add button.
    pub fn add_callback(product_id: u32) -> String {
        format!("{BUTTON_PREFIX}add_{product_id}")
    }

    /// Parses a raw callback token.
    ///
    /// The caller is expected to have checked [`BUTTON_PREFIX`] already;
    /// tokens without it are reported as unrecognized.
    pub fn parse(raw: &str) -> Result<Self, CallbackError> {
        match raw {
            "btn_view_cart" => Ok(Self::ViewCart),
            "btn_browse" => Ok(Self::Browse),
            "btn_clear_cart" => Ok(Self::ClearCart),
            "btn_checkout" => Ok(Self::Checkout),
            _ => {
                if let Some(id) = raw.strip_prefix("btn_add_") {
                    id.parse::<u32>()
                        .map(Self::Add)
                        .map_err(|_| CallbackError::InvalidProductId(raw.to_string()))
                } else {
                    Err(CallbackError::UnknownCallback(raw.to_string()))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_actions() {
        assert_eq!(ButtonAction::parse("btn_view_cart"), Ok(ButtonAction::ViewCart));
        assert_eq!(ButtonAction::parse("btn_browse"), Ok(ButtonAction::Browse));
        assert_eq!(ButtonAction::parse("btn_clear_cart"), Ok(ButtonAction::ClearCart));
        assert_eq!(ButtonAction::parse("btn_checkout"), Ok(ButtonAction::Checkout));
        assert_eq!(ButtonAction::parse("btn_add_2"), Ok(ButtonAction::Add(2)));
    }

    #[test]
    fn test_parse_malformed_add_id() {
        assert_eq!(
            ButtonAction::parse("btn_add_invalid"),
            Err(CallbackError::InvalidProductId("btn_add_invalid".to_string()))
        );
    }

    #[test]
    fn test_parse_unknown_callback() {
        assert_eq!(
            ButtonAction::parse("btn_invalid"),
            Err(CallbackError::UnknownCallback("btn_invalid".to_string()))
        );
    }

    #[test]
    fn test_add_callback_round_trip() {
        let callback = ButtonAction::add_callback(4);
        assert_eq!(callback, "btn_add_4");
        assert_eq!(ButtonAction::parse(&callback), Ok(ButtonAction::Add(4)));
    }
}

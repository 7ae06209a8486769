//! The outbound reply contract and its canonical renderings.
//!
//! Every operation outcome, whether it was reached from a button press or
//! from free text, is rendered here. Keeping all user-facing strings and
//! button sets in one place is what makes the two entry paths
//! indistinguishable to the user.

use crate::action::ButtonAction;
use crate::cart::CartSummary;
use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// A follow-up option attached to a reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    /// Label shown to the user.
    pub label: String,
    /// Callback token sent back when the button is pressed.
    pub callback: String,
}

impl Button {
    pub fn new(label: impl Into<String>, callback: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            callback: callback.into(),
        }
    }
}

/// What the assistant says back: a response text plus follow-up buttons.
///
/// An empty button list means the reply offers no further options. Replies
/// are transient values; nothing stores them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<Button>,
}

impl Reply {
    /// A reply with no follow-up options.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            buttons: Vec::new(),
        }
    }

    pub fn with_buttons(text: impl Into<String>, buttons: Vec<Button>) -> Self {
        Self {
            text: text.into(),
            buttons,
        }
    }
}

fn browse_button(label: &str) -> Button {
    Button::new(label, "btn_browse")
}

/// Successful addition of `product` to the cart.
pub fn added_to_cart(product: &Product) -> Reply {
    Reply::with_buttons(
        format!("✅ {} agregado al carrito correctamente!", product.name),
        vec![
            Button::new("Ver carrito", "btn_view_cart"),
            browse_button("Continuar comprando"),
        ],
    )
}

/// Add requested but no product is selected yet.
pub fn nothing_selected() -> Reply {
    Reply::with_buttons(
        "❌ No hay producto seleccionado. Por favor, elige un producto primero.",
        vec![browse_button("Ver productos")],
    )
}

/// Cart view when the cart is empty.
pub fn cart_empty() -> Reply {
    Reply::with_buttons(
        "🛒 Tu carrito está vacío\n¿Quieres ver nuestros productos?",
        vec![browse_button("Ver productos")],
    )
}

/// Cart view for a non-empty cart.
pub fn cart_summary(summary: &CartSummary) -> Reply {
    let lines: Vec<String> = summary
        .lines
        .iter()
        .map(|line| {
            if line.count > 1 {
                format!("• {} x{} - ${:.2}", line.name, line.count, line.subtotal())
            } else {
                format!("• {} - ${:.2}", line.name, line.unit_price)
            }
        })
        .collect();

    let text = format!(
        "🛒 Tu carrito ({} items):\n{}\n\nTotal: ${:.2}",
        summary.item_count,
        lines.join("\n"),
        summary.total
    );

    Reply::with_buttons(
        text,
        vec![
            Button::new("Proceder al pago", "btn_checkout"),
            browse_button("Continuar comprando"),
            Button::new("Vaciar carrito", "btn_clear_cart"),
        ],
    )
}

/// Detail view for a product matched from free text.
pub fn product_detail(product: &Product) -> Reply {
    Reply::with_buttons(
        format!("📱 {} - ${:.2}\n¿Te interesa?", product.name, product.price),
        vec![
            Button::new("Agregar al carrito", ButtonAction::add_callback(product.id)),
            browse_button("Ver más productos"),
        ],
    )
}

/// No catalog product matched the message.
pub fn product_not_found() -> Reply {
    Reply::with_buttons(
        "❌ Producto no encontrado. ¿Quieres ver todos los productos disponibles?",
        vec![browse_button("Ver productos")],
    )
}

/// Catalog listing with one add button per product.
pub fn catalog_listing(products: &[Product]) -> Reply {
    let buttons = products
        .iter()
        .map(|p| {
            Button::new(
                format!("{} - ${:.2}", p.name, p.price),
                ButtonAction::add_callback(p.id),
            )
        })
        .collect();

    Reply::with_buttons(
        "🏪 Productos disponibles:\nHaz clic en un producto para agregarlo al carrito:",
        buttons,
    )
}

/// Cart was emptied.
pub fn cart_cleared() -> Reply {
    Reply::with_buttons(
        "🛒 Carrito vacío correctamente.",
        vec![browse_button("Ver productos")],
    )
}

/// Checkout completed.
pub fn checkout_success(total: f64) -> Reply {
    Reply::with_buttons(
        format!(
            "✅ ¡Compra realizada exitosamente!\nTotal pagado: ${total:.2}\n¡Gracias por tu compra!"
        ),
        vec![browse_button("Comprar más")],
    )
}

/// Checkout refused on an empty cart.
pub fn checkout_empty_cart() -> Reply {
    Reply::with_buttons(
        "❌ No puedes proceder al pago con un carrito vacío.",
        vec![browse_button("Ver productos")],
    )
}

/// Callback matched no known action.
pub fn unknown_button() -> Reply {
    Reply::plain("❌ Botón no reconocido")
}

/// Callback was an add action with a non-numeric id.
pub fn button_error() -> Reply {
    Reply::plain("❌ Error en el botón. Intenta de nuevo.")
}

/// Free text matched no intent.
pub fn not_understood() -> Reply {
    Reply::plain("No entiendo. ¿Puedes ser más específico?")
}

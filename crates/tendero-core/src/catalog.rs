//! Product catalog.
//!
//! A fixed, read-only list of products. Lookups are linear scans in
//! declaration order; absence is represented as `None`, never an error.

use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// Products are defined once when the catalog is built and never mutated
/// at runtime. Ids are unique and stable for the process lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique, stable product identifier.
    pub id: u32,
    /// Display name (also the search key for free-text matching).
    pub name: String,
    /// Unit price in dollars.
    pub price: f64,
}

impl Product {
    pub fn new(id: u32, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

/// The read-only product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates a catalog from an explicit product list.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Finds a product by its id.
    pub fn find_by_id(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Finds the first product whose name appears, case-insensitively, as a
    /// substring of `text`.
    ///
    /// Scan order is catalog declaration order; there is no ranking.
    pub fn find_in_text(&self, text: &str) -> Option<&Product> {
        let text = text.to_lowercase();
        self.products
            .iter()
            .find(|p| text.contains(&p.name.to_lowercase()))
    }

    /// Returns all products in declaration order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

impl Default for Catalog {
    /// The built-in demo catalog.
    fn default() -> Self {
        Self::new(vec![
            Product::new(1, "Laptop", 999.99),
            Product::new(2, "Mouse", 29.99),
            Product::new(3, "Keyboard", 79.99),
            Product::new(4, "Monitor", 299.99),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_id() {
        let catalog = Catalog::default();

        let product = catalog.find_by_id(2).unwrap();
        assert_eq!(product.name, "Mouse");
        assert_eq!(product.price, 29.99);

        assert!(catalog.find_by_id(99).is_none());
    }

    #[test]
    fn test_find_in_text_is_case_insensitive() {
        let catalog = Catalog::default();

        let product = catalog.find_in_text("quiero una LAPTOP nueva").unwrap();
        assert_eq!(product.id, 1);

        assert!(catalog.find_in_text("quiero una tablet").is_none());
    }

    #[test]
    fn test_find_in_text_uses_declaration_order() {
        let catalog = Catalog::default();

        // Both names present: the first catalog entry wins.
        let product = catalog.find_in_text("mouse o laptop?").unwrap();
        assert_eq!(product.name, "Laptop");
    }

    #[test]
    fn test_products_in_declaration_order() {
        let catalog = Catalog::default();
        let ids: Vec<u32> = catalog.products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }
}

//! View models for the two display regions.

use crate::format::{description_label, locale_date, price_label};
use crate::product::Product;

pub const LOADING_PRODUCTS: &str = "Loading products...";
pub const NO_PRODUCTS: &str = "No products yet. Add one above!";
pub const LOAD_FAILED: &str = "Failed to load products";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HealthState {
    #[default]
    Pending,
    /// Backend reported `healthy`.
    Healthy,
    /// Backend answered with any other status.
    Degraded,
    /// The request or its JSON decoding failed.
    Unreachable,
}

impl HealthState {
    pub fn class(&self) -> &'static str {
        match self {
            HealthState::Pending => "health-status",
            HealthState::Healthy => "health-status healthy",
            HealthState::Degraded | HealthState::Unreachable => "health-status unhealthy",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            HealthState::Pending => "Checking API connection...",
            HealthState::Healthy => "✓ API Connected - Database Online",
            HealthState::Degraded => "✗ API Error - Check Backend",
            HealthState::Unreachable => "✗ Cannot Connect to API",
        }
    }
}

/// Content of the product list container.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ProductList {
    #[default]
    Loading,
    Empty,
    Loaded(Vec<ProductCard>),
    Failed,
}

impl ProductList {
    pub fn from_products(products: &[Product]) -> Self {
        if products.is_empty() {
            ProductList::Empty
        } else {
            ProductList::Loaded(products.iter().map(ProductCard::from).collect())
        }
    }

    /// Placeholder text, `None` when cards are shown instead.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            ProductList::Loading => Some(LOADING_PRODUCTS),
            ProductList::Empty => Some(NO_PRODUCTS),
            ProductList::Failed => Some(LOAD_FAILED),
            ProductList::Loaded(_) => None,
        }
    }

    pub fn cards(&self) -> &[ProductCard] {
        match self {
            ProductList::Loaded(cards) => cards,
            _ => &[],
        }
    }
}

/// One product, already formatted for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductCard {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: String,
    pub added: String,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            description: description_label(product.description.as_deref()),
            price: price_label(product.price_value()),
            added: format!("Added: {}", locale_date(&product.created_at)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::Price;

    fn product(id: i64, description: Option<&str>, price: Price) -> Product {
        Product {
            id,
            name: format!("Product {id}"),
            description: description.map(str::to_string),
            price: Some(price),
            created_at: "2024-03-05T10:15:30".to_string(),
        }
    }

    #[test]
    fn health_classes_and_messages() {
        assert_eq!(HealthState::Healthy.class(), "health-status healthy");
        assert_eq!(HealthState::Healthy.message(), "✓ API Connected - Database Online");
        assert_eq!(HealthState::Degraded.class(), "health-status unhealthy");
        assert_eq!(HealthState::Unreachable.class(), "health-status unhealthy");
        assert_eq!(HealthState::Unreachable.message(), "✗ Cannot Connect to API");
        assert_eq!(HealthState::default(), HealthState::Pending);
    }

    #[test]
    fn empty_payload_renders_empty_state_without_cards() {
        let list = ProductList::from_products(&[]);
        assert_eq!(list, ProductList::Empty);
        assert_eq!(list.placeholder(), Some("No products yet. Add one above!"));
        assert!(list.cards().is_empty());
    }

    #[test]
    fn cards_carry_formatted_fields() {
        let products = vec![
            product(7, Some("Desk lamp"), Price::Number(9.0)),
            product(8, None, Price::Text("19.999".into())),
        ];
        let list = ProductList::from_products(&products);
        assert_eq!(list.placeholder(), None);

        let cards = list.cards();
        assert_eq!(cards.len(), 2);
        assert_eq!(
            cards[0],
            ProductCard {
                id: 7,
                name: "Product 7".into(),
                description: "Desk lamp".into(),
                price: "$9.00".into(),
                added: "Added: 3/5/2024".into(),
            }
        );
        assert_eq!(cards[1].description, "No description");
        assert_eq!(cards[1].price, "$20.00");
    }

    #[test]
    fn placeholders_for_loading_and_failure() {
        assert_eq!(ProductList::Loading.placeholder(), Some("Loading products..."));
        assert_eq!(ProductList::Failed.placeholder(), Some("Failed to load products"));
    }
}

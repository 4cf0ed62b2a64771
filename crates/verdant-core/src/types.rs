//! # Domain Types
//!
//! The catalog-facing types of Verdant Cart.
//!
//! ## Identity
//! A product's display `name` is its identity: the catalog carries no SKU,
//! and the cart holds at most one line per name. The UI passes a whole
//! `Product` when the shopper hits "Add to Cart"; the cart freezes the
//! fields it needs and keys the line by name from then on.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{validate_price, validate_product_name};

/// A product as listed in the catalog.
///
/// This is the candidate handed to `CartStore::add_item`. The cart copies
/// what it needs out of it (see `CartItem::from_product`); a `Product`
/// itself is never stored in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Display name. Unique within the catalog; acts as the cart key.
    pub name: String,

    /// Image reference (URL or asset handle). Display-only; the cart
    /// never interprets it.
    pub image: String,

    /// Optional description shown on the product card.
    pub description: Option<String>,

    /// Price for one unit.
    pub price: Money,
}

impl Product {
    /// Creates a product, validating its fields.
    ///
    /// ## Why Validate Here?
    /// Cart mutations are total functions with no error path, so bad data
    /// must be rejected before it can enter a cart: an empty name would
    /// break line identity, a negative price would corrupt every total
    /// derived later.
    ///
    /// ## Example
    /// ```rust
    /// use verdant_core::{Money, Product};
    ///
    /// let fern = Product::new(
    ///     "Boston Fern",
    ///     "/images/fern.jpg",
    ///     Some("Lush, air-purifying fronds"),
    ///     Money::from_cents(1599),
    /// )?;
    /// assert_eq!(fern.name, "Boston Fern");
    ///
    /// assert!(Product::new("", "/x.jpg", None, Money::zero()).is_err());
    /// assert!(Product::new("Fern", "/x.jpg", None, Money::from_cents(-1)).is_err());
    /// # Ok::<(), verdant_core::ValidationError>(())
    /// ```
    pub fn new(
        name: impl Into<String>,
        image: impl Into<String>,
        description: Option<&str>,
        price: Money,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_product_name(&name)?;
        validate_price(price)?;

        Ok(Product {
            name: name.trim().to_string(),
            image: image.into(),
            description: description.map(str::to_string),
            price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_new_valid() {
        let product = Product::new(
            "Snake Plant",
            "/images/snake.jpg",
            Some("Thrives on neglect"),
            Money::from_cents(2400),
        )
        .unwrap();

        assert_eq!(product.name, "Snake Plant");
        assert_eq!(product.price.cents(), 2400);
        assert_eq!(product.description.as_deref(), Some("Thrives on neglect"));
    }

    #[test]
    fn test_product_new_trims_name() {
        let product =
            Product::new("  Snake Plant ", "/images/snake.jpg", None, Money::zero()).unwrap();
        assert_eq!(product.name, "Snake Plant");
    }

    #[test]
    fn test_product_new_rejects_empty_name() {
        assert!(Product::new("", "/x.jpg", None, Money::zero()).is_err());
        assert!(Product::new("   ", "/x.jpg", None, Money::zero()).is_err());
    }

    #[test]
    fn test_product_new_rejects_negative_price() {
        assert!(Product::new("Fern", "/x.jpg", None, Money::from_cents(-100)).is_err());
        // Zero is allowed (free promotional items)
        assert!(Product::new("Fern", "/x.jpg", None, Money::zero()).is_ok());
    }
}

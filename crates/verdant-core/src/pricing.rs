//! # Pricing Module
//!
//! Pure derivation of display amounts from a cart snapshot.
//!
//! ## Statelessness
//! Nothing in here holds state and nothing is cached: the store derives
//! totals from the current lines every time it produces a snapshot. Since
//! money is integer cents, every result is already exact at two decimal
//! places; there is no rounding step to compound across lines.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::{Cart, CartItem};
use crate::money::Money;

/// Line total for one cart line: unit price × quantity.
pub fn item_total(item: &CartItem) -> Money {
    item.unit_price.multiply_quantity(item.quantity)
}

/// Cart-wide total: sum of line totals.
///
/// An empty slice yields [`Money::zero`] - the UI renders its explicit
/// "your cart is empty" state for that, not a zero-line list.
pub fn cart_total(items: &[CartItem]) -> Money {
    items.iter().map(item_total).sum()
}

/// Cart totals summary embedded in every snapshot.
///
/// ## Fields
/// - `item_count`: distinct lines (what "3 items" in the cart badge means)
/// - `total_quantity`: units across all lines
/// - `total`: the amount the shopper would pay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub total: Money,
}

impl CartTotals {
    /// Derives totals from a slice of cart lines.
    pub fn for_items(items: &[CartItem]) -> Self {
        CartTotals {
            item_count: items.len(),
            total_quantity: items.iter().map(|i| i.quantity).sum(),
            total: cart_total(items),
        }
    }
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals::for_items(cart.items())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Product;

    fn test_product(name: &str, price_cents: i64) -> Product {
        Product::new(name, "/images/plant.jpg", None, Money::from_cents(price_cents)).unwrap()
    }

    #[test]
    fn test_item_total() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("Fern", 999)); // $9.99
        cart.set_quantity("Fern", 3);

        assert_eq!(item_total(&cart.items()[0]), Money::from_cents(2997));
    }

    #[test]
    fn test_item_total_after_double_add() {
        // Add $10.00 twice: one line, quantity 2, line total $20.00
        let mut cart = Cart::new();
        let aloe = test_product("Aloe", 1000);
        cart.add_item(&aloe);
        cart.add_item(&aloe);

        assert_eq!(cart.item_count(), 1);
        assert_eq!(item_total(&cart.items()[0]), Money::from_cents(2000));
    }

    #[test]
    fn test_cart_total_empty_is_zero() {
        assert_eq!(cart_total(&[]), Money::zero());
    }

    #[test]
    fn test_cart_total_sums_lines() {
        // $9.99 + $5.00 = $14.99
        let mut cart = Cart::new();
        cart.add_item(&test_product("Fern", 999));
        cart.add_item(&test_product("Cactus", 500));

        assert_eq!(cart_total(cart.items()), Money::from_cents(1499));
    }

    #[test]
    fn test_cart_total_respects_quantities() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("Fern", 999));
        cart.set_quantity("Fern", 2);
        cart.add_item(&test_product("Cactus", 500));

        // 2 × $9.99 + $5.00 = $24.98
        assert_eq!(cart_total(cart.items()), Money::from_cents(2498));
    }

    #[test]
    fn test_totals_summary() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("Fern", 999));
        cart.set_quantity("Fern", 2);
        cart.add_item(&test_product("Cactus", 500));

        let totals = CartTotals::from(&cart);
        assert_eq!(totals.item_count, 2);
        assert_eq!(totals.total_quantity, 3);
        assert_eq!(totals.total, Money::from_cents(2498));
    }

    #[test]
    fn test_totals_of_empty_cart() {
        let totals = CartTotals::from(&Cart::new());
        assert_eq!(totals.item_count, 0);
        assert_eq!(totals.total_quantity, 0);
        assert!(totals.total.is_zero());
    }
}

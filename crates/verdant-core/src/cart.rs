//! # Cart Model
//!
//! The cart and its line items, with the three mutations the UI drives.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cart Mutations                                   │
//! │                                                                         │
//! │  Shopper Action            Operation              State Change          │
//! │  ──────────────            ─────────              ────────────          │
//! │                                                                         │
//! │  Click "Add to Cart" ────► add_item() ──────────► push new line, or    │
//! │                                                   quantity += 1         │
//! │                                                                         │
//! │  Change quantity ────────► set_quantity() ──────► line.quantity = n    │
//! │                                                   (n <= 0 removes)      │
//! │                                                                         │
//! │  Click "Delete" ─────────► remove_item() ───────► line removed          │
//! │                                                                         │
//! │  Checkout / cancel ──────► clear() ─────────────► all lines removed     │
//! │                                                                         │
//! │  Every mutation is a total function: unknown names are silent          │
//! │  no-ops, and nothing here can fail.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Cart Item
// =============================================================================

/// One line in the shopping cart.
///
/// ## Design Notes
/// - `name` doubles as the line's identity; the cart holds at most one
///   line per name.
/// - `image` and `unit_price` are frozen copies of the product data at the
///   time of adding. If the catalog entry changes afterwards, the cart
///   keeps displaying (and pricing) what the shopper actually added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartItem {
    /// Product name (frozen). The line key.
    pub name: String,

    /// Image reference at time of adding (frozen, display-only).
    pub image: String,

    /// Price for one unit at time of adding (frozen).
    pub unit_price: Money,

    /// Quantity in cart. Always >= 1 while the line exists; a line whose
    /// quantity would drop to 0 is removed, never stored.
    pub quantity: i64,

    /// When this line was first added to the cart.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Creates a new cart line from a product, with quantity 1.
    ///
    /// ## Price Freezing
    /// The price is captured at this moment. Re-adding the same product
    /// later only bumps the quantity; it never refreshes these fields.
    pub fn from_product(product: &Product) -> Self {
        CartItem {
            name: product.name.clone(),
            image: product.image.clone(),
            unit_price: product.price,
            quantity: 1,
            added_at: Utc::now(),
        }
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by `name` (adding the same product bumps quantity)
/// - Every stored quantity is >= 1 (`set_quantity` with <= 0 removes)
/// - Insertion order is preserved; new lines are appended
///
/// This is plain owned state with no interior mutability; thread-safe
/// shared access is the store crate's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Lines in the cart, in insertion order.
    items: Vec<CartItem>,

    /// When the cart was created/last cleared.
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a product to the cart, or bumps its quantity if already present.
    ///
    /// ## Behavior
    /// - Product already in cart (matched by name): quantity += 1. The
    ///   candidate's other fields are ignored; the frozen image and price
    ///   from the first add win.
    /// - Product not in cart: appended as a new line with quantity 1.
    ///
    /// Always succeeds.
    pub fn add_item(&mut self, product: &Product) {
        if let Some(item) = self.items.iter_mut().find(|i| i.name == product.name) {
            item.quantity += 1;
            return;
        }

        self.items.push(CartItem::from_product(product));
    }

    /// Sets the quantity of the line matching `name`.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: the line is removed. Storing a non-positive
    ///   quantity is never allowed, so this path is identical to
    ///   [`Cart::remove_item`].
    /// - Name not in cart: no-op.
    ///
    /// Returns `true` if any line changed (updated or removed).
    pub fn set_quantity(&mut self, name: &str, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_item(name);
        }

        match self.items.iter_mut().find(|i| i.name == name) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Removes the line matching `name`.
    ///
    /// Returns `true` if a line was removed, `false` if the name was not
    /// in the cart (which is not an error).
    pub fn remove_item(&mut self, name: &str) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|i| i.name != name);
        self.items.len() != initial_len
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    /// Returns the lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Returns the number of distinct lines in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// When the cart was created or last cleared.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

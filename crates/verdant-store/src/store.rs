//! # Cart Store
//!
//! Owns the live cart and provides race-free mutation.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. The intended caller is a single-threaded UI event loop, but nothing
//!    stops a host from dispatching from several threads
//! 2. Only one mutation may run at a time; each one reads the latest
//!    committed state and produces the next snapshot atomically
//!
//! ## Why Not RwLock?
//! Cart operations are quick and most of them write. A RwLock would add
//! complexity with minimal benefit.
//!
//! ## Snapshot Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  UI Action                 CartStore                    UI Render       │
//! │  ─────────                 ─────────                    ─────────       │
//! │                                                                         │
//! │  "Add to Cart" ──────────► add_item(&product) ────────► CartSnapshot   │
//! │  "+" button ─────────────► update_quantity(name, n+1) ► CartSnapshot   │
//! │  "-" button (n > 1) ─────► update_quantity(name, n-1) ► CartSnapshot   │
//! │  "-" button (n == 1) ────► update_quantity(name, 0) ──► CartSnapshot   │
//! │  "Delete" ───────────────► remove_item(name) ─────────► CartSnapshot   │
//! │                                                                         │
//! │  Every mutation returns the NEW snapshot; the UI re-renders from       │
//! │  it instead of subscribing to ambient state. Reads between actions     │
//! │  go through snapshot()/items().                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use verdant_core::cart::{Cart, CartItem};
use verdant_core::pricing::CartTotals;
use verdant_core::types::Product;

// =============================================================================
// Snapshot
// =============================================================================

/// An immutable read of cart state at a point in time.
///
/// This is what the UI renders from: the lines in insertion order plus the
/// derived totals. The items are cloned out of the live cart, so holding a
/// snapshot never blocks or observes later mutations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartSnapshot {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartSnapshot {
    fn from(cart: &Cart) -> Self {
        CartSnapshot {
            items: cart.items().to_vec(),
            totals: CartTotals::from(cart),
        }
    }
}

impl CartSnapshot {
    /// Checks if the snapshot holds no lines.
    ///
    /// The UI renders its explicit "your cart is empty" state for this,
    /// not an empty list.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Cart Store
// =============================================================================

/// Owns the authoritative cart state.
///
/// All mutations are total: they cannot fail, and mutating a name that is
/// not in the cart is a silent no-op. Callers cannot distinguish "removed"
/// from "was never present"; the UI never needs to.
#[derive(Debug)]
pub struct CartStore {
    cart: Arc<Mutex<Cart>>,
}

impl CartStore {
    /// Creates a store with an empty cart.
    pub fn new() -> Self {
        CartStore {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Adds a product to the cart, or bumps its quantity by 1 if a line
    /// with the same name already exists (the existing line's frozen
    /// image/price are preserved).
    pub fn add_item(&self, product: &Product) -> CartSnapshot {
        debug!(name = %product.name, "add_item");

        self.with_cart_mut(|cart| {
            cart.add_item(product);
            CartSnapshot::from(&*cart)
        })
    }

    /// Sets the quantity of the line matching `name`.
    ///
    /// A quantity of 0 (or below) removes the line - the store enforces
    /// the quantity >= 1 invariant itself rather than trusting every
    /// caller to switch to [`CartStore::remove_item`]. Unknown names are
    /// a no-op.
    pub fn update_quantity(&self, name: &str, quantity: i64) -> CartSnapshot {
        debug!(name = %name, quantity = %quantity, "update_quantity");

        self.with_cart_mut(|cart| {
            if !cart.set_quantity(name, quantity) {
                debug!(name = %name, "update_quantity: name not in cart");
            }
            CartSnapshot::from(&*cart)
        })
    }

    /// Removes the line matching `name`. Unknown names are a no-op.
    pub fn remove_item(&self, name: &str) -> CartSnapshot {
        debug!(name = %name, "remove_item");

        self.with_cart_mut(|cart| {
            if !cart.remove_item(name) {
                debug!(name = %name, "remove_item: name not in cart");
            }
            CartSnapshot::from(&*cart)
        })
    }

    /// Clears all lines (sale finalized or cancelled).
    pub fn clear(&self) -> CartSnapshot {
        debug!("clear");

        self.with_cart_mut(|cart| {
            cart.clear();
            CartSnapshot::from(&*cart)
        })
    }

    /// Returns the current lines in insertion order.
    pub fn items(&self) -> Vec<CartItem> {
        self.with_cart(|cart| cart.items().to_vec())
    }

    /// Returns the current snapshot without mutating anything.
    pub fn snapshot(&self) -> CartSnapshot {
        self.with_cart(|cart| CartSnapshot::from(cart))
    }

    /// Executes a function with read access to the cart.
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

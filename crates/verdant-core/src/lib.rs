//! # verdant-core: Pure Business Logic for Verdant Cart
//!
//! This crate is the **heart** of Verdant Cart. It contains all cart and
//! pricing logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Verdant Cart Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Retail UI (external)                         │   │
//! │  │    Product Grid ──► Cart Rows ──► Totals ──► Checkout Button   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ snapshots                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    verdant-store                                │   │
//! │  │    CartStore: add_item, update_quantity, remove_item, ...       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ verdant-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  pricing  │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │ CartTotals│  │   │
//! │  │   └───────────┘  └───────────┘  │ CartItem  │  │ cart_total│  │   │
//! │  │                                 └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - The [`Product`] candidate the UI hands to the store
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart and CartItem with the three mutations
//! - [`pricing`] - Pure derivation of line and cart totals
//! - [`error`] - Validation error types
//! - [`validation`] - Input validation at construction boundaries
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Total Mutations**: Cart mutations never fail; the only fallible
//!    surfaces are constructors, which reject bad data up front
//!
//! ## Example Usage
//!
//! ```rust
//! use verdant_core::{cart::Cart, pricing, Money, Product};
//!
//! let fern = Product::new("Boston Fern", "/images/fern.jpg", None, "$15.99".parse()?)?;
//!
//! let mut cart = Cart::new();
//! cart.add_item(&fern);
//! cart.add_item(&fern); // same name: quantity becomes 2
//!
//! assert_eq!(pricing::cart_total(cart.items()), Money::from_cents(3198));
//! # Ok::<(), verdant_core::ValidationError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use verdant_core::Money` instead of
// `use verdant_core::money::Money`

pub use cart::{Cart, CartItem};
pub use error::ValidationError;
pub use money::Money;
pub use pricing::CartTotals;
pub use types::Product;

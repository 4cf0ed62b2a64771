//! # Verdant Store
//!
//! The stateful cart layer a retail UI embeds.
//!
//! ## Module Organization
//! ```text
//! verdant_store/
//! ├── lib.rs          ◄─── You are here (exports & tracing setup)
//! ├── store.rs        ◄─── CartStore and CartSnapshot
//! └── config.rs       ◄─── Display/currency configuration
//! ```
//!
//! ## Ownership Model
//! There is no ambient global cart. The host application creates one
//! [`CartStore`], hands it (by reference or behind an `Arc`) to whatever
//! dispatches UI events, and re-renders from the [`CartSnapshot`] each
//! mutation returns:
//!
//! ```rust
//! use verdant_core::{Money, Product};
//! use verdant_store::CartStore;
//!
//! let store = CartStore::new();
//! let fern = Product::new("Boston Fern", "/images/fern.jpg", None, Money::from_cents(1599))?;
//!
//! let snapshot = store.add_item(&fern);
//! assert_eq!(snapshot.totals.total, Money::from_cents(1599));
//! # Ok::<(), verdant_core::ValidationError>(())
//! ```

pub mod config;
pub mod store;

pub use config::StoreConfig;
pub use store::{CartSnapshot, CartStore};

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for structured logging.
///
/// The host application calls this once at startup.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=verdant_store=trace` - Trace the store only
/// - Default: INFO, with DEBUG for the verdant crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,verdant_store=debug,verdant_core=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

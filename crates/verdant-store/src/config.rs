//! # Store Configuration
//!
//! Display configuration for the presentation boundary.
//!
//! ## Why Here and Not in Core?
//! Cart math produces numeric `Money` values; turning them into `"$12.34"`
//! is a display concern. Keeping the symbol/decimals policy in one config
//! object means the UI never formats currency ad hoc.
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};
use verdant_core::Money;

/// Display configuration for the store.
///
/// Defaults suit development; deployments override via environment
/// variables (see [`StoreConfig::from_env`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Store name (shown in the cart header).
    pub store_name: String,

    /// Currency symbol (for display).
    pub currency_symbol: String,

    /// Number of decimal places for currency.
    pub currency_decimals: u8,
}

impl Default for StoreConfig {
    /// Returns default configuration suitable for development.
    fn default() -> Self {
        StoreConfig {
            store_name: "Verdant Cart Dev Store".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
        }
    }
}

impl StoreConfig {
    /// Creates a config from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `VERDANT_STORE_NAME`: Override store name
    /// - `VERDANT_CURRENCY_SYMBOL`: Override currency symbol
    pub fn from_env() -> Self {
        let mut config = StoreConfig::default();

        if let Ok(store_name) = std::env::var("VERDANT_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(symbol) = std::env::var("VERDANT_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        config
    }

    /// Formats an amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use verdant_core::Money;
    /// use verdant_store::StoreConfig;
    ///
    /// let config = StoreConfig::default();
    /// assert_eq!(config.format_price(Money::from_cents(1234)), "$12.34");
    /// ```
    pub fn format_price(&self, amount: Money) -> String {
        let cents = amount.cents();
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = cents / divisor;
        let frac = (cents % divisor).abs();

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = self.currency_decimals as usize
                )
            } else {
                whole.abs().to_string()
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_positive() {
        let config = StoreConfig::default();
        assert_eq!(config.format_price(Money::from_cents(1234)), "$12.34");
        assert_eq!(config.format_price(Money::from_cents(100)), "$1.00");
        assert_eq!(config.format_price(Money::from_cents(1)), "$0.01");
        assert_eq!(config.format_price(Money::zero()), "$0.00");
    }

    #[test]
    fn test_format_price_negative() {
        let config = StoreConfig::default();
        assert_eq!(config.format_price(Money::from_cents(-1234)), "-$12.34");
    }

    #[test]
    fn test_format_price_other_symbol() {
        let config = StoreConfig {
            currency_symbol: "€".to_string(),
            ..StoreConfig::default()
        };
        assert_eq!(config.format_price(Money::from_cents(999)), "€9.99");
    }

    #[test]
    fn test_format_price_zero_decimals() {
        let config = StoreConfig {
            currency_symbol: "¥".to_string(),
            currency_decimals: 0,
            ..StoreConfig::default()
        };
        assert_eq!(config.format_price(Money::from_cents(1500)), "¥1500");
    }
}

//! Display-currency conversion.
//!
//! Exchange rates are a presentation concern and stay out of the price
//! estimator: quotes are computed in the platform base currency (USD) and
//! converted only when a response is assembled. The trait keeps the rate
//! source swappable; the shipped implementation is a static table.

use std::collections::HashMap;

/// A lookup of base-currency-to-display-currency conversion rates.
pub trait RateSource: Send + Sync {
    /// Units of `currency` per one unit of the base currency, or `None` for
    /// an unsupported currency code.
    fn rate(&self, currency: &str) -> Option<f64>;

    /// Convert a base-currency amount for display.
    fn convert(&self, base_amount: f64, currency: &str) -> Option<f64> {
        self.rate(currency).map(|r| base_amount * r)
    }
}

/// Fixed rate table seeded with the currencies the booking UI offers.
#[derive(Debug, Clone)]
pub struct StaticRateTable {
    rates: HashMap<String, f64>,
}

impl StaticRateTable {
    pub fn new(rates: HashMap<String, f64>) -> Self {
        Self { rates }
    }

    /// Currency codes this table can serve, in no particular order.
    pub fn currencies(&self) -> Vec<&str> {
        self.rates.keys().map(String::as_str).collect()
    }
}

impl Default for StaticRateTable {
    fn default() -> Self {
        let mut rates = HashMap::new();
        rates.insert("USD".to_string(), 1.0);
        rates.insert("EUR".to_string(), 0.92);
        rates.insert("GBP".to_string(), 0.79);
        rates.insert("CHF".to_string(), 0.88);
        rates.insert("AED".to_string(), 3.67);
        // Crypto display rates for the checkout page.
        rates.insert("BTC".to_string(), 0.000017);
        rates.insert("ETH".to_string(), 0.00040);
        Self { rates }
    }
}

impl RateSource for StaticRateTable {
    fn rate(&self, currency: &str) -> Option<f64> {
        self.rates.get(&currency.to_uppercase()).copied()
    }
}

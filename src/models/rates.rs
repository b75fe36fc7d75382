use crate::config::Config;
use serde::Deserialize;
use std::collections::HashMap;

/// Placeholder shown in every column that depends on a missing rate.
pub const NOT_AVAILABLE: &str = "N/A";

/// Currencies shown on the board, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    /// Canadian Dollar
    Cad,
    /// Indonesian Rupiah
    Idr,
    /// Japanese Yen
    Jpy,
    /// Swiss Franc
    Chf,
    /// Euro
    Eur,
    /// US Dollar
    Usd,
}

impl Currency {
    /// Returns the ISO 4217 code used as the key in the API response.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Cad => "CAD",
            Currency::Idr => "IDR",
            Currency::Jpy => "JPY",
            Currency::Chf => "CHF",
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Currency::Cad => "Canadian Dollar",
            Currency::Idr => "Indonesian Rupiah",
            Currency::Jpy => "Japanese Yen",
            Currency::Chf => "Swiss Franc",
            Currency::Eur => "Euro",
            Currency::Usd => "US Dollar",
        }
    }

    /// All supported currencies in table order.
    pub fn all() -> &'static [Currency] {
        &[
            Currency::Cad,
            Currency::Idr,
            Currency::Jpy,
            Currency::Chf,
            Currency::Eur,
            Currency::Usd,
        ]
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Exchange rates keyed by currency code, quoted against the base currency.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RateMap {
    rates: HashMap<String, f64>,
}

/// One rendered line of the rate table.
#[derive(Clone, Debug, PartialEq)]
pub struct RateRow {
    pub currency: Currency,
    pub exchange_rate: String,
    pub we_buy: String,
    pub we_sell: String,
}

impl RateMap {
    pub fn new(rates: HashMap<String, f64>) -> Self {
        Self { rates }
    }

    pub fn get(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }

    pub fn rate_for(&self, currency: Currency) -> Option<f64> {
        self.get(currency.code())
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Builds the table rows in [`Currency::all`] order, whatever order the
    /// API returned its keys in.
    pub fn rows(&self) -> Vec<RateRow> {
        Currency::all()
            .iter()
            .map(|&currency| RateRow::new(currency, self.rate_for(currency)))
            .collect()
    }
}

impl FromIterator<(String, f64)> for RateMap {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl RateRow {
    pub fn new(currency: Currency, rate: Option<f64>) -> Self {
        match rate {
            Some(rate) => Self {
                currency,
                exchange_rate: format_rate(rate),
                we_buy: format_price(buy_price(rate)),
                we_sell: format_price(sell_price(rate)),
            },
            None => Self {
                currency,
                exchange_rate: NOT_AVAILABLE.to_string(),
                we_buy: NOT_AVAILABLE.to_string(),
                we_sell: NOT_AVAILABLE.to_string(),
            },
        }
    }
}

/// Prints a raw rate the way a browser prints a number: shortest round-trip
/// digits, switching to exponent form below 1e-6 and from 1e21 up.
pub fn format_rate(rate: f64) -> String {
    let magnitude = rate.abs();
    if magnitude != 0.0 && !(1e-6..1e21).contains(&magnitude) {
        let exponent = format!("{rate:e}");
        match exponent.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
            _ => exponent,
        }
    } else {
        rate.to_string()
    }
}

/// Price at which the board buys the currency.
pub fn buy_price(rate: f64) -> f64 {
    rate * Config::BUY_MARKUP
}

/// Price at which the board sells the currency.
pub fn sell_price(rate: f64) -> f64 {
    rate * Config::SELL_MARKDOWN
}

// Rounds half-to-even on the exact binary value, same for both columns
pub fn format_price(price: f64) -> String {
    format!("{price:.prec$}", prec = Config::PRICE_DECIMALS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_order() {
        let codes: Vec<&str> = Currency::all().iter().map(Currency::code).collect();
        assert_eq!(codes, ["CAD", "IDR", "JPY", "CHF", "EUR", "USD"]);
    }

    #[test]
    fn test_format_price_pads_to_four_places() {
        assert_eq!(format_price(1.5), "1.5000");
        assert_eq!(format_price(0.000_04), "0.0000");
        assert_eq!(format_price(2.0), "2.0000");
    }

    #[test]
    fn test_format_rate_plain_range() {
        assert_eq!(format_rate(15000.0), "15000");
        assert_eq!(format_rate(0.000062), "0.000062");
        assert_eq!(format_rate(0.000001), "0.000001");
    }

    #[test]
    fn test_format_rate_exponent_range() {
        assert_eq!(format_rate(1.5e-7), "1.5e-7");
        assert_eq!(format_rate(1e21), "1e+21");
        assert_eq!(format_rate(2.5e22), "2.5e+22");
    }

    #[test]
    fn test_row_with_rate() {
        let row = RateRow::new(Currency::Usd, Some(0.5));
        assert_eq!(row.exchange_rate, "0.5");
        assert_eq!(row.we_buy, "0.5100");
        assert_eq!(row.we_sell, "0.4900");
    }

    #[test]
    fn test_row_without_rate() {
        let row = RateRow::new(Currency::Eur, None);
        assert_eq!(row.exchange_rate, NOT_AVAILABLE);
        assert_eq!(row.we_buy, NOT_AVAILABLE);
        assert_eq!(row.we_sell, NOT_AVAILABLE);
    }

    #[test]
    fn test_zero_rate_is_not_missing() {
        let row = RateRow::new(Currency::Idr, Some(0.0));
        assert_eq!(row.exchange_rate, "0");
        assert_eq!(row.we_buy, "0.0000");
    }

    #[test]
    fn test_rate_map_deserializes_from_object() {
        let rates: RateMap = serde_json::from_str(r#"{"USD": 0.000061, "EUR": 0.000056}"#).unwrap();
        assert_eq!(rates.len(), 2);
        assert_eq!(rates.rate_for(Currency::Usd), Some(0.000061));
        assert_eq!(rates.get("GBP"), None);
    }
}

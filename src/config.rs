use crate::models::error::ConfigError;

/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Multiplier applied to the exchange rate for the "we buy" quote (+2%)
    pub const BUY_MARKUP: f64 = 1.02;

    /// Multiplier applied to the exchange rate for the "we sell" quote (-2%)
    pub const SELL_MARKDOWN: f64 = 0.98;

    /// Fractional digits shown for buy and sell quotes
    pub const PRICE_DECIMALS: usize = 4;

    /// Currency every fetched rate is quoted against
    pub const BASE_CURRENCY: &str = "IDR";

    /// Rate provider credited under the table
    pub const PROVIDER_URL: &str = "https://exchangeratesapi.io";
}

/// Outcome of resolving the credentials, handed to the root component.
pub type ConfigResult = Result<CurrencyConfig, ConfigError>;

/// Credentials for the exchange-rate API, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyConfig {
    api_key: String,
    base_url: String,
}

impl CurrencyConfig {
    /// Resolves the credentials baked in at build time.
    ///
    /// A browser module has no process environment, so `CURRENCY_API_KEY` and
    /// `CURRENCY_BASE_URL` are captured by the compiler.
    pub fn from_env() -> ConfigResult {
        Self::resolve(
            option_env!("CURRENCY_API_KEY"),
            option_env!("CURRENCY_BASE_URL"),
        )
    }

    /// Validates raw configuration values. Both must be present and non-blank.
    pub fn resolve(api_key: Option<&str>, base_url: Option<&str>) -> ConfigResult {
        let api_key = api_key.map(str::trim).filter(|v| !v.is_empty());
        let base_url = base_url.map(str::trim).filter(|v| !v.is_empty());

        match (api_key, base_url) {
            (Some(api_key), Some(base_url)) => Ok(Self {
                api_key: api_key.to_string(),
                base_url: base_url.to_string(),
            }),
            _ => Err(ConfigError::MissingCredentials),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The base URL already carries its own query string (e.g. `?base=IDR`),
    /// so the key is appended with `&`.
    pub fn request_url(&self) -> String {
        format!("{}&apikey={}", self.base_url, self.api_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://api.exchangeratesapi.io/v1/latest?base=IDR";

    #[test]
    fn test_resolve_with_both_values() {
        let config = CurrencyConfig::resolve(Some("secret"), Some(BASE)).unwrap();
        assert_eq!(config.api_key(), "secret");
        assert_eq!(config.base_url(), BASE);
    }

    #[test]
    fn test_resolve_missing_key() {
        assert_eq!(
            CurrencyConfig::resolve(None, Some(BASE)),
            Err(ConfigError::MissingCredentials)
        );
    }

    #[test]
    fn test_resolve_missing_url() {
        assert_eq!(
            CurrencyConfig::resolve(Some("secret"), None),
            Err(ConfigError::MissingCredentials)
        );
    }

    #[test]
    fn test_resolve_blank_values() {
        assert!(CurrencyConfig::resolve(Some(""), Some(BASE)).is_err());
        assert!(CurrencyConfig::resolve(Some("secret"), Some("   ")).is_err());
    }

    #[test]
    fn test_missing_credentials_message() {
        assert_eq!(
            ConfigError::MissingCredentials.to_string(),
            "API key or base URL is missing. Please check your .env file."
        );
    }

    #[test]
    fn test_request_url_appends_key() {
        let config = CurrencyConfig::resolve(Some("secret"), Some(BASE)).unwrap();
        assert_eq!(
            config.request_url(),
            "https://api.exchangeratesapi.io/v1/latest?base=IDR&apikey=secret"
        );
    }
}

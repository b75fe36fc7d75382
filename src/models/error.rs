/// Raised when the exchange-rate credentials are not available at startup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("API key or base URL is missing. Please check your .env file.")]
    MissingCredentials,
}

/// Raised when the rate fetch fails for any reason.
///
/// The display text is the same for every cause so nothing from the transport
/// reaches the page. The underlying [`FetchFailure`] is kept as the error
/// source for console diagnostics.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchError {
    #[error("Failed to fetch currency rates.")]
    Unavailable(#[source] FetchFailure),
}

impl FetchError {
    /// Returns the diagnostic cause behind the generic message.
    pub fn cause(&self) -> &FetchFailure {
        match self {
            Self::Unavailable(failure) => failure,
        }
    }
}

impl From<FetchFailure> for FetchError {
    fn from(failure: FetchFailure) -> Self {
        Self::Unavailable(failure)
    }
}

/// Diagnostic detail for a failed fetch.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchFailure {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Invalid response from API: missing rates")]
    MissingRates,
}

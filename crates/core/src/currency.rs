//! Currency - Type-safe ISO 4217 currency codes
//!
//! Cross-currency operations are rejected at the ledger, never converted,
//! so comparing two `Currency` values is the whole FX policy of this core.
//! Major currencies are pre-defined; anything else parses into `Other`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing currency codes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    #[error("Empty currency code")]
    EmptyCode,

    #[error("Currency code too long (max 10 chars): {0}")]
    TooLong(String),

    #[error("Invalid currency code format: {0}")]
    InvalidFormat(String),
}

/// Currency codes.
///
/// # Examples
/// ```
/// use corebank_core::Currency;
///
/// let usd: Currency = "usd".parse().unwrap();
/// assert_eq!(usd, Currency::Usd);
/// assert_eq!(usd.to_string(), "USD");
///
/// let exotic: Currency = "XDR".parse().unwrap();
/// assert!(matches!(exotic, Currency::Other(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Currency {
    /// US Dollar
    Usd,
    /// Euro
    Eur,
    /// British Pound
    Gbp,
    /// Japanese Yen
    Jpy,
    /// Swiss Franc
    Chf,
    /// Canadian Dollar
    Cad,
    /// Australian Dollar
    Aud,
    /// Singapore Dollar
    Sgd,
    /// Vietnamese Dong
    Vnd,
    /// Any other ISO-style code
    Other(String),
}

impl Currency {
    /// Returns the currency code as a string slice
    pub fn code(&self) -> &str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Jpy => "JPY",
            Currency::Chf => "CHF",
            Currency::Cad => "CAD",
            Currency::Aud => "AUD",
            Currency::Sgd => "SGD",
            Currency::Vnd => "VND",
            Currency::Other(s) => s.as_str(),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_uppercase();

        if s.is_empty() {
            return Err(CurrencyError::EmptyCode);
        }

        if s.len() > 10 {
            return Err(CurrencyError::TooLong(s));
        }

        if !s.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(CurrencyError::InvalidFormat(s));
        }

        Ok(match s.as_str() {
            "USD" => Currency::Usd,
            "EUR" => Currency::Eur,
            "GBP" => Currency::Gbp,
            "JPY" => Currency::Jpy,
            "CHF" => Currency::Chf,
            "CAD" => Currency::Cad,
            "AUD" => Currency::Aud,
            "SGD" => Currency::Sgd,
            "VND" => Currency::Vnd,
            _ => Currency::Other(s),
        })
    }
}

impl TryFrom<String> for Currency {
    type Error = CurrencyError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Currency> for String {
    fn from(c: Currency) -> Self {
        c.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_currencies() {
        assert_eq!("USD".parse::<Currency>().unwrap(), Currency::Usd);
        assert_eq!("eur".parse::<Currency>().unwrap(), Currency::Eur);
        assert_eq!(" jpy ".parse::<Currency>().unwrap(), Currency::Jpy);
    }

    #[test]
    fn test_parse_other_code() {
        let c: Currency = "XDR".parse().unwrap();
        assert_eq!(c, Currency::Other("XDR".to_string()));
        assert_eq!(c.code(), "XDR");
    }

    #[test]
    fn test_display() {
        assert_eq!(Currency::Usd.to_string(), "USD");
        assert_eq!(Currency::Other("XAU".to_string()).to_string(), "XAU");
    }

    #[test]
    fn test_empty_code_rejected() {
        let result: Result<Currency, _> = "".parse();
        assert!(matches!(result, Err(CurrencyError::EmptyCode)));
    }

    #[test]
    fn test_too_long_rejected() {
        let result: Result<Currency, _> = "NOTACURRENCYCODE".parse();
        assert!(matches!(result, Err(CurrencyError::TooLong(_))));
    }

    #[test]
    fn test_invalid_format_rejected() {
        let result: Result<Currency, _> = "US-D".parse();
        assert!(matches!(result, Err(CurrencyError::InvalidFormat(_))));
    }

    #[test]
    fn test_serde_roundtrip() {
        for c in [Currency::Usd, Currency::Vnd, Currency::Other("XDR".into())] {
            let json = serde_json::to_string(&c).unwrap();
            let parsed: Currency = serde_json::from_str(&json).unwrap();
            assert_eq!(c, parsed);
        }
    }
}

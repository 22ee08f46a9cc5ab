//! Supported Currencies Library with Macro-Based Code Generation
//!
//! The converter only quotes a small, closed set of foreign currencies against
//! the Polish złoty. The set is defined declaratively with a macro that
//! generates the `CurrencyCode` enum together with its string conversions.
//!
//! # Adding a New Currency
//! Add a line to the `define_currencies!` invocation:
//! ```ignore
//! define_currencies! {
//!     // ... existing currencies ...
//!     JPY => ("JPY", "Japanese yen"),
//! }
//! ```
//!
//! # Example
//! ```
//! use currencies::CurrencyCode;
//!
//! let code: CurrencyCode = "usd".parse().unwrap();
//! assert_eq!(code, CurrencyCode::USD);
//! assert_eq!(code.to_string(), "USD");
//! assert_eq!(CurrencyCode::default(), CurrencyCode::EUR);
//! ```

use std::fmt;

/// Error returned when a string names a currency outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCurrency(pub String);

impl fmt::Display for UnknownCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown currency: {}. Supported: {}",
            self.0,
            CurrencyCode::all()
                .iter()
                .map(CurrencyCode::code)
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

impl std::error::Error for UnknownCurrency {}

// ─────────────────────────────────────────────────────────────────────────────
// THE MACRO: Defines the CurrencyCode enum and its runtime lookups
// ─────────────────────────────────────────────────────────────────────────────

/// Macro to define the supported currencies.
///
/// # Syntax
/// ```ignore
/// define_currencies! {
///     default Name;
///     Name => ("CODE", "display name"),
/// }
/// ```
#[macro_export]
macro_rules! define_currencies {
    (
        default $default:ident;
        $(
            $name:ident => ($code:literal, $display:literal)
        ),* $(,)?
    ) => {
        /// ISO 4217 code of a currency that can be converted to PLN.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "UPPERCASE")]
        pub enum CurrencyCode {
            $($name),*
        }

        impl CurrencyCode {
            pub fn code(&self) -> &'static str {
                match self {
                    $(CurrencyCode::$name => $code),*
                }
            }

            pub fn name(&self) -> &'static str {
                match self {
                    $(CurrencyCode::$name => $display),*
                }
            }

            pub fn all() -> &'static [CurrencyCode] {
                &[$(CurrencyCode::$name),*]
            }
        }

        impl Default for CurrencyCode {
            fn default() -> Self {
                CurrencyCode::$default
            }
        }

        impl std::fmt::Display for CurrencyCode {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.code())
            }
        }

        impl std::str::FromStr for CurrencyCode {
            type Err = $crate::UnknownCurrency;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_uppercase().as_str() {
                    $($code => Ok(CurrencyCode::$name),)*
                    _ => Err($crate::UnknownCurrency(s.to_string())),
                }
            }
        }
    };
}

// ─────────────────────────────────────────────────────────────────────────────
// CURRENCY DEFINITIONS - Add new currencies here!
// ─────────────────────────────────────────────────────────────────────────────

define_currencies! {
    default EUR;
    EUR => ("EUR", "euro"),
    USD => ("USD", "US dollar"),
    GBP => ("GBP", "pound sterling"),
    CHF => ("CHF", "Swiss franc"),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_code_parse() {
        assert_eq!("USD".parse::<CurrencyCode>().unwrap(), CurrencyCode::USD);
        assert_eq!("eur".parse::<CurrencyCode>().unwrap(), CurrencyCode::EUR);
        assert_eq!(" Chf ".parse::<CurrencyCode>().unwrap(), CurrencyCode::CHF);
    }

    #[test]
    fn test_unknown_currency_rejected() {
        let err = "PLN".parse::<CurrencyCode>().unwrap_err();
        assert_eq!(err, UnknownCurrency("PLN".to_string()));
        assert_eq!(
            err.to_string(),
            "Unknown currency: PLN. Supported: EUR, USD, GBP, CHF"
        );
    }

    #[test]
    fn test_currency_code_display() {
        assert_eq!(CurrencyCode::GBP.to_string(), "GBP");
    }

    #[test]
    fn test_currency_names() {
        assert_eq!(CurrencyCode::EUR.name(), "euro");
        assert_eq!(CurrencyCode::USD.name(), "US dollar");
        assert_eq!(CurrencyCode::GBP.name(), "pound sterling");
        assert_eq!(CurrencyCode::CHF.name(), "Swiss franc");
    }

    #[test]
    fn test_default_is_euro() {
        assert_eq!(CurrencyCode::default(), CurrencyCode::EUR);
    }

    #[test]
    fn test_currency_code_all() {
        let all = CurrencyCode::all();
        assert_eq!(all.len(), 4);
        assert_eq!(all[0], CurrencyCode::EUR);
    }

    #[test]
    fn test_serde_uses_uppercase_codes() {
        let json = serde_json::to_string(&CurrencyCode::CHF).unwrap();
        assert_eq!(json, "\"CHF\"");
        let back: CurrencyCode = serde_json::from_str("\"USD\"").unwrap();
        assert_eq!(back, CurrencyCode::USD);
    }
}

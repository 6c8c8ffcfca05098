use crate::error::ClientError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Three-letter ISO 4217 currency codes accepted by the payment API.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    Usd,
    Eur,
    Gbp,
    Jpy,
    Aud,
    Zar,
    Chf,
    Nok,
    Dkk,
    Sek,
    Nzd,
    Hkd,
}

impl CurrencyCode {
    pub const ALL: [CurrencyCode; 12] = [
        CurrencyCode::Usd,
        CurrencyCode::Eur,
        CurrencyCode::Gbp,
        CurrencyCode::Jpy,
        CurrencyCode::Aud,
        CurrencyCode::Zar,
        CurrencyCode::Chf,
        CurrencyCode::Nok,
        CurrencyCode::Dkk,
        CurrencyCode::Sek,
        CurrencyCode::Nzd,
        CurrencyCode::Hkd,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyCode::Usd => "USD",
            CurrencyCode::Eur => "EUR",
            CurrencyCode::Gbp => "GBP",
            CurrencyCode::Jpy => "JPY",
            CurrencyCode::Aud => "AUD",
            CurrencyCode::Zar => "ZAR",
            CurrencyCode::Chf => "CHF",
            CurrencyCode::Nok => "NOK",
            CurrencyCode::Dkk => "DKK",
            CurrencyCode::Sek => "SEK",
            CurrencyCode::Nzd => "NZD",
            CurrencyCode::Hkd => "HKD",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurrencyCode {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CurrencyCode::ALL
            .into_iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ClientError::UnknownCurrency(s.to_string()))
    }
}

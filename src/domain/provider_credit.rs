use super::currency::CurrencyCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A share of a captured amount credited to a provider.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct ProviderCredit {
    /// Provider receiving the credit.
    pub provider_id: String,
    /// Amount as text, exactly as sent to the API.
    pub credit_amount: String,
    pub currency_code: CurrencyCode,
}

impl ProviderCredit {
    pub fn new(
        provider_id: impl Into<String>,
        credit_amount: impl Into<String>,
        currency_code: CurrencyCode,
    ) -> Self {
        Self {
            provider_id: provider_id.into(),
            credit_amount: credit_amount.into(),
            currency_code,
        }
    }
}

impl fmt::Display for ProviderCredit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ProviderCredit{{provider_id={}, credit_amount={}, currency_code={}}}",
            self.provider_id, self.credit_amount, self.currency_code
        )
    }
}

use crate::error::{ClientError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const REFERENCE_ID_REQUIRED: &str =
    "Amazon Reference ID is a required field and should be a Order Reference ID / Billing Agreement ID";
pub const REFERENCE_ID_INVALID: &str = "Invalid Amazon Reference ID";

/// Kind of object an Amazon reference ID points at.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReferenceIdType {
    OrderReferenceId,
    BillingAgreementId,
}

impl fmt::Display for ReferenceIdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceIdType::OrderReferenceId => f.write_str("ORDER_REFERENCE_ID"),
            ReferenceIdType::BillingAgreementId => f.write_str("BILLING_AGREEMENT_ID"),
        }
    }
}

/// A validated Amazon reference ID, tagged with the kind derived from its
/// first character.
///
/// The ID and its kind only exist together, so a request can never carry an
/// order reference ID classified as a billing agreement.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Hash)]
#[serde(try_from = "String", into = "String")]
pub enum AmazonReferenceId {
    OrderReference(String),
    BillingAgreement(String),
}

impl AmazonReferenceId {
    /// Classifies `value` by its first character.
    ///
    /// `P` and `S` are order references, `B` and `C` are billing agreements.
    /// An empty value or any other leading character is rejected with
    /// [`ClientError::InvalidInput`].
    pub fn parse(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        match value.chars().next() {
            None => Err(ClientError::InvalidInput(REFERENCE_ID_REQUIRED.to_string())),
            Some('P' | 'S') => Ok(Self::OrderReference(value)),
            Some('B' | 'C') => Ok(Self::BillingAgreement(value)),
            Some(_) => Err(ClientError::InvalidInput(REFERENCE_ID_INVALID.to_string())),
        }
    }

    /// Same as [`AmazonReferenceId::parse`], with a missing value reported as
    /// a required-field error.
    pub fn parse_optional(value: Option<String>) -> Result<Self> {
        match value {
            Some(value) => Self::parse(value),
            None => Err(ClientError::InvalidInput(REFERENCE_ID_REQUIRED.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::OrderReference(id) | Self::BillingAgreement(id) => id,
        }
    }

    pub fn kind(&self) -> ReferenceIdType {
        match self {
            Self::OrderReference(_) => ReferenceIdType::OrderReferenceId,
            Self::BillingAgreement(_) => ReferenceIdType::BillingAgreementId,
        }
    }
}

impl TryFrom<String> for AmazonReferenceId {
    type Error = ClientError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for AmazonReferenceId {
    type Error = ClientError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl From<AmazonReferenceId> for String {
    fn from(id: AmazonReferenceId) -> Self {
        match id {
            AmazonReferenceId::OrderReference(id) | AmazonReferenceId::BillingAgreement(id) => id,
        }
    }
}

impl fmt::Display for AmazonReferenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

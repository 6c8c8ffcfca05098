use super::currency::CurrencyCode;
use super::provider_credit::ProviderCredit;
use super::reference_id::{AmazonReferenceId, ReferenceIdType};
use crate::error::Result;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Parameters of a single charge (capture) call.
///
/// Built once through the consuming `with_*` methods, then handed by value to
/// a [`ChargeExecutor`](super::ports::ChargeExecutor). Only the Amazon
/// reference ID is validated; every other field is passed through untouched.
///
/// ```
/// use pay_charge::domain::charge::ChargeRequest;
/// use pay_charge::domain::currency::CurrencyCode;
///
/// let request = ChargeRequest::new()
///     .with_amount("10.00")
///     .with_currency_code(CurrencyCode::Usd)
///     .with_amazon_reference_id("P01-1234567-1234567")?;
/// assert_eq!(request.amount(), Some("10.00"));
/// # Ok::<(), pay_charge::error::ClientError>(())
/// ```
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
pub struct ChargeRequest {
    #[serde(
        rename = "amazon_reference_id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    reference: Option<AmazonReferenceId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    charge_reference_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    currency_code: Option<CurrencyCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    transaction_timeout: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    capture_now: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    charge_order_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    store_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    custom_information: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    platform_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    seller_note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    soft_descriptor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    auth_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inherit_shipping_address: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    provider_credit_lines: Option<Vec<ProviderCredit>>,
}

impl ChargeRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and stores the order reference / billing agreement ID.
    ///
    /// The reference type is derived from the first character. On error the
    /// previously stored ID and type are left as they were.
    pub fn set_amazon_reference_id(&mut self, value: impl Into<String>) -> Result<()> {
        self.reference = Some(AmazonReferenceId::parse(value)?);
        Ok(())
    }

    /// Chaining form of [`ChargeRequest::set_amazon_reference_id`].
    ///
    /// The request is consumed, so on error it is dropped along with the
    /// error. Use `set_amazon_reference_id` to keep the request and retry.
    pub fn with_amazon_reference_id(mut self, value: impl Into<String>) -> Result<Self> {
        self.set_amazon_reference_id(value)?;
        Ok(self)
    }

    /// Stores an already validated reference ID.
    pub fn with_reference(mut self, reference: AmazonReferenceId) -> Self {
        self.reference = Some(reference);
        self
    }

    pub fn with_amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    /// Stores `amount` in its plain decimal text form, without rounding.
    pub fn with_decimal_amount(self, amount: Decimal) -> Self {
        self.with_amount(amount.to_string())
    }

    pub fn with_currency_code(mut self, currency_code: CurrencyCode) -> Self {
        self.currency_code = Some(currency_code);
        self
    }

    /// Sets the caller-chosen ID of this capture. Must be unique across all
    /// captures, it doubles as the idempotency key.
    pub fn with_charge_reference_id(mut self, charge_reference_id: impl Into<String>) -> Self {
        self.charge_reference_id = Some(charge_reference_id.into());
        self
    }

    /// Sets the seller note.
    pub fn with_charge_note(mut self, charge_note: impl Into<String>) -> Self {
        self.seller_note = Some(charge_note.into());
        self
    }

    pub fn with_transaction_timeout(mut self, transaction_timeout: impl Into<String>) -> Self {
        self.transaction_timeout = Some(transaction_timeout.into());
        self
    }

    pub fn with_capture_now(mut self, capture_now: bool) -> Self {
        self.capture_now = Some(capture_now);
        self
    }

    pub fn set_inherit_shipping_address(&mut self, inherit_shipping_address: bool) {
        self.inherit_shipping_address = Some(inherit_shipping_address);
    }

    pub fn with_inherit_shipping_address(mut self, inherit_shipping_address: bool) -> Self {
        self.set_inherit_shipping_address(inherit_shipping_address);
        self
    }

    /// Legacy text form of [`ChargeRequest::set_inherit_shipping_address`].
    ///
    /// Only a case-insensitive `"true"` means `true`. Anything else, malformed
    /// text included, silently means `false`.
    #[deprecated(since = "0.1.0", note = "use `set_inherit_shipping_address` with a bool")]
    pub fn set_inherit_shipping_address_from_legacy_str(&mut self, inherit_shipping_address: &str) {
        self.set_inherit_shipping_address(parse_legacy_bool(inherit_shipping_address));
    }

    /// Legacy text form of [`ChargeRequest::with_inherit_shipping_address`].
    /// Same lenient parsing as the plain setter.
    #[deprecated(since = "0.1.0", note = "use `with_inherit_shipping_address` with a bool")]
    pub fn with_inherit_shipping_address_from_legacy_str(
        self,
        inherit_shipping_address: &str,
    ) -> Self {
        self.with_inherit_shipping_address(parse_legacy_bool(inherit_shipping_address))
    }

    pub fn with_charge_order_id(mut self, charge_order_id: impl Into<String>) -> Self {
        self.charge_order_id = Some(charge_order_id.into());
        self
    }

    pub fn with_store_name(mut self, store_name: impl Into<String>) -> Self {
        self.store_name = Some(store_name.into());
        self
    }

    pub fn with_custom_information(mut self, custom_information: impl Into<String>) -> Self {
        self.custom_information = Some(custom_information.into());
        self
    }

    pub fn with_platform_id(mut self, platform_id: impl Into<String>) -> Self {
        self.platform_id = Some(platform_id.into());
        self
    }

    pub fn with_soft_descriptor(mut self, soft_descriptor: impl Into<String>) -> Self {
        self.soft_descriptor = Some(soft_descriptor.into());
        self
    }

    /// Replaces the provider credit lines. Order is kept as given.
    pub fn with_provider_credit_details(mut self, provider_credits: Vec<ProviderCredit>) -> Self {
        self.provider_credit_lines = Some(provider_credits);
        self
    }

    pub fn with_auth_token(mut self, auth_token: impl Into<String>) -> Self {
        self.auth_token = Some(auth_token.into());
        self
    }

    pub fn reference(&self) -> Option<&AmazonReferenceId> {
        self.reference.as_ref()
    }

    pub fn amazon_reference_id(&self) -> Option<&str> {
        self.reference.as_ref().map(AmazonReferenceId::as_str)
    }

    pub fn reference_type(&self) -> Option<ReferenceIdType> {
        self.reference.as_ref().map(AmazonReferenceId::kind)
    }

    pub fn charge_reference_id(&self) -> Option<&str> {
        self.charge_reference_id.as_deref()
    }

    pub fn amount(&self) -> Option<&str> {
        self.amount.as_deref()
    }

    pub fn currency_code(&self) -> Option<CurrencyCode> {
        self.currency_code
    }

    pub fn transaction_timeout(&self) -> Option<&str> {
        self.transaction_timeout.as_deref()
    }

    pub fn capture_now(&self) -> Option<bool> {
        self.capture_now
    }

    pub fn charge_order_id(&self) -> Option<&str> {
        self.charge_order_id.as_deref()
    }

    pub fn store_name(&self) -> Option<&str> {
        self.store_name.as_deref()
    }

    pub fn custom_information(&self) -> Option<&str> {
        self.custom_information.as_deref()
    }

    pub fn platform_id(&self) -> Option<&str> {
        self.platform_id.as_deref()
    }

    pub fn seller_note(&self) -> Option<&str> {
        self.seller_note.as_deref()
    }

    pub fn soft_descriptor(&self) -> Option<&str> {
        self.soft_descriptor.as_deref()
    }

    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    pub fn inherit_shipping_address(&self) -> Option<bool> {
        self.inherit_shipping_address
    }

    pub fn provider_credit_lines(&self) -> Option<&[ProviderCredit]> {
        self.provider_credit_lines.as_deref()
    }
}

fn parse_legacy_bool(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

/// Renders an optional field, `null` when unset.
struct OrNull<'a, T>(&'a Option<T>);

impl<T: fmt::Display> fmt::Display for OrNull<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => fmt::Display::fmt(value, f),
            None => f.write_str("null"),
        }
    }
}

struct CreditLines<'a>(&'a Option<Vec<ProviderCredit>>);

impl fmt::Display for CreditLines<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(lines) = self.0 else {
            return f.write_str("null");
        };
        f.write_str("[")?;
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(line, f)?;
        }
        f.write_str("]")
    }
}

/// Diagnostic rendering for logs. Not a wire format.
impl fmt::Display for ChargeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reference_type = self.reference_type();
        write!(
            f,
            "ChargeRequest{{amazon_reference_id={}, reference_type={}, charge_reference_id={}, \
             amount={}, currency_code={}, transaction_timeout={}, capture_now={}, \
             charge_order_id={}, store_name={}, custom_information={}, platform_id={}, \
             seller_note={}, soft_descriptor={}, auth_token={}, inherit_shipping_address={}, \
             provider_credit_lines={}}}",
            OrNull(&self.reference),
            OrNull(&reference_type),
            OrNull(&self.charge_reference_id),
            OrNull(&self.amount),
            OrNull(&self.currency_code),
            OrNull(&self.transaction_timeout),
            OrNull(&self.capture_now),
            OrNull(&self.charge_order_id),
            OrNull(&self.store_name),
            OrNull(&self.custom_information),
            OrNull(&self.platform_id),
            OrNull(&self.seller_note),
            OrNull(&self.soft_descriptor),
            OrNull(&self.auth_token),
            OrNull(&self.inherit_shipping_address),
            CreditLines(&self.provider_credit_lines),
        )
    }
}

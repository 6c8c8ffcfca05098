use crate::domain::charge::ChargeRequest;
use crate::domain::currency::CurrencyCode;
use crate::domain::reference_id::AmazonReferenceId;
use crate::error::{ClientError, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One CSV row. Empty cells deserialize to `None`.
#[derive(Debug, Deserialize)]
pub struct ChargeRecord {
    pub amazon_reference_id: Option<String>,
    pub charge_reference_id: Option<String>,
    pub amount: Option<String>,
    pub currency_code: Option<String>,
    pub transaction_timeout: Option<String>,
    pub capture_now: Option<bool>,
    pub charge_order_id: Option<String>,
    pub store_name: Option<String>,
    pub custom_information: Option<String>,
    pub platform_id: Option<String>,
    pub seller_note: Option<String>,
    pub soft_descriptor: Option<String>,
    pub auth_token: Option<String>,
    pub inherit_shipping_address: Option<bool>,
}

impl TryFrom<ChargeRecord> for ChargeRequest {
    type Error = ClientError;

    fn try_from(record: ChargeRecord) -> Result<Self> {
        let reference = AmazonReferenceId::parse_optional(record.amazon_reference_id)?;
        let mut request = ChargeRequest::new().with_reference(reference);

        if let Some(v) = record.charge_reference_id {
            request = request.with_charge_reference_id(v);
        }
        if let Some(v) = record.amount {
            request = request.with_amount(v);
        }
        if let Some(v) = record.currency_code {
            request = request.with_currency_code(v.parse::<CurrencyCode>()?);
        }
        if let Some(v) = record.transaction_timeout {
            request = request.with_transaction_timeout(v);
        }
        if let Some(v) = record.capture_now {
            request = request.with_capture_now(v);
        }
        if let Some(v) = record.charge_order_id {
            request = request.with_charge_order_id(v);
        }
        if let Some(v) = record.store_name {
            request = request.with_store_name(v);
        }
        if let Some(v) = record.custom_information {
            request = request.with_custom_information(v);
        }
        if let Some(v) = record.platform_id {
            request = request.with_platform_id(v);
        }
        if let Some(v) = record.seller_note {
            request = request.with_charge_note(v);
        }
        if let Some(v) = record.soft_descriptor {
            request = request.with_soft_descriptor(v);
        }
        if let Some(v) = record.auth_token {
            request = request.with_auth_token(v);
        }
        if let Some(v) = record.inherit_shipping_address {
            request = request.with_inherit_shipping_address(v);
        }
        Ok(request)
    }
}

/// Reads charge requests from a CSV source.
///
/// Wraps `csv::Reader`, trimming whitespace and accepting short rows. Every
/// row goes through the same reference ID validation as the builder, so a
/// bad row surfaces as [`ClientError::InvalidInput`].
pub struct ChargeReader<R: Read> {
    reader: csv::Reader<R>,
}

impl ChargeReader<File> {
    /// Opens `path` for reading. A missing or unreadable file is a
    /// [`ClientError::IoError`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(file))
    }
}

impl<R: Read> ChargeReader<R> {
    pub fn new(source: R) -> Self {
        // Cells are trimmed before validation, so " P01-..." is read as
        // "P01-...". `AmazonReferenceId::parse` itself never trims.
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily reads and converts one request per row.
    pub fn charges(self) -> impl Iterator<Item = Result<ChargeRequest>> {
        self.reader.into_deserialize().map(|result| {
            let record: ChargeRecord = result?;
            ChargeRequest::try_from(record)
        })
    }
}

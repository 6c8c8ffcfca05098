use std::io::{Error, Write};
use tempfile::NamedTempFile;

pub const HEADER: &str = "amazon_reference_id,charge_reference_id,amount,currency_code,transaction_timeout,capture_now,charge_order_id,store_name,custom_information,platform_id,seller_note,soft_descriptor,auth_token,inherit_shipping_address";

/// Writes `rows` below the standard header into a temporary CSV file.
pub fn charges_csv(rows: &[&str]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "{}", HEADER)?;
    for row in rows {
        writeln!(file, "{}", row)?;
    }
    file.flush()?;
    Ok(file)
}

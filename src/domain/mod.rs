//! Domain types of a charge call: the request itself, the value types it
//! refers to, and the port through which it leaves the crate.

pub mod charge;
pub mod currency;
pub mod ports;
pub mod provider_credit;
pub mod reference_id;

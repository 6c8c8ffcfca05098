pub mod charge_writer;
pub mod csv;

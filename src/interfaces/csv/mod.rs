pub mod charge_reader;

//! Common traits for all registry records

pub mod record;

pub use record::{next_sequence, trailing_number, Record};

//! Product codec for catalogdb
//!
//! The data file is a single CSV document: one header row naming the eleven
//! product columns, followed by one row per product.
//!
//! # Design Principles
//!
//! - Whole-file reads, whole-file writes (no partial I/O)
//! - Fixed column order, money columns at four decimal places
//! - Short rows are skipped, unparseable money aborts the read
//! - Writes go to a temp file first and are committed by rename

mod errors;
mod reader;
mod record;
mod writer;

pub use errors::{DecodeError, EncodeError};
pub use reader::{decode, read_products};
pub use record::{Product, FIELD_COUNT, HEADER};
pub use writer::{encode, format_amount, write_products};

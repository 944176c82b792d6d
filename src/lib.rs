//! catalogdb - a product catalog served from a single CSV file
//!
//! The CSV file is the whole database: every operation reads it in full and
//! every mutation rewrites it in full.

pub mod catalog;
pub mod cli;
pub mod http_server;
pub mod observability;
pub mod schema;
pub mod storage;

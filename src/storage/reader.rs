//! Product decoding
//!
//! Reads the whole data file into memory. The first row is the header and is
//! not checked against [`HEADER`](super::HEADER); every following row with at
//! least eleven columns becomes one product. Bytes that are not valid UTF-8
//! are replaced with U+FFFD rather than failing the read.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder};
use tracing::debug;

use super::errors::DecodeError;
use super::record::{Product, FIELD_COUNT};

/// Reads all products from the CSV file at `path`.
///
/// # Errors
///
/// Returns `DecodeError::Open` if the file cannot be opened, otherwise any
/// error produced by [`decode`].
pub fn read_products(path: &Path) -> Result<Vec<Product>, DecodeError> {
    let file = File::open(path).map_err(|source| DecodeError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let products = decode(file)?;
    debug!(path = %path.display(), count = products.len(), "decoded data file");
    Ok(products)
}

/// Decodes products from CSV text.
///
/// Rows shorter than eleven columns are skipped. Extra trailing columns are
/// ignored.
///
/// # Errors
///
/// - `MissingHeader` if the source holds no rows at all
/// - `Row` if the CSV reader rejects a row (e.g. an unterminated quote)
/// - `InvalidAmount` if a cost or price column is not a decimal number
pub fn decode<R: Read>(source: R) -> Result<Vec<Product>, DecodeError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(source);
    let mut rows = reader.byte_records();

    match rows.next() {
        Some(header) => {
            header?;
        }
        None => return Err(DecodeError::MissingHeader),
    }

    let mut products = Vec::new();
    for row in rows {
        let row = row?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();

        if row.len() < FIELD_COUNT {
            debug!(line, fields = row.len(), "skipping incomplete row");
            continue;
        }

        products.push(parse_row(&row, line)?);
    }

    Ok(products)
}

fn field(row: &ByteRecord, index: usize) -> String {
    String::from_utf8_lossy(row.get(index).unwrap_or_default()).into_owned()
}

fn parse_row(row: &ByteRecord, line: u64) -> Result<Product, DecodeError> {
    let text = |index: usize| field(row, index);

    Ok(Product {
        key: text(0),
        subcategory_key: text(1),
        sku: text(2),
        name: text(3),
        model_name: text(4),
        description: text(5),
        color: text(6),
        size: text(7),
        style: text(8),
        cost: parse_amount(row, 9, "ProductCost", line)?,
        price: parse_amount(row, 10, "ProductPrice", line)?,
    })
}

fn parse_amount(
    row: &ByteRecord,
    index: usize,
    name: &'static str,
    line: u64,
) -> Result<f64, DecodeError> {
    let value = field(row, index);
    value.parse().map_err(|source| DecodeError::InvalidAmount {
        field: name,
        value,
        line,
        source,
    })
}

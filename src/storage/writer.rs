//! Product encoding
//!
//! The data file is always replaced in full:
//! 1. Write header + rows to `<file>.tmp` in the same directory
//! 2. fsync the temp file
//! 3. Rename temp to final
//!
//! A failed write leaves the previous data file untouched.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use tracing::debug;

use super::errors::EncodeError;
use super::record::{Product, HEADER};

/// Formats a money column with exactly four decimal digits.
pub fn format_amount(value: f64) -> String {
    format!("{:.4}", value)
}

/// Encodes the header and all products as CSV into `destination`.
///
/// # Errors
///
/// Returns `EncodeError::Write` if any row cannot be written.
pub fn encode<W: Write>(products: &[Product], destination: W) -> Result<W, EncodeError> {
    let mut writer = WriterBuilder::new().from_writer(destination);
    writer.write_record(HEADER)?;

    for product in products {
        let cost = format_amount(product.cost);
        let price = format_amount(product.price);
        writer.write_record(
            product
                .text_fields()
                .into_iter()
                .chain([cost.as_str(), price.as_str()]),
        )?;
    }

    writer
        .into_inner()
        .map_err(|e| EncodeError::Write(csv::Error::from(e.into_error())))
}

/// Replaces the data file at `path` with the given products.
///
/// # Errors
///
/// - `Create` if the temp file cannot be created
/// - `Write` / `Flush` if writing or fsync fails
/// - `Commit` if the rename onto `path` fails
pub fn write_products(path: &Path, products: &[Product]) -> Result<(), EncodeError> {
    let temp_path = temp_path_for(path);

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|source| EncodeError::Create {
            path: temp_path.clone(),
            source,
        })?;

    let result = encode(products, file).and_then(|file| {
        file.sync_all().map_err(|source| EncodeError::Flush {
            path: temp_path.clone(),
            source,
        })
    });
    if let Err(e) = result {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    fs::rename(&temp_path, path).map_err(|source| {
        let _ = fs::remove_file(&temp_path);
        EncodeError::Commit {
            path: path.to_path_buf(),
            source,
        }
    })?;

    // fsync the directory so the rename itself survives a crash
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Ok(dir) = File::open(parent) {
            let _ = dir.sync_all();
        }
    }

    debug!(path = %path.display(), count = products.len(), "wrote data file");
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

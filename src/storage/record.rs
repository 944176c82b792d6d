//! Product record type
//!
//! Column layout of the data file:
//!
//! ```text
//! | 0 ProductKey | 1 ProductSubcategoryKey | 2 ProductSKU | 3 ProductName |
//! | 4 ModelName  | 5 ProductDescription    | 6 ProductColor | 7 ProductSize |
//! | 8 ProductStyle | 9 ProductCost | 10 ProductPrice |
//! ```
//!
//! The JSON representation uses the same names as the CSV header.

use serde::{Deserialize, Serialize};

/// Number of columns in a complete row.
pub const FIELD_COUNT: usize = 11;

/// Header row written at the top of every data file.
pub const HEADER: [&str; FIELD_COUNT] = [
    "ProductKey",
    "ProductSubcategoryKey",
    "ProductSKU",
    "ProductName",
    "ModelName",
    "ProductDescription",
    "ProductColor",
    "ProductSize",
    "ProductStyle",
    "ProductCost",
    "ProductPrice",
];

/// A single catalog entry.
///
/// `key` is the lookup identifier but is not required to be unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "ProductKey")]
    pub key: String,
    #[serde(rename = "ProductSubcategoryKey")]
    pub subcategory_key: String,
    #[serde(rename = "ProductSKU")]
    pub sku: String,
    #[serde(rename = "ProductName")]
    pub name: String,
    #[serde(rename = "ModelName")]
    pub model_name: String,
    #[serde(rename = "ProductDescription")]
    pub description: String,
    #[serde(rename = "ProductColor")]
    pub color: String,
    #[serde(rename = "ProductSize")]
    pub size: String,
    #[serde(rename = "ProductStyle")]
    pub style: String,
    #[serde(rename = "ProductCost")]
    pub cost: f64,
    #[serde(rename = "ProductPrice")]
    pub price: f64,
}

impl Product {
    /// Returns true if `needle` (already lowercased) occurs in the name,
    /// description, color or style, ignoring case.
    pub fn matches_filter(&self, needle: &str) -> bool {
        [&self.name, &self.description, &self.color, &self.style]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }

    /// Returns the text columns in header order.
    pub(crate) fn text_fields(&self) -> [&str; 9] {
        [
            self.key.as_str(),
            self.subcategory_key.as_str(),
            self.sku.as_str(),
            self.name.as_str(),
            self.model_name.as_str(),
            self.description.as_str(),
            self.color.as_str(),
            self.size.as_str(),
            self.style.as_str(),
        ]
    }
}

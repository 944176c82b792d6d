//! List query: filter, sort and pagination
//!
//! Applied in that order to a freshly loaded dataset.

use std::cmp::Ordering;

use crate::storage::Product;

/// Default page number when none is given
pub const DEFAULT_PAGE: usize = 1;

/// Default number of products per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Sort order for list results. Always ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// By `ProductKey`
    #[default]
    Key,
    /// By `ProductName`
    Name,
    /// By `ProductPrice`
    Price,
}

impl SortKey {
    /// Parses the `sort` query parameter. Anything other than `price` or
    /// `name` sorts by key.
    pub fn parse(value: &str) -> Self {
        match value {
            "price" => SortKey::Price,
            "name" => SortKey::Name,
            _ => SortKey::Key,
        }
    }

    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::Key => a.key.cmp(&b.key),
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Price => a.price.total_cmp(&b.price),
        }
    }
}

/// Parameters of a list call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// 1-based page number
    pub page: usize,
    /// Products per page
    pub page_size: usize,
    /// Case-insensitive substring; empty disables filtering
    pub filter: String,
    pub sort: SortKey,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            filter: String::new(),
            sort: SortKey::Key,
        }
    }
}

impl ListQuery {
    /// Create a query for the given page
    pub fn page(page: usize, page_size: usize) -> Self {
        Self {
            page,
            page_size,
            ..Default::default()
        }
    }

    /// Set the filter string
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    /// Set the sort key
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Filters, sorts and slices `products`.
    pub fn apply(&self, mut products: Vec<Product>) -> Vec<Product> {
        if !self.filter.is_empty() {
            let needle = self.filter.to_lowercase();
            products.retain(|p| p.matches_filter(&needle));
        }

        products.sort_by(|a, b| self.sort.compare(a, b));

        let (start, end) = self.bounds(products.len());
        if start >= end {
            return Vec::new();
        }
        products.truncate(end);
        products.drain(..start);
        products
    }

    /// Returns the `[start, end)` slice of a sequence of `len` items.
    /// `start > len` yields an empty range.
    fn bounds(&self, len: usize) -> (usize, usize) {
        let page = self.page.max(1);
        let page_size = self.page_size.max(1);

        let start = (page - 1).saturating_mul(page_size);
        if start > len {
            return (0, 0);
        }
        let end = start.saturating_add(page_size).min(len);
        (start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(key: &str, name: &str, price: f64) -> Product {
        Product {
            key: key.to_string(),
            subcategory_key: "S".to_string(),
            sku: format!("SKU-{}", key),
            name: name.to_string(),
            model_name: "M".to_string(),
            description: "plain".to_string(),
            color: "Silver".to_string(),
            size: "M".to_string(),
            style: "U".to_string(),
            cost: 1.0,
            price,
        }
    }

    fn keys(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.key.as_str()).collect()
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!(SortKey::parse("price"), SortKey::Price);
        assert_eq!(SortKey::parse("name"), SortKey::Name);
        assert_eq!(SortKey::parse(""), SortKey::Key);
        assert_eq!(SortKey::parse("Price"), SortKey::Key);
        assert_eq!(SortKey::parse("color"), SortKey::Key);
    }

    #[test]
    fn test_default_sort_by_key() {
        let data = vec![product("P3", "a", 1.0), product("P1", "b", 2.0), product("P2", "c", 3.0)];
        let out = ListQuery::default().apply(data);
        assert_eq!(keys(&out), vec!["P1", "P2", "P3"]);
    }

    #[test]
    fn test_sort_by_name_is_bytewise() {
        let data = vec![product("P1", "bike", 1.0), product("P2", "Lock", 2.0), product("P3", "Bell", 3.0)];
        let out = ListQuery::default().with_sort(SortKey::Name).apply(data);
        assert_eq!(keys(&out), vec!["P3", "P2", "P1"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_prices() {
        let data = vec![product("B", "x", 5.0), product("A", "y", 5.0), product("C", "z", 1.0)];
        let out = ListQuery::default().with_sort(SortKey::Price).apply(data);
        assert_eq!(keys(&out), vec!["C", "B", "A"]);
    }

    #[test]
    fn test_bounds() {
        let q = ListQuery::page(2, 3);
        assert_eq!(q.bounds(10), (3, 6));
        assert_eq!(q.bounds(4), (3, 4));
        assert_eq!(q.bounds(3), (3, 3));
        assert_eq!(q.bounds(2), (0, 0));
    }

    #[test]
    fn test_zero_page_treated_as_first() {
        let data = vec![product("P1", "a", 1.0), product("P2", "b", 2.0)];
        let out = ListQuery::page(0, 0).apply(data);
        assert_eq!(keys(&out), vec!["P1"]);
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let data = vec![product("P1", "a", 1.0)];
        let out = ListQuery::page(usize::MAX, usize::MAX).apply(data);
        assert!(out.is_empty());
    }
}

//! File-backed product store
//!
//! Every operation follows load → transform → (save) → return against the
//! data file. Nothing is cached between calls; the file is the store.
//!
//! One `ProductStore` must be shared (e.g. via `Arc`) by everything that
//! touches a given data file in this process: its lock is held for the whole
//! load-mutate-save sequence, so concurrent requests cannot lose updates or
//! observe a half-applied change. Other processes are not coordinated with.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use super::errors::{StoreError, StoreResult};
use super::query::ListQuery;
use crate::storage::{self, Product};

/// CRUD access to the products in one CSV data file.
#[derive(Debug)]
pub struct ProductStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl ProductStore {
    /// Creates a store over the data file at `path`.
    ///
    /// The file is not touched until the first operation.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Returns the path of the backing data file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the data file with a header row and no products.
    ///
    /// Existing content is replaced.
    pub fn initialize(&self) -> StoreResult<()> {
        let _guard = self.exclusive();
        self.save(&[])?;
        info!(path = %self.path.display(), "initialized empty catalog");
        Ok(())
    }

    /// Appends `product` to the dataset and returns it unchanged.
    pub fn create(&self, product: Product) -> StoreResult<Product> {
        let _guard = self.exclusive();
        let mut products = self.load()?;

        products.push(product.clone());
        self.save(&products)?;

        info!(key = %product.key, total = products.len(), "created product");
        Ok(product)
    }

    /// Returns the first product whose key equals `key`.
    pub fn get(&self, key: &str) -> StoreResult<Product> {
        let _guard = self.exclusive();
        self.load()?
            .into_iter()
            .find(|p| p.key == key)
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }

    /// Replaces the first product whose key equals `key`, keeping its
    /// position, and returns the replacement.
    ///
    /// The replacement's own key is stored as given, even when it differs
    /// from `key`.
    pub fn update(&self, key: &str, product: Product) -> StoreResult<Product> {
        let _guard = self.exclusive();
        let mut products = self.load()?;

        let slot = products
            .iter_mut()
            .find(|p| p.key == key)
            .ok_or_else(|| StoreError::NotFound(key.to_string()))?;

        if product.key != key {
            warn!(key, new_key = %product.key, "update changes product key");
        }
        *slot = product.clone();

        self.save(&products)?;
        info!(key, "updated product");
        Ok(product)
    }

    /// Removes every product whose key equals `key`.
    ///
    /// The data file is only rewritten when something was removed.
    pub fn delete(&self, key: &str) -> StoreResult<()> {
        let _guard = self.exclusive();
        let mut products = self.load()?;

        let before = products.len();
        products.retain(|p| p.key != key);
        if products.len() == before {
            return Err(StoreError::NotFound(key.to_string()));
        }

        self.save(&products)?;
        info!(key, removed = before - products.len(), "deleted product");
        Ok(())
    }

    /// Returns one page of the filtered, sorted dataset.
    pub fn list(&self, query: &ListQuery) -> StoreResult<Vec<Product>> {
        let _guard = self.exclusive();
        let products = self.load()?;
        let total = products.len();

        let page = query.apply(products);
        debug!(
            page = query.page,
            page_size = query.page_size,
            filter = %query.filter,
            sort = ?query.sort,
            total,
            returned = page.len(),
            "listed products"
        );
        Ok(page)
    }

    fn exclusive(&self) -> MutexGuard<'_, ()> {
        // Poison is ignored: the data file is either the old or the fully
        // replaced version.
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn load(&self) -> StoreResult<Vec<Product>> {
        Ok(storage::read_products(&self.path)?)
    }

    fn save(&self, products: &[Product]) -> StoreResult<()> {
        Ok(storage::write_products(&self.path, products)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SortKey;
    use tempfile::TempDir;

    fn product(key: &str, name: &str, price: f64) -> Product {
        Product {
            key: key.to_string(),
            subcategory_key: "1".to_string(),
            sku: format!("SKU-{}", key),
            name: name.to_string(),
            model_name: name.to_string(),
            description: format!("{} description", name),
            color: "Black".to_string(),
            size: "M".to_string(),
            style: "U".to_string(),
            cost: price / 2.0,
            price,
        }
    }

    fn seeded(dir: &TempDir) -> ProductStore {
        let store = ProductStore::open(dir.path().join("products.csv"));
        store.initialize().unwrap();
        store.create(product("P1", "Bike", 30.0)).unwrap();
        store.create(product("P2", "Lock", 10.0)).unwrap();
        store
    }

    #[test]
    fn test_operations_on_missing_file_fail_to_load() {
        let dir = TempDir::new().unwrap();
        let store = ProductStore::open(dir.path().join("absent.csv"));

        assert!(matches!(store.get("P1"), Err(StoreError::Decode(_))));
        assert!(matches!(
            store.create(product("P1", "Bike", 1.0)),
            Err(StoreError::Decode(_))
        ));
        assert!(!store.path().exists());
    }

    #[test]
    fn test_get_returns_first_match() {
        let dir = TempDir::new().unwrap();
        let store = seeded(&dir);
        store.create(product("P1", "Duplicate", 99.0)).unwrap();

        assert_eq!(store.get("P1").unwrap().name, "Bike");
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = seeded(&dir);

        let err = store.get("P9").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "product not found: P9");
    }

    #[test]
    fn test_update_keeps_position() {
        let dir = TempDir::new().unwrap();
        let store = seeded(&dir);

        store.update("P1", product("P1", "Bike v2", 35.0)).unwrap();

        let all = storage::read_products(store.path()).unwrap();
        assert_eq!(all[0].name, "Bike v2");
        assert_eq!(all[1].key, "P2");
    }

    #[test]
    fn test_update_may_change_key() {
        let dir = TempDir::new().unwrap();
        let store = seeded(&dir);

        store.update("P1", product("P7", "Renamed", 30.0)).unwrap();

        assert!(store.get("P1").unwrap_err().is_not_found());
        let all = storage::read_products(store.path()).unwrap();
        assert_eq!(all[0].key, "P7");
    }

    #[test]
    fn test_update_missing_does_not_write() {
        let dir = TempDir::new().unwrap();
        let store = seeded(&dir);
        let before = std::fs::read(store.path()).unwrap();

        let err = store.update("P9", product("P9", "Ghost", 1.0)).unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(std::fs::read(store.path()).unwrap(), before);
    }

    #[test]
    fn test_delete_removes_all_matches() {
        let dir = TempDir::new().unwrap();
        let store = seeded(&dir);
        store.create(product("P1", "Duplicate", 99.0)).unwrap();

        store.delete("P1").unwrap();

        let all = store.list(&ListQuery::default()).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].key, "P2");
    }

    #[test]
    fn test_list_sorted_by_price() {
        let dir = TempDir::new().unwrap();
        let store = seeded(&dir);

        let page = store
            .list(&ListQuery::page(1, 10).with_sort(SortKey::Price))
            .unwrap();
        let keys: Vec<_> = page.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["P2", "P1"]);
    }
}

//! Product HTTP Routes
//!
//! CRUD endpoints over the catalog store. Store calls do blocking file I/O
//! and run on the blocking pool.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use super::errors::{ApiError, ApiResult};
use crate::catalog::{
    ListQuery, ProductStore, SortKey, StoreResult, DEFAULT_PAGE, DEFAULT_PAGE_SIZE,
};
use crate::schema::ProductValidator;
use crate::storage::Product;

// ==================
// Shared State
// ==================

/// Product state shared across handlers
pub struct ProductsState {
    pub store: Arc<ProductStore>,
    pub validator: ProductValidator,
}

impl ProductsState {
    pub fn new(store: Arc<ProductStore>) -> Self {
        Self {
            store,
            validator: ProductValidator::new(),
        }
    }
}

// ==================
// Request Types
// ==================

/// Query string of the list endpoint.
///
/// Kept as raw strings so a malformed number falls back to its default
/// instead of rejecting the request.
#[derive(Debug, Default)]
pub struct ListParams {
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub filter: Option<String>,
    pub sort: Option<String>,
}

impl ListParams {
    /// Collects the known parameters from decoded query pairs.
    ///
    /// When a name repeats, the first value is used. Unknown names are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (name, value) in pairs {
            let slot = match name.as_str() {
                "page" => &mut params.page,
                "pageSize" => &mut params.page_size,
                "filter" => &mut params.filter,
                "sort" => &mut params.sort,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }

    /// Convert to a store query, applying defaults
    pub fn to_query(&self) -> ListQuery {
        ListQuery::page(
            positive_or(self.page.as_deref(), DEFAULT_PAGE),
            positive_or(self.page_size.as_deref(), DEFAULT_PAGE_SIZE),
        )
        .with_filter(self.filter.clone().unwrap_or_default())
        .with_sort(SortKey::parse(self.sort.as_deref().unwrap_or_default()))
    }
}

fn positive_or(value: Option<&str>, default: usize) -> usize {
    value
        .and_then(|v| v.parse::<usize>().ok())
        .filter(|n| *n >= 1)
        .unwrap_or(default)
}

// ==================
// Product Routes
// ==================

/// Create product routes
pub fn product_routes(state: Arc<ProductsState>) -> Router {
    Router::new()
        .route(
            "/products",
            get(list_products_handler).post(create_product_handler),
        )
        .route(
            "/products/",
            get(list_products_handler).post(create_product_handler),
        )
        .route(
            "/products/:id",
            get(get_product_handler)
                .put(update_product_handler)
                .delete(delete_product_handler),
        )
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

/// Runs a store operation on the blocking pool.
async fn with_store<T, F>(state: &ProductsState, op: F) -> ApiResult<T>
where
    T: Send + 'static,
    F: FnOnce(&ProductStore) -> StoreResult<T> + Send + 'static,
{
    let store = Arc::clone(&state.store);
    tokio::task::spawn_blocking(move || op(&store))
        .await
        .map_err(|e| ApiError::Internal(format!("store task failed: {}", e)))?
        .map_err(ApiError::from)
}

fn accept_body(
    state: &ProductsState,
    payload: Result<Json<Product>, JsonRejection>,
) -> ApiResult<Product> {
    let Json(product) = payload.map_err(|e| ApiError::InvalidInput(e.body_text()))?;
    state.validator.validate(&product)?;
    Ok(product)
}

// ==================
// Handlers
// ==================

async fn list_products_handler(
    State(state): State<Arc<ProductsState>>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> ApiResult<Json<Vec<Product>>> {
    let Query(pairs) = pairs.map_err(|e| ApiError::InvalidInput(e.body_text()))?;
    let query = ListParams::from_pairs(pairs).to_query();
    let products = with_store(&state, move |store| store.list(&query)).await?;
    Ok(Json(products))
}

async fn create_product_handler(
    State(state): State<Arc<ProductsState>>,
    payload: Result<Json<Product>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Product>)> {
    let product = accept_body(&state, payload)?;
    let created = with_store(&state, move |store| store.create(product)).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn get_product_handler(
    State(state): State<Arc<ProductsState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Product>> {
    let product = with_store(&state, move |store| store.get(&id)).await?;
    Ok(Json(product))
}

async fn update_product_handler(
    State(state): State<Arc<ProductsState>>,
    Path(id): Path<String>,
    payload: Result<Json<Product>, JsonRejection>,
) -> ApiResult<Json<Product>> {
    let product = accept_body(&state, payload)?;
    let updated = with_store(&state, move |store| store.update(&id, product)).await?;
    Ok(Json(updated))
}

async fn delete_product_handler(
    State(state): State<Arc<ProductsState>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    with_store(&state, move |store| store.delete(&id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<&str>, page_size: Option<&str>) -> ListParams {
        ListParams {
            page: page.map(String::from),
            page_size: page_size.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_list_params_defaults() {
        let query = ListParams::default().to_query();
        assert_eq!(query, ListQuery::default());
    }

    #[test]
    fn test_list_params_invalid_numbers_fall_back() {
        assert_eq!(params(Some("abc"), Some("-3")).to_query(), ListQuery::page(1, 10));
        assert_eq!(params(Some("0"), Some("0")).to_query(), ListQuery::page(1, 10));
    }

    #[test]
    fn test_list_params_parsed() {
        let mut p = params(Some("3"), Some("25"));
        p.filter = Some("Red".to_string());
        p.sort = Some("price".to_string());

        let query = p.to_query();
        assert_eq!(query.page, 3);
        assert_eq!(query.page_size, 25);
        assert_eq!(query.filter, "Red");
        assert_eq!(query.sort, SortKey::Price);
    }

    #[test]
    fn test_list_params_first_value_wins() {
        let pairs = vec![
            ("page".to_string(), "2".to_string()),
            ("page".to_string(), "5".to_string()),
            ("pageSize".to_string(), "1".to_string()),
            ("limit".to_string(), "9".to_string()),
        ];

        let query = ListParams::from_pairs(pairs).to_query();
        assert_eq!(query, ListQuery::page(2, 1));
    }
}

//! # catalogdb HTTP Server Module
//!
//! Axum server exposing the catalog store as a JSON API.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /products` - List with `page`, `pageSize`, `filter`, `sort`
//! - `POST /products` - Create
//! - `GET /products/:id` - Get by key
//! - `PUT /products/:id` - Replace by key
//! - `DELETE /products/:id` - Delete by key

pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod product_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use product_routes::{ListParams, ProductsState};
pub use server::HttpServer;

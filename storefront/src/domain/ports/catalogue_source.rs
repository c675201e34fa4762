//! Driving port for the read-only catalogue endpoints.

use async_trait::async_trait;

use crate::domain::{ApiError, Product, ProductId, SlideItem};

/// Port for reading slides and products from the backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogueSource: Send + Sync {
    /// `GET /api/main-slides`.
    async fn main_slides(&self) -> Result<Vec<SlideItem>, ApiError>;

    /// `GET /api/products`.
    async fn products(&self) -> Result<Vec<Product>, ApiError>;

    /// `GET /api/products/{id}`.
    async fn product(&self, id: ProductId) -> Result<Product, ApiError>;
}

//! Page-level read flows: the home page feed, slides and product detail.
//!
//! Services depend only on [`CatalogueSource`] and the backend origin used to
//! rewrite asset paths, so they run against a mock in tests.

use std::sync::Arc;

use tracing::{debug, warn};

use super::ApiError;
use super::catalogue::ProductId;
use super::ports::CatalogueSource;
use super::view_model::{HomeFeed, ProductDetailView, SlideView};

/// Builds the home page sections.
#[derive(Clone)]
pub struct HomePageService {
    source: Arc<dyn CatalogueSource>,
    base_origin: String,
}

impl HomePageService {
    /// Create the service for catalogue `source`, resolving assets against
    /// `base_origin`.
    pub fn new(source: Arc<dyn CatalogueSource>, base_origin: impl Into<String>) -> Self {
        Self {
            source,
            base_origin: base_origin.into(),
        }
    }

    /// Popular overseas and domestic products.
    pub async fn product_feed(&self) -> Result<HomeFeed, ApiError> {
        let products = self.source.products().await.inspect_err(|error| {
            warn!(%error, "failed to load products for the home feed");
        })?;
        debug!(count = products.len(), "building home feed");
        Ok(HomeFeed::from_products(products, &self.base_origin))
    }

    /// Promotional slides with absolute image URLs.
    pub async fn main_slides(&self) -> Result<Vec<SlideView>, ApiError> {
        let slides = self.source.main_slides().await.inspect_err(|error| {
            warn!(%error, "failed to load main slides");
        })?;
        Ok(slides
            .into_iter()
            .map(|slide| SlideView::from_slide(slide, &self.base_origin))
            .collect())
    }
}

/// Builds the product detail page.
#[derive(Clone)]
pub struct ProductDetailService {
    source: Arc<dyn CatalogueSource>,
    base_origin: String,
}

impl ProductDetailService {
    /// Create the service for catalogue `source`, resolving assets against
    /// `base_origin`.
    pub fn new(source: Arc<dyn CatalogueSource>, base_origin: impl Into<String>) -> Self {
        Self {
            source,
            base_origin: base_origin.into(),
        }
    }

    /// Detail view for product `id`.
    pub async fn detail(&self, id: ProductId) -> Result<ProductDetailView, ApiError> {
        let product = self.source.product(id).await.inspect_err(|error| {
            warn!(product_id = id, %error, "failed to load product detail");
        })?;
        Ok(ProductDetailView::from_product(product, &self.base_origin))
    }
}

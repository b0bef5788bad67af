//! Cache-first product resolution.

use crate::error::CarouselError;
use crate::model::ProductList;
use crate::storage::{CarouselStorage, KeyValueStore};
use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use log::{debug, error, info, warn};

/// Source of the raw product-list body.
pub trait ProductFeed {
    fn fetch(&self) -> LocalBoxFuture<'_, Result<String, CarouselError>>;
}

/// `GET` against the configured product-list URL.
#[derive(Debug, Clone)]
pub struct HttpFeed {
    url: String,
}

impl HttpFeed {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl ProductFeed for HttpFeed {
    fn fetch(&self) -> LocalBoxFuture<'_, Result<String, CarouselError>> {
        async move {
            let response = Request::get(&self.url)
                .send()
                .await
                .map_err(|e| CarouselError::Network(e.to_string()))?;
            if !response.ok() {
                return Err(CarouselError::Status(response.status()));
            }
            response
                .text()
                .await
                .map_err(|e| CarouselError::Network(e.to_string()))
        }
        .boxed_local()
    }
}

async fn fetch_products<F: ProductFeed>(feed: &F) -> Result<ProductList, CarouselError> {
    let body = feed.fetch().await?;
    Ok(serde_json::from_str(&body)?)
}

/// Return the cached product list if there is one, otherwise fetch, cache and
/// return it. A failed fetch yields an empty list and leaves the cache alone.
pub async fn resolve_products<S, F>(storage: &CarouselStorage<S>, feed: &F) -> ProductList
where
    S: KeyValueStore,
    F: ProductFeed,
{
    if let Some(products) = storage.read_products() {
        debug!("Using {} cached products", products.len());
        return products;
    }

    match fetch_products(feed).await {
        Ok(products) => {
            info!("Fetched {} products", products.len());
            if let Err(e) = storage.write_products(&products) {
                warn!("Could not cache products: {}", e);
            }
            products
        }
        Err(e) => {
            error!("Error fetching products: {}", e);
            ProductList::new()
        }
    }
}

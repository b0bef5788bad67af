//! Per-page widget controller: applicability check, product resolution,
//! stylesheet injection and mounting the carousel after the anchor.

use crate::components::{Carousel, CarouselProps};
use crate::config::{CarouselConfig, CONTAINER_CLASS};
use crate::error::CarouselError;
use crate::hooks::FavoriteChange;
use crate::source::{resolve_products, ProductFeed};
use crate::storage::{CarouselStorage, KeyValueStore};
use crate::style::inject_stylesheet;
use log::{debug, warn};
use std::rc::Rc;
use web_sys::{Document, Element};
use yew::{AttrValue, Callback};

pub fn document() -> Result<Document, CarouselError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| CarouselError::Dom("no document available".to_string()))
}

fn dom_err(e: wasm_bindgen::JsValue) -> CarouselError {
    CarouselError::Dom(format!("{:?}", e))
}

/// A carousel bound to one page. Only constructed when the page has a
/// product-detail anchor.
pub struct CarouselWidget<S: KeyValueStore, F: ProductFeed> {
    config: CarouselConfig,
    document: Document,
    anchor: Element,
    storage: Rc<CarouselStorage<S>>,
    feed: F,
}

impl<S, F> CarouselWidget<S, F>
where
    S: KeyValueStore + 'static,
    F: ProductFeed,
{
    /// Find the anchor element. `Ok(None)` means the page is not a product
    /// page and the widget must stay inert.
    pub fn locate(
        config: CarouselConfig,
        storage: CarouselStorage<S>,
        feed: F,
    ) -> Result<Option<Self>, CarouselError> {
        let document = document()?;
        let anchor = document
            .query_selector(&config.anchor_selector)
            .map_err(dom_err)?;

        Ok(anchor.map(|anchor| Self {
            config,
            document,
            anchor,
            storage: Rc::new(storage),
            feed,
        }))
    }

    /// Resolve products, then render. Returns the inserted host element.
    pub async fn run(self) -> Result<Element, CarouselError> {
        let products = resolve_products(&*self.storage, &self.feed).await;
        let favorites = self.storage.read_favorites();
        debug!(
            "Rendering {} products with {} favorites",
            products.len(),
            favorites.len()
        );

        inject_stylesheet(&self.document)?;

        let host = self.document.create_element("div").map_err(dom_err)?;
        host.set_class_name(CONTAINER_CLASS);
        self.anchor.after_with_node_1(&host).map_err(dom_err)?;

        let storage = self.storage.clone();
        let on_favorites_change = Callback::from(move |change: FavoriteChange| {
            if let Err(e) = storage.save_favorite(&change.id, change.active) {
                warn!("Could not save favorites: {}", e);
            }
        });

        let props = CarouselProps {
            products: Rc::new(products),
            favorites,
            title: AttrValue::from(self.config.title.clone()),
            on_favorites_change,
        };
        yew::Renderer::<Carousel>::with_root_and_props(host.clone(), props).render();

        Ok(host)
    }
}

/// Locate and run in one step. `Ok(None)` when the page has no anchor, in
/// which case neither the feed nor the document is touched further.
pub async fn mount<S, F>(
    config: CarouselConfig,
    storage: CarouselStorage<S>,
    feed: F,
) -> Result<Option<Element>, CarouselError>
where
    S: KeyValueStore + 'static,
    F: ProductFeed,
{
    match CarouselWidget::locate(config, storage, feed)? {
        Some(widget) => widget.run().await.map(Some),
        None => Ok(None),
    }
}

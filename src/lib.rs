//! Related-products carousel widget, compiled to WebAssembly.
//!
//! On a product page (one containing the configured anchor element) the widget
//! resolves a product list cache-first, then mounts a scrollable carousel with
//! locally persisted favorites right after the anchor.

use log::{debug, error, info, warn};
use std::sync::Once;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod model;
pub mod source;
pub mod storage;
pub mod style;
pub mod widget;

pub use config::CarouselConfig;
pub use error::CarouselError;
pub use model::{FavoriteSet, Product, ProductId, ProductList};

static LOGGER: Once = Once::new();

// The console belongs to the host page: keep debug output to dev builds.
#[cfg(debug_assertions)]
const LOG_LEVEL: log::Level = log::Level::Debug;
#[cfg(not(debug_assertions))]
const LOG_LEVEL: log::Level = log::Level::Info;

fn init_logging() {
    LOGGER.call_once(|| wasm_logger::init(wasm_logger::Config::new(LOG_LEVEL)));
}

/// Read the options object handed in from JavaScript. `undefined`/`null` and
/// invalid objects give the default configuration.
pub fn parse_options(options: JsValue) -> CarouselConfig {
    if options.is_undefined() || options.is_null() {
        return CarouselConfig::default();
    }
    serde_wasm_bindgen::from_value(options).unwrap_or_else(|e| {
        warn!("Invalid carousel options, using defaults: {}", e);
        CarouselConfig::default()
    })
}

async fn launch(config: CarouselConfig) {
    let storage = storage::CarouselStorage::new(storage::LocalStorage, &config);
    let feed = source::HttpFeed::new(config.product_list_url.clone());

    match widget::mount(config, storage, feed).await {
        Ok(Some(_)) => info!("Product carousel mounted"),
        Ok(None) => debug!("No product detail section, carousel inactive"),
        Err(e) => error!("Product carousel failed to start: {}", e),
    }
}

/// JavaScript entry point.
///
/// # Arguments
/// * `options` - optional object with any of `productListUrl`, `productsKey`,
///   `favoritesKey`, `title`, `anchorSelector`
///
/// Starts immediately if the document is parsed, otherwise on
/// `DOMContentLoaded`. Never throws into the host page.
#[wasm_bindgen(js_name = startProductCarousel)]
pub fn start(options: JsValue) {
    console_error_panic_hook::set_once();
    init_logging();

    let config = parse_options(options);
    let document = match widget::document() {
        Ok(d) => d,
        Err(e) => {
            error!("{}", e);
            return;
        }
    };

    let run = move || wasm_bindgen_futures::spawn_local(launch(config));

    if document.ready_state() == "loading" {
        let cb = Closure::once(run);
        if let Err(e) =
            document.add_event_listener_with_callback("DOMContentLoaded", cb.as_ref().unchecked_ref())
        {
            error!("Could not wait for DOMContentLoaded: {:?}", e);
        }
        cb.forget();
    } else {
        run();
    }
}

//! Widget configuration: fixed defaults plus the runtime-overridable
//! [`CarouselConfig`] passed in from the embedding page.

use serde::Deserialize;

// Remote feed
pub const PRODUCT_LIST_URL: &str = "https://gist.githubusercontent.com/sevindi/5765c5812bbc8238a38b3cf52f233651/raw/56261d81af8561bf0a7cf692fe572f9e1e91f372/products.json";

// localStorage keys
pub const PRODUCTS_KEY: &str = "lcwaikiki_product_carousel";
pub const FAVORITES_KEY: &str = "lcwaikiki_favorites";

// Page integration
pub const ANCHOR_SELECTOR: &str = ".product-detail";
pub const CAROUSEL_TITLE: &str = "You Might Also Like";
pub const CONTAINER_CLASS: &str = "product-carousel-container";
pub const STYLE_CLASS: &str = "carousel-style";

// UI behavior
pub const SCROLL_FRACTION: f64 = 0.8;

/// Runtime configuration, deserialized from the optional options object given
/// to `startProductCarousel`. Missing fields fall back to the constants above.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarouselConfig {
    pub product_list_url: String,
    pub products_key: String,
    pub favorites_key: String,
    pub title: String,
    pub anchor_selector: String,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            product_list_url: PRODUCT_LIST_URL.to_string(),
            products_key: PRODUCTS_KEY.to_string(),
            favorites_key: FAVORITES_KEY.to_string(),
            title: CAROUSEL_TITLE.to_string(),
            anchor_selector: ANCHOR_SELECTOR.to_string(),
        }
    }
}

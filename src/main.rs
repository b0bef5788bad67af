//! `trunk serve` entry point: starts the carousel on the bundled demo page
//! with default configuration.

use wasm_bindgen::JsValue;

fn main() {
    product_carousel::start(JsValue::UNDEFINED);
}

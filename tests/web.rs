//! Browser tests: `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use futures::future::{FutureExt, LocalBoxFuture};
use gloo_timers::future::TimeoutFuture;
use product_carousel::config::{CarouselConfig, CONTAINER_CLASS};
use product_carousel::source::ProductFeed;
use product_carousel::storage::{CarouselStorage, KeyValueStore, LocalStorage};
use product_carousel::widget::{document, mount};
use product_carousel::{parse_options, CarouselError};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Clone)]
struct StubFeed {
    body: String,
    calls: Rc<Cell<usize>>,
}

impl StubFeed {
    fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            calls: Rc::new(Cell::new(0)),
        }
    }
}

impl ProductFeed for StubFeed {
    fn fetch(&self) -> LocalBoxFuture<'_, Result<String, CarouselError>> {
        self.calls.set(self.calls.get() + 1);
        let body = self.body.clone();
        async move { Ok(body) }.boxed_local()
    }
}

const TWO_PRODUCTS: &str = r#"[
    {"id":"1","name":"Shirt","price":"$10","url":"/p/1","img":"/i/1.jpg"},
    {"id":"3","name":"Jeans","price":"$30","url":"/p/3","img":"/i/3.jpg"}
]"#;

/// Fresh storage keys and a fresh anchor per test so tests can share a page.
fn setup(name: &str, with_anchor: bool) -> (CarouselConfig, Option<Element>) {
    let doc = document().unwrap();
    let anchor_class = format!("product-detail-{}", name);
    let config = CarouselConfig {
        products_key: format!("test_products_{}", name),
        favorites_key: format!("test_favorites_{}", name),
        anchor_selector: format!(".{}", anchor_class),
        ..CarouselConfig::default()
    };

    let anchor = with_anchor.then(|| {
        let el = doc.create_element("section").unwrap();
        el.set_class_name(&anchor_class);
        doc.body().unwrap().append_child(&el).unwrap();
        el
    });
    (config, anchor)
}

fn storage(config: &CarouselConfig) -> CarouselStorage<LocalStorage> {
    CarouselStorage::new(LocalStorage, config)
}

async fn settle() {
    TimeoutFuture::new(20).await;
}

fn favorite_button(host: &Element, id: &str) -> HtmlElement {
    host.query_selector(&format!(".favorite-button[data-product-id=\"{}\"]", id))
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap()
}

#[wasm_bindgen_test]
async fn no_anchor_means_no_fetch_and_no_insertion() {
    let (config, _) = setup("inert", false);
    let feed = StubFeed::new(TWO_PRODUCTS);
    let before = document()
        .unwrap()
        .query_selector_all(&format!(".{}", CONTAINER_CLASS))
        .unwrap()
        .length();

    let mounted = mount(config.clone(), storage(&config), feed.clone()).await.unwrap();

    assert!(mounted.is_none());
    assert_eq!(feed.calls.get(), 0);
    let after = document()
        .unwrap()
        .query_selector_all(&format!(".{}", CONTAINER_CLASS))
        .unwrap()
        .length();
    assert_eq!(before, after);
}

#[wasm_bindgen_test]
async fn carousel_is_next_sibling_with_one_card_per_product_in_order() {
    let (config, anchor) = setup("order", true);
    let anchor = anchor.unwrap();

    let host = mount(config.clone(), storage(&config), StubFeed::new(TWO_PRODUCTS))
        .await
        .unwrap()
        .unwrap();
    settle().await;

    let sibling = anchor.next_element_sibling().unwrap();
    assert_eq!(sibling, host);
    assert_eq!(host.class_name(), CONTAINER_CLASS);

    let names = host.query_selector_all(".product-name").unwrap();
    assert_eq!(names.length(), 2);
    assert_eq!(names.item(0).unwrap().text_content().unwrap(), "Shirt");
    assert_eq!(names.item(1).unwrap().text_content().unwrap(), "Jeans");
    assert_eq!(host.query_selector_all(".carousel-item").unwrap().length(), 2);
    assert!(host.query_selector(".prev-arrow").unwrap().is_some());
    assert!(host.query_selector(".next-arrow").unwrap().is_some());

    let link = host.query_selector(".product-image-container a").unwrap().unwrap();
    assert_eq!(link.get_attribute("target").as_deref(), Some("_blank"));

    let styles = document()
        .unwrap()
        .query_selector_all("style.carousel-style")
        .unwrap();
    assert_eq!(styles.length(), 1);
}

#[wasm_bindgen_test]
async fn favorites_render_and_toggle_persist() {
    let (config, _) = setup("favorites", true);
    let storage_handle = storage(&config);
    storage_handle
        .store()
        .set(&config.favorites_key, r#"["1","2"]"#)
        .unwrap();

    let host = mount(config.clone(), storage(&config), StubFeed::new(TWO_PRODUCTS))
        .await
        .unwrap()
        .unwrap();
    settle().await;

    let shirt = favorite_button(&host, "1");
    let jeans = favorite_button(&host, "3");
    assert!(shirt.class_list().contains("active"));
    assert!(!jeans.class_list().contains("active"));

    jeans.click();
    settle().await;

    assert!(favorite_button(&host, "3").class_list().contains("active"));
    assert_eq!(
        storage_handle.store().get(&config.favorites_key).as_deref(),
        Some(r#"["1","2","3"]"#)
    );

    favorite_button(&host, "3").click();
    settle().await;

    assert!(!favorite_button(&host, "3").class_list().contains("active"));
    assert_eq!(
        storage_handle.store().get(&config.favorites_key).as_deref(),
        Some(r#"["1","2"]"#)
    );
}

#[wasm_bindgen_test]
async fn toggle_keeps_favorites_saved_by_another_page() {
    let (config, _) = setup("shared_favorites", true);
    let storage_handle = storage(&config);
    storage_handle
        .store()
        .set(&config.favorites_key, r#"["1","2"]"#)
        .unwrap();

    let host = mount(config.clone(), storage(&config), StubFeed::new(TWO_PRODUCTS))
        .await
        .unwrap()
        .unwrap();
    settle().await;

    // a second tab favorites "5" while this carousel is open
    storage_handle
        .store()
        .set(&config.favorites_key, r#"["1","2","5"]"#)
        .unwrap();

    favorite_button(&host, "3").click();
    settle().await;
    assert_eq!(
        storage_handle.store().get(&config.favorites_key).as_deref(),
        Some(r#"["1","2","5","3"]"#)
    );

    favorite_button(&host, "1").click();
    settle().await;
    assert!(!favorite_button(&host, "1").class_list().contains("active"));
    assert_eq!(
        storage_handle.store().get(&config.favorites_key).as_deref(),
        Some(r#"["2","5","3"]"#)
    );
}

fn many_products(count: usize) -> String {
    let items: Vec<String> = (1..=count)
        .map(|i| {
            format!(
                r#"{{"id":"{i}","name":"Item {i}","price":"${i}","url":"/p/{i}","img":"/i/{i}.jpg"}}"#
            )
        })
        .collect();
    format!("[{}]", items.join(","))
}

fn click(host: &Element, selector: &str) {
    host.query_selector(selector)
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

#[wasm_bindgen_test]
async fn arrows_scroll_the_items_row() {
    let (config, _) = setup("arrows", true);

    let host = mount(config.clone(), storage(&config), StubFeed::new(many_products(24)))
        .await
        .unwrap()
        .unwrap();
    settle().await;

    let items = host.query_selector(".carousel-items").unwrap().unwrap();
    assert!(items.scroll_width() > items.client_width());
    assert_eq!(items.scroll_left(), 0);

    click(&host, ".next-arrow");
    TimeoutFuture::new(1000).await;
    let after_next = items.scroll_left();
    assert!(after_next > 0);

    click(&host, ".prev-arrow");
    TimeoutFuture::new(1000).await;
    assert!(items.scroll_left() < after_next);
}

#[wasm_bindgen_test]
async fn fetched_products_are_cached_for_the_next_page_view() {
    let (config, _) = setup("cache", true);
    let first = StubFeed::new(TWO_PRODUCTS);

    mount(config.clone(), storage(&config), first.clone()).await.unwrap();
    assert_eq!(first.calls.get(), 1);
    assert_eq!(storage(&config).read_products().map(|p| p.len()), Some(2));

    setup("cache", true);
    let second = StubFeed::new("[]");
    mount(config.clone(), storage(&config), second.clone()).await.unwrap();
    assert_eq!(second.calls.get(), 0);
}

#[wasm_bindgen_test]
fn options_object_overrides_defaults() {
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"title".into(), &"Recently viewed".into()).unwrap();

    let config = parse_options(options.into());
    assert_eq!(config.title, "Recently viewed");
    assert_eq!(config.favorites_key, CarouselConfig::default().favorites_key);

    assert_eq!(parse_options(JsValue::UNDEFINED), CarouselConfig::default());
    assert_eq!(parse_options(JsValue::from(42)), CarouselConfig::default());
}

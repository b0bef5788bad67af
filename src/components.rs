//! Yew components for the carousel.
//!
//! `Carousel` is the root: it owns favorite state (through `use_favorites`)
//! and the scroll container handle. Cards and arrows are stateless and render
//! purely from props.

use crate::config::SCROLL_FRACTION;
use crate::hooks::{use_favorites, FavoriteChange};
use crate::model::{FavoriteSet, Product, ProductId, ProductList};
use std::rc::Rc;
use web_sys::{Element, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

const HEART_PATH: &str = "M12 21.35l-1.45-1.32C5.4 15.36 2 12.28 2 8.5 2 5.42 4.42 3 7.5 3c1.74 0 3.41.81 4.5 2.09C13.09 3.81 14.76 3 16.5 3 19.58 3 22 5.42 22 8.5c0 3.78-3.4 6.86-8.55 11.54L12 21.35z";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Prev,
    Next,
}

impl ScrollDirection {
    /// Horizontal scroll delta for a container `visible_width` pixels wide.
    pub fn offset(self, visible_width: f64) -> f64 {
        let amount = visible_width * SCROLL_FRACTION;
        match self {
            ScrollDirection::Prev => -amount,
            ScrollDirection::Next => amount,
        }
    }

    fn class(self) -> &'static str {
        match self {
            ScrollDirection::Prev => "prev-arrow",
            ScrollDirection::Next => "next-arrow",
        }
    }

    fn icon_path(self) -> &'static str {
        match self {
            ScrollDirection::Prev => "M15.41 7.41L14 6l-6 6 6 6 1.41-1.41L10.83 12z",
            ScrollDirection::Next => "M10 6L8.59 7.41 13.17 12l-4.58 4.59L10 18l6-6z",
        }
    }
}

/// Smooth-scroll the items container one step. Does nothing before the
/// container is mounted.
fn scroll_items(items: &NodeRef, direction: ScrollDirection) {
    let Some(container) = items.cast::<Element>() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_left(direction.offset(container.client_width() as f64));
    options.set_behavior(ScrollBehavior::Smooth);
    container.scroll_by_with_scroll_to_options(&options);
}

#[derive(Properties, PartialEq)]
pub struct CarouselArrowProps {
    pub direction: ScrollDirection,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(CarouselArrow)]
pub fn carousel_arrow(props: &CarouselArrowProps) -> Html {
    html! {
        <button class={classes!("carousel-arrow", props.direction.class())}
            onclick={props.onclick.clone()}>
            <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24">
                <path d={props.direction.icon_path()} />
            </svg>
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    pub product: Product,
    pub favorite: bool,
    pub on_toggle: Callback<ProductId>,
}

/// One product: linked image, favorite toggle, name and price.
#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let product = &props.product;

    let onclick = {
        let id = product.id.clone();
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            // Keep the click away from the image link and any page-level handlers.
            e.prevent_default();
            e.stop_propagation();
            on_toggle.emit(id.clone());
        })
    };

    html! {
        <div class="carousel-item">
            <div class="product-card">
                <div class="product-image-container">
                    <a href={product.url.clone()} target="_blank">
                        <img src={product.img.clone()} alt={product.name.clone()} class="product-image" />
                    </a>
                    <button class={classes!("favorite-button", props.favorite.then_some("active"))}
                        data-product-id={product.id.to_string()}
                        {onclick}>
                        <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" class="heart-icon">
                            <path d={HEART_PATH} />
                        </svg>
                    </button>
                </div>
                <div class="product-info">
                    <h3 class="product-name">{ product.name.clone() }</h3>
                    <p class="product-price">{ product.price.clone() }</p>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub products: Rc<ProductList>,
    /// Favorites as read from storage before the first render.
    pub favorites: FavoriteSet,
    pub title: AttrValue,
    /// Receives every toggle as it happens.
    pub on_favorites_change: Callback<FavoriteChange>,
}

#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let favorites = use_favorites(props.favorites.clone(), props.on_favorites_change.clone());
    let items_ref = use_node_ref();

    let scroll = |direction: ScrollDirection| {
        let items_ref = items_ref.clone();
        Callback::from(move |_: MouseEvent| scroll_items(&items_ref, direction))
    };

    html! {
        <>
            <h2 class="carousel-title">{ props.title.clone() }</h2>
            <div class="carousel-wrapper">
                <CarouselArrow direction={ScrollDirection::Prev} onclick={scroll(ScrollDirection::Prev)} />
                <div class="carousel-items" ref={items_ref.clone()}>
                    { for props.products.iter().map(|product| html! {
                        <ProductCard
                            product={product.clone()}
                            favorite={favorites.set.contains(&product.id)}
                            on_toggle={favorites.toggle.clone()}
                        />
                    }) }
                </div>
                <CarouselArrow direction={ScrollDirection::Next} onclick={scroll(ScrollDirection::Next)} />
            </div>
        </>
    }
}

//! Carousel stylesheet and the responsive column table it is generated from.

use crate::config::STYLE_CLASS;
use crate::error::CarouselError;
use web_sys::Document;

/// One row of the responsive layout: at viewport widths up to `max_width`
/// (or any width, for the widest row) show `columns` items, each shrunk by
/// `gap_px` so the flex gap fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoint {
    pub max_width: Option<u32>,
    pub columns: u32,
    pub gap_px: u32,
}

/// Widest first.
pub const BREAKPOINTS: [Breakpoint; 5] = [
    Breakpoint { max_width: None, columns: 6, gap_px: 8 },
    Breakpoint { max_width: Some(1200), columns: 5, gap_px: 8 },
    Breakpoint { max_width: Some(992), columns: 4, gap_px: 8 },
    Breakpoint { max_width: Some(768), columns: 3, gap_px: 7 },
    Breakpoint { max_width: Some(576), columns: 2, gap_px: 5 },
];

/// Items per row for a viewport `width` in CSS pixels.
pub fn columns_for_viewport(width: u32) -> u32 {
    BREAKPOINTS
        .iter()
        .rev()
        .find(|bp| bp.max_width.map_or(true, |max| width <= max))
        .map_or(BREAKPOINTS[0].columns, |bp| bp.columns)
}

fn item_width_rule(bp: &Breakpoint) -> String {
    format!(
        ".carousel-item {{ width: calc({:.3}% - {}px); }}",
        100.0 / bp.columns as f64,
        bp.gap_px
    )
}

const BASE_CSS: &str = r#"
.product-carousel-container {
    margin: 30px auto;
    padding: 0 15px;
    font-family: 'Roboto', Arial, sans-serif;
    max-width: 1200px;
}
.carousel-title {
    font-size: 18px;
    font-weight: 600;
    margin-bottom: 20px;
    color: #333;
    padding-left: 10px;
}
.carousel-wrapper {
    position: relative;
    display: flex;
    align-items: center;
}
.carousel-items {
    display: flex;
    overflow-x: hidden;
    scroll-behavior: smooth;
    -webkit-overflow-scrolling: touch;
    gap: 10px;
    width: 100%;
    padding: 5px 0;
}
.carousel-item {
    flex: 0 0 auto;
    transition: transform 0.3s ease;
}
.product-card {
    overflow: hidden;
    transition: box-shadow 0.3s ease;
    background-color: #fff;
}
.product-card:hover {
    box-shadow: 0 4px 8px rgba(0, 0, 0, 0.1);
}
.product-image-container {
    position: relative;
    overflow: hidden;
    aspect-ratio: 3/4;
}
.product-image {
    width: 100%;
    height: 100%;
    object-fit: cover;
    transition: transform 0.3s ease;
}
.product-card:hover .product-image {
    transform: scale(1.05);
}
.favorite-button {
    position: absolute;
    top: 10px;
    right: 10px;
    background: white;
    border: none;
    border-radius: 50%;
    width: 30px;
    height: 30px;
    display: flex;
    align-items: center;
    justify-content: center;
    cursor: pointer;
    box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1);
    z-index: 1;
    padding: 0;
}
.heart-icon {
    width: 18px;
    height: 18px;
    fill: transparent;
    stroke: #999;
    stroke-width: 1.5;
    transition: all 0.2s ease;
}
.favorite-button.active .heart-icon {
    fill: #0047ba;
    stroke: #0047ba;
}
.product-info {
    padding: 10px 5px;
}
.product-name {
    font-size: 13px;
    font-weight: 400;
    margin: 0 0 5px;
    color: #333;
    overflow: hidden;
    text-overflow: ellipsis;
    display: -webkit-box;
    -webkit-line-clamp: 2;
    -webkit-box-orient: vertical;
    line-height: 1.3;
    height: 34px;
}
.product-price {
    font-size: 14px;
    font-weight: 700;
    color: #0047ba;
    margin: 0;
}
.carousel-arrow {
    position: absolute;
    top: 50%;
    transform: translateY(-50%);
    width: 36px;
    height: 36px;
    background: white;
    border: 1px solid #e0e0e0;
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
    cursor: pointer;
    z-index: 2;
    box-shadow: 0 2px 5px rgba(0, 0, 0, 0.1);
    transition: all 0.2s ease;
}
.carousel-arrow:hover {
    background: #f5f5f5;
}
.carousel-arrow svg {
    width: 20px;
    height: 20px;
    fill: #333;
}
.prev-arrow { left: -18px; }
.next-arrow { right: -18px; }
"#;

// Arrow sizing on small screens; item widths are generated from BREAKPOINTS.
fn arrow_rules(max_width: u32) -> &'static str {
    match max_width {
        768 => ".carousel-arrow { width: 32px; height: 32px; } .prev-arrow { left: -16px; } .next-arrow { right: -16px; }",
        576 => ".carousel-arrow { width: 28px; height: 28px; } .carousel-arrow svg { width: 16px; height: 16px; } .prev-arrow { left: -14px; } .next-arrow { right: -14px; }",
        _ => "",
    }
}

/// Full stylesheet text.
pub fn stylesheet() -> String {
    let mut css = String::from(BASE_CSS);
    for bp in &BREAKPOINTS {
        let rule = item_width_rule(bp);
        match bp.max_width {
            None => {
                css.push_str(&rule);
                css.push('\n');
            }
            Some(max) => {
                css.push_str(&format!(
                    "@media (max-width: {}px) {{ {} {} }}\n",
                    max,
                    rule,
                    arrow_rules(max)
                ));
            }
        }
    }
    css
}

/// Append the stylesheet to `<head>` unless a previous run already did.
/// Returns whether a new `<style>` element was added.
pub fn inject_stylesheet(document: &Document) -> Result<bool, CarouselError> {
    let selector = format!("style.{}", STYLE_CLASS);
    if document.query_selector(&selector).ok().flatten().is_some() {
        return Ok(false);
    }

    let head = document
        .head()
        .ok_or_else(|| CarouselError::Dom("document has no <head>".to_string()))?;
    let style = document
        .create_element("style")
        .map_err(|e| CarouselError::Dom(format!("{:?}", e)))?;
    style.set_class_name(STYLE_CLASS);
    style.set_text_content(Some(&stylesheet()));
    head.append_child(&style)
        .map_err(|e| CarouselError::Dom(format!("{:?}", e)))?;
    Ok(true)
}

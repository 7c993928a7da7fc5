use crate::constants::{ATTR_FLOAT_SPEED, ATTR_REPEL, FLOATING_SELECTOR};
use crate::core::{ElementOptions, FloatNode};
use crate::input;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn html_element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> Option<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

/// All HTML elements matching `selector`, in document order.
pub fn query_html_elements(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn set_style(el: &web::HtmlElement, name: &str, value: &str) {
    _ = el.style().set_property(name, value);
}

#[inline]
pub fn window_scroll_y() -> f32 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0) as f32
}

#[inline]
pub fn viewport_size(window: &web::Window) -> (f32, f32) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w as f32, h as f32)
}

#[inline]
pub fn document_scroll_height(document: &web::Document) -> f32 {
    document
        .document_element()
        .map(|el| el.scroll_height())
        .unwrap_or(0) as f32
}

pub fn set_canvas_size(canvas: &web::HtmlCanvasElement, width: f32, height: f32) {
    canvas.set_width(width.max(1.0) as u32);
    canvas.set_height(height.max(1.0) as u32);
}

/// `data-*` lookup on `<body>`, keyed by the attribute suffix.
pub fn body_data_lookup(document: &web::Document) -> impl Fn(&str) -> Option<String> {
    let body = document.body();
    move |key: &str| {
        body.as_ref()
            .and_then(|b| b.get_attribute(&format!("data-{key}")))
    }
}

/// A floating element as seen by the float field.
pub struct DomNode(pub web::HtmlElement);

impl FloatNode for DomNode {
    fn client_center(&self) -> Vec2 {
        input::element_client_center(&self.0)
    }

    fn apply_translation(&self, d: Vec2) {
        set_style(&self.0, "transform", &format!("translate({}px, {}px)", d.x, d.y));
    }
}

/// Every opted-in floating element together with its parsed options.
pub fn scan_floating_elements(document: &web::Document) -> Vec<(DomNode, ElementOptions)> {
    query_html_elements(document, FLOATING_SELECTOR)
        .into_iter()
        .map(|el| {
            let data = el.dataset();
            let options = ElementOptions::from_attrs(
                data.get(ATTR_FLOAT_SPEED).as_deref(),
                data.get(ATTR_REPEL).as_deref(),
            );
            (DomNode(el), options)
        })
        .collect()
}

/// Resolve after `ms` milliseconds.
pub async fn sleep_ms(ms: i32) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
    });
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

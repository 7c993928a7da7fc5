use crate::constants::{
    REVEAL_HIDDEN_TRANSFORM, REVEAL_ROOT_MARGIN, REVEAL_SELECTOR, REVEAL_THRESHOLD,
    REVEAL_TRANSITION,
};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Hide every section and fade it in the first time it scrolls into view.
pub fn wire_scroll_reveal(document: &web::Document) -> anyhow::Result<()> {
    let sections = dom::query_html_elements(document, REVEAL_SELECTOR);
    if sections.is_empty() {
        return Ok(());
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Some(el) = target.dyn_ref::<web::HtmlElement>() {
                    dom::set_style(el, "opacity", "1");
                    dom::set_style(el, "transform", "translateY(0)");
                }
                observer.unobserve(&target);
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    callback.forget();

    for section in &sections {
        dom::set_style(section, "opacity", "0");
        dom::set_style(section, "transform", REVEAL_HIDDEN_TRANSFORM);
        dom::set_style(section, "transition", REVEAL_TRANSITION);
        observer.observe(section);
    }
    log::info!(
        "[reveal] observing {} sections (each released after its first reveal)",
        sections.len()
    );
    Ok(())
}

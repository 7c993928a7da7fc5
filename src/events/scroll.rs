use crate::core::parallax;
use crate::dom;
use crate::input::PointerState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the vertical scroll offset and drive the hero parallax.
pub fn wire_scroll(pointer: Rc<RefCell<PointerState>>, hero: Option<web::HtmlElement>) {
    let closure = Closure::wrap(Box::new(move || {
        let scroll_y = dom::window_scroll_y();
        pointer.borrow_mut().scroll_y = scroll_y;
        if let Some(h) = &hero {
            let (offset, opacity) = parallax(scroll_y);
            dom::set_style(h, "transform", &format!("translateY({offset}px)"));
            dom::set_style(h, "opacity", &opacity.to_string());
        }
    }) as Box<dyn FnMut()>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

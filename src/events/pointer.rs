use crate::constants::CURSOR_GLOW_OPACITY;
use crate::dom;
use crate::input::{self, PointerState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep `pointer` current and move the cursor glow, if the page has one.
pub fn wire_pointer_tracking(
    document: &web::Document,
    pointer: Rc<RefCell<PointerState>>,
    glow: Option<web::HtmlElement>,
) {
    wire_pointermove(pointer.clone(), glow.clone());
    wire_pointerleave(document, pointer, glow);
}

fn wire_pointermove(pointer: Rc<RefCell<PointerState>>, glow: Option<web::HtmlElement>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_client(&ev);
        pointer.borrow_mut().move_to(pos);
        if let Some(g) = &glow {
            dom::set_style(g, "left", &format!("{}px", pos.x));
            dom::set_style(g, "top", &format!("{}px", pos.y));
            dom::set_style(g, "opacity", CURSOR_GLOW_OPACITY);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_pointerleave(
    document: &web::Document,
    pointer: Rc<RefCell<PointerState>>,
    glow: Option<web::HtmlElement>,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        pointer.borrow_mut().inside = false;
        if let Some(g) = &glow {
            dom::set_style(g, "opacity", "0");
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(root) = document.document_element() {
        _ = root.add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

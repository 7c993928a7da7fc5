use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Runs an action once a burst of triggers has been quiet for `delay_ms`.
/// Each trigger clears the pending timeout before arming a new one, so only
/// the last trigger of a burst fires.
pub struct Debouncer {
    pending: Rc<Cell<Option<i32>>>,
    callback: Closure<dyn FnMut()>,
    delay_ms: i32,
}

impl Debouncer {
    pub fn new(delay_ms: i32, mut action: impl FnMut() + 'static) -> Self {
        let pending = Rc::new(Cell::new(None));
        let pending_cb = pending.clone();
        let callback = Closure::wrap(Box::new(move || {
            pending_cb.set(None);
            action();
        }) as Box<dyn FnMut()>);
        Self {
            pending,
            callback,
            delay_ms,
        }
    }

    pub fn trigger(&self) {
        let Some(window) = web::window() else {
            return;
        };
        if let Some(handle) = self.pending.take() {
            window.clear_timeout_with_handle(handle);
        }
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            self.callback.as_ref().unchecked_ref(),
            self.delay_ms,
        ) {
            Ok(handle) => self.pending.set(Some(handle)),
            Err(e) => log::warn!("[resize] setTimeout failed: {:?}", e),
        }
    }
}

/// On every window resize run `immediate`, then hand the event to `settled`.
pub fn wire_debounced_resize(mut immediate: impl FnMut() + 'static, settled: Debouncer) {
    let closure = Closure::wrap(Box::new(move || {
        immediate();
        settled.trigger();
    }) as Box<dyn FnMut()>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

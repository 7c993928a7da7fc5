use crate::core::FloatField;
use crate::dom::DomNode;
use crate::input::PointerState;
use crate::render::{ParticleLayer, RainLayer};
use instant::Instant;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub field: Rc<RefCell<FloatField<DomNode>>>,
    pub pointer: Rc<RefCell<PointerState>>,
    pub particles: Option<Rc<RefCell<ParticleLayer>>>,
    pub rain: Option<Rc<RefCell<RainLayer>>>,
    pub rng: StdRng,
    pub started: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let t = self.started.elapsed().as_secs_f32();
        let pointer = *self.pointer.borrow();

        if let Some(p) = &self.particles {
            p.borrow_mut().draw();
        }
        if let Some(r) = &self.rain {
            r.borrow_mut().draw(&mut self.rng);
        }

        let pointer_doc = pointer.inside.then(|| pointer.document());
        self.field
            .borrow_mut()
            .step(t, pointer_doc, pointer.scroll_y);
    }
}

/// Drive `ctx` from `requestAnimationFrame`. The next frame is requested only
/// after the current one has finished.
pub fn start_loop(mut ctx: FrameContext) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        ctx.frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("[frame] requestAnimationFrame failed: {:?}", e);
        }
    }
}

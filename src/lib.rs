#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use crate::core::{EffectsConfig, FloatField};
use crate::dom::DomNode;
use crate::frame::FrameContext;
use crate::input::PointerState;
use crate::render::{ParticleLayer, RainLayer};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod render;
mod reveal;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("float-field-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        let closure = Closure::once(spawn_init);
        document
            .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())?;
        closure.forget();
    } else {
        spawn_init();
    }
    Ok(())
}

fn spawn_init() {
    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = EffectsConfig::from_attrs(dom::body_data_lookup(&document));
    log::info!("[config] {:?}", config.field);

    let pointer = Rc::new(RefCell::new(PointerState {
        scroll_y: dom::window_scroll_y(),
        ..Default::default()
    }));
    let glow = dom::html_element_by_id(&document, CURSOR_GLOW_ID);
    let hero = document
        .query_selector(HERO_CONTENT_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
    events::wire_pointer_tracking(&document, pointer.clone(), glow);
    events::wire_scroll(pointer.clone(), hero);

    let mut rng = StdRng::from_entropy();
    let particles = build_particle_layer(&document, &config, &mut rng);
    let rain = build_rain_layer(&document, &config);

    if let Err(e) = reveal::wire_scroll_reveal(&document) {
        log::warn!("[reveal] disabled: {:?}", e);
    }

    let field = Rc::new(RefCell::new(FloatField::<DomNode>::new(config.field)));
    let field_armed = Rc::new(Cell::new(false));
    wire_resize(
        &document,
        field.clone(),
        field_armed.clone(),
        particles.clone(),
        rain.clone(),
    );

    frame::start_loop(FrameContext {
        field: field.clone(),
        pointer,
        particles,
        rain,
        rng,
        started: Instant::now(),
    });

    dom::sleep_ms(FIELD_START_DELAY_MS).await?;
    refresh_field(&document, &field, &mut StdRng::from_entropy());
    field_armed.set(true);
    Ok(())
}

fn build_particle_layer(
    document: &web::Document,
    config: &EffectsConfig,
    rng: &mut StdRng,
) -> Option<Rc<RefCell<ParticleLayer>>> {
    let canvas = dom::canvas_by_id(document, PARTICLE_CANVAS_ID)?;
    match ParticleLayer::new(canvas, config.particles, rng) {
        Ok(layer) => Some(Rc::new(RefCell::new(layer))),
        Err(e) => {
            log::warn!("[particles] disabled: {:?}", e);
            None
        }
    }
}

fn build_rain_layer(
    document: &web::Document,
    config: &EffectsConfig,
) -> Option<Rc<RefCell<RainLayer>>> {
    let canvas = dom::canvas_by_id(document, MATRIX_CANVAS_ID)?;
    match RainLayer::new(canvas, config.rain) {
        Ok(layer) => Some(Rc::new(RefCell::new(layer))),
        Err(e) => {
            log::warn!("[rain] disabled: {:?}", e);
            None
        }
    }
}

/// Re-scan the page for floating elements and rebuild the field from them.
fn refresh_field(
    document: &web::Document,
    field: &Rc<RefCell<FloatField<DomNode>>>,
    rng: &mut StdRng,
) {
    let scroll_y = dom::window_scroll_y();
    let drift = field.borrow().max_anchor_drift(scroll_y);
    let nodes = dom::scan_floating_elements(document);
    let mut f = field.borrow_mut();
    f.rebuild(nodes, scroll_y, rng);
    log::info!(
        "[field] tracking {} elements (previous anchor drift {:.1}px)",
        f.len(),
        drift
    );
}

// Canvases follow the viewport right away; the float field is rebuilt once
// resizing settles, and only after its first build.
fn wire_resize(
    document: &web::Document,
    field: Rc<RefCell<FloatField<DomNode>>>,
    field_armed: Rc<Cell<bool>>,
    particles: Option<Rc<RefCell<ParticleLayer>>>,
    rain: Option<Rc<RefCell<RainLayer>>>,
) {
    let immediate = move || {
        if let Some(p) = &particles {
            p.borrow_mut().resize();
        }
        if let Some(r) = &rain {
            r.borrow_mut().resize();
        }
    };

    let doc = document.clone();
    let mut rng = StdRng::from_entropy();
    let settled = events::Debouncer::new(RESIZE_DEBOUNCE_MS, move || {
        if !field_armed.get() {
            return;
        }
        log::info!("[resize] refresh");
        refresh_field(&doc, &field, &mut rng);
    });

    events::wire_debounced_resize(immediate, settled);
}

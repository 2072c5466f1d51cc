#![cfg(target_arch = "wasm32")]
use crate::globe::GlobeState;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod events;
mod frame;
pub mod globe;
mod input;
mod render;

/// Canvas auto-mounted at module start, if present on the page.
const AUTO_MOUNT_ID: &str = "globe-canvas";

/// A mounted globe. Dropping it (or calling `stop`) tears the globe down.
#[wasm_bindgen]
pub struct GlobeHandle {
    frame_loop: frame::FrameLoop,
    listeners: dom::ListenerSet,
    cancelled: Rc<Cell<bool>>,
}

#[wasm_bindgen]
impl GlobeHandle {
    /// Cancel the frame loop and remove every listener. Idempotent.
    pub fn stop(&mut self) {
        if self.cancelled.get() && self.listeners.is_empty() {
            return;
        }
        self.frame_loop.cancel();
        self.listeners.remove_all();
        log::info!("[globe] stopped");
    }
}

impl Drop for GlobeHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Mount a globe on `canvas`, configured from its `data-*` attributes.
#[wasm_bindgen]
pub fn mount_globe(canvas: web::HtmlCanvasElement) -> Result<GlobeHandle, JsValue> {
    mount(canvas).map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("globe-web starting");

    let Some(el) = dom::window_document().and_then(|d| d.get_element_by_id(AUTO_MOUNT_ID)) else {
        return Ok(());
    };
    match el.dyn_into::<web::HtmlCanvasElement>() {
        Ok(canvas) => match mount(canvas) {
            // Auto-mounted globe lives for the lifetime of the page.
            Ok(handle) => std::mem::forget(handle),
            Err(e) => log::error!("[globe] mount error: {:?}", e),
        },
        Err(_) => log::error!("[globe] #{} is not a canvas", AUTO_MOUNT_ID),
    }
    Ok(())
}

fn mount(canvas: web::HtmlCanvasElement) -> anyhow::Result<GlobeHandle> {
    let config = dom::read_config(&canvas);
    dom::sync_canvas_backing_size(&canvas);
    let painter = render::CanvasPainter::new(&canvas)?;

    log::info!(
        "[globe] mount points={} texture={:?} size={}x{}",
        config.point_count,
        config.texture_url,
        canvas.width(),
        canvas.height()
    );

    let texture_url = config.texture_url.clone();
    let state = Rc::new(RefCell::new(GlobeState::new(config)));
    let texture = Rc::new(RefCell::new(None::<web::HtmlImageElement>));
    let cancelled = Rc::new(Cell::new(false));

    if let Some(url) = texture_url {
        spawn_texture_load(url, state.clone(), texture.clone(), cancelled.clone());
    }

    let mut listeners = dom::ListenerSet::default();
    wire_canvas_resize(&canvas, &mut listeners);
    events::wire_pointer_handlers(&canvas, &state, &mut listeners);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        state,
        canvas,
        painter,
        texture,
    }));
    let frame_loop = frame::start_loop(frame_ctx, cancelled.clone());

    Ok(GlobeHandle {
        frame_loop,
        listeners,
        cancelled,
    })
}

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, listeners: &mut dom::ListenerSet) {
    let Some(window) = web::window() else {
        return;
    };
    let target: &web::EventTarget = window.as_ref();
    let canvas_resize = canvas.clone();
    listeners.add(target, "resize", move |_ev| {
        dom::sync_canvas_backing_size(&canvas_resize);
    });
}

// A load that finishes after teardown is dropped; a failed one leaves dots only.
fn spawn_texture_load(
    url: String,
    state: Rc<RefCell<GlobeState>>,
    texture: Rc<RefCell<Option<web::HtmlImageElement>>>,
    cancelled: Rc<Cell<bool>>,
) {
    spawn_local(async move {
        let result = dom::load_texture(&url).await;
        if cancelled.get() {
            return;
        }
        match result {
            Ok(img) => {
                log::info!(
                    "[texture] loaded {} ({}x{})",
                    url,
                    img.natural_width(),
                    img.natural_height()
                );
                *texture.borrow_mut() = Some(img);
            }
            Err(e) => {
                log::warn!("[texture] {:?}; drawing dots only", e);
                state.borrow_mut().set_plane_enabled(false);
            }
        }
    });
}

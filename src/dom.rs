use crate::globe::{GlobeConfig, Viewport, CONFIG_ATTRIBUTES};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    let dpr = device_pixel_ratio();
    let rect = canvas.get_bounding_client_rect();
    let w_px = (rect.width() * dpr) as u32;
    let h_px = (rect.height() * dpr) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
}

/// Current backing-store size of `canvas` as a projection viewport.
pub fn canvas_viewport(canvas: &web::HtmlCanvasElement) -> Viewport {
    Viewport::new(
        canvas.width() as f32,
        canvas.height() as f32,
        device_pixel_ratio() as f32,
    )
}

/// Defaults overridden by any `data-*` attributes present on the canvas.
pub fn read_config(canvas: &web::HtmlCanvasElement) -> GlobeConfig {
    let mut cfg = GlobeConfig::default();
    for &name in CONFIG_ATTRIBUTES {
        if let Some(value) = canvas.get_attribute(name) {
            if let Err(e) = cfg.apply_attribute(name, &value) {
                log::warn!("[config] {}; keeping default", e);
            }
        }
    }
    cfg
}

/// Fetch and decode an image; resolves once it is ready to draw.
pub async fn load_texture(url: &str) -> anyhow::Result<web::HtmlImageElement> {
    let img = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    img.set_src(url);
    let decoded: js_sys::Promise = img.decode();
    JsFuture::from(decoded)
        .await
        .map_err(|e| anyhow::anyhow!("decode {}: {:?}", url, e))?;
    Ok(img)
}

/// Event listeners registered for one globe, removable as a group.
#[derive(Default)]
pub struct ListenerSet {
    entries: Vec<(web::EventTarget, &'static str, Closure<dyn FnMut(web::Event)>)>,
}

impl ListenerSet {
    pub fn add(
        &mut self,
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        if let Err(e) =
            target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            log::error!("[globe] add {} listener: {:?}", event, e);
            return;
        }
        self.entries.push((target.clone(), event, closure));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn remove_all(&mut self) {
        for (target, event, closure) in self.entries.drain(..) {
            _ = target
                .remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }
    }
}

use crate::dom;
use crate::globe::GlobeState;
use crate::render::CanvasPainter;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub state: Rc<RefCell<GlobeState>>,
    pub canvas: web::HtmlCanvasElement,
    pub painter: CanvasPainter,
    /// Filled in once the texture has decoded; `None` draws dots only.
    pub texture: Rc<RefCell<Option<web::HtmlImageElement>>>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let viewport = dom::canvas_viewport(&self.canvas);
        let scene = {
            let mut state = self.state.borrow_mut();
            state.set_viewport(viewport);
            state.tick()
        };
        let state = self.state.borrow();
        let texture = self.texture.borrow();
        self.painter.paint(
            &scene,
            &state.config,
            &viewport,
            texture.as_ref(),
        );
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A running requestAnimationFrame loop.
pub struct FrameLoop {
    cancelled: Rc<Cell<bool>>,
    raf_id: Rc<Cell<Option<i32>>>,
    tick: TickClosure,
}

impl FrameLoop {
    /// Stop scheduling frames and release the loop closure.
    pub fn cancel(&self) {
        self.cancelled.set(true);
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.tick.borrow_mut().take();
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>, cancelled: Rc<Cell<bool>>) -> FrameLoop {
    let tick: TickClosure = Rc::new(RefCell::new(None));
    let raf_id = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let raf_id_tick = raf_id.clone();
    let cancelled_tick = cancelled.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        raf_id_tick.set(None);
        if cancelled_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        schedule(&tick_clone, &raf_id_tick);
    }) as Box<dyn FnMut()>));

    schedule(&tick, &raf_id);
    FrameLoop {
        cancelled,
        raf_id,
        tick,
    }
}

fn schedule(tick: &TickClosure, raf_id: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => raf_id.set(Some(id)),
            Err(e) => log::error!("[globe] requestAnimationFrame: {:?}", e),
        }
    }
}

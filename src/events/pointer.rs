use crate::dom::ListenerSet;
use crate::globe::GlobeState;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Route canvas pointer events into `state`.
pub fn wire_pointer_handlers(
    canvas: &web::HtmlCanvasElement,
    state: &Rc<RefCell<GlobeState>>,
    listeners: &mut ListenerSet,
) {
    let target: &web::EventTarget = canvas.as_ref();

    {
        let canvas = canvas.clone();
        let state = state.clone();
        listeners.add(target, "pointerdown", move |ev| {
            let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
                return;
            };
            let pos = input::pointer_canvas_px(ev, &canvas);
            state.borrow_mut().pointer_down(pos);
            _ = canvas.set_pointer_capture(ev.pointer_id());
            ev.prevent_default();
        });
    }

    {
        let canvas = canvas.clone();
        let state = state.clone();
        listeners.add(target, "pointermove", move |ev| {
            let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
                return;
            };
            let pos = input::pointer_canvas_px(ev, &canvas);
            state.borrow_mut().pointer_move(pos);
        });
    }

    {
        let canvas = canvas.clone();
        let state = state.clone();
        listeners.add(target, "pointerup", move |ev| {
            state.borrow_mut().pointer_up();
            if let Some(ev) = ev.dyn_ref::<web::PointerEvent>() {
                _ = canvas.release_pointer_capture(ev.pointer_id());
            }
        });
    }

    for event in ["pointerleave", "pointercancel"] {
        let state = state.clone();
        listeners.add(target, event, move |_ev| {
            state.borrow_mut().pointer_leave();
        });
    }
}

// The #[wasm_bindgen(start)] call is needed but Clippy doesn't see that.
#![allow(clippy::unused_unit)]

use std::cell::RefCell;
use std::rc::Rc;

use scene::Mesh;
use wasm_bindgen::prelude::*;

use crate::app::{App, CANVAS_SIZE};
use crate::bridge::{log, now_ms, request_animation_frame, Canvas};
use crate::render::WebGlRenderer;

fn logged_error<T>(error_message: &str) -> Result<T, JsValue> {
    log!("{error_message}");
    Err(wasm_bindgen::JsValue::from_str(error_message))
}

fn create_app() -> anyhow::Result<App<WebGlRenderer>> {
    let canvas = Canvas::new_element(CANVAS_SIZE).map_err(anyhow::Error::msg)?;
    let size = canvas.size();
    let renderer = WebGlRenderer::new(canvas.gl(), size, &Mesh::triangle())?;
    let start_ms = now_ms().map_err(anyhow::Error::msg)?;

    Ok(App::new(renderer, start_ms))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let mut app = match create_app() {
        Ok(app) => app,
        Err(e) => return logged_error(&format!("Failed to start: {e}")),
    };

    // The frame closure needs a handle to itself to request the next frame,
    // so it is never dropped. Rendering runs until the page goes away.
    let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        app.animation_frame(timestamp);
        if let Some(closure) = f.borrow().as_ref() {
            if let Err(e) = request_animation_frame(closure) {
                log!("Animation stopped: {e}");
            }
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(closure) = g.borrow().as_ref() {
        if let Err(e) = request_animation_frame(closure) {
            return logged_error(&e);
        }
    }

    log!("Rendering triangle at {CANVAS_SIZE}x{CANVAS_SIZE}.");

    Ok(())
}

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, HtmlElement, Window};

use crate::dom::element::Element;
use crate::err;
use crate::render::Gl;
use crate::Res;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    pub fn console_log(s: &str);
}

macro_rules! log {
    ($($tts:tt)*) => {
        crate::bridge::console_log(&format!($($tts)*))
    }
}

pub(crate) use log;

/// Fixed size canvas holding the WebGL context.
pub struct Canvas {
    element: HtmlCanvasElement,
    gl: Gl,
}

impl Canvas {
    const ID: &'static str = "canvas";

    /// Use the canvas with id "canvas" if the page has one, otherwise create
    /// it and add it to the body. Sizes it to `size` x `size` pixels.
    pub fn new_element(size: u32) -> Res<Canvas> {
        let element = match Element::by_id(Canvas::ID) {
            Some(e) => e,
            None => {
                let e = Element::try_new("canvas")?;
                e.set_attr("id", Canvas::ID)?;
                e.on_page()?
            }
        };

        let element = match element.raw().dyn_into::<HtmlCanvasElement>() {
            Ok(c) => c,
            Err(_) => return err("Couldn't cast Element to HtmlCanvas."),
        };

        element.set_width(size);
        element.set_height(size);

        let canvas = Canvas {
            gl: create_context(&element)?,
            element,
        };
        canvas.init_css()?;

        Ok(canvas)
    }

    fn set_css(&self, property: &str, value: &str) -> Res<()> {
        self.element
            .style()
            .set_property(property, value)
            .map_err(|e| format!("Failed to set canvas CSS: {e:?}."))
    }

    fn init_css(&self) -> Res<()> {
        /*
        {
            background-color: black;
            display: block;
        }
        */
        self.set_css("background-color", "black")?;
        self.set_css("display", "block")?;

        Ok(())
    }

    pub fn size(&self) -> (u32, u32) {
        (self.element.width(), self.element.height())
    }

    pub fn gl(self) -> Gl {
        self.gl
    }
}

fn create_context(element: &HtmlCanvasElement) -> Res<Gl> {
    match element.get_context("webgl2") {
        Ok(Some(ctx)) => ctx
            .dyn_into::<Gl>()
            .map_err(|_| "Context is not a WebGl2RenderingContext.".to_string()),
        Ok(None) => err("WebGL2 not supported."),
        Err(e) => err(format!("Failed to get WebGL2 context: {e:?}.")),
    }
}

fn window() -> Res<Window> {
    match web_sys::window() {
        Some(w) => Ok(w),
        None => err("No Window."),
    }
}

pub fn get_document() -> Res<Document> {
    match window()?.document() {
        Some(d) => Ok(d),
        None => err("No Document."),
    }
}

pub fn get_body() -> Res<HtmlElement> {
    match get_document()?.body() {
        Some(b) => Ok(b),
        None => err("No Body."),
    }
}

/// Milliseconds on the same clock as animation frame timestamps.
pub fn now_ms() -> Res<f64> {
    match window()?.performance() {
        Some(p) => Ok(p.now()),
        None => err("No Performance."),
    }
}

pub fn request_animation_frame(f: &Closure<dyn FnMut(f64)>) -> Res<()> {
    match window()?.request_animation_frame(f.as_ref().unchecked_ref()) {
        Ok(_) => Ok(()),
        Err(_) => err("Failed to get animation frame."),
    }
}

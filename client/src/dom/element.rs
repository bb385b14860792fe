use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::bridge::{get_body, get_document};
use crate::Res;

pub struct Element {
    element: HtmlElement,
}

impl Element {
    pub fn try_new(name: &str) -> Res<Element> {
        let element = get_document()?
            .create_element(name)
            .map(|e| e.unchecked_into::<HtmlElement>())
            .map_err(|e| format!("Element creation failed: {e:?}."))?;

        Ok(Element { element })
    }

    pub fn by_id(id: &str) -> Option<Element> {
        get_document().ok()?.get_element_by_id(id).map(|e| Self {
            element: e.unchecked_into::<HtmlElement>(),
        })
    }

    pub fn raw(self) -> HtmlElement {
        self.element
    }

    pub fn on_page(self) -> Res<Self> {
        get_body()?
            .append_child(self.node())
            .map_err(|e| format!("Failed to add element to page: {e:?}."))?;
        Ok(self)
    }

    pub fn node(&self) -> &web_sys::Node {
        self.element.unchecked_ref::<web_sys::Node>()
    }

    pub fn set_attr(&self, name: &str, value: &str) -> Res<()> {
        self.element
            .set_attribute(name, value)
            .map_err(|e| format!("Failed to set element attribute: {e:?}."))
    }
}

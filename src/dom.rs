use log::error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::host::Host;

/// `document.readyState` is `"loading"` until the parser finishes; both
/// `"interactive"` and `"complete"` mean the elements are in place.
fn is_still_parsing(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// [`Host`] backed by the live browser document.
#[derive(Clone)]
pub struct DomHost {
    window: Window,
    document: Document,
}

impl DomHost {
    pub fn from_window() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    pub fn is_loading(&self) -> bool {
        is_still_parsing(&self.document.ready_state())
    }

    /// Runs `handler` once the document has been parsed.
    pub fn on_dom_content_loaded(&self, handler: Box<dyn FnOnce()>) {
        let callback = Closure::once_into_js(move || handler());
        if let Err(e) = self
            .document
            .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
        {
            error!("Failed to listen for DOMContentLoaded: {:?}", e);
        }
    }

    fn listen(&self, target: &web_sys::EventTarget, event: &str, handler: Box<dyn FnMut()>) {
        let callback = Closure::wrap(handler);
        if let Err(e) =
            target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        {
            error!("Failed to add {} listener: {:?}", event, e);
        }
        // Listeners live as long as the page.
        callback.forget();
    }
}

impl Host for DomHost {
    type Element = HtmlElement;

    fn element_by_id(&self, id: &str) -> Option<HtmlElement> {
        self.document
            .get_element_by_id(id)
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    }

    fn query_selector(&self, selector: &str) -> Option<HtmlElement> {
        self.document
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    }

    fn query_selector_all(&self, selector: &str) -> Vec<HtmlElement> {
        let Ok(nodes) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect()
    }

    fn set_style(&self, element: &HtmlElement, property: &str, value: &str) {
        if let Err(e) = element.style().set_property(property, value) {
            error!("Failed to set {}: {:?}", property, e);
        }
    }

    fn set_body_style(&self, property: &str, value: &str) {
        if let Some(body) = self.document.body() {
            self.set_style(&body, property, value);
        }
    }

    fn text_of(&self, element: &HtmlElement) -> Option<String> {
        element.text_content()
    }

    fn set_text(&self, element: &HtmlElement, text: &str) {
        element.set_text_content(Some(text));
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn scroll_to_top(&self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn on_click(&self, element: &HtmlElement, handler: Box<dyn FnMut()>) {
        self.listen(element, "click", handler);
    }

    fn on_scroll(&self, handler: Box<dyn FnMut()>) {
        self.listen(&self.window, "scroll", handler);
    }
}

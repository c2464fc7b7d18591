//! The slice of the page the controller talks to.
//!
//! Everything the interactions need from the browser goes through [`Host`], so
//! the bindings can run against `web_sys` in the page and against a recording
//! fake in unit tests. Lookups return `Option`/`Vec`: a missing element is a
//! normal condition, never an error.

pub trait Host: Clone + 'static {
    type Element: Clone + 'static;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// First element matching `selector`.
    fn query_selector(&self, selector: &str) -> Option<Self::Element>;

    /// All elements matching `selector`, in document order.
    fn query_selector_all(&self, selector: &str) -> Vec<Self::Element>;

    fn set_style(&self, element: &Self::Element, property: &str, value: &str);

    /// Sets a style property on `<body>`; an empty value removes it.
    fn set_body_style(&self, property: &str, value: &str);

    fn text_of(&self, element: &Self::Element) -> Option<String>;

    fn set_text(&self, element: &Self::Element, text: &str);

    /// Current vertical scroll offset of the window.
    fn scroll_y(&self) -> f64;

    /// Smoothly scrolls the window to offset zero. Fire-and-forget.
    fn scroll_to_top(&self);

    fn on_click(&self, element: &Self::Element, handler: Box<dyn FnMut()>);

    fn on_scroll(&self, handler: Box<dyn FnMut()>);
}

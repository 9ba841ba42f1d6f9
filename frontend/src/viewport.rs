use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, ScrollBehavior, ScrollToOptions};

/// The bits of the page the navigation and scroll logic need.
pub trait Viewport {
    fn scroll_y(&self) -> f64;
    /// Document offset of the element with `id`, if it is on the page.
    fn section_top(&self, id: &str) -> Option<f64>;
    fn scroll_to(&self, top: f64);
    fn lock_scroll(&self, locked: bool);
}

#[derive(Clone, Copy, Default, PartialEq)]
pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    fn scroll_y(&self) -> f64 {
        window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }

    fn section_top(&self, id: &str) -> Option<f64> {
        let element = window()?.document()?.get_element_by_id(id)?;
        let element: HtmlElement = element.dyn_into().ok()?;
        Some(element.offset_top() as f64)
    }

    fn scroll_to(&self, top: f64) {
        if let Some(window) = window() {
            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }

    fn lock_scroll(&self, locked: bool) {
        if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let overflow = if locked { "hidden" } else { "auto" };
            let _ = body.style().set_property("overflow", overflow);
        }
    }
}

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;
use crate::viewport::{BrowserViewport, Viewport};

pub fn shows_scroll_top(scroll_y: f64) -> bool {
    scroll_y > config::SCROLL_TOP_THRESHOLD
}

/// Remembers which elements have been revealed. Once in, always in.
#[derive(Debug, Default)]
pub struct RevealTracker {
    revealed: HashSet<String>,
}

impl RevealTracker {
    /// Returns true only the first time `key` is seen intersecting.
    pub fn observe(&mut self, key: &str, intersecting: bool) -> bool {
        if !intersecting || self.revealed.contains(key) {
            return false;
        }
        self.revealed.insert(key.to_string())
    }
}

#[hook]
pub fn use_scroll_top_visible() -> bool {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = Closure::<dyn Fn()>::new(move || {
                    visible.set(shows_scroll_top(BrowserViewport.scroll_y()));
                });

                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    *visible
}

fn reveal_key(element: &Element) -> String {
    element
        .get_attribute("data-reveal")
        .unwrap_or_else(|| element.id())
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe_fade_ins(tracker: Rc<RefCell<RevealTracker>>) -> Option<(IntersectionObserver, ObserverCallback)> {
    let document = web_sys::window()?.document()?;

    let callback = ObserverCallback::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            let target = entry.target();
            if tracker.borrow_mut().observe(&reveal_key(&target), entry.is_intersecting()) {
                let _ = target.class_list().add_1("animate-in");
                observer.unobserve(&target);
            }
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;

    let nodes = document.query_selector_all(".fade-in").ok()?;
    for i in 0..nodes.length() {
        if let Some(element) = nodes.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            observer.observe(&element);
        }
    }

    Some((observer, callback))
}

/// Adds `animate-in` to every `.fade-in` element the first time it scrolls into view.
#[hook]
pub fn use_reveal_on_scroll() {
    use_effect_with_deps(
        move |_| {
            let tracker = Rc::new(RefCell::new(RevealTracker::default()));
            let observer = observe_fade_ins(tracker);
            if observer.is_none() {
                log::warn!("IntersectionObserver unavailable, fade-in elements stay hidden");
            }

            move || {
                if let Some((observer, _callback)) = observer {
                    observer.disconnect();
                }
            }
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_top_threshold_is_exclusive() {
        assert!(!shows_scroll_top(0.0));
        assert!(!shows_scroll_top(500.0));
        assert!(shows_scroll_top(500.5));
        assert!(shows_scroll_top(4000.0));
    }

    #[test]
    fn reveal_is_one_directional() {
        let mut tracker = RevealTracker::default();

        assert!(!tracker.observe("hero", false));
        assert!(tracker.observe("hero", true));

        // Leaving the viewport doesn't hide it, re-entering doesn't re-fire.
        assert!(!tracker.observe("hero", false));
        assert!(!tracker.observe("hero", true));
    }

    #[test]
    fn keys_are_independent() {
        let mut tracker = RevealTracker::default();
        assert!(tracker.observe("feature-0", true));
        assert!(tracker.observe("feature-1", true));
        assert!(!tracker.observe("feature-0", true));
    }
}

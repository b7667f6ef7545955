//! Scroll-triggered reveal.
//!
//! One shared `IntersectionObserver`. An element is revealed the first time it
//! is at least 10% visible inside the viewport shrunk by 50px at the bottom,
//! then unobserved for good.

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Class marking a revealed element (drives the fade-in animation)
pub const REVEALED_CLASS: &str = "fade-in-up";

const THRESHOLD: f64 = 0.1;
const ROOT_MARGIN: &str = "0px 0px -50px 0px";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Revealed,
}

impl RevealState {
    /// Next state after an intersection report. `Revealed` is terminal.
    pub fn advance(self, intersecting: bool) -> RevealState {
        match self {
            RevealState::Pending if intersecting => RevealState::Revealed,
            state => state,
        }
    }

    fn of(element: &Element) -> RevealState {
        if element.class_list().contains(REVEALED_CLASS) {
            RevealState::Revealed
        } else {
            RevealState::Pending
        }
    }
}

pub struct ScrollReveal {
    observer: IntersectionObserver,
    _on_intersect: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ScrollReveal {
    pub fn new() -> Result<Self, JsValue> {
        let on_intersect = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let before = RevealState::of(&target);
                    if before.advance(entry.is_intersecting()) != before {
                        let _ = target.class_list().add_1(REVEALED_CLASS);
                    }
                    if RevealState::of(&target) == RevealState::Revealed {
                        observer.unobserve(&target);
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(THRESHOLD));
        options.set_root_margin(ROOT_MARGIN);
        let observer = IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)?;

        Ok(Self { observer, _on_intersect: on_intersect })
    }

    /// Track an element. Already revealed elements are left alone, and
    /// observing the same element again is harmless.
    pub fn observe(&self, element: &Element) {
        if RevealState::of(element) == RevealState::Pending {
            self.observer.observe(element);
        }
    }

    /// Fallback when no observer could be built: reveal right away
    pub fn reveal_now(element: &Element) {
        let _ = element.class_list().add_1(REVEALED_CLASS);
    }
}

impl Drop for ScrollReveal {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

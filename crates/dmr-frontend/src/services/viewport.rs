//! # Viewport Reveal Service
//!
//! One-shot visibility detection for scroll-triggered section reveals.

use leptos::html::Section;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Owns one observer and its callback. Disconnects when dropped, which
/// happens when the effect holding it re-runs or its section unmounts.
struct ObserverGuard {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Watch a section element and return a flag that flips to `true` the
/// first time at least `threshold` of the element is inside the
/// viewport. The flag never reverts: the observer disconnects inside
/// its first positive callback, and nothing ever writes `false`.
///
/// If the observer cannot be constructed the flag stays `false` and the
/// section keeps its pre-reveal styling; the page itself still works.
pub fn use_reveal(target: NodeRef<Section>, threshold: f64) -> ReadSignal<bool> {
    let (revealed, set_revealed) = signal(false);

    Effect::new(move |previous: Option<Option<ObserverGuard>>| {
        // A re-run replaces the previous observer outright.
        drop(previous);
        let element = target.get()?;

        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let entered = entries.iter().any(|entry| {
                    entry
                        .dyn_into::<IntersectionObserverEntry>()
                        .map(|entry| entry.is_intersecting())
                        .unwrap_or(false)
                });

                if entered {
                    // try_set: a notification can still be in flight
                    // while the owning section is tearing down.
                    let _ = set_revealed.try_set(true);
                    observer.disconnect();
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => {
                observer.observe(&element);
                Some(ObserverGuard {
                    observer,
                    _callback: callback,
                })
            }
            Err(err) => {
                log::warn!("IntersectionObserver unavailable, section stays hidden: {err:?}");
                None
            }
        }
    });

    revealed
}

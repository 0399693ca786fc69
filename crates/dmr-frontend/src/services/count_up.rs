//! # Count-Up Driver
//!
//! `requestAnimationFrame` loop that samples a [`CountUp`] animation and
//! writes each frame's value into a signal.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use dmr_content::CountUp;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Run `anim` on the browser's repaint cycle, feeding sampled values
/// into `set_value` until the animation completes. The final frame
/// always writes the exact end value.
///
/// The loop holds its own closure and drops it once finished. Setting
/// `cancelled` stops the loop at the next frame without a write; the
/// owning section flips it on unmount. Writes go through `try_set` so a
/// frame that lands after the signal is disposed is a no-op.
pub fn run_count_up(anim: CountUp, set_value: WriteSignal<u32>, cancelled: Arc<AtomicBool>) {
    let Some(window) = web_sys::window() else {
        log::warn!("no window object, count-up skipped");
        return;
    };

    let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let next_frame = Rc::clone(&frame);
    let mut started_at: Option<f64> = None;

    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        if cancelled.load(Ordering::Relaxed) {
            next_frame.borrow_mut().take();
            return;
        }

        let begun = *started_at.get_or_insert(timestamp);
        let elapsed = timestamp - begun;
        let _ = set_value.try_set(anim.value_at(elapsed));

        if anim.is_complete(elapsed) {
            next_frame.borrow_mut().take();
            return;
        }

        if let Some(window) = web_sys::window() {
            if let Some(callback) = next_frame.borrow().as_ref() {
                let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(callback) = frame.borrow().as_ref() {
        let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}

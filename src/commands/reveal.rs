//! Scroll Reveal Commands
//!
//! IntersectionObserver wrapper that fires once per element.

use wasm_bindgen::prelude::*;

/// Keeps the observer and its JS callback alive; disconnects on drop
pub struct RevealObserver {
    observer: web_sys::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Call `on_visible` the first time `element` enters the viewport, then stop observing it
pub fn observe_once(
    element: &web_sys::Element,
    threshold: f64,
    root_margin: &str,
    on_visible: impl Fn() + 'static,
) -> Result<RevealObserver, String> {
    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    on_visible();
                    observer.unobserve(&entry.target());
                }
            }
        },
    );

    let init = web_sys::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    init.set_root_margin(root_margin);

    let observer = web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(|e| format!("IntersectionObserver unavailable: {:?}", e))?;
    observer.observe(element);

    Ok(RevealObserver {
        observer,
        _callback: callback,
    })
}

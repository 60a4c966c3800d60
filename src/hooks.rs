use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::dom::DomError;

#[derive(Clone, Debug, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe_once(
    element: &Element,
    options: &ObserverOptions,
    on_visible: Callback<Element>,
) -> Result<(IntersectionObserver, EntriesCallback), DomError> {
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if entry.is_intersecting() {
                let target = entry.target();
                // One reveal per element; nothing to watch afterwards.
                observer.unobserve(&target);
                on_visible.emit(target);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(element);
    Ok((observer, callback))
}

/// Emits `on_visible` the first time the referenced element scrolls into
/// view, then stops observing it.
#[hook]
pub fn use_first_intersection(node: NodeRef, options: ObserverOptions, on_visible: Callback<Element>) {
    use_effect_with_deps(
        move |node: &NodeRef| {
            let observed = node.cast::<Element>().and_then(|element| {
                observe_once(&element, &options, on_visible)
                    .map_err(|e| log::warn!("IntersectionObserver unavailable: {}", e))
                    .ok()
            });

            move || {
                if let Some((observer, callback)) = observed {
                    observer.disconnect();
                    drop(callback);
                }
            }
        },
        node,
    );
}

//! Browser helpers shared by the page sections
//!
//! Only compiled for the browser. Every function here tolerates a missing
//! element or a failing DOM call by logging and doing nothing.

use std::rc::Rc;

use leptos::logging::warn;
use leptos::prelude::*;
use leptos::wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::core::{OneShot, RevealOptions, SectionBounds};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Current vertical scroll offset of the page
pub fn scroll_offset() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

/// Height of the browser viewport
pub fn viewport_height() -> f64 {
    window()
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0)
}

/// Measure the sections with the given ids, skipping ids missing from the page
pub fn measure_sections<'a>(ids: impl Iterator<Item = &'a str>) -> Vec<SectionBounds> {
    let document = document();
    ids.filter_map(|id| {
        let section = document
            .get_element_by_id(id)?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(SectionBounds::new(
            id,
            f64::from(section.offset_top()),
            f64::from(section.offset_height()),
        ))
    })
    .collect()
}

/// Smoothly scroll the section with `id` to the top of the viewport
pub fn scroll_to_section(id: &str) {
    let Some(target) = document().get_element_by_id(id) else {
        warn!("no section with id {}", id);
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Set `overflow` on the document body
pub fn set_body_overflow(value: &str) {
    let Some(body) = document().body() else {
        return;
    };
    if let Err(err) = body.style().set_property("overflow", value) {
        warn!("failed to set body overflow: {:?}", err);
    }
}

/// Run `on_reveal` the first time the element returned by `target` scrolls into view.
///
/// The element is unobserved right after it fires and the observer is
/// disconnected when the calling component is cleaned up. Browsers without
/// `IntersectionObserver` reveal the element immediately.
pub fn use_reveal_once<T, F>(target: T, options: RevealOptions, on_reveal: F)
where
    T: Fn() -> Option<Element> + 'static,
    F: Fn(&Element) + 'static,
{
    let on_reveal = Rc::new(on_reveal);
    let observer = StoredValue::new_local(None::<(IntersectionObserver, ObserverCallback)>);

    Effect::new(move |_| {
        let Some(element) = target() else {
            return;
        };
        if observer.with_value(|current| current.is_some()) {
            return;
        }

        let mut trigger = OneShot::new();
        let notify = Rc::clone(&on_reveal);
        let callback = ObserverCallback::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() && trigger.fire() {
                        let target = entry.target();
                        observer.unobserve(&target);
                        notify(&target);
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(options.root_margin);

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(created) => {
                created.observe(&element);
                observer.set_value(Some((created, callback)));
            }
            Err(err) => {
                warn!("IntersectionObserver unavailable: {:?}", err);
                on_reveal(&element);
            }
        }
    });

    on_cleanup(move || {
        observer.try_update_value(|current| {
            if let Some((created, _callback)) = current.take() {
                created.disconnect();
            }
        });
    });
}

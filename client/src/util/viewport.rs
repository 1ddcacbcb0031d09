//! Region visibility notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sections reveal themselves once they scroll into view. The platform
//! mechanism (an `IntersectionObserver` in the browser) sits behind the
//! [`RegionNotifier`] trait so the reveal logic in
//! [`crate::state::visibility`] never touches `web_sys` directly.
//!
//! Observers are scoped to the component that created them: the hook below
//! subscribes on mount and unsubscribes in `on_cleanup`.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use leptos::prelude::*;

use crate::content::SectionId;
use crate::state::visibility::{Intersection, VisibilityTracker};

/// Receives intersection reports for one region.
pub type RegionCallback = Box<dyn FnMut(Intersection)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

pub trait RegionNotifier {
    /// Start reporting intersections for `region_id`.
    ///
    /// Returns `None` when the region does not exist; callers treat that as a
    /// silent no-op.
    fn subscribe(&mut self, region_id: &str, threshold: f64, callback: RegionCallback) -> Option<Subscription>;

    /// Stop reporting for a subscription. Unknown subscriptions are ignored.
    fn unsubscribe(&mut self, subscription: Subscription);
}

#[cfg(feature = "hydrate")]
pub use browser::BrowserNotifier;

#[cfg(feature = "hydrate")]
mod browser {
    use std::collections::HashMap;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::{Closure, JsValue};
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use super::{RegionCallback, RegionNotifier, Subscription};
    use crate::state::visibility::Intersection;

    type ObserverClosure = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

    /// `IntersectionObserver`-backed notifier. Disconnects everything on drop.
    #[derive(Default)]
    pub struct BrowserNotifier {
        observers: HashMap<u64, (IntersectionObserver, ObserverClosure)>,
        next_id: u64,
    }

    impl BrowserNotifier {
        fn clear(&mut self) {
            for (_, (observer, _closure)) in self.observers.drain() {
                observer.disconnect();
            }
        }
    }

    fn report(entry: &IntersectionObserverEntry) -> Intersection {
        let region_height = entry.bounding_client_rect().height();
        let viewport_height = entry
            .root_bounds()
            .map(|bounds| bounds.height())
            .or_else(|| web_sys::window()?.inner_height().ok()?.as_f64())
            .unwrap_or(region_height);
        let reachable = if region_height > 0.0 { (viewport_height / region_height).min(1.0) } else { 1.0 };
        Intersection { ratio: entry.intersection_ratio(), intersecting: entry.is_intersecting(), reachable }
    }

    impl RegionNotifier for BrowserNotifier {
        fn subscribe(&mut self, region_id: &str, threshold: f64, mut callback: RegionCallback) -> Option<Subscription> {
            let element = web_sys::window()?.document()?.get_element_by_id(region_id)?;

            let closure: ObserverClosure = Closure::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    callback(report(&entry));
                }
            });

            let options = IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(threshold));
            let observer = IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options).ok()?;
            observer.observe(&element);

            let id = self.next_id;
            self.next_id += 1;
            self.observers.insert(id, (observer, closure));
            Some(Subscription(id))
        }

        fn unsubscribe(&mut self, subscription: Subscription) {
            if let Some((observer, _closure)) = self.observers.remove(&subscription.0) {
                observer.disconnect();
            }
        }
    }

    impl Drop for BrowserNotifier {
        fn drop(&mut self) {
            self.clear();
        }
    }
}

/// One-shot "has this section been seen" flag for the calling component.
///
/// On the server and before hydration the flag is `false`, so sections render
/// in their pre-reveal state.
pub fn use_section_visibility(section: SectionId, threshold: f64) -> ReadSignal<bool> {
    let visible = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let notifier = StoredValue::new_local(BrowserNotifier::default());
        // The section element only exists once the view has mounted.
        Effect::new(move || bind_reveal(notifier, section, threshold, visible));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (section, threshold);
    }

    visible.read_only()
}

/// Subscribe `section` on `notifier` and set `visible` on the report that
/// reveals it. The subscription is released when the current owner cleans up.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) fn bind_reveal<N: RegionNotifier + 'static>(
    notifier: StoredValue<N, LocalStorage>,
    section: SectionId,
    threshold: f64,
    visible: RwSignal<bool>,
) {
    let mut tracker = VisibilityTracker::new(threshold);
    let callback: RegionCallback = Box::new(move |report| {
        if tracker.observe(report) {
            visible.try_set(true);
        }
    });
    let Some(subscription) = notifier.try_update_value(|n| n.subscribe(section.anchor(), threshold, callback)).flatten()
    else {
        log::debug!("section #{} not found; reveal disabled", section.anchor());
        return;
    };
    on_cleanup(move || {
        notifier.try_update_value(|n| n.unsubscribe(subscription));
    });
}

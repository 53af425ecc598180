//! DOM driver for the one-shot section reveal.
//!
//! Binds a [`RevealController`] subscription to a `web_sys`
//! `IntersectionObserver`. The observer is push-based: it fires once with
//! the current state when observation starts (which covers a region that
//! is already visible at mount) and then only on actual layout or scroll
//! changes, never per animation frame.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::state::reveal::{Delivery, RevealController};

/// Fraction of a region that must be visible before it reveals. Every
/// section on the landing page uses the same value.
pub const REVEAL_THRESHOLD: f64 = 0.1;

struct DomObservation {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

/// Ratio to hand to the controller for one observer entry.
///
/// At the crossing entry browsers can report an `intersectionRatio` a
/// hair under the configured threshold (float rounding), and no further
/// entry arrives until the element leaves and re-enters the band. An
/// intersecting entry therefore counts as having met the threshold; a
/// non-intersecting one keeps its reported ratio.
fn entry_ratio(is_intersecting: bool, ratio: f64, threshold: f64) -> f64 {
    if is_intersecting {
        ratio.max(threshold)
    } else {
        ratio
    }
}

/// One-shot reveal flag for the element behind `target`, at the standard
/// [`REVEAL_THRESHOLD`].
pub fn use_reveal(target: NodeRef<Div>) -> ReadSignal<bool> {
    use_reveal_at(target, REVEAL_THRESHOLD)
}

/// One-shot reveal flag with an explicit threshold.
///
/// The returned signal starts `false` and flips to `true` at most once,
/// the first time the element's intersection ratio meets the threshold.
/// The observer and its subscription are released on first reveal or when
/// the owning scope is disposed, whichever happens first, so no callback
/// can fire into a dropped scope.
pub fn use_reveal_at(target: NodeRef<Div>, threshold: f64) -> ReadSignal<bool> {
    let (revealed, set_revealed) = signal(false);

    // One controller per call site: each section owns its region.
    let controller = Rc::new(RefCell::new(RevealController::new()));
    let handle = controller
        .borrow_mut()
        .attach(threshold, move || set_revealed.set(true));
    let observation: Rc<RefCell<Option<DomObservation>>> = Rc::new(RefCell::new(None));

    Effect::new({
        let controller = Rc::clone(&controller);
        let observation = Rc::clone(&observation);
        move || {
            let Some(element) = target.get() else {
                return;
            };
            if observation.borrow().is_some() || !controller.borrow().is_attached(handle) {
                return;
            }

            let callback = Closure::wrap(Box::new({
                let controller = Rc::clone(&controller);
                move |entries: js_sys::Array, observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        let ratio = entry_ratio(
                            entry.is_intersecting(),
                            entry.intersection_ratio(),
                            threshold,
                        );
                        let delivery = controller.borrow_mut().deliver(handle, ratio);
                        if delivery == Delivery::Revealed {
                            // First crossing wins; stop watching entirely.
                            observer.disconnect();
                        }
                    }
                }
            })
                as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

            let options = IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(threshold));

            match IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &options,
            ) {
                Ok(observer) => {
                    observer.observe(&element);
                    *observation.borrow_mut() = Some(DomObservation {
                        observer,
                        _callback: callback,
                    });
                }
                Err(err) => {
                    log::warn!("reveal observer could not be created: {err:?}");
                    controller.borrow_mut().detach(handle);
                }
            }
        }
    });

    on_cleanup({
        // `on_cleanup` demands `Send + Sync`; these handles never leave the
        // single wasm thread, so a `SendWrapper` satisfies the bound.
        let cleanup = send_wrapper::SendWrapper::new((controller, observation));
        move || {
            let (controller, observation) = cleanup.take();
            controller.borrow_mut().detach(handle);
            let taken = observation.borrow_mut().take();
            if let Some(observation) = taken {
                observation.observer.disconnect();
            }
        }
    });

    revealed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_ratio_lifts_intersecting_entry_to_threshold() {
        // A crossing entry can round just under the configured threshold.
        let ratio = entry_ratio(true, 0.0999999, REVEAL_THRESHOLD);
        assert_eq!(ratio, REVEAL_THRESHOLD);
    }

    #[test]
    fn test_entry_ratio_keeps_ratio_above_threshold() {
        let ratio = entry_ratio(true, 0.73, REVEAL_THRESHOLD);
        assert_eq!(ratio, 0.73);
    }

    #[test]
    fn test_entry_ratio_passes_non_intersecting_entry_through() {
        let ratio = entry_ratio(false, 0.0, REVEAL_THRESHOLD);
        assert_eq!(ratio, 0.0);
    }

    #[test]
    fn test_rounded_crossing_entry_still_reveals() {
        let mut controller = RevealController::new();
        let handle = controller.attach(REVEAL_THRESHOLD, || {});

        let ratio = entry_ratio(true, 0.0999999, REVEAL_THRESHOLD);
        assert_eq!(controller.deliver(handle, ratio), Delivery::Revealed);
        assert!(!controller.is_attached(handle));
    }
}

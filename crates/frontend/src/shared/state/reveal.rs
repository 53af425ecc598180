//! One-shot reveal state for scroll-in sections.
//!
//! Every animated section on the landing page follows the same pattern:
//! it becomes "revealed" the first time enough of it scrolls into the
//! viewport, and that transition happens exactly once. `RevealController`
//! owns the bookkeeping for that pattern; the DOM wiring lives in
//! `shared::reveal` and pushes intersection ratios in via [`RevealController::deliver`].
//! `ManualViewport` is the non-browser event source used by tests.

use std::collections::HashMap;
use thiserror::Error;

/// Errors raised by reveal observation
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RevealError {
    /// The observed region cannot be resolved. Fatal to this attach call
    /// only; other sections are unaffected.
    #[error("region is not resolvable from this viewport")]
    InvalidRegion,
}

/// A boolean that moves from `false` to `true` exactly once and never
/// reverts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RevealLatch {
    set: bool,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_set(&self) -> bool {
        self.set
    }

    /// Fire the latch. Returns `true` only on the call that actually
    /// transitioned it; every later call returns `false`.
    pub fn set(&mut self) -> bool {
        let first = !self.set;
        self.set = true;
        first
    }
}

/// Opaque id for one reveal subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RevealHandle(u64);

/// Outcome of delivering one intersection event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// The handle is unknown: either never attached, already detached, or
    /// already revealed. The event is ignored.
    Detached,
    /// The ratio is still below the threshold; nothing changed.
    Pending,
    /// The latch fired and the subscription was torn down.
    Revealed,
}

struct Subscription {
    threshold: f64,
    latch: RevealLatch,
    on_reveal: Box<dyn FnMut()>,
}

/// Bookkeeping for one-shot reveal subscriptions.
///
/// Each section owns its own controller; there is no global registry.
/// The environment (an `IntersectionObserver` in the browser, a
/// [`ManualViewport`] in tests) pushes intersection ratios in through
/// [`deliver`](Self::deliver); the controller guarantees the reveal
/// callback runs at most once per handle and that the subscription is
/// released on every exit path.
#[derive(Default)]
pub struct RevealController {
    next: u64,
    subs: HashMap<u64, Subscription>,
}

impl RevealController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin observing one region. `threshold` is the fraction of the
    /// region's area (0..=1) that must be visible before the latch fires;
    /// the landing page uses `0.1` everywhere. `on_reveal` is invoked with
    /// no arguments, at most once, and must not re-enter this controller.
    pub fn attach(&mut self, threshold: f64, on_reveal: impl FnMut() + 'static) -> RevealHandle {
        let id = self.next;
        self.next += 1;
        self.subs.insert(
            id,
            Subscription {
                threshold: threshold.clamp(0.0, 1.0),
                latch: RevealLatch::new(),
                on_reveal: Box::new(on_reveal),
            },
        );
        RevealHandle(id)
    }

    /// Push one intersection event for `handle`.
    ///
    /// The subscription is removed before this returns whenever the latch
    /// fires, so a later event for the same handle (scroll jitter, a
    /// re-entrant dispatch in the same turn) observes [`Delivery::Detached`]
    /// and the callback never runs twice.
    pub fn deliver(&mut self, handle: RevealHandle, ratio: f64) -> Delivery {
        match self.subs.get(&handle.0) {
            None => return Delivery::Detached,
            Some(sub) if ratio < sub.threshold => return Delivery::Pending,
            Some(_) => {}
        }
        if let Some(mut sub) = self.subs.remove(&handle.0) {
            if sub.latch.set() {
                (sub.on_reveal)();
            }
        }
        Delivery::Revealed
    }

    /// Release a subscription. Idempotent: detaching an unknown or
    /// already-released handle is a no-op that returns `false`.
    pub fn detach(&mut self, handle: RevealHandle) -> bool {
        self.subs.remove(&handle.0).is_some()
    }

    pub fn is_attached(&self, handle: RevealHandle) -> bool {
        self.subs.contains_key(&handle.0)
    }

    pub fn attached_count(&self) -> usize {
        self.subs.len()
    }
}

/// Id of a rectangle registered with a [`ManualViewport`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionId(u64);

/// Manually driven layout-change notifier.
///
/// Stands in for the browser's viewport-intersection facility where there
/// is no DOM: regions are registered with a current visibility ratio and
/// ratio changes are pushed explicitly. Mirrors the observer contract of
/// the real thing, including the immediate delivery of the current state
/// at attach time.
#[derive(Default)]
pub struct ManualViewport {
    controller: RevealController,
    next_region: u64,
    ratios: HashMap<u64, f64>,
    watchers: HashMap<u64, Vec<RevealHandle>>,
}

impl ManualViewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rectangle with its current visibility ratio.
    pub fn add_region(&mut self, ratio: f64) -> RegionId {
        let id = self.next_region;
        self.next_region += 1;
        self.ratios.insert(id, ratio);
        RegionId(id)
    }

    /// Drop a rectangle, releasing every subscription still watching it.
    /// Models the owning section unmounting before its first reveal.
    pub fn remove_region(&mut self, region: RegionId) {
        self.ratios.remove(&region.0);
        if let Some(handles) = self.watchers.remove(&region.0) {
            for handle in handles {
                self.controller.detach(handle);
            }
        }
    }

    /// Begin observing `region`. Fails with [`RevealError::InvalidRegion`]
    /// when the region was never registered or has been removed. The
    /// region's current ratio is delivered immediately, so a region that
    /// is already sufficiently visible reveals without any further event.
    pub fn attach(
        &mut self,
        region: RegionId,
        threshold: f64,
        on_reveal: impl FnMut() + 'static,
    ) -> Result<RevealHandle, RevealError> {
        let Some(&ratio) = self.ratios.get(&region.0) else {
            return Err(RevealError::InvalidRegion);
        };
        let handle = self.controller.attach(threshold, on_reveal);
        if self.controller.deliver(handle, ratio) != Delivery::Revealed {
            self.watchers.entry(region.0).or_default().push(handle);
        }
        Ok(handle)
    }

    /// Push a new visibility ratio for `region`, notifying every live
    /// subscription on it. Unknown regions are ignored.
    pub fn set_ratio(&mut self, region: RegionId, ratio: f64) {
        if !self.ratios.contains_key(&region.0) {
            return;
        }
        self.ratios.insert(region.0, ratio);
        if let Some(handles) = self.watchers.get_mut(&region.0) {
            let pending = std::mem::take(handles);
            let still_pending: Vec<_> = pending
                .into_iter()
                .filter(|&handle| self.controller.deliver(handle, ratio) == Delivery::Pending)
                .collect();
            self.watchers.insert(region.0, still_pending);
        }
    }

    /// Release one subscription. Idempotent, like [`RevealController::detach`].
    pub fn detach(&mut self, handle: RevealHandle) -> bool {
        for handles in self.watchers.values_mut() {
            handles.retain(|&h| h != handle);
        }
        self.controller.detach(handle)
    }

    pub fn attached_count(&self) -> usize {
        self.controller.attached_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
        let count = Rc::new(Cell::new(0));
        let inner = count.clone();
        (count, move || inner.set(inner.get() + 1))
    }

    #[test]
    fn test_latch_fires_once() {
        let mut latch = RevealLatch::new();
        assert!(!latch.is_set());
        assert!(latch.set());
        assert!(latch.is_set());
        assert!(!latch.set());
        assert!(latch.is_set());
    }

    #[test]
    fn test_reveal_at_most_once_under_jitter() {
        let mut controller = RevealController::new();
        let (count, on_reveal) = counter();
        let handle = controller.attach(0.1, on_reveal);

        assert_eq!(controller.deliver(handle, 0.5), Delivery::Revealed);
        // Rapid re-crossings after the first reveal are all ignored.
        assert_eq!(controller.deliver(handle, 0.9), Delivery::Detached);
        assert_eq!(controller.deliver(handle, 0.05), Delivery::Detached);
        assert_eq!(controller.deliver(handle, 1.0), Delivery::Detached);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_below_threshold_stays_pending() {
        let mut controller = RevealController::new();
        let (count, on_reveal) = counter();
        let handle = controller.attach(0.1, on_reveal);

        assert_eq!(controller.deliver(handle, 0.0), Delivery::Pending);
        assert_eq!(controller.deliver(handle, 0.09), Delivery::Pending);
        assert_eq!(count.get(), 0);
        assert!(controller.is_attached(handle));
    }

    #[test]
    fn test_threshold_boundary_reveals() {
        // "meets or exceeds": exactly 10% visible is enough.
        let mut controller = RevealController::new();
        let (count, on_reveal) = counter();
        let handle = controller.attach(0.1, on_reveal);
        assert_eq!(controller.deliver(handle, 0.1), Delivery::Revealed);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_manual_detach_silences_events() {
        let mut controller = RevealController::new();
        let (count, on_reveal) = counter();
        let handle = controller.attach(0.1, on_reveal);

        assert!(controller.detach(handle));
        assert_eq!(controller.deliver(handle, 1.0), Delivery::Detached);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_double_detach_is_noop() {
        let mut controller = RevealController::new();
        let handle = controller.attach(0.1, || {});
        assert!(controller.detach(handle));
        assert!(!controller.detach(handle));
        assert!(!controller.detach(handle));
    }

    #[test]
    fn test_detach_after_auto_teardown_is_noop() {
        let mut controller = RevealController::new();
        let handle = controller.attach(0.1, || {});
        assert_eq!(controller.deliver(handle, 1.0), Delivery::Revealed);
        assert!(!controller.detach(handle));
    }

    #[test]
    fn test_controllers_are_independent() {
        let mut controller = RevealController::new();
        let (first_count, first) = counter();
        let (second_count, second) = counter();
        let first_handle = controller.attach(0.1, first);
        let second_handle = controller.attach(0.1, second);

        assert_eq!(controller.deliver(first_handle, 0.5), Delivery::Revealed);
        assert_eq!(first_count.get(), 1);
        assert_eq!(second_count.get(), 0);
        assert!(controller.is_attached(second_handle));
    }

    #[test]
    fn test_viewport_reveals_when_visible_at_attach() {
        let mut viewport = ManualViewport::new();
        let region = viewport.add_region(0.4);
        let (count, on_reveal) = counter();

        // Already past the threshold: must fire immediately, not only on a
        // subsequent scroll.
        viewport.attach(region, 0.1, on_reveal).unwrap();
        assert_eq!(count.get(), 1);
        assert_eq!(viewport.attached_count(), 0);
    }

    #[test]
    fn test_viewport_region_never_visible_never_reveals() {
        let mut viewport = ManualViewport::new();
        let region = viewport.add_region(0.0);
        let (count, on_reveal) = counter();
        viewport.attach(region, 0.1, on_reveal).unwrap();

        viewport.set_ratio(region, 0.02);
        viewport.set_ratio(region, 0.05);
        viewport.set_ratio(region, 0.0);
        assert_eq!(count.get(), 0);
        assert_eq!(viewport.attached_count(), 1);
    }

    #[test]
    fn test_viewport_scroll_crossing_reveals_once() {
        let mut viewport = ManualViewport::new();
        let region = viewport.add_region(0.0);
        let (count, on_reveal) = counter();
        viewport.attach(region, 0.1, on_reveal).unwrap();

        viewport.set_ratio(region, 0.3);
        viewport.set_ratio(region, 0.0);
        viewport.set_ratio(region, 0.8);
        assert_eq!(count.get(), 1);
        assert_eq!(viewport.attached_count(), 0);
    }

    #[test]
    fn test_viewport_unknown_region_is_invalid() {
        let mut viewport = ManualViewport::new();
        let region = viewport.add_region(0.0);
        viewport.remove_region(region);

        let result = viewport.attach(region, 0.1, || {});
        assert_eq!(result.unwrap_err(), RevealError::InvalidRegion);
    }

    #[test]
    fn test_viewport_unmount_before_reveal_releases_subscription() {
        let mut viewport = ManualViewport::new();
        let region = viewport.add_region(0.0);
        let (count, on_reveal) = counter();
        let handle = viewport.attach(region, 0.1, on_reveal).unwrap();

        viewport.remove_region(region);
        assert_eq!(viewport.attached_count(), 0);
        // Stale events and a late manual detach are both harmless.
        viewport.set_ratio(region, 1.0);
        assert!(!viewport.detach(handle));
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_viewport_sections_reveal_independently() {
        let mut viewport = ManualViewport::new();
        let hero = viewport.add_region(0.0);
        let features = viewport.add_region(0.0);
        let (hero_count, on_hero) = counter();
        let (features_count, on_features) = counter();
        viewport.attach(hero, 0.1, on_hero).unwrap();
        viewport.attach(features, 0.1, on_features).unwrap();

        viewport.set_ratio(features, 0.9);
        assert_eq!(hero_count.get(), 0);
        assert_eq!(features_count.get(), 1);
    }
}

//! Integration tests for scroll progress tracking.

use pagepulse::scroll::{
    sample, ListenerId, ListenerOptions, Listener, ScrollFraction, ScrollProgressTracker,
    SimulatedViewport, ViewportEvent, ViewportHost, ViewportMetrics,
};
use std::cell::{Cell, RefCell};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::rc::Rc;

/// Host wrapper that counts listener traffic.
struct CountingHost {
    inner: SimulatedViewport,
    added: Cell<usize>,
    removed: Cell<usize>,
}

impl CountingHost {
    fn new(viewport_height: f64, scroll_height: f64) -> Self {
        Self {
            inner: SimulatedViewport::new(viewport_height, scroll_height),
            added: Cell::new(0),
            removed: Cell::new(0),
        }
    }
}

impl ViewportHost for CountingHost {
    fn metrics(&self) -> ViewportMetrics {
        self.inner.metrics()
    }

    fn add_listener(
        &self,
        event: ViewportEvent,
        options: ListenerOptions,
        listener: Listener,
    ) -> ListenerId {
        self.added.set(self.added.get() + 1);
        self.inner.add_listener(event, options, listener)
    }

    fn remove_listener(&self, id: ListenerId) -> bool {
        self.removed.set(self.removed.get() + 1);
        self.inner.remove_listener(id)
    }
}

#[test]
fn test_sample_properties() {
    // Nothing to scroll
    for (viewport, document, offset) in [(900.0, 900.0, 0.0), (900.0, 100.0, 50.0), (0.0, 0.0, 0.0)] {
        let metrics = ViewportMetrics::new(viewport, document, offset);
        assert_eq!(sample(&metrics).percent(), 100.0);
    }

    // At the top of a scrollable page
    assert_eq!(sample(&ViewportMetrics::new(900.0, 2700.0, 0.0)).percent(), 0.0);

    // Always clamped
    for offset in [-1000.0, -0.5, 0.0, 450.0, 1800.0, 1800.5, 1e9] {
        let value = sample(&ViewportMetrics::new(900.0, 2700.0, offset)).percent();
        assert!((0.0..=100.0).contains(&value), "offset {} gave {}", offset, value);
    }
}

#[test]
fn test_tracker_follows_scroll_and_resize() {
    let viewport = Rc::new(SimulatedViewport::new(1000.0, 3000.0));
    let tracker = ScrollProgressTracker::mount(viewport.clone());
    assert_eq!(tracker.progress(), ScrollFraction::START);

    viewport.scroll_to(1000.0);
    assert_eq!(tracker.progress().percent(), 50.0);

    // Content shrinks below the viewport: nothing left to scroll
    viewport.resize(1000.0, 800.0);
    assert_eq!(tracker.progress(), ScrollFraction::COMPLETE);

    viewport.resize(1000.0, 5000.0);
    assert_eq!(tracker.progress().percent(), 25.0);
}

#[test]
fn test_last_write_wins() {
    let viewport = Rc::new(SimulatedViewport::new(100.0, 1100.0));
    let tracker = ScrollProgressTracker::mount(viewport.clone());

    for offset in (0..=1000).step_by(10) {
        viewport.scroll_to(offset as f64);
    }
    viewport.scroll_to(300.0);
    assert_eq!(tracker.progress().percent(), 30.0);
}

#[test]
fn test_drop_removes_both_listeners() {
    let host = Rc::new(CountingHost::new(500.0, 1500.0));
    {
        let _tracker = ScrollProgressTracker::mount(host.clone());
        assert_eq!(host.added.get(), 2);
        assert_eq!(host.inner.listener_count(), 2);
    }
    assert_eq!(host.removed.get(), 2);
    assert_eq!(host.inner.listener_count(), 0);
}

#[test]
fn test_unmount_then_drop_removes_once() {
    let host = Rc::new(CountingHost::new(500.0, 1500.0));
    let mut tracker = ScrollProgressTracker::mount(host.clone());
    tracker.unmount();
    drop(tracker);
    assert_eq!(host.removed.get(), 2);
}

#[test]
fn test_listeners_removed_on_panic() {
    let viewport = Rc::new(SimulatedViewport::new(500.0, 1500.0));

    let result = catch_unwind(AssertUnwindSafe(|| {
        let _tracker = ScrollProgressTracker::mount(viewport.clone());
        assert_eq!(viewport.listener_count(), 2);
        panic!("render failed");
    }));

    assert!(result.is_err());
    assert_eq!(viewport.listener_count(), 0);
}

#[test]
fn test_independent_trackers() {
    let viewport = Rc::new(SimulatedViewport::new(100.0, 500.0));
    let first = ScrollProgressTracker::mount(viewport.clone());
    let mut second = ScrollProgressTracker::mount(viewport.clone());
    assert_eq!(viewport.listener_count(), 4);

    second.unmount();
    assert_eq!(viewport.listener_count(), 2);

    viewport.scroll_to(400.0);
    assert_eq!(first.progress().percent(), 100.0);
    assert_eq!(second.progress().percent(), 0.0);
}

#[test]
fn test_observer_can_read_tracker_state() {
    let viewport = Rc::new(SimulatedViewport::new(100.0, 300.0));
    let tracker = Rc::new(ScrollProgressTracker::mount(viewport.clone()));

    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let weak = Rc::downgrade(&tracker);
    tracker.subscribe(move |progress| {
        if let Some(tracker) = weak.upgrade() {
            assert_eq!(tracker.progress(), progress);
        }
        sink.borrow_mut().push(progress.to_string());
    });

    viewport.scroll_to(150.0);
    viewport.resize(100.0, 100.0);
    assert_eq!(*log.borrow(), vec!["75%".to_string(), "100%".to_string()]);
}

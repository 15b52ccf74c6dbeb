//! Scroll progress sampling and tracking.

use super::host::{ListenerGuard, ListenerOptions, ViewportEvent, ViewportHost, ViewportMetrics};
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Percentage of the scrollable distance traversed, always within `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct ScrollFraction(f64);

impl ScrollFraction {
    /// Nothing scrolled yet.
    pub const START: Self = Self(0.0);

    /// Fully scrolled, or nothing to scroll.
    pub const COMPLETE: Self = Self(100.0);

    /// Create a fraction, clamping into `[0, 100]`. NaN becomes 0.
    pub fn new(percent: f64) -> Self {
        if percent.is_nan() {
            return Self::START;
        }
        Self(percent.clamp(0.0, 100.0))
    }

    /// The percentage value.
    pub fn percent(self) -> f64 {
        self.0
    }

    /// The value as a ratio in `[0, 1]`.
    pub fn ratio(self) -> f64 {
        self.0 / 100.0
    }

    /// Whether the reader reached the end.
    pub fn is_complete(self) -> bool {
        self.0 >= 100.0
    }
}

impl From<f64> for ScrollFraction {
    fn from(percent: f64) -> Self {
        Self::new(percent)
    }
}

impl From<ScrollFraction> for f64 {
    fn from(fraction: ScrollFraction) -> Self {
        fraction.0
    }
}

impl std::fmt::Display for ScrollFraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0}%", self.0)
    }
}

/// Compute scroll progress from viewport metrics.
///
/// When the document fits inside the viewport there is nothing to scroll
/// and progress is 100. Overscroll and negative offsets are clamped.
pub fn sample(metrics: &ViewportMetrics) -> ScrollFraction {
    let document_height = metrics.scrollable_distance();
    if document_height <= 0.0 {
        return ScrollFraction::COMPLETE;
    }
    ScrollFraction::new(metrics.scroll_offset / document_height * 100.0)
}

type Observer = Box<dyn FnMut(ScrollFraction)>;

#[derive(Default)]
struct TrackerState {
    progress: Cell<ScrollFraction>,
    observers: RefCell<Vec<Observer>>,
}

impl TrackerState {
    fn update(&self, metrics: &ViewportMetrics) -> ScrollFraction {
        let progress = sample(metrics);
        self.progress.set(progress);

        // Observers registered while notifying are kept for the next update
        let mut observers = self.observers.take();
        for observer in observers.iter_mut() {
            observer(progress);
        }
        let mut current = self.observers.borrow_mut();
        observers.append(&mut current);
        *current = observers;

        progress
    }
}

/// Tracks reading progress of a scrollable viewport.
///
/// Mounting samples once and registers passive scroll and resize listeners.
/// Both listeners are removed together on [`unmount`](Self::unmount) or when
/// the tracker is dropped.
pub struct ScrollProgressTracker {
    host: Rc<dyn ViewportHost>,
    state: Rc<TrackerState>,
    guard: ListenerGuard,
}

impl ScrollProgressTracker {
    /// Mount a tracker on `host`.
    pub fn mount<H>(host: Rc<H>) -> Self
    where
        H: ViewportHost + 'static,
    {
        let host: Rc<dyn ViewportHost> = host;
        let state = Rc::new(TrackerState::default());
        state.update(&host.metrics());

        let ids = [ViewportEvent::Scroll, ViewportEvent::Resize]
            .into_iter()
            .map(|event| {
                let state = Rc::downgrade(&state);
                host.add_listener(
                    event,
                    ListenerOptions::passive(),
                    Box::new(move |metrics: &ViewportMetrics| {
                        if let Some(state) = state.upgrade() {
                            state.update(metrics);
                        }
                    }),
                )
            })
            .collect::<Vec<_>>();

        log::debug!("scroll tracker mounted at {}", state.progress.get());

        Self {
            guard: ListenerGuard::new(Rc::clone(&host), ids),
            host,
            state,
        }
    }

    /// Current progress.
    pub fn progress(&self) -> ScrollFraction {
        self.state.progress.get()
    }

    /// Re-read the host metrics and update progress.
    ///
    /// Safe to call any number of times; only the latest value is kept.
    pub fn sample(&self) -> ScrollFraction {
        self.state.update(&self.host.metrics())
    }

    /// Register an observer called with every new progress value.
    pub fn subscribe(&self, observer: impl FnMut(ScrollFraction) + 'static) {
        self.state.observers.borrow_mut().push(Box::new(observer));
    }

    /// Whether the tracker is still listening to the host.
    pub fn is_mounted(&self) -> bool {
        self.guard.is_active()
    }

    /// Remove both listeners. Progress keeps its last value.
    pub fn unmount(&mut self) {
        if self.guard.is_active() {
            log::debug!("scroll tracker unmounted at {}", self.progress());
        }
        self.guard.release();
    }
}

impl std::fmt::Debug for ScrollProgressTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollProgressTracker")
            .field("progress", &self.progress())
            .field("guard", &self.guard)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::SimulatedViewport;

    #[test]
    fn test_sample_nothing_to_scroll() {
        let fits = ViewportMetrics::new(800.0, 800.0, 0.0);
        assert_eq!(sample(&fits), ScrollFraction::COMPLETE);

        let shorter = ViewportMetrics::new(800.0, 300.0, 0.0);
        assert_eq!(sample(&shorter), ScrollFraction::COMPLETE);

        let shorter_scrolled = ViewportMetrics::new(800.0, 300.0, 250.0);
        assert_eq!(sample(&shorter_scrolled).percent(), 100.0);
    }

    #[test]
    fn test_sample_at_top() {
        assert_eq!(sample(&ViewportMetrics::new(800.0, 1800.0, 0.0)).percent(), 0.0);
    }

    #[test]
    fn test_sample_midway() {
        let progress = sample(&ViewportMetrics::new(500.0, 1500.0, 250.0));
        assert_eq!(progress.percent(), 25.0);
        assert_eq!(progress.ratio(), 0.25);
        assert_eq!(progress.to_string(), "25%");
    }

    #[test]
    fn test_sample_clamps_overscroll() {
        let past_end = ViewportMetrics::new(500.0, 1500.0, 1300.0);
        assert_eq!(sample(&past_end).percent(), 100.0);

        let above_top = ViewportMetrics::new(500.0, 1500.0, -40.0);
        assert_eq!(sample(&above_top).percent(), 0.0);
    }

    #[test]
    fn test_sample_nan_offset() {
        let progress = sample(&ViewportMetrics::new(500.0, 1500.0, f64::NAN));
        assert_eq!(progress, ScrollFraction::START);
    }

    #[test]
    fn test_fraction_new_clamps() {
        assert_eq!(ScrollFraction::new(150.0).percent(), 100.0);
        assert_eq!(ScrollFraction::new(-1.0).percent(), 0.0);
        assert!(ScrollFraction::new(100.0).is_complete());
        assert!(!ScrollFraction::new(99.5).is_complete());
    }

    #[test]
    fn test_mount_samples_immediately() {
        let viewport = Rc::new(SimulatedViewport::with_metrics(ViewportMetrics::new(
            400.0, 1400.0, 500.0,
        )));
        let tracker = ScrollProgressTracker::mount(viewport.clone());
        assert_eq!(tracker.progress().percent(), 50.0);
        assert!(tracker.is_mounted());
        assert_eq!(viewport.listener_count_for(ViewportEvent::Scroll), 1);
        assert_eq!(viewport.listener_count_for(ViewportEvent::Resize), 1);
        assert!(viewport.all_passive());
    }

    #[test]
    fn test_explicit_sample_reads_host() {
        let viewport = Rc::new(SimulatedViewport::new(100.0, 300.0));
        let tracker = ScrollProgressTracker::mount(viewport.clone());
        assert_eq!(tracker.sample().percent(), 0.0);
        assert_eq!(tracker.sample().percent(), 0.0);
    }

    #[test]
    fn test_observers_notified() {
        let viewport = Rc::new(SimulatedViewport::new(100.0, 300.0));
        let tracker = ScrollProgressTracker::mount(viewport.clone());

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        tracker.subscribe(move |p| sink.borrow_mut().push(p.percent()));

        viewport.scroll_to(100.0);
        viewport.scroll_to(200.0);
        assert_eq!(*seen.borrow(), vec![50.0, 100.0]);
    }

    #[test]
    fn test_unmount_stops_updates() {
        let viewport = Rc::new(SimulatedViewport::new(100.0, 300.0));
        let mut tracker = ScrollProgressTracker::mount(viewport.clone());

        viewport.scroll_to(50.0);
        assert_eq!(tracker.progress().percent(), 25.0);

        tracker.unmount();
        assert!(!tracker.is_mounted());
        assert_eq!(viewport.listener_count(), 0);

        viewport.scroll_to(200.0);
        assert_eq!(tracker.progress().percent(), 25.0);

        tracker.unmount();
    }
}

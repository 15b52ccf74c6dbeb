//! Viewport host abstraction.
//!
//! A host is whatever owns the scrollable viewport: a browser window, a
//! webview, a terminal pager or the in-memory [`SimulatedViewport`] used in
//! tests. The tracker only needs current measurements and a way to register
//! scroll and resize callbacks.

use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Viewport measurements at a point in time, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewportMetrics {
    /// Visible viewport height
    pub viewport_height: f64,

    /// Total height of the scrollable document
    pub scroll_height: f64,

    /// Current vertical scroll position
    pub scroll_offset: f64,
}

impl ViewportMetrics {
    /// Create new metrics.
    pub fn new(viewport_height: f64, scroll_height: f64, scroll_offset: f64) -> Self {
        Self {
            viewport_height,
            scroll_height,
            scroll_offset,
        }
    }

    /// Maximum possible scroll offset (`scroll_height - viewport_height`).
    pub fn scrollable_distance(&self) -> f64 {
        self.scroll_height - self.viewport_height
    }
}

/// Viewport events the tracker listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewportEvent {
    /// The scroll offset changed
    Scroll,
    /// The viewport was resized
    Resize,
}

impl ViewportEvent {
    /// DOM-style event name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewportEvent::Scroll => "scroll",
            ViewportEvent::Resize => "resize",
        }
    }
}

/// Options passed along with a listener registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListenerOptions {
    /// The listener never cancels the event
    pub passive: bool,
}

impl ListenerOptions {
    /// Options for a passive listener.
    pub fn passive() -> Self {
        Self { passive: true }
    }
}

/// Handle identifying a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// Callback invoked with fresh metrics whenever an event fires.
pub type Listener = Box<dyn FnMut(&ViewportMetrics)>;

/// Host environment providing viewport measurements and event subscriptions.
///
/// Hosts are single-threaded and shared through `Rc`, so every method takes
/// `&self` and implementations use interior mutability.
pub trait ViewportHost {
    /// Current viewport measurements.
    fn metrics(&self) -> ViewportMetrics;

    /// Register `listener` for `event`.
    fn add_listener(
        &self,
        event: ViewportEvent,
        options: ListenerOptions,
        listener: Listener,
    ) -> ListenerId;

    /// Deregister a listener. Returns `false` if it was not registered.
    fn remove_listener(&self, id: ListenerId) -> bool;
}

/// Removes a set of listeners from a host when dropped.
///
/// All listeners held by one guard are removed together, whether the guard
/// is released explicitly, dropped normally, or dropped during unwinding.
pub struct ListenerGuard {
    host: Rc<dyn ViewportHost>,
    ids: Vec<ListenerId>,
}

impl ListenerGuard {
    /// Create a guard owning `ids` registered on `host`.
    pub fn new(host: Rc<dyn ViewportHost>, ids: Vec<ListenerId>) -> Self {
        Self { host, ids }
    }

    /// Whether the guard still owns registered listeners.
    pub fn is_active(&self) -> bool {
        !self.ids.is_empty()
    }

    /// Remove every owned listener. Calling this again is a no-op.
    pub fn release(&mut self) {
        for id in std::mem::take(&mut self.ids) {
            if !self.host.remove_listener(id) {
                log::warn!("listener {:?} was already removed from host", id);
            }
        }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerGuard")
            .field("ids", &self.ids)
            .finish_non_exhaustive()
    }
}

struct Registration {
    id: ListenerId,
    event: ViewportEvent,
    options: ListenerOptions,
    listener: Rc<RefCell<Listener>>,
}

/// In-memory viewport host that dispatches events synchronously.
///
/// ```
/// use pagepulse::scroll::{ScrollProgressTracker, SimulatedViewport};
/// use std::rc::Rc;
///
/// let viewport = Rc::new(SimulatedViewport::new(800.0, 2800.0));
/// let tracker = ScrollProgressTracker::mount(viewport.clone());
/// assert_eq!(tracker.progress().percent(), 0.0);
///
/// viewport.scroll_to(1000.0);
/// assert_eq!(tracker.progress().percent(), 50.0);
/// ```
#[derive(Default)]
pub struct SimulatedViewport {
    metrics: Cell<ViewportMetrics>,
    registrations: RefCell<Vec<Registration>>,
    next_id: Cell<u64>,
}

impl SimulatedViewport {
    /// Create a viewport scrolled to the top.
    pub fn new(viewport_height: f64, scroll_height: f64) -> Self {
        Self::with_metrics(ViewportMetrics::new(viewport_height, scroll_height, 0.0))
    }

    /// Create a viewport with explicit metrics.
    pub fn with_metrics(metrics: ViewportMetrics) -> Self {
        Self {
            metrics: Cell::new(metrics),
            ..Default::default()
        }
    }

    /// Scroll to `offset` and fire a scroll event.
    pub fn scroll_to(&self, offset: f64) {
        let mut metrics = self.metrics.get();
        metrics.scroll_offset = offset;
        self.metrics.set(metrics);
        self.dispatch(ViewportEvent::Scroll);
    }

    /// Change viewport and document heights and fire a resize event.
    pub fn resize(&self, viewport_height: f64, scroll_height: f64) {
        let mut metrics = self.metrics.get();
        metrics.viewport_height = viewport_height;
        metrics.scroll_height = scroll_height;
        self.metrics.set(metrics);
        self.dispatch(ViewportEvent::Resize);
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.registrations.borrow().len()
    }

    /// Number of registered listeners for one event type.
    pub fn listener_count_for(&self, event: ViewportEvent) -> usize {
        self.registrations
            .borrow()
            .iter()
            .filter(|r| r.event == event)
            .count()
    }

    /// Whether every registered listener is passive.
    pub fn all_passive(&self) -> bool {
        self.registrations.borrow().iter().all(|r| r.options.passive)
    }

    /// Invoke every listener registered for `event`.
    pub fn dispatch(&self, event: ViewportEvent) {
        let metrics = self.metrics.get();
        // Snapshot so listeners may add or remove registrations while running
        let listeners: Vec<_> = self
            .registrations
            .borrow()
            .iter()
            .filter(|r| r.event == event)
            .map(|r| Rc::clone(&r.listener))
            .collect();

        for listener in listeners {
            match listener.try_borrow_mut() {
                Ok(mut callback) => (*callback)(&metrics),
                Err(_) => log::trace!("skipping re-entrant {} listener", event.as_str()),
            }
        }
    }
}

impl ViewportHost for SimulatedViewport {
    fn metrics(&self) -> ViewportMetrics {
        self.metrics.get()
    }

    fn add_listener(
        &self,
        event: ViewportEvent,
        options: ListenerOptions,
        listener: Listener,
    ) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        log::trace!("registered {} listener {:?}", event.as_str(), id);
        self.registrations.borrow_mut().push(Registration {
            id,
            event,
            options,
            listener: Rc::new(RefCell::new(listener)),
        });
        id
    }

    fn remove_listener(&self, id: ListenerId) -> bool {
        let mut registrations = self.registrations.borrow_mut();
        let before = registrations.len();
        registrations.retain(|r| r.id != id);
        let removed = registrations.len() != before;
        if removed {
            log::trace!("removed listener {:?}", id);
        }
        removed
    }
}

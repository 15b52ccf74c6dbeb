//! Scroll progress tracking for long-form content.
//!
//! [`sample`] is a pure function from viewport metrics to a
//! [`ScrollFraction`]. [`ScrollProgressTracker`] keeps that value current by
//! listening to a [`ViewportHost`].

mod host;
mod tracker;

pub use host::{
    Listener, ListenerGuard, ListenerId, ListenerOptions, SimulatedViewport, ViewportEvent,
    ViewportHost, ViewportMetrics,
};
pub use tracker::{sample, ScrollFraction, ScrollProgressTracker};

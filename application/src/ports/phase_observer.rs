//! Phase observer port.
//!
//! [`PhaseObserver`] is an **output port** through which the presentation
//! layer follows a running turn. Every [`PhaseEvent`] is delivered
//! synchronously at the point where it happens, in order; the same sequence
//! is also returned in the turn outcome.
//!
//! Observers that only care about capability activity can implement the
//! two hooks instead of `on_event`:
//!
//! ```ignore
//! use hospital_application::ports::phase_observer::PhaseObserver;
//!
//! struct Indicator;
//!
//! impl PhaseObserver for Indicator {
//!     fn on_capability_start(&self, group: CapabilityGroup) {
//!         println!("{} is working...", group);
//!     }
//! }
//! ```

use hospital_domain::{CapabilityGroup, PhaseEvent};

/// Receiver of phase-transition events.
///
/// All methods have default implementations. The default `on_event`
/// forwards capability events to the two hooks.
pub trait PhaseObserver: Send + Sync {
    /// Called for every event of the turn
    fn on_event(&self, event: &PhaseEvent) {
        match event {
            PhaseEvent::CapabilityStarted { group, .. } => self.on_capability_start(*group),
            PhaseEvent::CapabilityEnded { .. } => self.on_capability_end(),
            _ => {}
        }
    }

    /// Called right before the capability executes
    fn on_capability_start(&self, _group: CapabilityGroup) {}

    /// Called once the capability result is available, success or not
    fn on_capability_end(&self) {}
}

/// Observer that ignores everything.
pub struct NoPhaseObserver;

impl PhaseObserver for NoPhaseObserver {}

/// Adapts two closures to the capability hooks.
pub struct CallbackObserver<S, E>
where
    S: Fn(CapabilityGroup) + Send + Sync,
    E: Fn() + Send + Sync,
{
    on_start: S,
    on_end: E,
}

impl<S, E> CallbackObserver<S, E>
where
    S: Fn(CapabilityGroup) + Send + Sync,
    E: Fn() + Send + Sync,
{
    pub fn new(on_start: S, on_end: E) -> Self {
        Self { on_start, on_end }
    }
}

impl<S, E> PhaseObserver for CallbackObserver<S, E>
where
    S: Fn(CapabilityGroup) + Send + Sync,
    E: Fn() + Send + Sync,
{
    fn on_capability_start(&self, group: CapabilityGroup) {
        (self.on_start)(group);
    }

    fn on_capability_end(&self) {
        (self.on_end)();
    }
}

/// Fans events out to several observers, in order.
pub struct CompositePhaseObserver<'a> {
    delegates: Vec<&'a dyn PhaseObserver>,
}

impl<'a> CompositePhaseObserver<'a> {
    pub fn new(delegates: Vec<&'a dyn PhaseObserver>) -> Self {
        Self { delegates }
    }
}

impl PhaseObserver for CompositePhaseObserver<'_> {
    fn on_event(&self, event: &PhaseEvent) {
        for d in &self.delegates {
            d.on_event(event);
        }
    }
}

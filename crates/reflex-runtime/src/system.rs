//! Runtime system trait

use crate::event_bus::EventBus;
use std::time::Duration;

/// A system that can be ticked by the frame loop
///
/// Systems are updated in registration order, once per fixed step. They never
/// touch game state directly; anything they want to happen is pushed onto the
/// bus and applied by the session when it drains.
pub trait RuntimeSystem {
    /// Called once per fixed step with the step duration
    fn update(&mut self, dt: Duration, bus: &mut EventBus);

    /// Human-readable name for this system
    fn name(&self) -> &str;
}

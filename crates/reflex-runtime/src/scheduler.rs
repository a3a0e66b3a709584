//! Spawn and countdown schedules

use crate::event::GameEvent;
use crate::event_bus::EventBus;
use crate::system::RuntimeSystem;
use crate::timer::IntervalTimer;
use std::time::Duration;

/// Owns the two recurring schedules and turns elapsed time into tick events.
///
/// Within one update, spawn ticks are pushed before countdown ticks.
pub struct Scheduler {
    spawn: IntervalTimer,
    countdown: IntervalTimer,
}

impl Scheduler {
    pub fn new(spawn_interval: Duration, countdown_interval: Duration) -> Self {
        Self {
            spawn: IntervalTimer::new(spawn_interval),
            countdown: IntervalTimer::new(countdown_interval),
        }
    }

    /// Stop the countdown schedule. Called when the session ends.
    pub fn cancel_countdown(&mut self) {
        if !self.countdown.is_cancelled() {
            tracing::debug!("countdown schedule cancelled");
        }
        self.countdown.cancel();
    }

    pub fn countdown_cancelled(&self) -> bool {
        self.countdown.is_cancelled()
    }

    /// Restart both schedules from zero
    pub fn rearm(&mut self) {
        self.spawn.rearm();
        self.countdown.rearm();
    }
}

impl RuntimeSystem for Scheduler {
    fn update(&mut self, dt: Duration, bus: &mut EventBus) {
        for _ in 0..self.spawn.advance(dt) {
            bus.push(GameEvent::SpawnTick);
        }
        for _ in 0..self.countdown.advance(dt) {
            bus.push(GameEvent::CountdownTick);
        }
    }

    fn name(&self) -> &str {
        "scheduler"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduler() -> Scheduler {
        Scheduler::new(Duration::from_millis(700), Duration::from_millis(1000))
    }

    #[test]
    fn emits_spawn_before_countdown() {
        let mut sched = scheduler();
        let mut bus = EventBus::new();

        sched.update(Duration::from_millis(1000), &mut bus);
        assert_eq!(
            bus.drain(),
            vec![GameEvent::SpawnTick, GameEvent::CountdownTick]
        );
    }

    #[test]
    fn emits_nothing_before_first_period() {
        let mut sched = scheduler();
        let mut bus = EventBus::new();

        sched.update(Duration::from_millis(699), &mut bus);
        assert!(bus.is_empty());
    }

    #[test]
    fn cancelled_countdown_stops_ticking() {
        let mut sched = scheduler();
        let mut bus = EventBus::new();

        sched.cancel_countdown();
        assert!(sched.countdown_cancelled());
        sched.update(Duration::from_millis(1400), &mut bus);
        assert_eq!(bus.drain(), vec![GameEvent::SpawnTick, GameEvent::SpawnTick]);
    }

    #[test]
    fn rearm_restores_countdown() {
        let mut sched = scheduler();
        let mut bus = EventBus::new();

        sched.cancel_countdown();
        sched.rearm();
        sched.update(Duration::from_millis(1000), &mut bus);
        assert!(bus.drain().contains(&GameEvent::CountdownTick));
    }
}

//! FIFO queue between event producers and the session

use crate::event::GameEvent;
use std::collections::VecDeque;

/// Producers (timers, input, scripted players) push; the session pops in
/// arrival order until the queue is empty.
#[derive(Debug, Default)]
pub struct EventBus {
    queue: VecDeque<GameEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        self.queue.push_back(event);
    }

    pub fn extend(&mut self, events: impl IntoIterator<Item = GameEvent>) {
        self.queue.extend(events);
    }

    /// Oldest pending event
    pub fn pop(&mut self) -> Option<GameEvent> {
        self.queue.pop_front()
    }

    /// Take every pending event, oldest first
    pub fn drain(&mut self) -> Vec<GameEvent> {
        self.queue.drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reflex_core::TargetId;

    #[test]
    fn pops_in_arrival_order() {
        let mut bus = EventBus::new();
        bus.push(GameEvent::SpawnTick);
        bus.extend([GameEvent::CountdownTick, GameEvent::Click(Some(TargetId(3)))]);
        assert_eq!(bus.len(), 3);

        assert_eq!(bus.pop(), Some(GameEvent::SpawnTick));
        assert_eq!(bus.pop(), Some(GameEvent::CountdownTick));
        assert_eq!(bus.pop(), Some(GameEvent::Click(Some(TargetId(3)))));
        assert_eq!(bus.pop(), None);
    }

    #[test]
    fn drain_empties_queue() {
        let mut bus = EventBus::new();
        bus.push(GameEvent::Click(None));
        bus.push(GameEvent::Reset);

        assert_eq!(bus.drain(), vec![GameEvent::Click(None), GameEvent::Reset]);
        assert!(bus.is_empty());
        assert!(bus.drain().is_empty());
    }
}

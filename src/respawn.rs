use glam::Vec2;
use std::collections::VecDeque;

/// FIFO of food positions waiting to be released back into the arena at a fixed cadence.
#[derive(Debug, Clone, Default)]
pub struct RespawnQueue {
    pending: VecDeque<Vec2>,
}

impl RespawnQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, position: Vec2) {
        self.pending.push_back(position);
    }

    /// Pops the oldest entry when `tick` falls on the release cadence.
    /// An empty queue or an off-cadence tick releases nothing.
    pub fn release(&mut self, tick: u64, interval_ticks: u64) -> Option<Vec2> {
        if interval_ticks == 0 || tick % interval_ticks != 0 {
            return None;
        }
        self.pending.pop_front()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn releases_one_entry_per_cadence_tick_in_fifo_order() {
        let mut queue = RespawnQueue::new();
        queue.enqueue(Vec2::new(1.0, 1.0));
        queue.enqueue(Vec2::new(2.0, 2.0));
        queue.enqueue(Vec2::new(3.0, 3.0));

        assert_eq!(queue.release(14, 15), None);
        assert_eq!(queue.release(15, 15), Some(Vec2::new(1.0, 1.0)));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.release(16, 15), None);
        assert_eq!(queue.release(30, 15), Some(Vec2::new(2.0, 2.0)));
        assert_eq!(queue.release(45, 15), Some(Vec2::new(3.0, 3.0)));
        assert!(queue.is_empty());
    }

    #[test]
    fn empty_queue_is_a_no_op() {
        let mut queue = RespawnQueue::new();
        assert_eq!(queue.release(15, 15), None);
        assert!(queue.is_empty());
    }
}

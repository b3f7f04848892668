//! Position history for trail rendering

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Upper bound on up-front allocation for large caps
const PREALLOCATE_LIMIT: usize = 1024;

/// Ordered history of positions, oldest first.
///
/// With a capacity the buffer behaves as a ring: pushing past the cap evicts
/// the oldest point. Without one it grows for as long as the run lasts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraceBuffer {
    points: VecDeque<Vec2>,
    capacity: Option<usize>,
}

impl TraceBuffer {
    /// Ring buffer holding at most `capacity` points
    pub fn bounded(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity.min(PREALLOCATE_LIMIT)),
            capacity: Some(capacity),
        }
    }

    /// Append-only buffer with no cap
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn push(&mut self, point: Vec2) {
        match self.capacity {
            Some(0) => {}
            Some(cap) => {
                while self.points.len() >= cap {
                    self.points.pop_front();
                }
                self.points.push_back(point);
            }
            None => self.points.push_back(point),
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Change the cap, evicting the oldest points if already over it
    pub fn set_capacity(&mut self, capacity: Option<usize>) {
        self.capacity = capacity;
        if let Some(cap) = capacity {
            while self.points.len() > cap {
                self.points.pop_front();
            }
        }
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Most recently recorded point
    pub fn last(&self) -> Option<Vec2> {
        self.points.back().copied()
    }

    /// Points from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.points.iter().copied()
    }
}

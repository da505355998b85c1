use crate::prelude::*;
use std::collections::VecDeque;

/// Bounded FIFO of the weight-delta matrices of recent epochs.
///
/// Once the window is full, a new delta whose sign opposes the summed history
/// at the same position is treated as an oscillation and suppressed. A window
/// of capacity 0 disables the mechanism: `push` stores nothing and `gate`
/// passes every delta through.
#[derive(Debug, Clone)]
pub struct MomentumWindow {
    capacity: usize,
    history: VecDeque<Array2<f64>>,
}

impl MomentumWindow {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            history: VecDeque::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_enabled(&self) -> bool {
        self.capacity > 0
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.is_enabled() && self.history.len() == self.capacity
    }

    /// Oldest entry first.
    pub fn iter(&self) -> impl Iterator<Item = &Array2<f64>> {
        self.history.iter()
    }

    pub fn push(&mut self, delta: Array2<f64>) {
        if !self.is_enabled() {
            return;
        }
        self.history.push_back(delta);
        while self.history.len() > self.capacity {
            self.history.pop_front();
        }
    }

    pub fn gate(&self, current: f64, row: usize, col: usize) -> f64 {
        if !self.is_full() {
            return current;
        }
        let sum: f64 = self.history.iter().map(|w| w[[row, col]]).sum();
        if current * sum < 0.0 {
            0.0
        } else {
            current
        }
    }
}

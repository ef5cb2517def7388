use std::collections::{vec_deque, VecDeque};

use crate::{constants::MAX_PATH_LENGTH, world::point::Point};

/// Bounded FIFO of position samples; the oldest sample is evicted once the
/// capacity is reached
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    points: VecDeque<Point>,
    capacity: usize,
}

impl Path {
    pub fn new(first: Point) -> Self {
        Self::with_capacity(first, MAX_PATH_LENGTH)
    }

    pub fn with_capacity(first: Point, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let mut points = VecDeque::with_capacity(capacity.min(MAX_PATH_LENGTH));
        points.push_back(first);
        Self { points, capacity }
    }

    pub fn push(&mut self, point: Point) {
        self.points.push_back(point);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn last(&self) -> Option<&Point> {
        self.points.back()
    }

    pub fn first(&self) -> Option<&Point> {
        self.points.front()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> vec_deque::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn to_vec(&self) -> Vec<Point> {
        self.points.iter().copied().collect()
    }
}

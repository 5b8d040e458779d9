//! Bounded position history per body, oldest point first.

use std::collections::VecDeque;

use crate::simulation::params::TRAIL_MIN_SPACING;
use crate::simulation::states::{distance, NVec2};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trail {
    points: VecDeque<NVec2>,
}

impl Trail {
    pub fn new() -> Self {
        Self {
            points: VecDeque::new(),
        }
    }

    /// Record `position` if the trail is empty or the body has moved more
    /// than [`TRAIL_MIN_SPACING`] since the last point, then evict from the
    /// front down to `max_len`. Returns whether a point was appended.
    pub fn record(&mut self, position: NVec2, max_len: usize) -> bool {
        let moved = match self.points.back() {
            None => true,
            Some(last) => distance(last, &position) > TRAIL_MIN_SPACING,
        };
        if !moved {
            return false;
        }

        self.points.push_back(position);
        while self.points.len() > max_len {
            self.points.pop_front();
        }
        true
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last(&self) -> Option<&NVec2> {
        self.points.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NVec2> {
        self.points.iter()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

impl FromIterator<NVec2> for Trail {
    fn from_iter<I: IntoIterator<Item = NVec2>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

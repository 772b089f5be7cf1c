use serde::{Deserialize, Serialize};

use crate::geometry::NormalizedPoint;

// Ordered shot plot for one diagram. Append-only apart from a pop-last
// undo; cleared wholesale by explicit user action.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ShotSet {
    points: Vec<NormalizedPoint>,
}

impl ShotSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plot(&mut self, point: NormalizedPoint) {
        self.points.push(point);
    }

    pub fn undo_last(&mut self) -> Option<NormalizedPoint> {
        self.points.pop()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn points(&self) -> &[NormalizedPoint] {
        &self.points
    }

    pub fn replace(&mut self, points: Vec<NormalizedPoint>) {
        self.points = points;
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

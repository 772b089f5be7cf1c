use serde::{Deserialize, Serialize};

// Position as a fraction of a surface's own width and height, so the same
// point lands at the same relative location on any surface.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPoint {
    pub nx: f64,
    pub ny: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }
}

impl NormalizedPoint {
    // Degenerate surfaces yield nothing rather than a division by zero.
    pub fn from_pixels(x: f64, y: f64, size: SurfaceSize) -> Option<Self> {
        if size.width <= 0.0 || size.height <= 0.0 {
            return None;
        }
        Some(Self {
            nx: x / size.width,
            ny: y / size.height,
        })
    }

    pub fn to_pixels(&self, size: SurfaceSize) -> (f64, f64) {
        (self.nx * size.width, self.ny * size.height)
    }
}

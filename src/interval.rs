//! Interval arithmetic for ray parameter ranges.
//!
//! Hit distances are only accepted strictly inside an interval, so the same
//! type serves the primary visibility window and the shadow windows.

/// Interval (min, max) of acceptable ray parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Minimum value of the interval
    pub min: f32,
    /// Maximum value of the interval
    pub max: f32,
}

impl Interval {
    /// Create a new interval with given min and max values
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Check if the interval surrounds the given value (exclusive bounds)
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    /// Same lower bound, narrower upper bound.
    pub fn with_max(&self, max: f32) -> Self {
        Self { min: self.min, max }
    }
}

/// Commonly used interval constants
impl Interval {
    /// Primary visibility: everything beyond the projection plane.
    pub const PRIMARY: Interval = Interval {
        min: 1.0,
        max: f32::INFINITY,
    };

    /// Lower bound for shadow rays, keeps a surface from shadowing itself.
    pub const SHADOW_EPSILON: f32 = 0.001;

    /// Shadow window towards a point light, which sits at t = 1 along the
    /// unnormalized point-to-light vector.
    pub const POINT_SHADOW: Interval = Interval {
        min: Self::SHADOW_EPSILON,
        max: 1.0,
    };

    /// Shadow window towards a directional light at infinity.
    pub const DIRECTIONAL_SHADOW: Interval = Interval {
        min: Self::SHADOW_EPSILON,
        max: f32::INFINITY,
    };
}

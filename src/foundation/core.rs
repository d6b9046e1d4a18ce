pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Beats-per-minute signal driving the animation cycle.
///
/// Carried as a raw scalar so hosts can feed sensor output straight in;
/// all policy (flooring invalid or implausibly low values) is applied at
/// use via [`Bpm::floored`].
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct Bpm(pub f64);

impl Bpm {
    /// Raw scalar value, unclamped.
    pub fn as_f64(self) -> f64 {
        self.0
    }

    /// Clamp to `floor`: non-finite values become `floor`, finite values are
    /// raised to at least `floor`. Keeps downstream cycle math away from
    /// division blow-ups on zero/negative/NaN input.
    pub fn floored(self, floor: f64) -> f64 {
        if self.0.is_finite() { self.0.max(floor) } else { floor }
    }
}

impl From<f64> for Bpm {
    fn from(v: f64) -> Self {
        Self(v)
    }
}

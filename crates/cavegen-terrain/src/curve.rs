//! Keyframed response curve used to shape the hill profile across the map.

use serde::{Deserialize, Serialize};

/// A single `(time, value)` keyframe.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurveKey {
    /// Position along the curve, usually in `[0, 1]`.
    pub time: f64,
    /// Curve value at `time`.
    pub value: f64,
}

impl CurveKey {
    /// Create a keyframe.
    pub const fn new(time: f64, value: f64) -> Self {
        Self { time, value }
    }
}

/// Piecewise-linear curve sampled on `[0, 1]`.
///
/// Values are not restricted to `[0, 1]`. Sampling before the first key or
/// after the last key holds the end value. A curve with no keys evaluates to
/// `1.0` so the hill profile falls back to raw noise.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseCurve {
    keys: Vec<CurveKey>,
}

impl ResponseCurve {
    /// Build a curve from keyframes. Keys are sorted by time.
    pub fn new(mut keys: Vec<CurveKey>) -> Self {
        keys.sort_by(|a, b| a.time.total_cmp(&b.time));
        Self { keys }
    }

    /// The identity ramp from `(0, 0)` to `(1, 1)`.
    pub fn linear() -> Self {
        Self::new(vec![CurveKey::new(0.0, 0.0), CurveKey::new(1.0, 1.0)])
    }

    /// A curve that returns `value` everywhere.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![CurveKey::new(0.0, value)])
    }

    /// The keyframes, in time order.
    pub fn keys(&self) -> &[CurveKey] {
        &self.keys
    }

    /// Sample the curve at `t`.
    pub fn evaluate(&self, t: f64) -> f64 {
        let (Some(first), Some(last)) = (self.keys.first(), self.keys.last()) else {
            return 1.0;
        };
        if t <= first.time {
            return first.value;
        }
        if t >= last.time {
            return last.value;
        }

        // `keys` is sorted and t is strictly inside the span, so a segment exists.
        let upper = self.keys.partition_point(|k| k.time <= t);
        let a = self.keys[upper - 1];
        let b = self.keys[upper];
        let span = b.time - a.time;
        if span <= 0.0 {
            return b.value;
        }
        a.value + (b.value - a.value) * ((t - a.time) / span)
    }
}

impl Default for ResponseCurve {
    fn default() -> Self {
        Self::linear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_linear_is_identity() {
        let curve = ResponseCurve::linear();
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            assert!((curve.evaluate(t) - t).abs() < EPSILON);
        }
    }

    #[test]
    fn test_holds_end_values_outside_domain() {
        let curve = ResponseCurve::new(vec![CurveKey::new(0.2, 0.5), CurveKey::new(0.8, 0.9)]);
        assert_eq!(curve.evaluate(-1.0), 0.5);
        assert_eq!(curve.evaluate(0.0), 0.5);
        assert_eq!(curve.evaluate(1.0), 0.9);
        assert_eq!(curve.evaluate(5.0), 0.9);
    }

    #[test]
    fn test_piecewise_interpolation() {
        let curve = ResponseCurve::new(vec![
            CurveKey::new(1.0, 0.0),
            CurveKey::new(0.0, 0.0),
            CurveKey::new(0.5, 1.0),
        ]);
        assert!((curve.evaluate(0.25) - 0.5).abs() < EPSILON);
        assert!((curve.evaluate(0.5) - 1.0).abs() < EPSILON);
        assert!((curve.evaluate(0.75) - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_values_outside_unit_range_pass_through() {
        let curve = ResponseCurve::constant(2.5);
        assert_eq!(curve.evaluate(0.3), 2.5);
    }

    #[test]
    fn test_empty_curve_evaluates_to_one() {
        let curve = ResponseCurve::new(Vec::new());
        assert_eq!(curve.evaluate(0.4), 1.0);
    }

    #[test]
    fn test_ron_form_is_a_key_list() {
        let curve = ResponseCurve::linear();
        let text = ron::to_string(&curve).unwrap();
        let back: ResponseCurve = ron::from_str(&text).unwrap();
        assert_eq!(back, curve);
        assert!(text.starts_with('['));
    }
}

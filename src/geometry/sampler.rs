use kurbo::{CubicBez, ParamCurve};

use crate::{
    foundation::core::{BezPath, Point},
    geometry::command::{PathCommand, commands_from_bez_path},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Tunables applied when building a [`SampledCurve`].
pub struct BuildOptions {
    /// Number of straight chords each `CurveTo` flattens into.
    ///
    /// The default of 1 approximates a curve by its start-to-end chord;
    /// higher values sample the true cubic for better arc-length fidelity.
    /// Values below 1 are treated as 1.
    #[serde(default = "default_curve_chords")]
    pub curve_chords: u32,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            curve_chords: default_curve_chords(),
        }
    }
}

fn default_curve_chords() -> u32 {
    1
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// One straight piece of a flattened path, annotated with its length.
pub struct Segment {
    /// Segment start point.
    pub start: Point,
    /// Segment end point.
    pub end: Point,
    /// Euclidean length, always finite and > 0 for stored segments.
    pub length: f64,
}

#[derive(Clone, Debug, PartialEq)]
/// An arc-length-parametrized polyline derived from a command sequence.
///
/// Built once per distinct path and immutable thereafter; a changed path
/// needs a fresh build. Queries are pure: for a fixed `(curve, t)` the
/// result is bit-reproducible.
pub struct SampledCurve {
    segments: Vec<Segment>,
    /// Cumulative arc length at each segment's end; strictly increasing.
    cumulative: Vec<f64>,
    total_length: f64,
    origin: Point,
}

impl SampledCurve {
    /// Flatten `commands` into a sampled curve with default [`BuildOptions`].
    pub fn build(commands: &[PathCommand]) -> Self {
        Self::build_with(commands, BuildOptions::default())
    }

    #[tracing::instrument(skip(commands, opts), fields(commands = commands.len()))]
    /// Flatten `commands` into a sampled curve.
    ///
    /// `MoveTo` repositions the pen without emitting geometry; `LineTo` and
    /// `CurveTo` advance it and emit chords; `ClosePath` emits a synthetic
    /// segment back to the first segment's start. Zero-length and non-finite
    /// chords are dropped so the cumulative length table stays strictly
    /// increasing and NaN-free. Degenerate input (no commands, or zero total
    /// length) is valid and yields a curve whose queries all resolve to the
    /// fallback origin.
    pub fn build_with(commands: &[PathCommand], opts: BuildOptions) -> Self {
        let chords = opts.curve_chords.max(1);

        let mut segments: Vec<Segment> = Vec::new();
        let mut cumulative: Vec<f64> = Vec::new();
        let mut total_length = 0.0_f64;
        let mut pen = Point::ORIGIN;
        let mut origin: Option<Point> = None;

        fn push(
            segments: &mut Vec<Segment>,
            cumulative: &mut Vec<f64>,
            total_length: &mut f64,
            start: Point,
            end: Point,
        ) {
            let length = start.distance(end);
            if !length.is_finite() || length <= 0.0 {
                return;
            }
            *total_length += length;
            segments.push(Segment { start, end, length });
            cumulative.push(*total_length);
        }

        for command in commands {
            match *command {
                PathCommand::MoveTo { to } => {
                    origin.get_or_insert(to);
                    pen = to;
                }
                PathCommand::LineTo { to } => {
                    origin.get_or_insert(pen);
                    push(&mut segments, &mut cumulative, &mut total_length, pen, to);
                    pen = to;
                }
                PathCommand::CurveTo { to, ctrl1, ctrl2 } => {
                    origin.get_or_insert(pen);
                    if chords == 1 {
                        push(&mut segments, &mut cumulative, &mut total_length, pen, to);
                    } else {
                        let cubic = CubicBez::new(pen, ctrl1, ctrl2, to);
                        let mut prev = pen;
                        for k in 1..=chords {
                            // Land exactly on the end anchor, not on eval(1.0).
                            let next = if k == chords {
                                to
                            } else {
                                cubic.eval(f64::from(k) / f64::from(chords))
                            };
                            push(&mut segments, &mut cumulative, &mut total_length, prev, next);
                            prev = next;
                        }
                    }
                    pen = to;
                }
                PathCommand::ClosePath => {
                    if let Some(first) = segments.first() {
                        let target = first.start;
                        push(
                            &mut segments,
                            &mut cumulative,
                            &mut total_length,
                            pen,
                            target,
                        );
                        pen = target;
                    }
                }
            }
        }

        let origin = origin
            .or_else(|| segments.first().map(|s| s.start))
            .unwrap_or(Point::ORIGIN);

        tracing::debug!(
            segments = segments.len(),
            total_length,
            "sampled curve built"
        );

        Self {
            segments,
            cumulative,
            total_length,
            origin,
        }
    }

    /// Flatten a [`BezPath`] directly, with default [`BuildOptions`].
    pub fn from_bez_path(path: &BezPath) -> Self {
        Self::build(&commands_from_bez_path(path))
    }

    /// The point at normalized arc-length position `t`.
    ///
    /// `t` is clamped into [0, 1]; non-finite `t` reads as 0. Degenerate
    /// curves resolve every query to the fallback origin. Floating-point
    /// accumulation overshoot near `t == 1` resolves to the final segment's
    /// end point.
    pub fn point_at(&self, t: f64) -> Point {
        if self.segments.is_empty() || self.total_length <= 0.0 {
            return self.origin;
        }

        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let target = t * self.total_length;

        let idx = self.cumulative.partition_point(|&end| end < target);
        let Some(seg) = self.segments.get(idx) else {
            return self.segments[self.segments.len() - 1].end;
        };

        let start_length = self.cumulative[idx] - seg.length;
        let local = ((target - start_length) / seg.length).clamp(0.0, 1.0);
        seg.start.lerp(seg.end, local)
    }

    /// Flattened segments in path order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Total arc length; 0 for degenerate curves.
    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    /// Fallback point returned by queries on degenerate curves: the path's
    /// origin (first pen position), or `(0, 0)` if no origin exists.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Whether every query resolves to the fallback origin.
    pub fn is_degenerate(&self) -> bool {
        self.segments.is_empty() || self.total_length <= 0.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/sampler.rs"]
mod tests;

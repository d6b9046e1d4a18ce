use std::f64::consts::{FRAC_PI_2, TAU};

use crate::{
    foundation::core::Point,
    foundation::error::{BeatpathError, BeatpathResult},
    geometry::command::PathCommand,
};

/// Chord count for the key-1 circle; dense enough that constant-speed
/// traversal reads as circular motion.
const CIRCLE_CHORDS: usize = 48;

/// Inner-to-outer radius ratio for star shapes.
const STAR_INNER_RATIO: f64 = 0.45;

const ROSETTE_STEPS: usize = 144;
const ROSETTE_PETALS: f64 = 6.0;

/// Generate the command sequence for one of the built-in decorative shapes.
///
/// Keys 1–9 map to: circle, regular polygons with 3–7 vertices, five- and
/// six-point stars, and a petal rosette. Every shape starts with `MoveTo` at
/// its top vertex, advances clockwise (in y-down screen coordinates), ends
/// with `ClosePath`, and has non-zero arc length for any positive radius.
pub fn shape_commands(key: u8, center: Point, radius: f64) -> BeatpathResult<Vec<PathCommand>> {
    if !(1..=9).contains(&key) {
        return Err(BeatpathError::validation(format!(
            "shape key must be in 1..=9, got {key}"
        )));
    }
    if !radius.is_finite() || radius <= 0.0 {
        return Err(BeatpathError::validation(
            "shape radius must be finite and > 0",
        ));
    }

    Ok(match key {
        1 => ring(center, radius, CIRCLE_CHORDS),
        2..=6 => ring(center, radius, usize::from(key) + 1),
        7 => star(center, radius, 5),
        8 => star(center, radius, 6),
        _ => rosette(center, radius),
    })
}

/// Angle of the topmost vertex in y-down screen coordinates.
fn top_angle() -> f64 {
    -FRAC_PI_2
}

fn vertex(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

fn closed_polyline(points: impl IntoIterator<Item = Point>) -> Vec<PathCommand> {
    let mut iter = points.into_iter();
    let Some(first) = iter.next() else {
        return Vec::new();
    };

    let mut out = vec![PathCommand::MoveTo { to: first }];
    out.extend(iter.map(|to| PathCommand::LineTo { to }));
    out.push(PathCommand::ClosePath);
    out
}

fn ring(center: Point, radius: f64, vertices: usize) -> Vec<PathCommand> {
    closed_polyline((0..vertices).map(|i| {
        let angle = top_angle() + TAU * (i as f64) / (vertices as f64);
        vertex(center, radius, angle)
    }))
}

fn star(center: Point, radius: f64, points: usize) -> Vec<PathCommand> {
    let inner = radius * STAR_INNER_RATIO;
    let vertices = points * 2;
    closed_polyline((0..vertices).map(|i| {
        let r = if i % 2 == 0 { radius } else { inner };
        let angle = top_angle() + TAU * (i as f64) / (vertices as f64);
        vertex(center, r, angle)
    }))
}

fn rosette(center: Point, radius: f64) -> Vec<PathCommand> {
    closed_polyline((0..ROSETTE_STEPS).map(|i| {
        let angle = top_angle() + TAU * (i as f64) / (ROSETTE_STEPS as f64);
        let r = radius * (0.75 + 0.25 * (ROSETTE_PETALS * angle).sin());
        vertex(center, r, angle)
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/shapes.rs"]
mod tests;

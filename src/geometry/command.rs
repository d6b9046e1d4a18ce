use kurbo::PathEl;

use crate::{
    foundation::core::{BezPath, Point},
    foundation::error::{BeatpathError, BeatpathResult},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", content = "args")]
/// One step of a vector path definition.
///
/// This is a pure data model: it can be built programmatically (see
/// [`crate::shape_commands`]), extracted from vector assets (see
/// [`crate::perimeter_commands`]), or serialized/deserialized via Serde.
/// It is consumed by [`crate::SampledCurve::build`].
pub enum PathCommand {
    /// Move the pen without drawing.
    MoveTo {
        /// New pen position.
        to: Point,
    },
    /// Draw a straight line from the pen to `to`.
    LineTo {
        /// Line end point.
        to: Point,
    },
    /// Draw a cubic curve from the pen to `to`.
    ///
    /// The sampler approximates curves by their start-to-end chord unless
    /// asked to subdivide, so the control points only matter at elevated
    /// [`crate::BuildOptions::curve_chords`] settings.
    CurveTo {
        /// Curve end anchor.
        to: Point,
        /// First control point.
        ctrl1: Point,
        /// Second control point.
        ctrl2: Point,
    },
    /// Close the current contour back to its start.
    ClosePath,
}

/// Map a [`BezPath`]'s elements into path commands, losslessly.
///
/// Quadratic segments degree-collapse into [`PathCommand::CurveTo`] with both
/// controls at the quad control point; anchors are preserved exactly.
pub fn commands_from_bez_path(path: &BezPath) -> Vec<PathCommand> {
    path.elements()
        .iter()
        .map(|el| match *el {
            PathEl::MoveTo(p) => PathCommand::MoveTo { to: p },
            PathEl::LineTo(p) => PathCommand::LineTo { to: p },
            PathEl::QuadTo(c, p) => PathCommand::CurveTo {
                to: p,
                ctrl1: c,
                ctrl2: c,
            },
            PathEl::CurveTo(c1, c2, p) => PathCommand::CurveTo {
                to: p,
                ctrl1: c1,
                ctrl2: c2,
            },
            PathEl::ClosePath => PathCommand::ClosePath,
        })
        .collect()
}

/// Deserialize a command sequence from its JSON representation.
pub fn commands_from_json(json: &str) -> BeatpathResult<Vec<PathCommand>> {
    serde_json::from_str(json)
        .map_err(|e| BeatpathError::serde(format!("invalid path command json: {e}")))
}

/// Serialize a command sequence to JSON.
pub fn commands_to_json(commands: &[PathCommand]) -> BeatpathResult<String> {
    serde_json::to_string(commands)
        .map_err(|e| BeatpathError::serde(format!("serialize path commands: {e}")))
}

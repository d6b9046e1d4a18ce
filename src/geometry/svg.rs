use anyhow::Context;

use crate::{
    foundation::core::{BezPath, Point},
    foundation::error::{BeatpathError, BeatpathResult},
    geometry::command::{PathCommand, commands_from_bez_path},
};

#[tracing::instrument(skip(bytes), fields(bytes = bytes.len()))]
/// Extract every path's outline from an SVG document as path commands.
///
/// The node tree is walked depth-first in document order and each path's
/// segments are emitted with its absolute transform applied, so the result
/// traces the document's drawn geometry in final coordinates. Documents that
/// parse but contain no path geometry are a [`BeatpathError::Geometry`]
/// error: there is nothing for a marker to travel along.
pub fn perimeter_commands(bytes: &[u8]) -> BeatpathResult<Vec<PathCommand>> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(bytes, &opts).context("parse svg tree")?;

    let mut out = Vec::new();
    collect_group(tree.root(), &mut out);
    if out.is_empty() {
        return Err(BeatpathError::geometry(
            "svg document contains no path geometry",
        ));
    }
    Ok(out)
}

/// Parse a bare SVG path-data string (the `d` attribute) into path commands.
pub fn path_d_commands(d: &str) -> BeatpathResult<Vec<PathCommand>> {
    let d = d.trim();
    if d.is_empty() {
        return Err(BeatpathError::validation("path data must be non-empty"));
    }

    let path = BezPath::from_svg(d)
        .map_err(|e| BeatpathError::validation(format!("invalid path data: {e}")))?;
    Ok(commands_from_bez_path(&path))
}

fn collect_group(group: &usvg::Group, out: &mut Vec<PathCommand>) {
    for node in group.children() {
        match node {
            usvg::Node::Group(g) => collect_group(g, out),
            usvg::Node::Path(p) => collect_path(p, out),
            _ => {}
        }
    }
}

fn collect_path(path: &usvg::Path, out: &mut Vec<PathCommand>) {
    use usvg::tiny_skia_path::PathSegment;

    let ts = path.abs_transform();
    let map = |p: usvg::tiny_skia_path::Point| {
        Point::new(
            f64::from(ts.sx) * f64::from(p.x) + f64::from(ts.kx) * f64::from(p.y) + f64::from(ts.tx),
            f64::from(ts.ky) * f64::from(p.x) + f64::from(ts.sy) * f64::from(p.y) + f64::from(ts.ty),
        )
    };

    for seg in path.data().segments() {
        match seg {
            PathSegment::MoveTo(p) => out.push(PathCommand::MoveTo { to: map(p) }),
            PathSegment::LineTo(p) => out.push(PathCommand::LineTo { to: map(p) }),
            PathSegment::QuadTo(c, p) => out.push(PathCommand::CurveTo {
                to: map(p),
                ctrl1: map(c),
                ctrl2: map(c),
            }),
            PathSegment::CubicTo(c1, c2, p) => out.push(PathCommand::CurveTo {
                to: map(p),
                ctrl1: map(c1),
                ctrl2: map(c2),
            }),
            PathSegment::Close => out.push(PathCommand::ClosePath),
        }
    }
}

//! Beatpath drives animated markers and their trailing "comet" particles
//! along arbitrary 2D vector paths at constant visual speed, synchronized to
//! an external beats-per-minute signal (e.g. a heart-rate sensor).
//!
//! # Pipeline overview
//!
//! 1. **Describe**: obtain a [`PathCommand`] sequence — programmatically, from
//!    the built-in shape generator ([`shape_commands`]), from an SVG document
//!    ([`perimeter_commands`]), or from a path-data string
//!    ([`path_d_commands`])
//! 2. **Build**: `commands -> SampledCurve` — an arc-length-parametrized
//!    polyline, built once per distinct path ([`SampledCurve::build`])
//! 3. **Sample**: `curve + t -> Point` ([`SampledCurve::point_at`])
//! 4. **Animate**: `curve + bpm + timestamp -> Vec<TrailParticle>`
//!    ([`TrailAnimator::animate`] / [`animate_trail`]), recomputed fresh every
//!    frame
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Stateless recompute**: animation output is a pure function of
//!   `(curve, bpm, time, count)` — no timers, no cross-frame state, so frames
//!   may be computed out of order or redundantly with no correctness impact.
//! - **Host-driven clock**: the host render loop supplies the timestamp
//!   explicitly; any frame scheduler (render loop, fixed-tick simulation,
//!   test harness) can drive the crate.
//! - **Graceful numeric degradation**: degenerate paths, invalid BPM, and
//!   non-finite inputs resolve to defined fallbacks — an animation primitive
//!   freezes at a point or shrinks to nothing, it never interrupts rendering.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod geometry;
mod trail;

pub use foundation::core::{Affine, BezPath, Bpm, Point, Rect, Vec2};
pub use foundation::error::{BeatpathError, BeatpathResult};
pub use geometry::command::{
    PathCommand, commands_from_bez_path, commands_from_json, commands_to_json,
};
pub use geometry::sampler::{BuildOptions, SampledCurve, Segment};
pub use geometry::shapes::shape_commands;
pub use geometry::svg::{path_d_commands, perimeter_commands};
pub use trail::animator::{TrailAnimator, TrailConfig, TrailParticle, animate_trail};

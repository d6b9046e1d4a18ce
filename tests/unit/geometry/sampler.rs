use super::*;

fn square() -> Vec<PathCommand> {
    vec![
        PathCommand::MoveTo {
            to: Point::new(0.0, 0.0),
        },
        PathCommand::LineTo {
            to: Point::new(10.0, 0.0),
        },
        PathCommand::LineTo {
            to: Point::new(10.0, 10.0),
        },
        PathCommand::LineTo {
            to: Point::new(0.0, 10.0),
        },
        PathCommand::ClosePath,
    ]
}

/// Reference implementation as a linear walk; `point_at` must agree with it.
fn point_at_by_walk(curve: &SampledCurve, t: f64) -> Point {
    let target = t.clamp(0.0, 1.0) * curve.total_length();
    let mut accumulated = 0.0;
    for seg in curve.segments() {
        if accumulated + seg.length >= target {
            let local = (target - accumulated) / seg.length;
            return seg.start.lerp(seg.end, local);
        }
        accumulated += seg.length;
    }
    curve.segments().last().map_or(curve.origin(), |s| s.end)
}

#[test]
fn square_path_scenario() {
    let curve = SampledCurve::build(&square());
    assert_eq!(curve.total_length(), 40.0);
    assert_eq!(curve.segments().len(), 4);
    assert_eq!(curve.point_at(0.25), Point::new(10.0, 0.0));
    assert_eq!(curve.point_at(0.5), Point::new(10.0, 10.0));
}

#[test]
fn endpoints_resolve_to_first_start_and_last_end() {
    let commands = vec![
        PathCommand::MoveTo {
            to: Point::new(0.0, 0.0),
        },
        PathCommand::LineTo {
            to: Point::new(10.0, 0.0),
        },
        PathCommand::LineTo {
            to: Point::new(10.0, 10.0),
        },
    ];
    let curve = SampledCurve::build(&commands);
    assert_eq!(curve.point_at(0.0), Point::new(0.0, 0.0));
    assert_eq!(curve.point_at(1.0), Point::new(10.0, 10.0));
}

#[test]
fn total_length_is_sum_of_segment_lengths() {
    let curve = SampledCurve::build(&square());
    let sum: f64 = curve.segments().iter().map(|s| s.length).sum();
    assert_eq!(curve.total_length(), sum);
}

#[test]
fn binary_search_matches_linear_walk() {
    let curve = SampledCurve::build(&square());
    for i in 0..=200 {
        let t = f64::from(i) / 200.0;
        assert_eq!(curve.point_at(t), point_at_by_walk(&curve, t), "t={t}");
    }
}

#[test]
fn traversal_is_monotonic_along_each_side() {
    let curve = SampledCurve::build(&square());
    // Along the first side (t in [0, 0.25]) x strictly increases.
    let mut last_x = -1.0;
    for i in 0..=25 {
        let p = curve.point_at(f64::from(i) / 100.0);
        assert!(p.x > last_x);
        last_x = p.x;
    }
}

#[test]
fn out_of_range_and_non_finite_t_are_tolerated() {
    let curve = SampledCurve::build(&square());
    assert_eq!(curve.point_at(-0.5), curve.point_at(0.0));
    assert_eq!(curve.point_at(1.5), curve.point_at(1.0));
    assert_eq!(curve.point_at(f64::NAN), curve.point_at(0.0));
    assert_eq!(curve.point_at(f64::INFINITY), curve.point_at(0.0));
}

#[test]
fn empty_input_yields_degenerate_curve_with_origin_fallback() {
    let curve = SampledCurve::build(&[]);
    assert!(curve.is_degenerate());
    assert_eq!(curve.total_length(), 0.0);
    assert_eq!(curve.point_at(0.5), Point::ORIGIN);
}

#[test]
fn pen_only_path_falls_back_to_its_own_origin() {
    let commands = vec![PathCommand::MoveTo {
        to: Point::new(5.0, 5.0),
    }];
    let curve = SampledCurve::build(&commands);
    assert!(curve.is_degenerate());
    assert_eq!(curve.point_at(0.75), Point::new(5.0, 5.0));
}

#[test]
fn zero_length_closing_segment_is_skipped() {
    let commands = vec![
        PathCommand::MoveTo {
            to: Point::new(0.0, 0.0),
        },
        PathCommand::LineTo {
            to: Point::new(10.0, 0.0),
        },
        PathCommand::LineTo {
            to: Point::new(0.0, 0.0),
        },
        PathCommand::ClosePath,
    ];
    let curve = SampledCurve::build(&commands);
    assert_eq!(curve.segments().len(), 2);
    assert_eq!(curve.total_length(), 20.0);
}

#[test]
fn non_finite_coordinates_never_reach_the_length_table() {
    let commands = vec![
        PathCommand::MoveTo {
            to: Point::new(0.0, 0.0),
        },
        PathCommand::LineTo {
            to: Point::new(f64::NAN, 0.0),
        },
    ];
    let curve = SampledCurve::build(&commands);
    assert!(curve.is_degenerate());
    assert_eq!(curve.point_at(0.5), Point::new(0.0, 0.0));
}

#[test]
fn curve_commands_default_to_their_chord() {
    let commands = vec![
        PathCommand::MoveTo {
            to: Point::new(0.0, 0.0),
        },
        PathCommand::CurveTo {
            to: Point::new(10.0, 0.0),
            ctrl1: Point::new(0.0, 50.0),
            ctrl2: Point::new(10.0, -50.0),
        },
    ];
    let curve = SampledCurve::build(&commands);
    assert_eq!(curve.segments().len(), 1);
    assert_eq!(curve.total_length(), 10.0);
}

#[test]
fn subdivided_curves_measure_longer_than_their_chord() {
    let commands = vec![
        PathCommand::MoveTo {
            to: Point::new(0.0, 0.0),
        },
        PathCommand::CurveTo {
            to: Point::new(10.0, 0.0),
            ctrl1: Point::new(2.0, 8.0),
            ctrl2: Point::new(8.0, 8.0),
        },
    ];
    let chord = SampledCurve::build(&commands);
    let subdivided = SampledCurve::build_with(&commands, BuildOptions { curve_chords: 16 });

    assert_eq!(subdivided.segments().len(), 16);
    assert!(subdivided.total_length() > chord.total_length());
    // End anchor is hit exactly, not via eval(1.0).
    assert_eq!(subdivided.point_at(1.0), Point::new(10.0, 0.0));
}

#[test]
fn from_bez_path_matches_building_from_commands() {
    let mut path = BezPath::new();
    path.move_to((0.0, 0.0));
    path.line_to((10.0, 0.0));
    path.line_to((10.0, 10.0));
    path.close_path();

    let via_path = SampledCurve::from_bez_path(&path);
    let via_commands = SampledCurve::build(&commands_from_bez_path(&path));
    assert_eq!(via_path, via_commands);
    assert!((via_path.total_length() - (20.0 + 200.0_f64.sqrt())).abs() < 1e-12);
}

#[test]
fn queries_are_reproducible() {
    let curve = SampledCurve::build(&square());
    for i in 0..=40 {
        let t = f64::from(i) / 40.0;
        assert_eq!(curve.point_at(t), curve.point_at(t));
    }
}

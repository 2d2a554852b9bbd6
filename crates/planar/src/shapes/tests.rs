use super::*;
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

fn pt(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

fn seg(x1: i32, y1: i32, x2: i32, y2: i32) -> Segment {
    Segment::new(pt(x1, y1), pt(x2, y2))
}

fn square4() -> Polygon {
    Polygon::new(vec![pt(0, 0), pt(4, 0), pt(4, 4), pt(0, 4)])
}

/// U-shaped polygon with a notch over x in (2, 4), y in (2, 6).
fn u_shape() -> Polygon {
    Polygon::new(vec![
        pt(0, 0),
        pt(6, 0),
        pt(6, 6),
        pt(4, 6),
        pt(4, 2),
        pt(2, 2),
        pt(2, 6),
        pt(0, 6),
    ])
}

fn sample_shapes() -> Vec<AnyShape> {
    vec![
        pt(1, 2).into(),
        seg(-3, -1, 5, 3).into(),
        Ray::new(pt(0, 1), Vector::new(2, 1)).into(),
        Line::new(pt(-1, -1), pt(3, 2)).into(),
        Circle::new(pt(1, 1), 4).into(),
        u_shape().into(),
    ]
}

fn sample_points() -> Vec<Point> {
    let mut out = Vec::new();
    for x in -6..=8 {
        for y in -6..=8 {
            out.push(pt(x, y));
        }
    }
    out
}

fn sample_segments() -> Vec<Segment> {
    vec![
        seg(-5, -5, 7, 7),
        seg(3, -2, 3, 9),
        seg(1, 2, 1, 2),
        seg(-6, 4, 8, 4),
        seg(10, 10, 12, 11),
        seg(5, 1, 5, 5),
    ]
}

#[test]
fn point_minus_vector_steps_back() {
    let p = pt(3, -2);
    assert_eq!(p - Vector::new(1, 5), pt(2, -7));
    assert_eq!((p + Vector::new(4, 4)) - Vector::new(4, 4), p);
}

#[test]
fn point_containment_is_equality() {
    let p = pt(3, -2);
    assert!(p.contains_point(&p));
    assert!(p.contains_point(&pt(3, -2)));
    assert!(!p.contains_point(&pt(3, -1)));
    assert!(p.crosses_segment(&seg(1, -2, 5, -2)));
    assert!(!p.crosses_segment(&seg(1, -1, 5, -1)));
    assert_eq!(p.to_string(), "Point(3, -2)");
}

#[test]
fn segment_containment() {
    let s = seg(0, 0, 6, 3);
    assert!(s.contains_point(&pt(0, 0)));
    assert!(s.contains_point(&pt(6, 3)));
    assert!(s.contains_point(&pt(2, 1)));
    // On the supporting line but outside the bounding box.
    assert!(!s.contains_point(&pt(8, 4)));
    assert!(!s.contains_point(&pt(-2, -1)));
    // Inside the box, off the line.
    assert!(!s.contains_point(&pt(2, 2)));

    let vertical = seg(1, 5, 1, -5);
    assert!(vertical.contains_point(&pt(1, 0)));
    assert!(!vertical.contains_point(&pt(1, 6)));

    let dot = seg(2, 2, 2, 2);
    assert!(dot.is_degenerate());
    assert!(dot.contains_point(&pt(2, 2)));
    assert!(!dot.contains_point(&pt(2, 3)));
}

#[test]
fn segment_crossing_cases() {
    let s = seg(0, 0, 4, 4);
    // Proper crossing.
    assert!(s.crosses_segment(&seg(0, 4, 4, 0)));
    // T-junction: endpoint on the interior.
    assert!(s.crosses_segment(&seg(2, 2, 5, 0)));
    // Shared endpoint.
    assert!(s.crosses_segment(&seg(4, 4, 9, 1)));
    // Collinear overlap.
    assert!(s.crosses_segment(&seg(3, 3, 8, 8)));
    // Collinear, disjoint.
    assert!(!s.crosses_segment(&seg(5, 5, 8, 8)));
    // Parallel.
    assert!(!s.crosses_segment(&seg(1, 0, 5, 4)));
    // Would cross if extended.
    assert!(!s.crosses_segment(&seg(5, 0, 5, 3)));
    // Degenerate other segment on s.
    assert!(s.crosses_segment(&seg(1, 1, 1, 1)));
    assert_eq!(s.to_string(), "Segment(Point(0, 0), Point(4, 4))");
}

#[test]
fn ray_containment_is_forward_only() {
    let r = Ray::new(pt(1, 1), Vector::new(2, 1));
    assert!(r.contains_point(&pt(1, 1)));
    assert!(r.contains_point(&pt(3, 2)));
    assert!(r.contains_point(&pt(101, 51)));
    assert!(!r.contains_point(&pt(-1, 0)));
    assert!(!r.contains_point(&pt(3, 3)));
    assert_eq!(Ray::through(pt(1, 1), pt(5, 3)).direction(), Vector::new(4, 2));
    assert_eq!(r.to_string(), "Ray(Point(1, 1), Vector(2, 1))");
    assert!(Ray::try_new(pt(0, 0), Vector::ZERO).is_none());
}

#[test]
fn ray_crossing_ahead_behind_and_through_origin() {
    let r = Ray::new(pt(0, 0), Vector::new(1, 0));
    // Ahead.
    assert!(r.crosses_segment(&seg(5, -1, 5, 1)));
    assert!(r.crosses_segment(&seg(5, 1, 7, -3)));
    // Behind.
    assert!(!r.crosses_segment(&seg(-5, -1, -5, 1)));
    // Endpoint on the ray.
    assert!(r.crosses_segment(&seg(3, 0, 3, 8)));
    // Endpoint on the backward half-line only.
    assert!(!r.crosses_segment(&seg(-3, 0, -3, 8)));
    // Passes exactly through the origin.
    assert!(r.crosses_segment(&seg(-1, -1, 1, 1)));
    assert!(r.crosses_segment(&seg(0, -4, 0, 4)));
    // Same side.
    assert!(!r.crosses_segment(&seg(2, 1, 9, 3)));
    // Collinear, in front.
    assert!(r.crosses_segment(&seg(4, 0, 9, 0)));
    // Collinear, behind.
    assert!(!r.crosses_segment(&seg(-9, 0, -4, 0)));
    // Diagonal ray with a crossing far away.
    let d = Ray::new(pt(-3, 2), Vector::new(3, 7));
    assert!(d.crosses_segment(&seg(-20, 40, 20, 40)));
    assert!(!d.crosses_segment(&seg(-20, -40, 20, -40)));
}

#[test]
fn polygon_unit_square_scenario() {
    let sq = square4();
    assert!(sq.contains_point(&pt(0, 0)));
    assert!(sq.contains_point(&pt(2, 2)));
    assert!(!sq.contains_point(&pt(5, 5)));
    assert!(!sq.contains_point(&pt(10, 10)));
    for v in sq.vertices() {
        assert!(sq.contains_point(v));
    }
    // Closing edge (0,4)-(0,0) is boundary.
    assert!(sq.contains_point(&pt(0, 3)));
    assert_eq!(
        sq.to_string(),
        "Polygon(Point(0, 0), Point(4, 0), Point(4, 4), Point(0, 4))"
    );
}

#[test]
fn polygon_concave_containment() {
    let u = u_shape();
    assert!(u.contains_point(&pt(1, 4)));
    assert!(u.contains_point(&pt(5, 4)));
    assert!(u.contains_point(&pt(3, 1)));
    assert!(!u.contains_point(&pt(3, 4)));
    assert!(!u.contains_point(&pt(3, 7)));
    assert!(!u.contains_point(&pt(-1, 3)));
    // Notch floor is boundary.
    assert!(u.contains_point(&pt(3, 2)));
}

#[test]
fn polygon_self_intersecting_uses_even_odd() {
    let bowtie = Polygon::new(vec![pt(0, 0), pt(4, 4), pt(4, 0), pt(0, 4)]);
    assert!(bowtie.contains_point(&pt(2, 2)));
    assert!(bowtie.contains_point(&pt(3, 2)));
    assert!(bowtie.contains_point(&pt(1, 2)));
    assert!(!bowtie.contains_point(&pt(2, 1)));
    assert!(!bowtie.contains_point(&pt(2, 3)));
}

#[test]
fn polygon_single_vertex() {
    let p = Polygon::new(vec![pt(2, 3)]);
    assert_eq!(p.edges().count(), 1);
    assert!(p.contains_point(&pt(2, 3)));
    assert!(!p.contains_point(&pt(2, 4)));
    assert!(p.crosses_segment(&seg(0, 3, 5, 3)));
    assert!(Polygon::try_new(Vec::new()).is_none());
}

#[test]
fn polygon_containment_with_injected_rng_is_reproducible() {
    let u = u_shape();
    let cfg = CastCfg::default();
    for p in sample_points() {
        let mut r1 = StdRng::seed_from_u64(7);
        let mut r2 = StdRng::seed_from_u64(7);
        let mut r3 = StdRng::seed_from_u64(1234);
        let a = u.contains_point_with(&p, cfg, &mut r1);
        assert_eq!(a, u.contains_point_with(&p, cfg, &mut r2));
        // Parity does not depend on which vertex-free ray was chosen.
        assert_eq!(a, u.contains_point_with(&p, cfg, &mut r3));
        assert_eq!(a, u.contains_point(&p));
    }
}

#[test]
fn polygon_fallback_directions_terminate() {
    let sq = square4();
    let mut rng = StdRng::seed_from_u64(0);
    // Only (1, 1) is ever drawn and it hits vertex (4, 4) from (2, 2).
    let stuck = CastCfg {
        max_random_attempts: 5,
        max_component: 1,
    };
    assert!(sq.contains_point_with(&pt(2, 2), stuck, &mut rng));
    assert!(sq.contains_point_with(&pt(1, 1), stuck, &mut rng));
    assert!(!sq.contains_point_with(&pt(-1, -1), stuck, &mut rng));
    // No random phase at all.
    let fallback_only = CastCfg {
        max_random_attempts: 0,
        ..CastCfg::default()
    };
    let u = u_shape();
    for p in sample_points() {
        assert_eq!(
            u.contains_point_with(&p, fallback_only, &mut rng),
            u.contains_point(&p)
        );
    }
}

#[test]
fn polygon_crossing_includes_closing_edge() {
    let sq = square4();
    // Touches only the closing edge (0,4)-(0,0).
    assert!(sq.crosses_segment(&seg(-3, 2, 0, 2)));
    assert!(sq.crosses_segment(&seg(-1, 2, 5, 2)));
    assert!(sq.crosses_segment(&seg(4, 4, 6, 6)));
    // Entirely inside: never meets the boundary.
    assert!(!sq.crosses_segment(&seg(1, 1, 3, 3)));
    assert!(!sq.crosses_segment(&seg(5, 0, 5, 4)));
}

#[test]
fn any_shape_dispatch_and_rendering() {
    let shapes = sample_shapes();
    let kinds: Vec<&str> = shapes.iter().map(AnyShape::kind).collect();
    assert_eq!(
        kinds,
        ["Point", "Segment", "Ray", "Line", "Circle", "Polygon"]
    );
    for s in &shapes {
        assert!(s.to_string().starts_with(s.kind()));
    }
    assert_eq!(shapes[3].to_string(), "Line(3, -4, -1)");
    assert!(shapes[4].contains_point(&pt(1, 5)));
    assert!(!shapes[5].contains_point(&pt(3, 4)));
}

#[test]
fn translate_chains() {
    let mut c = Circle::new(pt(0, 0), 2);
    c.translate(Vector::new(1, 0)).translate(Vector::new(0, 3));
    assert_eq!(c.center(), pt(1, 3));
    let mut s = AnyShape::from(square4());
    s.translate(Vector::new(10, 10)).translate(Vector::new(-5, 0));
    assert!(s.contains_point(&pt(7, 12)));
    assert!(!s.contains_point(&pt(2, 2)));
}

#[test]
fn clone_is_independent_of_original() {
    for original in sample_shapes() {
        let mut copy = original.clone();
        for p in sample_points() {
            assert_eq!(copy.contains_point(&p), original.contains_point(&p));
        }
        for s in sample_segments() {
            assert_eq!(copy.crosses_segment(&s), original.crosses_segment(&s));
        }
        let before = original.to_string();
        copy.translate(Vector::new(3, -2));
        assert_eq!(original.to_string(), before);
        assert_ne!(copy, original);
    }
}

#[test]
fn zero_translation_is_identity() {
    for original in sample_shapes() {
        let mut moved = original.clone();
        moved.translate(Vector::ZERO);
        assert_eq!(moved, original);
        for p in sample_points() {
            assert_eq!(moved.contains_point(&p), original.contains_point(&p));
        }
        for s in sample_segments() {
            assert_eq!(moved.crosses_segment(&s), original.crosses_segment(&s));
        }
    }
}

#[test]
fn translation_commutes_with_queries() {
    let shift = Vector::new(-7, 4);
    for original in sample_shapes() {
        let mut moved = original.clone();
        moved.translate(shift);
        for p in sample_points() {
            assert_eq!(moved.contains_point(&(p + shift)), original.contains_point(&p));
        }
        for s in sample_segments() {
            let mut t = s;
            t.translate(shift);
            assert_eq!(moved.crosses_segment(&t), original.crosses_segment(&s));
        }
    }
}

fn small() -> impl Strategy<Value = i32> {
    -50i32..=50
}

fn small_point() -> impl Strategy<Value = Point> {
    (small(), small()).prop_map(|(x, y)| pt(x, y))
}

proptest! {
    #[test]
    fn point_containment_is_symmetric(a in small_point(), b in small_point()) {
        prop_assert_eq!(a.contains_point(&b), b.contains_point(&a));
        prop_assert!(a.contains_point(&a));
    }

    #[test]
    fn segment_contains_endpoints_and_midpoint(a in small_point(), d in (small(), small())) {
        let half = Vector::new(d.0, d.1);
        let b = a + half * 2;
        let s = Segment::new(a, b);
        prop_assert!(s.contains_point(&a));
        prop_assert!(s.contains_point(&b));
        prop_assert!(s.contains_point(&(a + half)));
        // Beyond either end along the same line.
        if !half.is_zero() {
            prop_assert!(!s.contains_point(&(b + half)));
            prop_assert!(!s.contains_point(&(a - half)));
        }
    }

    #[test]
    fn segment_never_contains_points_outside_bbox(
        a in small_point(),
        b in small_point(),
        dx in 1i32..20,
    ) {
        let s = Segment::new(a, b);
        let right = a.x().max(b.x()) + dx;
        prop_assert!(!s.contains_point(&pt(right, a.y())));
        let below = a.y().min(b.y()) - dx;
        prop_assert!(!s.contains_point(&pt(a.x(), below)));
    }

    #[test]
    fn segment_crossing_is_symmetric(
        a in small_point(), b in small_point(),
        c in small_point(), d in small_point(),
    ) {
        let s1 = Segment::new(a, b);
        let s2 = Segment::new(c, d);
        prop_assert_eq!(s1.crosses_segment(&s2), s2.crosses_segment(&s1));
    }

    #[test]
    fn circle_contains_center_and_misses_far_segments(
        c in small_point(),
        r in 0i32..30,
        gap in 1i32..20,
        x1 in -100i32..100,
        x2 in -100i32..100,
    ) {
        let circle = Circle::new(c, r);
        prop_assert!(circle.contains_point(&c));
        // Horizontal segment whose closest approach to the center exceeds r.
        let y = c.y() + r + gap;
        let s = Segment::new(pt(x1, y), pt(x2, y));
        prop_assert!(!circle.crosses_segment(&s));
    }

    #[test]
    fn circle_segment_from_center_to_twice_radius_crosses(
        c in small_point(),
        r in 1i32..30,
        axis in 0usize..4,
    ) {
        let dirs = [Vector::new(1, 0), Vector::new(0, 1), Vector::new(-1, 0), Vector::new(0, -1)];
        let s = Segment::new(c, c + dirs[axis] * (2 * r));
        prop_assert!(Circle::new(c, r).crosses_segment(&s));
    }

    #[test]
    fn ray_contains_forward_multiples(
        o in small_point(),
        d in (1i32..10, -10i32..10),
        k in 0i32..20,
    ) {
        let dir = Vector::new(d.0, d.1);
        let r = Ray::new(o, dir);
        prop_assert!(r.contains_point(&(o + dir * k)));
        prop_assert!(!r.contains_point(&(o - dir * (k + 1))));
    }

    #[test]
    fn polygon_clone_answers_like_original(p in small_point(), shift in (small(), small())) {
        let u = u_shape();
        let mut copy = u.clone();
        prop_assert_eq!(copy.contains_point(&p), u.contains_point(&p));
        copy.translate(Vector::new(shift.0, shift.1));
        let fresh = u_shape();
        prop_assert_eq!(u.vertices(), fresh.vertices());
    }
}

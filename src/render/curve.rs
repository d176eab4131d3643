use super::surface::{Curve, Point};

const SAMPLES_PER_SEGMENT: usize = 8;

/// Polyline approximation of `points` drawn with `curve`.
pub fn flatten(points: &[Point], curve: Curve) -> Vec<Point> {
    match curve {
        Curve::Linear => points.to_vec(),
        Curve::MonotoneX => monotone_x(points, SAMPLES_PER_SEGMENT),
    }
}

/// Cubic interpolation that preserves monotonicity in y (Steffen tangents).
///
/// Points must be sorted by x. Each segment is sampled `samples` times; the
/// knots themselves are always part of the output.
pub fn monotone_x(points: &[Point], samples: usize) -> Vec<Point> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }
    let tangents = tangents(points);
    let samples = samples.max(1);

    let mut out = Vec::with_capacity((n - 1) * samples + 1);
    out.push(points[0]);
    for i in 0..n - 1 {
        let (x0, y0) = points[i];
        let (x1, y1) = points[i + 1];
        let dx = (x1 - x0) / 3.0;
        let c0 = (x0 + dx, y0 + dx * tangents[i]);
        let c1 = (x1 - dx, y1 - dx * tangents[i + 1]);
        for k in 1..=samples {
            let t = k as f64 / samples as f64;
            out.push(bezier((x0, y0), c0, c1, (x1, y1), t));
        }
    }
    out
}

fn tangents(points: &[Point]) -> Vec<f64> {
    let n = points.len();
    let mut t = vec![0.0; n];
    for i in 1..n - 1 {
        t[i] = interior_slope(points[i - 1], points[i], points[i + 1]);
    }
    t[0] = end_slope(points[0], points[1], t[1]);
    t[n - 1] = end_slope(points[n - 2], points[n - 1], t[n - 2]);
    t
}

fn sign(v: f64) -> f64 {
    if v < 0.0 { -1.0 } else { 1.0 }
}

fn interior_slope(p0: Point, p1: Point, p2: Point) -> f64 {
    let h0 = p1.0 - p0.0;
    let h1 = p2.0 - p1.0;
    if h0 == 0.0 || h1 == 0.0 {
        return 0.0;
    }
    let s0 = (p1.1 - p0.1) / h0;
    let s1 = (p2.1 - p1.1) / h1;
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);
    let m = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if m.is_finite() { m } else { 0.0 }
}

fn end_slope(p0: Point, p1: Point, neighbour: f64) -> f64 {
    let h = p1.0 - p0.0;
    if h == 0.0 {
        neighbour
    } else {
        (3.0 * (p1.1 - p0.1) / h - neighbour) / 2.0
    }
}

fn bezier(p0: Point, c0: Point, c1: Point, p1: Point, t: f64) -> Point {
    let u = 1.0 - t;
    let a = u * u * u;
    let b = 3.0 * u * u * t;
    let c = 3.0 * u * t * t;
    let d = t * t * t;
    (
        a * p0.0 + b * c0.0 + c * c1.0 + d * p1.0,
        a * p0.1 + b * c0.1 + c * c1.1 + d * p1.1,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn short_inputs_pass_through() {
        let pts = vec![(0.0, 0.0), (1.0, 5.0)];
        assert_eq!(monotone_x(&pts, 8), pts);
        assert_eq!(flatten(&pts, Curve::MonotoneX), pts);
    }

    #[test]
    fn knots_are_interpolated() {
        let pts = vec![(0.0, 0.0), (1.0, 2.0), (2.0, 2.5), (3.0, 7.0)];
        let out = monotone_x(&pts, 4);
        assert_eq!(out.len(), 3 * 4 + 1);
        for (i, knot) in pts.iter().enumerate() {
            let sample = out[i * 4];
            assert_abs_diff_eq!(sample.0, knot.0, epsilon = 1e-12);
            assert_abs_diff_eq!(sample.1, knot.1, epsilon = 1e-12);
        }
    }

    #[test]
    fn monotone_data_never_overshoots() {
        let pts = vec![(0.0, 0.0), (1.0, 0.1), (2.0, 5.0), (3.0, 5.1), (4.0, 9.0)];
        let out = monotone_x(&pts, 16);
        assert!(out.windows(2).all(|w| w[1].1 >= w[0].1 - 1e-12));
        assert!(out.iter().all(|p| p.1 >= 0.0 && p.1 <= 9.0));
    }

    #[test]
    fn flat_neighbourhood_gives_zero_tangent() {
        // Local extremum at the middle knot.
        assert_eq!(interior_slope((0.0, 0.0), (1.0, 1.0), (2.0, 0.0)), 0.0);
    }
}

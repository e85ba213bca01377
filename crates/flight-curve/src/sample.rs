use std::f64::consts::PI;

use crate::point::{MathPoint, PointPair};

/// Evaluates both curves at sample index `i` of `n`.
///
/// Each angle is computed as `(k·π·i) / n`, multiplying before dividing, so
/// results match other implementations of the figure bit for bit. `n` must be
/// non-zero.
pub fn sample(i: u32, n: u32) -> PointPair {
    let i = f64::from(i);
    let n = f64::from(n);

    let t = 2.0 * PI * i / n;
    let s3 = t.sin().powf(3.0);

    let a = MathPoint::new(3.0 * s3, -(8.0 * PI * i / n).cos());
    let b = MathPoint::new(1.5 * s3, -0.5 * (6.0 * PI * i / n).cos());

    PointPair { a, b }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SAMPLE_COUNT;

    const EPS: f64 = 1e-9;

    #[test]
    fn quarter_turn_hits_outer_extreme() {
        // t = π/2 → sin(t) = 1, and 8π·500/2000 = 2π.
        let p = sample(500, SAMPLE_COUNT);
        assert!((p.a.x - 3.0).abs() < EPS);
        assert!((p.a.y + 1.0).abs() < EPS);
        assert!((p.b.x - 1.5).abs() < EPS);
    }

    #[test]
    fn last_sample_closes_the_loop() {
        // sin(2π) is only approximately zero in floating point.
        let p = sample(SAMPLE_COUNT, SAMPLE_COUNT);
        assert!(p.a.x.abs() < EPS);
        assert!(p.b.x.abs() < EPS);
        assert!((p.a.y + 1.0).abs() < EPS);
        assert!((p.b.y + 0.5).abs() < EPS);
    }

    #[test]
    fn inner_curve_is_half_of_outer_in_x() {
        for i in [1, 137, 999, 1500, 1999] {
            let p = sample(i, SAMPLE_COUNT);
            assert!((p.a.x - 2.0 * p.b.x).abs() < EPS, "i = {i}");
        }
    }

    #[test]
    fn stays_within_nominal_ranges() {
        for i in 1..=SAMPLE_COUNT {
            let p = sample(i, SAMPLE_COUNT);
            assert!(p.a.x.abs() <= 3.0 + EPS && p.a.y.abs() <= 1.0 + EPS);
            assert!(p.b.x.abs() <= 1.5 + EPS && p.b.y.abs() <= 0.5 + EPS);
        }
    }

    #[test]
    fn is_deterministic() {
        assert_eq!(sample(733, SAMPLE_COUNT), sample(733, SAMPLE_COUNT));
    }
}

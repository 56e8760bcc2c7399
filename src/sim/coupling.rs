//! Scalar coupling laws of the order/energy system.
//!
//! Both take the messiness gap m = goal − order. The restoring force is odd
//! and bounded, zero at m = 0 and again as |m| → ∞, peaking near |m| ≈ 0.707.
//! The recovery gain is 1 at m = 0 and decays toward 0 as the gap widens.

/// f(m) = m · exp(−m²), the signed order-restoring force.
#[inline]
pub fn restoring_force(m: f64) -> f64 {
    m * (-m * m).exp()
}

/// g(m) = 1 / (1 + m²), the energy recovery gain.
#[inline]
pub fn recovery_gain(m: f64) -> f64 {
    1.0 / (1.0 + m * m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn force_zero_at_origin_and_odd() {
        assert_eq!(restoring_force(0.0), 0.0);
        for &m in &[0.1, 0.5, 0.8, 2.0] {
            let pos = restoring_force(m);
            let neg = restoring_force(-m);
            assert!(
                (pos + neg).abs() < 1e-15,
                "odd symmetry broken at m={m}: {pos} vs {neg}"
            );
        }
    }

    #[test]
    fn force_peaks_near_inv_sqrt2() {
        let peak_arg = 1.0 / 2f64.sqrt();
        let peak = restoring_force(peak_arg);
        assert!((peak - 0.4288819424803534).abs() < 1e-12);
        // strictly below the peak on either side
        assert!(restoring_force(peak_arg - 0.05) < peak);
        assert!(restoring_force(peak_arg + 0.05) < peak);
    }

    #[test]
    fn force_vanishes_at_large_gap() {
        assert!(restoring_force(10.0).abs() < 1e-40);
        assert!(restoring_force(-10.0).abs() < 1e-40);
    }

    #[test]
    fn gain_bounded_and_maximal_at_origin() {
        assert_eq!(recovery_gain(0.0), 1.0);
        for &m in &[0.25, 0.8, 1.0, 3.0, -3.0] {
            let g = recovery_gain(m);
            assert!(g > 0.0 && g < 1.0, "gain out of (0, 1) at m={m}: {g}");
        }
        assert!((recovery_gain(0.8) - 0.6097560975609756).abs() < 1e-15);
    }

    #[test]
    fn gain_decreases_with_gap() {
        let mut prev = recovery_gain(0.0);
        for i in 1..=20 {
            let g = recovery_gain(i as f64 * 0.25);
            assert!(g < prev, "gain not decreasing at step {i}");
            prev = g;
        }
    }
}

//! Integration output buffers.

/// Three equal-length series sampled on a uniform dt grid, allocated once at
/// full size and filled left to right by the integrator. For every filled
/// index i, `messiness[i] == goal − order[i]`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trajectory {
    pub order: Vec<f64>,
    pub energy: Vec<f64>,
    pub messiness: Vec<f64>,
    pub dt: f64,
}

impl Trajectory {
    /// Zero-filled buffers for `steps` samples spaced `dt` apart.
    pub fn zeroed(steps: usize, dt: f64) -> Self {
        Self {
            order: vec![0.0; steps],
            energy: vec![0.0; steps],
            messiness: vec![0.0; steps],
            dt,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Sample time of index i.
    #[inline]
    pub fn time_at(&self, i: usize) -> f64 {
        i as f64 * self.dt
    }

    /// (order, energy, messiness) triples in step order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.order
            .iter()
            .zip(self.energy.iter())
            .zip(self.messiness.iter())
            .map(|((&o, &e), &m)| (o, e, m))
    }

    /// (min, max) over the finite values of one series; None when nothing
    /// in it is finite.
    pub fn finite_extent(series: &[f64]) -> Option<(f64, f64)> {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for &v in series {
            if v.is_finite() {
                lo = lo.min(v);
                hi = hi.max(v);
            }
        }
        if lo.is_finite() && hi.is_finite() {
            Some((lo, hi))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Trajectory;

    #[test]
    fn zeroed_allocates_full_length() {
        let traj = Trajectory::zeroed(128, 0.5);
        assert_eq!(traj.len(), 128);
        assert_eq!(traj.order.len(), 128);
        assert_eq!(traj.energy.len(), 128);
        assert_eq!(traj.messiness.len(), 128);
        assert!(!traj.is_empty());
        assert!(Trajectory::zeroed(0, 0.5).is_empty());
    }

    #[test]
    fn time_axis_follows_dt() {
        let traj = Trajectory::zeroed(4, 0.25);
        assert_eq!(traj.time_at(0), 0.0);
        assert_eq!(traj.time_at(3), 0.75);
    }

    #[test]
    fn points_iterates_triples_in_order() {
        let mut traj = Trajectory::zeroed(2, 1.0);
        traj.order = vec![1.0, 2.0];
        traj.energy = vec![3.0, 4.0];
        traj.messiness = vec![5.0, 6.0];
        let pts: Vec<_> = traj.points().collect();
        assert_eq!(pts, vec![(1.0, 3.0, 5.0), (2.0, 4.0, 6.0)]);
    }

    #[test]
    fn finite_extent_skips_non_finite() {
        let series = [1.0, f64::NAN, -2.0, f64::INFINITY, 0.5];
        assert_eq!(Trajectory::finite_extent(&series), Some((-2.0, 1.0)));
        assert_eq!(Trajectory::finite_extent(&[f64::NAN, f64::NAN]), None);
        assert_eq!(Trajectory::finite_extent(&[]), None);
        assert_eq!(Trajectory::finite_extent(&[0.7]), Some((0.7, 0.7)));
    }
}

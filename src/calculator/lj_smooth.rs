//! Smoothed Lennard-Jones pair force (spec.md §4.3, "LJSmoothCalculator").
//!
//! Grounded on
//! `original_source/src/physicsCalculator/LJSmoothCalculator.cpp`. The
//! sign convention below is unified with `LJCalculator`'s (see
//! DESIGN.md); the source's `std::cout` tracing of every branch is
//! dropped in favour of the ambient `log::trace!` the rest of this
//! crate uses.

use super::{lj_force_abs, Calculator};
use crate::container::ParticleContainer;

pub struct LJSmoothCalculator<C: ParticleContainer> {
    container: C,
    delta_t: f64,
    r_l: f64,
    r_l_squared: f64,
    r_c: f64,
    r_c_squared: f64,
}

impl<C: ParticleContainer> LJSmoothCalculator<C> {
    pub fn new(container: C, delta_t: f64, r_l: f64, r_c: f64) -> Self {
        LJSmoothCalculator {
            container,
            delta_t,
            r_l,
            r_l_squared: r_l * r_l,
            r_c,
            r_c_squared: r_c * r_c,
        }
    }

    pub fn into_container(self) -> C {
        self.container
    }
}

impl<C: ParticleContainer> Calculator for LJSmoothCalculator<C> {
    fn force_abs_from_dist_squared(&self, dist_squared: f64, t1: usize, t2: usize) -> f64 {
        if dist_squared <= self.r_l_squared {
            log::trace!("lj_smooth: dist within r_l, using unsmoothed LJ");
            return lj_force_abs(&self.container, dist_squared, t1, t2);
        }
        if dist_squared >= self.r_c_squared {
            log::trace!("lj_smooth: dist past r_c, force is zero");
            return 0.0;
        }

        log::trace!("lj_smooth: dist between r_l and r_c, using smoothing polynomial");
        let pd = self.container.type_pair_table().get(t1, t2);
        let sigma_to_6 = pd.sigma_squared().powi(3);
        let dist = dist_squared.sqrt();
        let dist_to_4 = dist_squared * dist_squared;
        let dist_to_6 = dist_to_4 * dist_squared;
        let dist_to_7 = dist_to_6 * dist;
        let dist_to_14 = dist_to_7 * dist_to_7;
        let rc_l = self.r_c - self.r_l;

        pd.scaled_epsilon() * sigma_to_6 / (dist_to_14 * rc_l * rc_l * rc_l)
            * (self.r_c - dist)
            * (self.r_c_squared * (2.0 * sigma_to_6 - dist_to_6)
                + self.r_c * (3.0 * self.r_l - dist) * (dist_to_6 - 2.0 * sigma_to_6)
                + dist * (5.0 * self.r_l * sigma_to_6 - 2.0 * self.r_l * dist_to_6 - 3.0 * sigma_to_6 * dist + dist_to_7))
    }

    fn force_between(&self, i: usize, j: usize, dist_squared: f64) -> f64 {
        let t1 = self.container.particles()[i].ptype();
        let t2 = self.container.particles()[j].ptype();
        self.force_abs_from_dist_squared(dist_squared, t1, t2)
    }

    fn container(&self) -> &dyn ParticleContainer {
        &self.container
    }

    fn container_mut(&mut self) -> &mut dyn ParticleContainer {
        &mut self.container
    }

    fn delta_t(&self) -> f64 {
        self.delta_t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::DSContainer;
    use crate::particle::Particle;
    use crate::types::TypeDesc;
    use crate::vec3::Vec3;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn calc_at(dist: f64) -> f64 {
        let types = vec![TypeDesc::new(1.0, 1.0, 5.0, 0.0005, Vec3::zeros())];
        let particles = vec![
            Particle::new(Vec3::new(0.0, 0.0, 0.0), Vec3::zeros(), 0),
            Particle::new(Vec3::new(dist, 0.0, 0.0), Vec3::zeros(), 0),
        ];
        let container = DSContainer::new(particles, Vec3::zeros(), types);
        let calc = LJSmoothCalculator::new(container, 0.0005, 2.0, 2.5);
        calc.force_abs_from_dist_squared(dist * dist, 0, 0)
    }

    #[test]
    fn matches_plain_lj_inside_r_l() {
        let types = vec![TypeDesc::new(1.0, 1.0, 5.0, 0.0005, Vec3::zeros())];
        let particles = vec![
            Particle::new(Vec3::new(0.0, 0.0, 0.0), Vec3::zeros(), 0),
            Particle::new(Vec3::new(1.1, 0.0, 0.0), Vec3::zeros(), 0),
        ];
        let container = DSContainer::new(particles, Vec3::zeros(), types);
        let plain = lj_force_abs(&container, 1.1 * 1.1, 0, 0);
        let smooth = calc_at(1.1);
        assert_relative_eq!(plain, smooth, epsilon = 1e-12);
    }

    #[test]
    fn is_zero_past_r_c() {
        assert_eq!(calc_at(3.0), 0.0);
    }

    #[test]
    fn is_continuous_at_r_c() {
        let just_inside = calc_at(2.4999999);
        assert_abs_diff_eq!(just_inside, 0.0, epsilon = 1e-3);
    }
}

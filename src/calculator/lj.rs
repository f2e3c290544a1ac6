//! Plain Lennard-Jones pair force (spec.md §4.3, "LJCalculator").
//!
//! Grounded on `original_source/src/physicsCalculator/LJCalculator.cpp`.

use super::{lj_force_abs, Calculator};
use crate::container::ParticleContainer;

pub struct LJCalculator<C: ParticleContainer> {
    container: C,
    delta_t: f64,
}

impl<C: ParticleContainer> LJCalculator<C> {
    pub fn new(container: C, delta_t: f64) -> Self {
        LJCalculator { container, delta_t }
    }

    pub fn into_container(self) -> C {
        self.container
    }
}

impl<C: ParticleContainer> Calculator for LJCalculator<C> {
    fn force_abs_from_dist_squared(&self, dist_squared: f64, t1: usize, t2: usize) -> f64 {
        lj_force_abs(&self.container, dist_squared, t1, t2)
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

    #[test]
    fn matches_worked_example_sigma_1_epsilon_5() {
        // spec.md §8 scenario 2: particles at (1,2,-1) and (1,4,-1).
        let types = vec![TypeDesc::new(1.0, 1.0, 5.0, 0.0005, Vec3::zeros())];
        let particles = vec![
            Particle::new(Vec3::new(1.0, 2.0, -1.0), Vec3::zeros(), 0),
            Particle::new(Vec3::new(1.0, 4.0, -1.0), Vec3::zeros(), 0),
        ];
        let container = DSContainer::new(particles, Vec3::zeros(), types);
        let mut calc = LJCalculator::new(container, 0.0005);
        calc.calculate_f();

        let p0 = &calc.container().particles()[0];
        let p1 = &calc.container().particles()[1];
        let expected = 465.0 / 512.0;
        assert!((p0.f().y - expected).abs() < 1e-9);
        assert!((p1.f().y - (-expected)).abs() < 1e-9);
        assert_eq!(p0.f().x, 0.0);
        assert_eq!(p0.f().z, 0.0);
    }

    #[test]
    fn two_particles_feel_equal_and_opposite_force() {
        let types = vec![TypeDesc::new(1.0, 1.0, 5.0, 0.0005, Vec3::zeros())];
        let particles = vec![
            Particle::new(Vec3::new(0.0, 0.0, 0.0), Vec3::zeros(), 0),
            Particle::new(Vec3::new(1.1, 0.0, 0.0), Vec3::zeros(), 0),
        ];
        let container = DSContainer::new(particles, Vec3::zeros(), types);
        let mut calc = LJCalculator::new(container, 0.0005);
        calc.calculate_f();

        let p0 = &calc.container().particles()[0];
        let p1 = &calc.container().particles()[1];
        assert_eq!(*p0.f(), -*p1.f());
        assert!(p0.f().norm() > 0.0);
    }
}

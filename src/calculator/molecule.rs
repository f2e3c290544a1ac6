//! Membrane pair force (spec.md §4.3, "MolCalculator").
//!
//! Grounded on `original_source/src/physicsCalculator/MolCalculator.cpp`.

use super::{lj_force_abs, Calculator};
use crate::container::ParticleContainer;

pub struct MolCalculator<C: ParticleContainer> {
    container: C,
    delta_t: f64,
}

impl<C: ParticleContainer> MolCalculator<C> {
    pub fn new(container: C, delta_t: f64) -> Self {
        MolCalculator { container, delta_t }
    }

    pub fn into_container(self) -> C {
        self.container
    }
}

impl<C: ParticleContainer> Calculator for MolCalculator<C> {
    fn force_abs_from_dist_squared(&self, dist_squared: f64, t1: usize, t2: usize) -> f64 {
        lj_force_abs(&self.container, dist_squared, t1, t2)
    }

    fn force_between(&self, i: usize, j: usize, dist_squared: f64) -> f64 {
        let pi = &self.container.particles()[i];
        let pj = &self.container.particles()[j];

        if pi.in_molecule() && pj.in_molecule() && pi.ptype() == pj.ptype() {
            let t = self.container.type_desc(pi.ptype());
            if pi.is_axial_neighbour(pj.index()) {
                let dist = dist_squared.sqrt();
                return t.stiffness() * (dist - t.r0()) / dist;
            }
            if pi.is_diagonal_neighbour(pj.index()) {
                let dist = dist_squared.sqrt();
                return t.stiffness() * (dist - t.r1()) / dist;
            }
            if dist_squared <= t.cutoff_squared() {
                return self.force_abs_from_dist_squared(dist_squared, pi.ptype(), pj.ptype());
            }
            return 0.0;
        }

        self.force_abs_from_dist_squared(dist_squared, pi.ptype(), pj.ptype())
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
    fn axial_neighbour_feels_a_harmonic_spring() {
        let types = vec![TypeDesc::new_membrane(1.0, 1.0, 5.0, 0.0005, Vec3::zeros(), 100.0, 1.0, 1.5)];
        let mut p0 = Particle::new(Vec3::new(0.0, 0.0, 0.0), Vec3::zeros(), 0);
        let mut p1 = Particle::new(Vec3::new(1.2, 0.0, 0.0), Vec3::zeros(), 0);
        p0.set_in_molecule(true);
        p1.set_in_molecule(true);
        let mut n0 = [crate::particle::NO_NEIGHBOUR; 8];
        n0[0] = 1;
        p0.set_neighbours(n0);
        let mut n1 = [crate::particle::NO_NEIGHBOUR; 8];
        n1[2] = 0;
        p1.set_neighbours(n1);

        let container = DSContainer::new(vec![p0, p1], Vec3::zeros(), types);
        let calc = MolCalculator::new(container, 0.0005);
        let force = calc.force_between(0, 1, 1.2 * 1.2);
        // k*(d - r0)/d = 100*(1.2-1.0)/1.2
        let expected = 100.0 * (1.2 - 1.0) / 1.2;
        assert!((force - expected).abs() < 1e-12);
    }

    #[test]
    fn unbonded_same_type_pair_outside_cutoff_feels_nothing() {
        let types = vec![TypeDesc::new_membrane(1.0, 1.0, 5.0, 0.0005, Vec3::zeros(), 100.0, 1.0, 1.5)];
        let mut p0 = Particle::new(Vec3::new(0.0, 0.0, 0.0), Vec3::zeros(), 0);
        let mut p1 = Particle::new(Vec3::new(3.0, 0.0, 0.0), Vec3::zeros(), 0);
        p0.set_in_molecule(true);
        p1.set_in_molecule(true);

        let container = DSContainer::new(vec![p0, p1], Vec3::zeros(), types);
        let calc = MolCalculator::new(container, 0.0005);
        assert_eq!(calc.force_between(0, 1, 9.0), 0.0);
    }
}

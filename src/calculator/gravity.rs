//! Gravitational pair force (spec.md §4.3, "GravityCalculator").
//!
//! Grounded on `original_source/src/physicsCalculator/GravityCalculator.cpp`.

use super::Calculator;
use crate::container::ParticleContainer;

pub struct GravityCalculator<C: ParticleContainer> {
    container: C,
    delta_t: f64,
}

impl<C: ParticleContainer> GravityCalculator<C> {
    pub fn new(container: C, delta_t: f64) -> Self {
        GravityCalculator { container, delta_t }
    }

    pub fn into_container(self) -> C {
        self.container
    }
}

impl<C: ParticleContainer> Calculator for GravityCalculator<C> {
    fn force_abs_from_dist_squared(&self, dist_squared: f64, t1: usize, t2: usize) -> f64 {
        let pd = self.container.type_pair_table().get(t1, t2);
        pd.mass() / (dist_squared * dist_squared.sqrt())
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

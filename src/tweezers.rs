//! Constant force applied to a fixed set of particles until a cutoff
//! time (spec.md §4.7, "Tweezers").
//!
//! Grounded on `original_source/src/physicsCalculator/Tweezers.cpp`.

use crate::container::ParticleContainer;
use crate::vec3::Vec3;

pub struct Tweezers {
    indices: Vec<usize>,
    force: Vec3,
    end_time: f64,
}

impl Tweezers {
    pub fn new(indices: Vec<usize>, force: Vec3, end_time: f64) -> Self {
        Tweezers { indices, force, end_time }
    }

    pub fn end_time(&self) -> f64 {
        self.end_time
    }

    pub fn apply(&self, container: &mut dyn ParticleContainer) {
        for &i in &self.indices {
            let p = &mut container.particles_mut()[i];
            p.add_f(self.force);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::DSContainer;
    use crate::particle::Particle;
    use crate::types::TypeDesc;

    #[test]
    fn applies_force_only_to_listed_indices() {
        let types = vec![TypeDesc::new(1.0, 1.0, 5.0, 0.01, Vec3::zeros())];
        let particles = vec![
            Particle::new(Vec3::zeros(), Vec3::zeros(), 0),
            Particle::new(Vec3::zeros(), Vec3::zeros(), 0),
        ];
        let mut container = DSContainer::new(particles, Vec3::zeros(), types);
        let tweezers = Tweezers::new(vec![1], Vec3::new(0.0, 5.0, 0.0), 10.0);
        tweezers.apply(&mut container);

        assert_eq!(*container.particles()[0].f(), Vec3::zeros());
        assert_eq!(*container.particles()[1].f(), Vec3::new(0.0, 5.0, 0.0));
    }
}

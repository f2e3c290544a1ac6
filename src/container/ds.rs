//! Direct-sum container: O(N^2) pair iteration, no spatial index
//! (spec.md §4.2, "DSContainer"). Intended for an infinite domain or a
//! very small particle count.

use super::ParticleContainer;
use crate::error::MdResult;
use crate::particle::Particle;
use crate::types::{TypeDesc, TypePairTable};
use crate::vec3::Vec3;

#[derive(Debug, Clone)]
pub struct DSContainer {
    particles: Vec<Particle>,
    domain: Vec3,
    types: Vec<TypeDesc>,
    pair_table: TypePairTable,
}

impl DSContainer {
    pub fn new(mut particles: Vec<Particle>, domain: Vec3, types: Vec<TypeDesc>) -> Self {
        for (i, p) in particles.iter_mut().enumerate() {
            p.set_index(i);
        }
        let pair_table = TypePairTable::build(&types);
        DSContainer {
            particles,
            domain,
            types,
            pair_table,
        }
    }
}

impl std::ops::Index<usize> for DSContainer {
    type Output = Particle;
    fn index(&self, i: usize) -> &Particle {
        &self.particles[i]
    }
}

impl std::ops::IndexMut<usize> for DSContainer {
    fn index_mut(&mut self, i: usize) -> &mut Particle {
        &mut self.particles[i]
    }
}

impl ParticleContainer for DSContainer {
    fn len(&self) -> usize {
        self.particles.len()
    }

    fn particles(&self) -> &[Particle] {
        &self.particles
    }

    fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    fn resize(&mut self, n: usize) {
        self.particles.resize(n, Particle::new(Vec3::zeros(), Vec3::zeros(), 0));
        for (i, p) in self.particles.iter_mut().enumerate() {
            p.set_index(i);
        }
    }

    fn domain_size(&self) -> Vec3 {
        self.domain
    }

    fn corner_vector(&self) -> Vec3 {
        self.domain
    }

    fn type_desc(&self, t: usize) -> &TypeDesc {
        &self.types[t]
    }

    fn type_pair_table(&self) -> &TypePairTable {
        &self.pair_table
    }

    fn enumerate_pairs(&self) -> Vec<(usize, usize, Vec3)> {
        let n = self.particles.len();
        let mut out = Vec::with_capacity(n * n / 2);
        for i in 0..n {
            for j in i + 1..n {
                out.push((i, j, Vec3::zeros()));
            }
        }
        out
    }

    fn update_positions(&mut self) -> MdResult<()> {
        Ok(())
    }

    fn remove_particles_out_of_domain(&mut self) -> bool {
        if self.domain == Vec3::zeros() {
            return false;
        }

        let mut removed = false;
        let mut i = 0;
        while i < self.particles.len() {
            let pos = *self.particles[i].x();
            let outside = (0..3).any(|axis| pos[axis] < 0.0 || pos[axis] >= self.domain[axis]);
            if outside {
                self.particles.swap_remove(i);
                removed = true;
            } else {
                i += 1;
            }
        }

        if removed {
            for (i, p) in self.particles.iter_mut().enumerate() {
                p.set_index(i);
            }
        }
        removed
    }
}

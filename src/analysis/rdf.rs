//! Radial distribution function accumulator (spec.md §4.8, "RDF").
//!
//! Grounded on `original_source/src/outputWriter/RDF.cpp`; the 26
//! hand-enumerated periodic combinations there (face/edge/corner
//! mirrors) are generalized here into a loop over `{-1, 0, 1}^3`,
//! restricted to the axes actually marked periodic.

use crate::container::ParticleContainer;
use crate::environment::Environment;
use crate::vec3::Vec3;

pub struct Rdf {
    delta_r: f64,
    buckets: usize,
}

impl Rdf {
    pub fn new(delta_r: f64, buckets: usize) -> Self {
        Rdf { delta_r, buckets }
    }

    fn periodic_shifts(&self, env: &Environment) -> Vec<Vec3> {
        let domain = env.domain_size;
        let periodic_axis = [
            env.boundaries[0] == crate::environment::BoundaryKind::Periodic || env.boundaries[1] == crate::environment::BoundaryKind::Periodic,
            env.boundaries[2] == crate::environment::BoundaryKind::Periodic || env.boundaries[3] == crate::environment::BoundaryKind::Periodic,
            env.boundaries[4] == crate::environment::BoundaryKind::Periodic || env.boundaries[5] == crate::environment::BoundaryKind::Periodic,
        ];

        let mut shifts = Vec::new();
        for sx in -1..=1 {
            for sy in -1..=1 {
                for sz in -1..=1 {
                    if sx == 0 && sy == 0 && sz == 0 {
                        continue;
                    }
                    if sx != 0 && !periodic_axis[0] {
                        continue;
                    }
                    if sy != 0 && !periodic_axis[1] {
                        continue;
                    }
                    if sz != 0 && !periodic_axis[2] {
                        continue;
                    }
                    shifts.push(Vec3::new(sx as f64 * domain.x, sy as f64 * domain.y, sz as f64 * domain.z));
                }
            }
        }
        shifts
    }

    /// Raw per-bucket pair counts, over every ordered pair (including
    /// every periodic mirror image).
    pub fn generate(&self, container: &dyn ParticleContainer, env: &Environment) -> Vec<usize> {
        let mut counts = vec![0usize; self.buckets];
        let max_dist = self.buckets as f64 * self.delta_r;
        let particles = container.particles();
        let shifts = self.periodic_shifts(env);

        let mut bump = |dist: f64, counts: &mut [usize]| {
            if dist < max_dist {
                let bucket = (dist / self.delta_r) as usize;
                if bucket < counts.len() {
                    counts[bucket] += 1;
                }
            }
        };

        for i in 0..particles.len() {
            for j in 0..particles.len() {
                if i == j {
                    continue;
                }
                let diff = particles[i].x() - particles[j].x();
                bump(diff.norm(), &mut counts);

                for shift in &shifts {
                    let mirrored = particles[i].x() - (particles[j].x() + shift);
                    bump(mirrored.norm(), &mut counts);
                }
            }
        }

        counts
    }

    /// `n(r) / (4pi/3 * ((r+dr)^3 - r^3))` per bucket (spec.md §4.8).
    pub fn normalize(&self, counts: &[usize]) -> Vec<f64> {
        counts
            .iter()
            .enumerate()
            .map(|(i, &n)| {
                let r = i as f64 * self.delta_r;
                let r_plus = r + self.delta_r;
                let shell_volume = 4.0 * std::f64::consts::PI / 3.0 * (r_plus.powi(3) - r.powi(3));
                n as f64 / shell_volume
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::DSContainer;
    use crate::particle::Particle;
    use crate::types::TypeDesc;

    #[test]
    fn counts_a_known_pair_in_the_right_bucket() {
        let types = vec![TypeDesc::new(1.0, 1.0, 5.0, 0.01, Vec3::zeros())];
        let particles = vec![
            Particle::new(Vec3::new(0.0, 0.0, 0.0), Vec3::zeros(), 0),
            Particle::new(Vec3::new(1.5, 0.0, 0.0), Vec3::zeros(), 0),
        ];
        let container = DSContainer::new(particles, Vec3::zeros(), types);
        let env = Environment::default();

        let rdf = Rdf::new(0.5, 10);
        let counts = rdf.generate(&container, &env);
        // Distance 1.5 falls in bucket 3 ([1.5, 2.0)); counted from both directions.
        assert_eq!(counts[3], 2);
        assert_eq!(counts.iter().sum::<usize>(), 2);
    }
}

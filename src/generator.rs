//! Lattice particle generators (spec.md §6, "cuboid generators" and
//! "disc generators").
//!
//! Grounded on `original_source/src/ParticleGenerator.cpp`
//! (`generateCuboid`) for the cuboid lattice and its Maxwell-Boltzmann
//! seeding style. `generateDisc` is referenced by
//! `inputReader/XMLTreeReader.cpp` but never defined anywhere in that
//! source tree (not even declared in `ParticleGenerator.h`) - the disc
//! generator below is authored from spec.md §6's field list instead,
//! reusing `XMLTreeReader::num_particles_added`'s radius test
//! (`x*x + y*y <= (h*r)^2`) to decide which lattice points survive.
//!
//! The RNG is threaded in explicitly (`rand::rngs::StdRng`) rather than
//! drawn from a global, per SPEC_FULL.md's Open Question resolution: the
//! source's single global generator (seeded with a fixed constant "for
//! reproducibility") becomes an explicit parameter here instead.

use crate::particle::Particle;
use crate::vec3::Vec3;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Samples one Brownian-motion velocity increment: `dim` components
/// drawn from `Normal(0, sqrt(b_m))`, the remaining `3 - dim` left at
/// zero (mirrors the source's 2D/3D `maxwellBoltzmannDistributedVelocity`).
fn brownian_velocity(b_m: f64, dimensions: usize, rng: &mut impl Rng) -> Vec3 {
    if b_m <= 0.0 {
        return Vec3::zeros();
    }
    let normal = Normal::new(0.0, b_m.sqrt()).expect("b_m is positive and finite");
    let mut v = Vec3::zeros();
    for axis in 0..dimensions.min(3) {
        v[axis] = normal.sample(rng);
    }
    v
}

/// Fills a cuboid lattice of `n1 * n2 * n3` particles of type `ptype`,
/// spaced `h` apart, starting at corner `origin`, each carrying `base_v`
/// plus an independent Brownian-motion increment.
pub fn generate_cuboid(
    origin: Vec3,
    base_v: Vec3,
    n: [usize; 3],
    h: f64,
    b_m: f64,
    dimensions: usize,
    ptype: usize,
    rng: &mut impl Rng,
) -> Vec<Particle> {
    log::debug!("generating a {}x{}x{} cuboid of particles", n[0], n[1], n[2]);
    let mut particles = Vec::with_capacity(n[0] * n[1] * n[2]);
    for i in 0..n[2] {
        for j in 0..n[1] {
            for k in 0..n[0] {
                let x = origin + Vec3::new(k as f64 * h, j as f64 * h, i as f64 * h);
                let v = base_v + brownian_velocity(b_m, dimensions, rng);
                log::trace!("placing particle at {x:?} with velocity {v:?}");
                particles.push(Particle::new(x, v, ptype));
            }
        }
    }
    particles
}

/// Fills a disc of particles in the xy-plane: every lattice point
/// `(x, y)` on a grid of spacing `h` centred on `centre` with
/// `x^2 + y^2 <= (h * radius_lattice)^2` survives, each carrying
/// `base_v` plus an independent Brownian-motion increment.
pub fn generate_disc(
    centre: Vec3,
    base_v: Vec3,
    radius_lattice: f64,
    h: f64,
    b_m: f64,
    dimensions: usize,
    ptype: usize,
    rng: &mut impl Rng,
) -> Vec<Particle> {
    let radius_distance = h * radius_lattice;
    let steps = (radius_distance / h).ceil() as i64;

    log::debug!("generating a disc of lattice radius {radius_lattice} around {centre:?}");
    let mut particles = Vec::new();
    let mut y_step = -steps;
    while y_step as f64 * h <= radius_distance {
        let y = y_step as f64 * h;
        let mut x_step = -steps;
        while x_step as f64 * h <= radius_distance {
            let x = x_step as f64 * h;
            if x * x + y * y <= radius_distance * radius_distance {
                let pos = centre + Vec3::new(x, y, 0.0);
                let v = base_v + brownian_velocity(b_m, dimensions, rng);
                log::trace!("placing particle at {pos:?} with velocity {v:?}");
                particles.push(Particle::new(pos, v, ptype));
            }
            x_step += 1;
        }
        y_step += 1;
    }
    particles
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn cuboid_produces_n1_n2_n3_particles_on_a_lattice() {
        let mut rng = StdRng::seed_from_u64(42);
        let particles = generate_cuboid(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::zeros(),
            [2, 3, 1],
            0.5,
            0.0,
            3,
            0,
            &mut rng,
        );
        assert_eq!(particles.len(), 6);
        assert_eq!(*particles[0].x(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(*particles[1].x(), Vec3::new(1.5, 2.0, 3.0));
        assert_eq!(*particles[2].x(), Vec3::new(1.0, 2.5, 3.0));
    }

    #[test]
    fn zero_brownian_motion_leaves_velocity_at_the_base_value() {
        let mut rng = StdRng::seed_from_u64(7);
        let particles = generate_cuboid(Vec3::zeros(), Vec3::new(1.0, 0.0, 0.0), [1, 1, 1], 1.0, 0.0, 3, 0, &mut rng);
        assert_eq!(*particles[0].v(), Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn disc_only_keeps_points_within_the_radius() {
        let mut rng = StdRng::seed_from_u64(1);
        let particles = generate_disc(Vec3::zeros(), Vec3::zeros(), 2.0, 1.0, 0.0, 2, 0, &mut rng);
        // Radius-2 disc on a unit lattice: every (x, y) in [-2, 2]^2 with
        // x^2 + y^2 <= 4. Hand count: 13 points on the 5x5 grid qualify.
        assert_eq!(particles.len(), 13);
        for p in &particles {
            assert!(p.x().x * p.x().x + p.x().y * p.x().y <= 4.0 + 1e-9);
            assert_eq!(p.x().z, 0.0);
        }
    }
}

//! Pair-force laws (spec.md §4.3, "Calculators").
//!
//! `Calculator` is a trait rather than an enum because exactly one law is
//! active for the lifetime of a run; `Stepper` is generic over it
//! (static dispatch), matching SPEC_FULL.md §4.3 / §9.

mod gravity;
mod lj;
mod lj_smooth;
mod molecule;

pub use gravity::GravityCalculator;
pub use lj::LJCalculator;
pub use lj_smooth::LJSmoothCalculator;
pub use molecule::MolCalculator;

use crate::container::ParticleContainer;
use rayon::prelude::*;

/// One pair-force law plus the integration kernels shared by every law
/// (ported from `physicsCalculator::Calculator` in
/// `original_source/src/physicsCalculator/Calculator.cpp`).
pub trait Calculator {
    /// Signed scalar such that `force_abs * (p_j.x - p_i.x)` is the force
    /// on `p_i`. `dist_squared` is the squared distance between the pair
    /// (plus any periodic shift already folded in by the caller).
    fn force_abs_from_dist_squared(&self, dist_squared: f64, t1: usize, t2: usize) -> f64;

    /// Same quantity, but allowed to special-case on particle identity
    /// (membrane bonds, same-molecule checks) rather than just type.
    fn force_between(&self, i: usize, j: usize, dist_squared: f64) -> f64;

    fn container(&self) -> &dyn ParticleContainer;
    fn container_mut(&mut self) -> &mut dyn ParticleContainer;
    fn delta_t(&self) -> f64;

    /// `pos <- pos + dt*vel + dt_dt_m*f` for every particle. Embarrassingly
    /// parallel over particles (spec.md §5): each particle's per-type
    /// constant is looked up through the trait object first (which is not
    /// `Sync`-bounded), then the actual update runs over the plain
    /// `&mut [Particle]` slice via `rayon`.
    fn calculate_x(&mut self) {
        let dt = self.delta_t();
        let cont = self.container_mut();
        let dt_dt_m: Vec<f64> = cont.particles().iter().map(|p| cont.type_desc(p.ptype()).dt_dt_m()).collect();
        cont.particles_mut().par_iter_mut().zip(dt_dt_m.par_iter()).for_each(|(p, &dt_dt_m)| {
            let new_x = *p.x() + dt * p.v() + dt_dt_m * p.f();
            p.set_x(new_x);
        });
        log::debug!("updated the positions");
    }

    /// `f_old <- f`; `f <- G_type`, so gravity re-accumulates every step.
    fn calculate_old_f(&mut self) {
        let cont = self.container_mut();
        let gravity: Vec<crate::vec3::Vec3> = cont.particles().iter().map(|p| cont.type_desc(p.ptype()).gravity()).collect();
        cont.particles_mut().par_iter_mut().zip(gravity.par_iter()).for_each(|(p, &g)| {
            p.set_old_f(*p.f());
            p.set_f(g);
        });
        log::debug!("updated the old force");
    }

    /// `vel <- vel + dt_m*(f_old + f)`.
    fn calculate_v(&mut self) {
        let cont = self.container_mut();
        let dt_m: Vec<f64> = cont.particles().iter().map(|p| cont.type_desc(p.ptype()).dt_m()).collect();
        cont.particles_mut().par_iter_mut().zip(dt_m.par_iter()).for_each(|(p, &dt_m)| {
            let new_v = *p.v() + dt_m * (p.old_f() + p.f());
            p.set_v(new_v);
        });
        log::debug!("updated the velocities");
    }

    /// Enumerate pairs from the container and apply Newton's third law
    /// through `force_between`.
    fn calculate_f(&mut self) {
        let pairs = self.container().enumerate_pairs();
        for (i, j, shift) in pairs {
            let cont = self.container();
            let xi = *cont.particles()[i].x() + shift;
            let xj = *cont.particles()[j].x();
            let diff = xj - xi;
            let dist_squared = diff.norm_squared();
            let force = self.force_between(i, j, dist_squared);

            let cont = self.container_mut();
            cont.particles_mut()[i].add_f(force * diff);
            cont.particles_mut()[j].add_f(-force * diff);
        }
        log::debug!("calculated the new force");
    }
}

/// Pure Lennard-Jones kernel shared by `LJCalculator`, the unsmoothed
/// branch of `LJSmoothCalculator`, and `MolCalculator`'s repulsive case
/// (spec.md §4.3).
pub(crate) fn lj_force_abs(container: &dyn ParticleContainer, dist_squared: f64, t1: usize, t2: usize) -> f64 {
    let pd = container.type_pair_table().get(t1, t2);
    let term2 = pd.sigma_squared() / dist_squared;
    let term6 = term2 * term2 * term2;
    (pd.scaled_epsilon() / dist_squared) * term6.mul_add(-2.0 * term6, term6)
}

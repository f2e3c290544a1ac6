//! Mean-squared-displacement accumulator (spec.md §4.8, "Diffusion").
//!
//! Grounded on `original_source/src/outputWriter/Diffusion.cpp`.

use crate::container::ParticleContainer;
use crate::environment::Environment;

pub struct Diffusion;

impl Diffusion {
    /// `sum_i |dt*v_i + dt_dt_m*f_i|^2 / N`.
    pub fn record(&self, container: &dyn ParticleContainer, env: &Environment) -> f64 {
        let particles = container.particles();
        if particles.is_empty() {
            return 0.0;
        }

        let total: f64 = particles
            .iter()
            .map(|p| {
                let dt_dt_m = container.type_desc(p.ptype()).dt_dt_m();
                let displacement = env.delta_t * p.v() + dt_dt_m * p.f();
                displacement.norm_squared()
            })
            .sum();

        total / particles.len() as f64
    }
}

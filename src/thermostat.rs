//! Velocity-rescaling thermostat with an optional slew-rate cap
//! (spec.md §4.6, "Thermostat").
//!
//! Grounded on `original_source/src/Thermostat.cpp`; the OpenMP
//! reduction there becomes a `rayon` parallel fold, and the source's
//! `std::exit` on a broken-physics state becomes `error::fatal`.

use crate::container::ParticleContainer;
use crate::error::MdError;
use rayon::prelude::*;

pub struct Thermostat {
    t_target: f64,
    max_change: f64,
    dimensions: usize,
}

impl Thermostat {
    pub fn new(t_target: f64, max_change: f64, dimensions: usize) -> Self {
        Thermostat {
            t_target,
            max_change,
            dimensions,
        }
    }

    /// Rescale every particle's velocity toward `t_target`, capped by
    /// `max_change` per call. Fatal if the system has particles but
    /// measures zero temperature, or if the scale factor is NaN
    /// (spec.md §4.6 steps 2 and 4).
    pub fn regulate(&self, container: &mut dyn ParticleContainer) {
        let n = container.len();
        if n == 0 {
            return;
        }

        // Look up each particle's mass sequentially (through the trait
        // object) before the parallel reduction, so the reduction itself
        // only ever touches plain `[Particle]` data - `dyn
        // ParticleContainer` carries no Sync bound, so it cannot be
        // captured inside a `rayon` closure.
        let masses: Vec<f64> = container
            .particles()
            .iter()
            .map(|p| container.type_desc(p.ptype()).mass())
            .collect();

        let e_kin: f64 = container
            .particles()
            .par_iter()
            .zip(masses.par_iter())
            .map(|(p, m)| m * p.v().norm_squared())
            .sum();

        let t_curr = e_kin / (self.dimensions * n) as f64;
        if n > 0 && t_curr == 0.0 {
            crate::error::fatal(MdError::Physical(
                "temperature of a non-empty system measured zero".to_string(),
            ));
        }

        let diff = self.t_target - t_curr;
        let t_step = if diff.abs() <= self.max_change {
            self.t_target
        } else if diff < 0.0 {
            t_curr - self.max_change
        } else {
            t_curr + self.max_change
        };

        let beta = (t_step / t_curr).sqrt();
        if beta.is_nan() {
            crate::error::fatal(MdError::Physical("temperature scale factor was NaN".to_string()));
        }

        container.particles_mut().par_iter_mut().for_each(|p| {
            let scaled = beta * p.v();
            p.set_v(scaled);
        });
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
    fn matches_worked_example_rescale_to_nine_from_one() {
        // spec.md §8 scenario 4: single 3D particle, v=(1,1,1), m=1,
        // T_target=9 from T_curr=1 -> v becomes (3,3,3).
        let types = vec![TypeDesc::new(1.0, 1.0, 5.0, 0.01, Vec3::zeros())];
        let particles = vec![Particle::new(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0), 0)];
        let mut container = DSContainer::new(particles, Vec3::zeros(), types);
        let thermostat = Thermostat::new(9.0, f64::INFINITY, 3);
        thermostat.regulate(&mut container);
        let v = *container.particles()[0].v();
        approx::assert_relative_eq!(v.x, 3.0, epsilon = 1e-9);
        approx::assert_relative_eq!(v.y, 3.0, epsilon = 1e-9);
        approx::assert_relative_eq!(v.z, 3.0, epsilon = 1e-9);
    }

    #[test]
    fn rescales_to_target_temperature_within_slew_cap() {
        let types = vec![TypeDesc::new(1.0, 1.0, 5.0, 0.01, Vec3::zeros())];
        let particles = vec![
            Particle::new(Vec3::zeros(), Vec3::new(1.0, 0.0, 0.0), 0),
            Particle::new(Vec3::zeros(), Vec3::new(-1.0, 0.0, 0.0), 0),
        ];
        let mut container = DSContainer::new(particles, Vec3::zeros(), types);
        // E_kin = 1*1 + 1*1 = 2, T_curr = 2/(3*2) = 1/3.
        let thermostat = Thermostat::new(1.0, f64::INFINITY, 3);
        thermostat.regulate(&mut container);

        let e_kin: f64 = container.particles().iter().map(|p| p.v().norm_squared()).sum();
        let t_after = e_kin / (3 * container.len()) as f64;
        approx::assert_relative_eq!(t_after, 1.0, epsilon = 1e-9);
    }
}

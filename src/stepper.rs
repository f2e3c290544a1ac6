//! Drives one full leapfrog iteration through boundaries, force
//! accumulation, and optional tweezers (spec.md §4.5, "Stepper").
//!
//! Grounded on `original_source/src/boundaries/Stepper.cpp`. `Stepper`
//! is generic over `C: Calculator` (static dispatch, exactly one law
//! per run) but stores its six boundaries as `Box<dyn Boundary>`
//! (heterogeneous, dynamic dispatch), per SPEC_FULL.md §9.

use crate::boundary::Boundary;
use crate::calculator::Calculator;
use crate::environment::Face;
use crate::tweezers::Tweezers;

pub struct Stepper {
    boundaries: [Box<dyn Boundary>; 6],
    out: bool,
    tweezers: Option<Tweezers>,
}

impl Stepper {
    pub fn new(boundaries: [Box<dyn Boundary>; 6], tweezers: Option<Tweezers>) -> Self {
        let out = boundaries.iter().any(|b| b.is_outflow());
        Stepper { boundaries, out, tweezers }
    }

    /// The fixed ten-step sequence from spec.md §4.5.
    pub fn step<C: Calculator>(&self, calc: &mut C, t: f64) {
        calc.calculate_x();
        calc.container_mut().update_positions().unwrap_or_else(|e| crate::error::fatal(e));

        for face in Face::ALL {
            let boundary = &self.boundaries[face as usize];
            for p in calc.container_mut().particles_mut() {
                boundary.post_x(p);
            }
        }

        if self.out {
            calc.container_mut().remove_particles_out_of_domain();
            calc.container_mut().update_positions().unwrap_or_else(|e| crate::error::fatal(e));
        }

        calc.calculate_old_f();
        calc.calculate_f();

        for face in Face::ALL {
            let boundary = &self.boundaries[face as usize];
            let n = calc.container().len();
            for i in 0..n {
                let mut p = calc.container().particles()[i].clone();
                boundary.post_f(&mut p, &*calc);
                calc.container_mut().particles_mut()[i] = p;
            }
        }

        if let Some(tweezers) = &self.tweezers {
            if t <= tweezers.end_time() {
                tweezers.apply(calc.container_mut());
            }
        }

        calc.calculate_v();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::{HardBoundary, NoBoundary};
    use crate::calculator::LJCalculator;
    use crate::container::DSContainer;
    use crate::environment::Face;
    use crate::particle::Particle;
    use crate::types::TypeDesc;
    use crate::vec3::Vec3;

    #[test]
    fn a_single_particle_bounces_off_a_hard_wall() {
        let types = vec![TypeDesc::new(1.0, 1.0, 5.0, 0.01, Vec3::zeros())];
        let particles = vec![Particle::new(Vec3::new(0.05, 5.0, 5.0), Vec3::new(-1.0, 0.0, 0.0), 0)];
        let container = DSContainer::new(particles, Vec3::new(10.0, 10.0, 10.0), types);
        let mut calc = LJCalculator::new(container, 0.01);

        let boundaries: [Box<dyn crate::boundary::Boundary>; 6] = [
            Box::new(HardBoundary::new(Face::XNear, 10.0)),
            Box::new(NoBoundary),
            Box::new(NoBoundary),
            Box::new(NoBoundary),
            Box::new(NoBoundary),
            Box::new(NoBoundary),
        ];
        let stepper = Stepper::new(boundaries, None);
        for i in 0..6 {
            stepper.step(&mut calc, i as f64 * 0.01);
        }

        assert!(calc.container().particles()[0].x().x >= 0.0);
        assert!(calc.container().particles()[0].v().x > 0.0);
    }
}

//! The six boundary variants applied once per face, per step
//! (spec.md §4.4, "Boundaries").
//!
//! Grounded on `original_source/src/boundaries/{HardBoundary,
//! GhostBoundary, PeriodicBoundary, NoBoundary}.cpp`; `Boundary` is a
//! trait object (`Box<dyn Boundary>`) since `Stepper` stores six
//! heterogeneous instances together, matching
//! `std::array<std::unique_ptr<Boundary>, 6>` in
//! `original_source/src/boundaries/Stepper.h`.

use crate::calculator::Calculator;
use crate::container::ParticleContainer;
use crate::environment::Face;
use crate::particle::Particle;

/// `post_x` runs after position integration; `post_f` runs after force
/// accumulation. Both see the single `axis` this boundary governs and
/// the plane's position along it (`0.0` for a near face, `domain[axis]`
/// for a far face).
pub trait Boundary {
    fn post_x(&self, p: &mut Particle);
    fn post_f(&self, p: &mut Particle, calc: &dyn Calculator);

    /// `true` if this boundary is an `OutflowBoundary`; `Stepper` uses
    /// this to decide whether outflow culling runs this step.
    fn is_outflow(&self) -> bool {
        false
    }
}

fn plane_position(face: Face, domain_axis: f64) -> f64 {
    if face.is_far() {
        domain_axis
    } else {
        0.0
    }
}

pub struct NoBoundary;

impl Boundary for NoBoundary {
    fn post_x(&self, _p: &mut Particle) {}
    fn post_f(&self, _p: &mut Particle, _calc: &dyn Calculator) {}
}

/// Reflects a particle that crossed the plane: mirrors its position
/// about the plane and negates the velocity's normal component.
pub struct HardBoundary {
    axis: usize,
    plane: f64,
    far: bool,
}

impl HardBoundary {
    pub fn new(face: Face, domain_axis: f64) -> Self {
        HardBoundary {
            axis: face.axis(),
            plane: plane_position(face, domain_axis),
            far: face.is_far(),
        }
    }
}

impl Boundary for HardBoundary {
    fn post_x(&self, p: &mut Particle) {
        let mut x = *p.x();
        let crossed = if self.far { x[self.axis] > self.plane } else { x[self.axis] < self.plane };
        if !crossed {
            return;
        }

        x[self.axis] = 2.0 * self.plane - x[self.axis];
        p.set_x(x);

        let mut v = *p.v();
        v[self.axis] *= -1.0;
        p.set_v(v);
    }

    fn post_f(&self, _p: &mut Particle, _calc: &dyn Calculator) {}
}

/// Applies a repulsive LJ force against a mirror image of the particle
/// once it comes within half the LJ equilibrium distance of the plane
/// (spec.md §4.4).
pub struct GhostBoundary {
    axis: usize,
    plane: f64,
}

impl GhostBoundary {
    pub fn new(face: Face, domain_axis: f64) -> Self {
        GhostBoundary {
            axis: face.axis(),
            plane: plane_position(face, domain_axis),
        }
    }
}

impl Boundary for GhostBoundary {
    fn post_x(&self, _p: &mut Particle) {}

    fn post_f(&self, p: &mut Particle, calc: &dyn Calculator) {
        let x = p.x()[self.axis];
        let t = p.ptype();
        let sigma = calc.container().type_desc(t).sigma();
        let r = sigma * 2f64.powf(1.0 / 6.0) * 0.5;

        let dist_to_plane = (self.plane - x).abs();
        if dist_to_plane >= r {
            return;
        }

        let mirror_offset = 2.0 * (self.plane - x);
        let dist_squared = mirror_offset * mirror_offset;
        let force_abs = calc.force_abs_from_dist_squared(dist_squared, t, t);

        let mut f = *p.f();
        f[self.axis] += force_abs * mirror_offset;
        p.set_f(f);
    }
}

/// Shifts a particle back into the domain when it crosses the plane;
/// the matching cross-boundary force comes from the cell list's
/// periodic-wrap pair enumerators, not from this boundary's `post_f`.
pub struct PeriodicBoundary {
    axis: usize,
    domain_axis: f64,
}

impl PeriodicBoundary {
    pub fn new(face: Face, domain_axis: f64) -> Self {
        PeriodicBoundary {
            axis: face.axis(),
            domain_axis,
        }
    }
}

impl Boundary for PeriodicBoundary {
    fn post_x(&self, p: &mut Particle) {
        let mut x = *p.x();
        if x[self.axis] < 0.0 {
            x[self.axis] += self.domain_axis;
            p.set_x(x);
        } else if x[self.axis] >= self.domain_axis {
            x[self.axis] -= self.domain_axis;
            p.set_x(x);
        }
    }

    fn post_f(&self, _p: &mut Particle, _calc: &dyn Calculator) {}
}

/// A no-op in both hooks; its only effect is on `Stepper::out`, which
/// gates the outflow-culling branch of step 4.
pub struct OutflowBoundary;

impl Boundary for OutflowBoundary {
    fn post_x(&self, _p: &mut Particle) {}
    fn post_f(&self, _p: &mut Particle, _calc: &dyn Calculator) {}
    fn is_outflow(&self) -> bool {
        true
    }
}

pub fn build(kind: crate::environment::BoundaryKind, face: Face, domain_axis: f64) -> Box<dyn Boundary> {
    use crate::environment::BoundaryKind;
    match kind {
        BoundaryKind::Inf => Box::new(NoBoundary),
        BoundaryKind::Hard => Box::new(HardBoundary::new(face, domain_axis)),
        BoundaryKind::Ghost => Box::new(GhostBoundary::new(face, domain_axis)),
        BoundaryKind::Periodic => Box::new(PeriodicBoundary::new(face, domain_axis)),
        BoundaryKind::Outflow => Box::new(OutflowBoundary),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{Calculator, LJCalculator};
    use crate::container::DSContainer;
    use crate::types::TypeDesc;
    use crate::vec3::Vec3;

    #[test]
    fn hard_boundary_reflects_position_and_velocity() {
        let boundary = HardBoundary::new(Face::XNear, 10.0);
        let mut p = Particle::new(Vec3::new(-1.0, 0.0, 2.0), Vec3::new(2.0, 1.0, 1.0), 0);
        boundary.post_x(&mut p);
        assert_eq!(*p.x(), Vec3::new(1.0, 0.0, 2.0));
        assert_eq!(*p.v(), Vec3::new(-2.0, 1.0, 1.0));
    }

    #[test]
    fn hard_boundary_leaves_particle_untouched_when_inside_domain() {
        let boundary = HardBoundary::new(Face::XFar, 10.0);
        let mut p = Particle::new(Vec3::new(5.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0), 0);
        boundary.post_x(&mut p);
        assert_eq!(*p.x(), Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(*p.v(), Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn periodic_boundary_wraps_across_the_far_face() {
        let boundary = PeriodicBoundary::new(Face::XFar, 10.0);
        let mut p = Particle::new(Vec3::new(10.5, 1.0, 1.0), Vec3::zeros(), 0);
        boundary.post_x(&mut p);
        assert_eq!(p.x().x, 0.5);
    }

    #[test]
    fn periodic_boundary_wraps_across_the_near_face() {
        let boundary = PeriodicBoundary::new(Face::XNear, 10.0);
        let mut p = Particle::new(Vec3::new(-0.5, 1.0, 1.0), Vec3::zeros(), 0);
        boundary.post_x(&mut p);
        assert_eq!(p.x().x, 9.5);
    }

    #[test]
    fn ghost_boundary_matches_worked_example() {
        // spec.md §8 scenario 3: particle at (5,5,0.1), sigma=1, epsilon=5,
        // z-near ghost plane at 0 -> f_z approx 2.92959375e11.
        let types = vec![TypeDesc::new(1.0, 1.0, 5.0, 0.0005, Vec3::zeros())];
        let particles = vec![Particle::new(Vec3::new(5.0, 5.0, 0.1), Vec3::zeros(), 0)];
        let container = DSContainer::new(particles, Vec3::zeros(), types);
        let calc = LJCalculator::new(container, 0.0005);

        let boundary = GhostBoundary::new(Face::ZNear, 0.0);
        let mut p = calc.container().particles()[0].clone();
        boundary.post_f(&mut p, &calc);

        assert!((p.f().z - 2.92959375e11).abs() / 2.92959375e11 < 1e-6);
    }
}

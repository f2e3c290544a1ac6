//! Checkpoint record shapes (spec.md §6, "Checkpoint").
//!
//! The binary layout itself - native-endian `u64`/`f64`/`i32` fields
//! written in the exact order below - is owned by the excluded
//! file-serialization front end. This module only defines the record
//! shapes that front end reads into and writes out of, so that the
//! core and the (external) checkpoint reader/writer agree on a single
//! set of types.

use crate::vec3::Vec3;

/// One `TypeDesc`'s on-disk fields, in file order: mass, sigma,
/// epsilon, delta_t, gravity. `g` is a single scalar on disk (spec.md
/// §6) even though the in-memory `TypeDesc` carries a full gravity
/// vector; the excluded checkpoint front end is responsible for
/// broadcasting it onto whichever axis the run configures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeRecord {
    pub mass: f64,
    pub sigma: f64,
    pub epsilon: f64,
    pub delta_t: f64,
    pub g: f64,
}

/// One particle's on-disk fields, in file order: position, velocity,
/// type index, force.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleRecord {
    pub pos: Vec3,
    pub vel: Vec3,
    pub ptype: i32,
    pub force: Vec3,
}

/// The full header + body shape a checkpoint file carries: a type
/// table followed by a particle table (spec.md §6).
#[derive(Debug, Clone, PartialEq)]
pub struct Checkpoint {
    pub types: Vec<TypeRecord>,
    pub particles: Vec<ParticleRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_field_order_matches_the_documented_layout() {
        let record = TypeRecord {
            mass: 1.0,
            sigma: 1.0,
            epsilon: 5.0,
            delta_t: 0.01,
            g: 0.0,
        };
        let checkpoint = Checkpoint {
            types: vec![record],
            particles: vec![ParticleRecord {
                pos: Vec3::new(1.0, 2.0, 3.0),
                vel: Vec3::zeros(),
                ptype: 0,
                force: Vec3::zeros(),
            }],
        };
        assert_eq!(checkpoint.types.len(), 1);
        assert_eq!(checkpoint.particles[0].ptype, 0);
    }
}

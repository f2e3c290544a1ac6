//! A molecular-dynamics core: Stormer-Verlet integration over
//! Lennard-Jones (plain, smoothed, and membrane-harmonic) pair forces,
//! linked-cell spatial decomposition, reflective/periodic/outflow
//! boundaries, a velocity-rescaling thermostat, external forces
//! (gravity, tweezers), particle generators, and RDF/diffusion
//! analysis accumulators.
//!
//! The CLI, XML/text configuration parsing, checkpoint file I/O, and
//! VTK/XYZ serializers are external collaborators; this crate defines
//! only the core they drive (spec.md §1).

pub mod analysis;
pub mod boundary;
pub mod calculator;
pub mod checkpoint;
pub mod container;
pub mod environment;
pub mod error;
pub mod generator;
pub mod particle;
pub mod stepper;
pub mod thermostat;
pub mod tweezers;
pub mod types;
pub mod vec3;

pub use boundary::Boundary;
pub use calculator::Calculator;
pub use container::ParticleContainer;
pub use environment::Environment;
pub use error::{MdError, MdResult};
pub use particle::Particle;
pub use stepper::Stepper;
pub use thermostat::Thermostat;
pub use tweezers::Tweezers;
pub use vec3::Vec3;

//! The read-only configuration snapshot consumed by `Stepper`, the
//! calculators, and the thermostat (spec.md §3, "Environment").
//!
//! Populating an `Environment` from CLI flags, XML, or a checkpoint
//! header is the job of the excluded front end; this module only
//! defines the shape every collaborator agrees on.

use crate::vec3::Vec3;
use serde::{Deserialize, Serialize};

/// Per-face boundary condition kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundaryKind {
    Inf,
    Hard,
    Ghost,
    Periodic,
    Outflow,
}

/// Output file format for periodic snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    None,
    Vtk,
    Xyz,
    Checkpoint,
}

/// Which pair-force law the run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalculatorKind {
    Gravity,
    Lj,
    LjSmooth,
    Molecule,
}

/// Input file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputFormat {
    Txt,
    Xml,
    Checkpoint,
}

/// The six faces of the domain, in the fixed order the `Stepper` applies
/// boundary corrections (spec.md §4.5 step 3): x-near, x-far, y-near,
/// y-far, z-near, z-far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Face {
    XNear,
    XFar,
    YNear,
    YFar,
    ZNear,
    ZFar,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::XNear,
        Face::XFar,
        Face::YNear,
        Face::YFar,
        Face::ZNear,
        Face::ZFar,
    ];

    /// The axis (0=x, 1=y, 2=z) this face lies on.
    pub fn axis(self) -> usize {
        match self {
            Face::XNear | Face::XFar => 0,
            Face::YNear | Face::YFar => 1,
            Face::ZNear | Face::ZFar => 2,
        }
    }

    /// `true` for the far face of an axis (the plane at `domain[axis]`
    /// rather than at `0`).
    pub fn is_far(self) -> bool {
        matches!(self, Face::XFar | Face::YFar | Face::ZFar)
    }
}

/// Thermostat configuration, if active for the run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ThermostatConfig {
    pub t_target: f64,
    pub max_change: f64,
    pub dimensions: usize,
    pub frequency: u64,
}

/// Configuration snapshot shared by `Stepper`, the calculators, and the
/// thermostat. Finite-domain axes are non-zero; `domain_size == (0,0,0)`
/// means "no finite domain" (spec.md §3).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Environment {
    pub delta_t: f64,
    pub t_end: f64,
    pub r_cutoff: f64,
    pub domain_size: Vec3,
    pub boundaries: [BoundaryKind; 6],
    pub gravity: Vec3,
    pub thermostat: Option<ThermostatConfig>,
    pub print_step: u64,
    pub output_format: OutputFormat,
    pub calculator_kind: CalculatorKind,
    pub input_format: InputFormat,
}

impl Default for Environment {
    fn default() -> Self {
        Environment {
            delta_t: 0.014,
            t_end: 1000.0,
            r_cutoff: 3.0,
            domain_size: Vec3::zeros(),
            boundaries: [BoundaryKind::Inf; 6],
            gravity: Vec3::zeros(),
            thermostat: None,
            print_step: 10,
            output_format: OutputFormat::Vtk,
            calculator_kind: CalculatorKind::Lj,
            input_format: InputFormat::Txt,
        }
    }
}

impl Environment {
    /// `true` when the domain is finite along every axis that needs it;
    /// `(0,0,0)` is the sentinel for an infinite domain (spec.md §3).
    pub fn has_finite_domain(&self) -> bool {
        self.domain_size != Vec3::zeros()
    }

    pub fn face_boundary(&self, face: Face) -> BoundaryKind {
        self.boundaries[face as usize]
    }

    pub fn any_outflow(&self) -> bool {
        self.boundaries.iter().any(|b| *b == BoundaryKind::Outflow)
    }

    pub fn any_periodic(&self) -> bool {
        self.boundaries.iter().any(|b| *b == BoundaryKind::Periodic)
    }
}

//! Error taxonomy for the simulation core.
//!
//! `ConfigError` and `IoError` (spec.md §7) are reported by the excluded
//! CLI/XML/file front end; they are represented here only so that a
//! front end built on top of this crate has a single error type to
//! convert into. `OutOfDomain` and `Physical` are the two hot-loop
//! conditions the core itself can detect; both are treated as fatal.

use thiserror::Error;

/// The four fatal conditions a simulation run can hit (spec.md §7),
/// realized as a single type.
#[derive(Debug, Error)]
pub enum MdError {
    /// A particle's position could not be bucketed into the cell grid.
    #[error("particle at ({x}, {y}, {z}) is out of the cell grid bounds (n = ({nx}, {ny}, {nz}))")]
    OutOfDomain {
        x: f64,
        y: f64,
        z: f64,
        nx: usize,
        ny: usize,
        nz: usize,
    },

    /// A thermostat invocation measured zero temperature on a non-empty
    /// system, or produced a NaN scale factor.
    #[error("physical invariant violated: {0}")]
    Physical(String),

    /// Malformed configuration (duplicate flag, unknown option, an
    /// out-of-range numeric value, a periodic axis with r_cutoff >
    /// domain/2, ...). Reported at startup.
    #[error("configuration error: {0}")]
    Config(String),

    /// An output or input file could not be opened.
    #[error("I/O error: {0}")]
    Io(String),
}

/// Log the error at `error!` and panic, matching the source's
/// `SPDLOG_CRITICAL` + `exit(1)` pattern for hot-loop invariant failures
/// (spec.md §7, §9 "Exceptions").
pub fn fatal(err: MdError) -> ! {
    log::error!("{err}");
    panic!("{err}");
}

pub type MdResult<T> = Result<T, MdError>;

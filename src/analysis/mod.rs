//! Radial distribution function and diffusion accumulators
//! (spec.md §4.8, "RDF and Diffusion"). Both are numerical
//! accumulators only; writing their output to disk is the excluded
//! file-serialization front end's job.

mod diffusion;
mod rdf;

pub use diffusion::Diffusion;
pub use rdf::Rdf;

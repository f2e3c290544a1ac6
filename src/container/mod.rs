//! `ParticleContainer` (L2) and its two backing implementations
//! (spec.md §3, "ParticleContainer"; §4.2).

mod boxed;
mod cell_list;
mod ds;

pub use boxed::BoxContainer;
pub use cell_list::CellList;
pub use ds::DSContainer;

use crate::error::MdResult;
use crate::particle::Particle;
use crate::types::{TypeDesc, TypePairTable};
use crate::vec3::Vec3;

/// Owns the particle array and exposes the pair-iteration primitives
/// every calculator and boundary needs. `DSContainer` (direct sum) and
/// `BoxContainer` (cell-list backed) are its two implementations
/// (spec.md §4.2).
pub trait ParticleContainer {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn particles(&self) -> &[Particle];
    fn particles_mut(&mut self) -> &mut [Particle];

    /// Grow or shrink the dense particle array, matching the C++
    /// `resize(n)` primitive used by the particle generator.
    fn resize(&mut self, n: usize);

    /// `(0,0,0)` means "no finite domain".
    fn domain_size(&self) -> Vec3;

    /// The far corner of the domain the container actually indexes,
    /// used by the periodic-wrap machinery; for `DSContainer` this is
    /// just `domain_size()`.
    fn corner_vector(&self) -> Vec3;

    fn type_desc(&self, t: usize) -> &TypeDesc;
    fn type_pair_table(&self) -> &TypePairTable;

    /// Every pair within the cutoff (plus, for periodic boxes, every
    /// minimum-image wrap pair), as `(i, j, shift)` where `shift` is the
    /// displacement that should be added to particle `i`'s position
    /// before computing `j`'s minimum-image direction (zero for
    /// in-domain pairs).
    fn enumerate_pairs(&self) -> Vec<(usize, usize, Vec3)>;

    /// Rebucket (cell-list backed containers) or no-op (direct sum).
    fn update_positions(&mut self) -> MdResult<()>;

    /// Swap-remove every particle whose position lies outside
    /// `[0, domain_axis)` on any finite axis. Returns `true` if any
    /// particle was removed (spec.md §4.2).
    fn remove_particles_out_of_domain(&mut self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::Particle;

    fn make_types() -> Vec<TypeDesc> {
        vec![TypeDesc::new(1.0, 1.0, 5.0, 0.01, Vec3::zeros())]
    }

    #[test]
    fn outflow_culling_keeps_only_in_domain_particles() {
        let domain = Vec3::new(10.0, 20.0, 10.0);
        let positions = [
            (1.0, 3.0, 1.0),
            (-2.0, 7.0, 3.0),
            (6.0, 25.0, 3.0),
            (7.0, 7.0, -1.0),
            (21.0, 17.0, 1.0),
            (6.0, 11.0, 5.0),
        ];
        let particles: Vec<Particle> = positions
            .iter()
            .map(|&(x, y, z)| Particle::new(Vec3::new(x, y, z), Vec3::zeros(), 0))
            .collect();

        let mut container = DSContainer::new(particles, domain, make_types());
        let removed = container.remove_particles_out_of_domain();
        assert!(removed);

        let remaining: Vec<_> = container.particles().iter().map(|p| *p.x()).collect();
        assert_eq!(remaining.len(), 2);
        assert!(remaining.contains(&Vec3::new(1.0, 3.0, 1.0)));
        assert!(remaining.contains(&Vec3::new(6.0, 11.0, 5.0)));
    }
}

//! Cell-list backed container (spec.md §4.2, "BoxContainer").

use super::{CellList, ParticleContainer};
use crate::error::MdResult;
use crate::particle::Particle;
use crate::types::{TypeDesc, TypePairTable};
use crate::vec3::Vec3;

#[derive(Debug, Clone)]
pub struct BoxContainer {
    particles: Vec<Particle>,
    domain: Vec3,
    types: Vec<TypeDesc>,
    pair_table: TypePairTable,
    cells: CellList,
    /// Which axes (x, y, z) participate in a periodic wrap. A face-pair
    /// enumerator fires when the axis it wraps is periodic; an edge
    /// enumerator fires when both of its adjacent axes are periodic; a
    /// corner enumerator fires only when all three axes are periodic
    /// (spec.md §4.1, "Periodic enumeration").
    periodic: [bool; 3],
}

impl BoxContainer {
    pub fn new(
        mut particles: Vec<Particle>,
        r_cutoff: f64,
        domain: Vec3,
        types: Vec<TypeDesc>,
        periodic: [bool; 3],
    ) -> MdResult<Self> {
        for axis in 0..3 {
            if periodic[axis] && r_cutoff > domain[axis] / 2.0 {
                return Err(crate::error::MdError::Config(format!(
                    "r_cutoff ({r_cutoff}) exceeds domain[{axis}]/2 ({}) on a periodic axis",
                    domain[axis] / 2.0
                )));
            }
        }

        for (i, p) in particles.iter_mut().enumerate() {
            p.set_index(i);
        }
        let pair_table = TypePairTable::build(&types);
        let mut cells = CellList::new(r_cutoff, domain);
        cells.create_list(&particles)?;

        Ok(BoxContainer {
            particles,
            domain,
            types,
            pair_table,
            cells,
            periodic,
        })
    }

    pub fn cells(&self) -> &CellList {
        &self.cells
    }

    /// Indices of particles sitting in halo cells (spec.md §4.1).
    pub fn halo_indices(&self) -> Vec<usize> {
        self.cells.loop_halo()
    }

    /// Indices of particles in the single-cell-deep ring just inside
    /// the domain.
    pub fn boundary_indices(&self) -> Vec<usize> {
        self.cells.loop_boundary()
    }

    /// Indices of particles in every interior cell.
    pub fn inner_indices(&self) -> Vec<usize> {
        self.cells.loop_inner()
    }

    fn periodic_wrap_pairs(&self) -> Vec<(usize, usize, Vec3)> {
        let [px, py, pz] = self.periodic;
        let mut out = Vec::new();

        if pz {
            out.extend(self.cells.loop_xy_pairs(&self.particles));
        }
        if py {
            out.extend(self.cells.loop_xz_pairs(&self.particles));
        }
        if px {
            out.extend(self.cells.loop_yz_pairs(&self.particles));
        }
        if py && pz {
            out.extend(self.cells.loop_x_near(&self.particles));
            out.extend(self.cells.loop_x_far(&self.particles));
        }
        if px && pz {
            out.extend(self.cells.loop_y_near(&self.particles));
            out.extend(self.cells.loop_y_far(&self.particles));
        }
        if px && py {
            out.extend(self.cells.loop_z_near(&self.particles));
            out.extend(self.cells.loop_z_far(&self.particles));
        }
        if px && py && pz {
            out.extend(self.cells.loop_origin_corner(&self.particles));
            out.extend(self.cells.loop_x_corner(&self.particles));
            out.extend(self.cells.loop_y_corner(&self.particles));
            out.extend(self.cells.loop_xy_corner(&self.particles));
        }

        out
    }
}

impl std::ops::Index<usize> for BoxContainer {
    type Output = Particle;
    fn index(&self, i: usize) -> &Particle {
        &self.particles[i]
    }
}

impl std::ops::IndexMut<usize> for BoxContainer {
    fn index_mut(&mut self, i: usize) -> &mut Particle {
        &mut self.particles[i]
    }
}

impl ParticleContainer for BoxContainer {
    fn len(&self) -> usize {
        self.particles.len()
    }

    fn particles(&self) -> &[Particle] {
        &self.particles
    }

    fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    fn resize(&mut self, n: usize) {
        self.particles.resize(n, Particle::new(Vec3::zeros(), Vec3::zeros(), 0));
        for (i, p) in self.particles.iter_mut().enumerate() {
            p.set_index(i);
        }
    }

    fn domain_size(&self) -> Vec3 {
        self.domain
    }

    fn corner_vector(&self) -> Vec3 {
        self.cells.corner_vector()
    }

    fn type_desc(&self, t: usize) -> &TypeDesc {
        &self.types[t]
    }

    fn type_pair_table(&self) -> &TypePairTable {
        &self.pair_table
    }

    fn enumerate_pairs(&self) -> Vec<(usize, usize, Vec3)> {
        let mut out: Vec<(usize, usize, Vec3)> = self
            .cells
            .loop_cell_pairs_parallel(&self.particles)
            .into_iter()
            .map(|(a, b)| (a, b, Vec3::zeros()))
            .collect();
        out.extend(self.periodic_wrap_pairs());
        out
    }

    fn update_positions(&mut self) -> MdResult<()> {
        self.cells.create_list(&self.particles)
    }

    fn remove_particles_out_of_domain(&mut self) -> bool {
        let mut removed = false;
        let mut i = 0;
        while i < self.particles.len() {
            let pos = *self.particles[i].x();
            let outside = (0..3).any(|axis| pos[axis] < 0.0 || pos[axis] >= self.domain[axis]);
            if outside {
                self.particles.swap_remove(i);
                removed = true;
            } else {
                i += 1;
            }
        }

        if removed {
            for (i, p) in self.particles.iter_mut().enumerate() {
                p.set_index(i);
            }
        }
        removed
    }
}

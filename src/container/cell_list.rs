//! The halo-padded 3D cell grid (spec.md §4.1, "CellList", L2a).
//!
//! Grounded on `original_source/src/container/CellList.cpp`. The C++
//! version hands a `std::function<particle_pair_it>` callback to each
//! enumerator; that pattern aliases badly against a mutable particle
//! array in Rust, so every enumerator here instead collects and returns
//! the `(i, j)` (or, for periodic wraps, `(i, j, shift)`) pairs it found.
//! The calculator applies the actual force law and writes back into the
//! particle array once enumeration has finished.

use crate::error::{MdError, MdResult};
use crate::particle::Particle;
use crate::vec3::Vec3;
use rayon::prelude::*;
use std::collections::HashSet;

/// The 13 forward half-neighbourhood directions used by `loop_cell_pairs`
/// so each unordered adjacent-cell pair is visited exactly once
/// (spec.md §4.1).
const FORWARD_DIRECTIONS: [(isize, isize, isize); 13] = [
    (1, 0, 0),
    (0, 1, 0),
    (0, 0, 1),
    (1, 1, 0),
    (1, 0, 1),
    (0, 1, 1),
    (1, 1, 1),
    (1, -1, 0),
    (1, 0, -1),
    (1, -1, -1),
    (-1, -1, 1),
    (0, -1, 1),
    (1, -1, 1),
];

#[derive(Debug, Clone)]
pub struct CellList {
    rc: f64,
    rc_squared: f64,
    /// Total cell counts per axis, including the 1-cell halo on each
    /// side (`n_interior_i + 2`).
    n: [usize; 3],
    cell_size: Vec3,
    domain: Vec3,
    cells: Vec<Vec<usize>>,
    adjacency: Vec<Vec<usize>>,
    adjacency_squared: Vec<Vec<usize>>,
    colors: Vec<usize>,
    groups: Vec<Vec<usize>>,
}

impl CellList {
    pub fn new(rc: f64, domain: Vec3) -> Self {
        let n_interior = [
            (domain.x / rc).ceil().max(1.0) as usize,
            (domain.y / rc).ceil().max(1.0) as usize,
            (domain.z / rc).ceil().max(1.0) as usize,
        ];
        let n = [n_interior[0] + 2, n_interior[1] + 2, n_interior[2] + 2];
        let cell_size = Vec3::new(
            domain.x / n_interior[0] as f64,
            domain.y / n_interior[1] as f64,
            domain.z / n_interior[2] as f64,
        );

        let total_cells = n[0] * n[1] * n[2];
        let mut list = CellList {
            rc,
            rc_squared: rc * rc,
            n,
            cell_size,
            domain,
            cells: vec![Vec::new(); total_cells],
            adjacency: Vec::new(),
            adjacency_squared: Vec::new(),
            colors: Vec::new(),
            groups: Vec::new(),
        };
        list.initialize_colouring();
        list
    }

    #[inline]
    fn cell_index(&self, x: usize, y: usize, z: usize) -> usize {
        z + y * self.n[2] + x * self.n[1] * self.n[2]
    }

    fn n_interior(&self, axis: usize) -> usize {
        self.n[axis] - 2
    }

    /// The far corner of the domain, expressed in cutoff-radius units
    /// (spec.md §4.2, "corner-vector getter").
    pub fn corner_vector(&self) -> Vec3 {
        Vec3::new(
            self.rc * self.n_interior(0) as f64,
            self.rc * self.n_interior(1) as f64,
            self.rc * self.n_interior(2) as f64,
        )
    }

    pub fn rc(&self) -> f64 {
        self.rc
    }

    /// Rebucket every particle into its grid cell. Fails with
    /// `OutOfDomain` if a particle's position maps outside the halo;
    /// the surrounding `Stepper` guarantees this never happens for
    /// particles that remain in the domain (spec.md §4.1).
    pub fn create_list(&mut self, particles: &[Particle]) -> MdResult<()> {
        for cell in &mut self.cells {
            cell.clear();
        }

        for (i, p) in particles.iter().enumerate() {
            let pos = p.x();
            let coords = [
                (pos.x / self.cell_size.x).floor() + 1.0,
                (pos.y / self.cell_size.y).floor() + 1.0,
                (pos.z / self.cell_size.z).floor() + 1.0,
            ];

            for axis in 0..3 {
                if coords[axis] < 0.0 || coords[axis] >= self.n[axis] as f64 {
                    return Err(MdError::OutOfDomain {
                        x: pos.x,
                        y: pos.y,
                        z: pos.z,
                        nx: self.n[0],
                        ny: self.n[1],
                        nz: self.n[2],
                    });
                }
            }

            let (x, y, z) = (coords[0] as usize, coords[1] as usize, coords[2] as usize);
            let idx = self.cell_index(x, y, z);
            self.cells[idx].push(i);
        }
        Ok(())
    }

    fn build_adjacency(&self) -> Vec<Vec<usize>> {
        let mut adjacency = vec![Vec::new(); self.cells.len()];
        for i in 1..self.n[0] - 1 {
            for j in 1..self.n[1] - 1 {
                for k in 1..self.n[2] - 1 {
                    let idx = self.cell_index(i, j, k);
                    for dx in -1isize..=1 {
                        for dy in -1isize..=1 {
                            for dz in -1isize..=1 {
                                if dx == 0 && dy == 0 && dz == 0 {
                                    continue;
                                }
                                let ni = (i as isize + dx) as usize;
                                let nj = (j as isize + dy) as usize;
                                let nk = (k as isize + dz) as usize;
                                adjacency[idx].push(self.cell_index(ni, nj, nk));
                            }
                        }
                    }
                }
            }
        }
        adjacency
    }

    fn squared_adjacency(adjacency: &[Vec<usize>]) -> Vec<Vec<usize>> {
        let mut squared = vec![Vec::new(); adjacency.len()];
        for (node, neighbours) in adjacency.iter().enumerate() {
            let mut set: HashSet<usize> = HashSet::new();
            for &n1 in neighbours {
                set.insert(n1);
                for &n2 in &adjacency[n1] {
                    set.insert(n2);
                }
            }
            set.remove(&node);
            squared[node] = set.into_iter().collect();
        }
        squared
    }

    fn color_greedy(adjacency: &[Vec<usize>]) -> Vec<usize> {
        let mut colors = vec![usize::MAX; adjacency.len()];
        for cell in 0..adjacency.len() {
            let mut used: HashSet<usize> = HashSet::new();
            for &n in &adjacency[cell] {
                if colors[n] != usize::MAX {
                    used.insert(colors[n]);
                }
            }
            let mut c = 0;
            while used.contains(&c) {
                c += 1;
            }
            colors[cell] = c;
        }
        colors
    }

    /// Build the adjacency list, its square, and a greedy colouring such
    /// that cells of the same colour are pairwise >= 2 cells apart
    /// (spec.md §4.1, "Parallel colouring").
    fn initialize_colouring(&mut self) {
        self.adjacency = self.build_adjacency();
        self.adjacency_squared = Self::squared_adjacency(&self.adjacency);
        self.colors = Self::color_greedy(&self.adjacency_squared);

        let num_colors = self.colors.iter().copied().max().map_or(0, |m| m + 1);
        let mut groups = vec![Vec::new(); num_colors];
        for (cell, &color) in self.colors.iter().enumerate() {
            groups[color].push(cell);
        }
        self.groups = groups;
    }

    #[inline]
    fn dist_squared(particles: &[Particle], a: usize, b: usize) -> f64 {
        (particles[a].x() - particles[b].x()).norm_squared()
    }

    /// Serial enumeration of all pairs within `rc` of each other, using
    /// the fixed 13-direction forward half-neighbourhood (spec.md §4.1).
    pub fn loop_cell_pairs(&self, particles: &[Particle]) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for i in 1..self.n[0] - 1 {
            for j in 1..self.n[1] - 1 {
                for k in 1..self.n[2] - 1 {
                    self.emit_cell(i, j, k, particles, &mut out);
                }
            }
        }
        out
    }

    fn emit_cell(&self, i: usize, j: usize, k: usize, particles: &[Particle], out: &mut Vec<(usize, usize)>) {
        let idx = self.cell_index(i, j, k);
        let cell = &self.cells[idx];
        for (a_pos, &a) in cell.iter().enumerate() {
            for &b in &cell[a_pos + 1..] {
                if Self::dist_squared(particles, a, b) <= self.rc_squared {
                    out.push((a, b));
                }
            }
        }

        for &(dx, dy, dz) in &FORWARD_DIRECTIONS {
            let ni = i as isize + dx;
            let nj = j as isize + dy;
            let nk = k as isize + dz;
            if ni < 0 || nj < 0 || nk < 0 {
                continue;
            }
            let (ni, nj, nk) = (ni as usize, nj as usize, nk as usize);
            if ni >= self.n[0] || nj >= self.n[1] || nk >= self.n[2] {
                continue;
            }
            let nidx = self.cell_index(ni, nj, nk);
            for &a in cell {
                for &b in &self.cells[nidx] {
                    if Self::dist_squared(particles, a, b) <= self.rc_squared {
                        out.push((a, b));
                    }
                }
            }
        }
    }

    /// Colour-parallel enumeration: colours are visited serially, cells
    /// within one colour are searched in parallel, then every colour's
    /// pairs are concatenated. The colouring invariant guarantees two
    /// same-colour cells never share a neighbour, so the only
    /// determinism lost relative to the serial walk is cross-cell
    /// summation order, which spec.md §5 explicitly allows.
    pub fn loop_cell_pairs_parallel(&self, particles: &[Particle]) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for group in &self.groups {
            let mut chunk: Vec<(usize, usize)> = group
                .par_iter()
                .flat_map(|&idx| {
                    let mut local = Vec::new();
                    self.emit_cell_and_owned_neighbours(idx, particles, &mut local);
                    local
                })
                .collect();
            out.append(&mut chunk);
        }
        out
    }

    /// Intra-cell pairs, plus pairs with every adjacent cell of strictly
    /// smaller index (the "owner convention" from spec.md §4.1, avoiding
    /// double work without relying on the 13-direction ordering).
    fn emit_cell_and_owned_neighbours(&self, idx: usize, particles: &[Particle], out: &mut Vec<(usize, usize)>) {
        let cell = &self.cells[idx];
        for (a_pos, &a) in cell.iter().enumerate() {
            for &b in &cell[a_pos + 1..] {
                if Self::dist_squared(particles, a, b) <= self.rc_squared {
                    out.push((a, b));
                }
            }
        }

        for &n in &self.adjacency[idx] {
            if idx < n {
                continue;
            }
            for &a in cell {
                for &b in &self.cells[n] {
                    if Self::dist_squared(particles, a, b) <= self.rc_squared {
                        out.push((a, b));
                    }
                }
            }
        }
    }

    /// Fallback enumerator for membrane runs, where bonded neighbours
    /// cross cell boundaries and the colouring invariant alone cannot
    /// guarantee conflict-free writes. Parallel over the interior cell
    /// index; emissions are collected per task and concatenated, the
    /// Rust equivalent of the source's `#pragma omp critical` section
    /// around each emission.
    pub fn loop_cell_pairs_molecules_parallel(&self, particles: &[Particle]) -> Vec<(usize, usize)> {
        let mut coords = Vec::new();
        for i in 1..self.n[0] - 1 {
            for j in 1..self.n[1] - 1 {
                for k in 1..self.n[2] - 1 {
                    coords.push((i, j, k));
                }
            }
        }

        coords
            .par_iter()
            .flat_map(|&(i, j, k)| {
                let mut local = Vec::new();
                self.emit_cell(i, j, k, particles, &mut local);
                local
            })
            .collect()
    }

    /// Particle indices held in halo cells only (spec.md §4.1, "Halo/
    /// boundary/inner walks").
    pub fn loop_halo(&self) -> Vec<usize> {
        let mut out = Vec::new();
        for i in 0..self.n[0] {
            for j in 0..self.n[1] {
                out.extend(self.cells[self.cell_index(i, j, 0)].iter());
                out.extend(self.cells[self.cell_index(i, j, self.n[2] - 1)].iter());
            }
        }
        for i in 0..self.n[0] {
            for j in 1..self.n[2] - 1 {
                out.extend(self.cells[self.cell_index(i, 0, j)].iter());
                out.extend(self.cells[self.cell_index(i, self.n[1] - 1, j)].iter());
            }
        }
        for i in 1..self.n[1] - 1 {
            for j in 1..self.n[2] - 1 {
                out.extend(self.cells[self.cell_index(0, i, j)].iter());
                out.extend(self.cells[self.cell_index(self.n[0] - 1, i, j)].iter());
            }
        }
        out
    }

    /// Particle indices in the single-cell-deep ring just inside the
    /// domain.
    pub fn loop_boundary(&self) -> Vec<usize> {
        let mut out = Vec::new();
        for i in 1..self.n[0] - 1 {
            for j in 1..self.n[1] - 1 {
                out.extend(self.cells[self.cell_index(i, j, 1)].iter());
                out.extend(self.cells[self.cell_index(i, j, self.n[2] - 2)].iter());
            }
        }
        for i in 1..self.n[0] - 1 {
            for j in 2..self.n[2] - 2 {
                out.extend(self.cells[self.cell_index(i, 1, j)].iter());
                out.extend(self.cells[self.cell_index(i, self.n[1] - 2, j)].iter());
            }
        }
        for i in 2..self.n[1] - 2 {
            for j in 2..self.n[2] - 2 {
                out.extend(self.cells[self.cell_index(1, i, j)].iter());
                out.extend(self.cells[self.cell_index(self.n[0] - 2, i, j)].iter());
            }
        }
        out
    }

    /// Particle indices in every interior cell.
    pub fn loop_inner(&self) -> Vec<usize> {
        let mut out = Vec::new();
        for i in 1..self.n[0] - 1 {
            for j in 1..self.n[1] - 1 {
                for k in 1..self.n[2] - 1 {
                    out.extend(self.cells[self.cell_index(i, j, k)].iter());
                }
            }
        }
        out
    }

    fn try_pair(
        &self,
        particles: &[Particle],
        a: usize,
        b: usize,
        shift: Vec3,
        out: &mut Vec<(usize, usize, Vec3)>,
    ) {
        let diff = (particles[a].x() + shift) - particles[b].x();
        if diff.norm_squared() <= self.rc_squared {
            out.push((a, b, shift));
        }
    }

    /// Pairs a z-near sheet with the z-far sheet, shifted by +domain_z,
    /// checking the full 3x3 neighbourhood in (x, y) (spec.md §4.1).
    pub fn loop_xy_pairs(&self, particles: &[Particle]) -> Vec<(usize, usize, Vec3)> {
        let shift = Vec3::new(0.0, 0.0, self.domain.z);
        let mut out = Vec::new();
        for i in 1..self.n[0] - 1 {
            for j in 1..self.n[1] - 1 {
                for &a in &self.cells[self.cell_index(i, j, 1)] {
                    for di in -1isize..=1 {
                        for dj in -1isize..=1 {
                            let ni = (i as isize + di) as usize;
                            let nj = (j as isize + dj) as usize;
                            for &b in &self.cells[self.cell_index(ni, nj, self.n[2] - 2)] {
                                self.try_pair(particles, a, b, shift, &mut out);
                            }
                        }
                    }
                }
            }
        }
        out
    }

    /// Pairs a y-near sheet with the y-far sheet, shifted by +domain_y.
    pub fn loop_xz_pairs(&self, particles: &[Particle]) -> Vec<(usize, usize, Vec3)> {
        let shift = Vec3::new(0.0, self.domain.y, 0.0);
        let mut out = Vec::new();
        for i in 1..self.n[0] - 1 {
            for j in 1..self.n[2] - 1 {
                for &a in &self.cells[self.cell_index(i, 1, j)] {
                    for di in -1isize..=1 {
                        for dj in -1isize..=1 {
                            let ni = (i as isize + di) as usize;
                            let nj = (j as isize + dj) as usize;
                            for &b in &self.cells[self.cell_index(ni, self.n[1] - 2, nj)] {
                                self.try_pair(particles, a, b, shift, &mut out);
                            }
                        }
                    }
                }
            }
        }
        out
    }

    /// Pairs an x-near sheet with the x-far sheet, shifted by +domain_x.
    pub fn loop_yz_pairs(&self, particles: &[Particle]) -> Vec<(usize, usize, Vec3)> {
        let shift = Vec3::new(self.domain.x, 0.0, 0.0);
        let mut out = Vec::new();
        for i in 1..self.n[1] - 1 {
            for j in 1..self.n[2] - 1 {
                for &a in &self.cells[self.cell_index(1, i, j)] {
                    for di in -1isize..=1 {
                        for dj in -1isize..=1 {
                            let ni = (i as isize + di) as usize;
                            let nj = (j as isize + dj) as usize;
                            for &b in &self.cells[self.cell_index(self.n[0] - 2, ni, nj)] {
                                self.try_pair(particles, a, b, shift, &mut out);
                            }
                        }
                    }
                }
            }
        }
        out
    }

    /// The near x-edge (y=1, z=1) against the opposite edge (y=n_y-2,
    /// z=n_z-2), shifted by +domain_yz, checking the 3 offsets along x.
    pub fn loop_x_near(&self, particles: &[Particle]) -> Vec<(usize, usize, Vec3)> {
        let shift = Vec3::new(0.0, self.domain.y, self.domain.z);
        let mut out = Vec::new();
        for i in 1..self.n[0] - 1 {
            for &a in &self.cells[self.cell_index(i, 1, 1)] {
                for di in -1isize..=1 {
                    let ni = (i as isize + di) as usize;
                    for &b in &self.cells[self.cell_index(ni, self.n[1] - 2, self.n[2] - 2)] {
                        self.try_pair(particles, a, b, shift, &mut out);
                    }
                }
            }
        }
        out
    }

    pub fn loop_x_far(&self, particles: &[Particle]) -> Vec<(usize, usize, Vec3)> {
        let shift = Vec3::new(0.0, -self.domain.y, self.domain.z);
        let mut out = Vec::new();
        for i in 1..self.n[0] - 1 {
            for &a in &self.cells[self.cell_index(i, self.n[1] - 2, 1)] {
                for di in -1isize..=1 {
                    let ni = (i as isize + di) as usize;
                    for &b in &self.cells[self.cell_index(ni, 1, self.n[2] - 2)] {
                        self.try_pair(particles, a, b, shift, &mut out);
                    }
                }
            }
        }
        out
    }

    pub fn loop_y_near(&self, particles: &[Particle]) -> Vec<(usize, usize, Vec3)> {
        let shift = Vec3::new(self.domain.x, 0.0, self.domain.z);
        let mut out = Vec::new();
        for i in 1..self.n[1] - 1 {
            for &a in &self.cells[self.cell_index(1, i, 1)] {
                for di in -1isize..=1 {
                    let ni = (i as isize + di) as usize;
                    for &b in &self.cells[self.cell_index(self.n[0] - 2, ni, self.n[2] - 2)] {
                        self.try_pair(particles, a, b, shift, &mut out);
                    }
                }
            }
        }
        out
    }

    pub fn loop_y_far(&self, particles: &[Particle]) -> Vec<(usize, usize, Vec3)> {
        let shift = Vec3::new(-self.domain.x, 0.0, self.domain.z);
        let mut out = Vec::new();
        for i in 1..self.n[1] - 1 {
            for &a in &self.cells[self.cell_index(self.n[0] - 2, i, 1)] {
                for di in -1isize..=1 {
                    let ni = (i as isize + di) as usize;
                    for &b in &self.cells[self.cell_index(1, ni, self.n[2] - 2)] {
                        self.try_pair(particles, a, b, shift, &mut out);
                    }
                }
            }
        }
        out
    }

    pub fn loop_z_near(&self, particles: &[Particle]) -> Vec<(usize, usize, Vec3)> {
        let shift = Vec3::new(self.domain.x, self.domain.y, 0.0);
        let mut out = Vec::new();
        for i in 1..self.n[2] - 1 {
            for &a in &self.cells[self.cell_index(1, 1, i)] {
                for di in -1isize..=1 {
                    let ni = (i as isize + di) as usize;
                    for &b in &self.cells[self.cell_index(self.n[0] - 2, self.n[1] - 2, ni)] {
                        self.try_pair(particles, a, b, shift, &mut out);
                    }
                }
            }
        }
        out
    }

    pub fn loop_z_far(&self, particles: &[Particle]) -> Vec<(usize, usize, Vec3)> {
        let shift = Vec3::new(-self.domain.x, self.domain.y, 0.0);
        let mut out = Vec::new();
        for i in 1..self.n[2] - 1 {
            for &a in &self.cells[self.cell_index(self.n[0] - 2, 1, i)] {
                for di in -1isize..=1 {
                    let ni = (i as isize + di) as usize;
                    for &b in &self.cells[self.cell_index(1, self.n[1] - 2, ni)] {
                        self.try_pair(particles, a, b, shift, &mut out);
                    }
                }
            }
        }
        out
    }

    /// The 4 space-diagonal corner pairs. Newton's third law lets a
    /// single enumerator per diagonal stand in for both of its corners
    /// (spec.md §4.1).
    pub fn loop_origin_corner(&self, particles: &[Particle]) -> Vec<(usize, usize, Vec3)> {
        let shift = self.domain;
        let mut out = Vec::new();
        for &a in &self.cells[self.cell_index(1, 1, 1)] {
            for &b in &self.cells[self.cell_index(self.n[0] - 2, self.n[1] - 2, self.n[2] - 2)] {
                self.try_pair(particles, a, b, shift, &mut out);
            }
        }
        out
    }

    pub fn loop_x_corner(&self, particles: &[Particle]) -> Vec<(usize, usize, Vec3)> {
        let shift = Vec3::new(-self.domain.x, self.domain.y, self.domain.z);
        let mut out = Vec::new();
        for &a in &self.cells[self.cell_index(self.n[0] - 2, 1, 1)] {
            for &b in &self.cells[self.cell_index(1, self.n[1] - 2, self.n[2] - 2)] {
                self.try_pair(particles, a, b, shift, &mut out);
            }
        }
        out
    }

    pub fn loop_y_corner(&self, particles: &[Particle]) -> Vec<(usize, usize, Vec3)> {
        let shift = Vec3::new(self.domain.x, -self.domain.y, self.domain.z);
        let mut out = Vec::new();
        for &a in &self.cells[self.cell_index(1, self.n[1] - 2, 1)] {
            for &b in &self.cells[self.cell_index(self.n[0] - 2, 1, self.n[2] - 2)] {
                self.try_pair(particles, a, b, shift, &mut out);
            }
        }
        out
    }

    pub fn loop_xy_corner(&self, particles: &[Particle]) -> Vec<(usize, usize, Vec3)> {
        let shift = Vec3::new(-self.domain.x, -self.domain.y, self.domain.z);
        let mut out = Vec::new();
        for &a in &self.cells[self.cell_index(self.n[0] - 2, self.n[1] - 2, 1)] {
            for &b in &self.cells[self.cell_index(1, 1, self.n[2] - 2)] {
                self.try_pair(particles, a, b, shift, &mut out);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec3::Vec3;

    fn particle_at(x: f64, y: f64, z: f64) -> Particle {
        Particle::new(Vec3::new(x, y, z), Vec3::zeros(), 0)
    }

    #[test]
    fn colouring_invariant_holds() {
        let list = CellList::new(1.0, Vec3::new(5.0, 5.0, 5.0));
        for (cell, &color) in list.colors.iter().enumerate() {
            for &other in &list.adjacency_squared[cell] {
                assert_ne!(color, list.colors[other], "adjacent-at-2-hops cells share a colour");
            }
        }
    }

    #[test]
    fn serial_and_coloured_enumeration_agree() {
        let domain = Vec3::new(6.0, 6.0, 6.0);
        let mut list = CellList::new(1.5, domain);
        let particles: Vec<Particle> = (0..40)
            .map(|i| {
                let f = i as f64;
                particle_at((f * 0.37) % 6.0, (f * 0.71) % 6.0, (f * 1.13) % 6.0)
            })
            .collect();
        list.create_list(&particles).unwrap();

        let mut serial = list.loop_cell_pairs(&particles);
        let mut parallel = list.loop_cell_pairs_parallel(&particles);

        let normalize = |pairs: &mut Vec<(usize, usize)>| {
            for p in pairs.iter_mut() {
                if p.0 > p.1 {
                    *p = (p.1, p.0);
                }
            }
            pairs.sort();
        };
        normalize(&mut serial);
        normalize(&mut parallel);
        assert_eq!(serial, parallel);
    }

    #[test]
    fn serial_and_molecules_parallel_enumeration_agree() {
        let domain = Vec3::new(6.0, 6.0, 6.0);
        let mut list = CellList::new(1.5, domain);
        let particles: Vec<Particle> = (0..40)
            .map(|i| {
                let f = i as f64;
                particle_at((f * 0.37) % 6.0, (f * 0.71) % 6.0, (f * 1.13) % 6.0)
            })
            .collect();
        list.create_list(&particles).unwrap();

        let mut serial = list.loop_cell_pairs(&particles);
        let mut molecules_parallel = list.loop_cell_pairs_molecules_parallel(&particles);

        let normalize = |pairs: &mut Vec<(usize, usize)>| {
            for p in pairs.iter_mut() {
                if p.0 > p.1 {
                    *p = (p.1, p.0);
                }
            }
            pairs.sort();
        };
        normalize(&mut serial);
        normalize(&mut molecules_parallel);
        assert_eq!(serial, molecules_parallel);
    }

    #[test]
    fn create_list_rejects_out_of_bounds_particle() {
        let mut list = CellList::new(1.0, Vec3::new(5.0, 5.0, 5.0));
        let particles = vec![particle_at(-10.0, 0.0, 0.0)];
        assert!(list.create_list(&particles).is_err());
    }

    #[test]
    fn halo_cells_are_excluded_from_inner_walk() {
        let mut list = CellList::new(1.0, Vec3::new(3.0, 3.0, 3.0));
        let particles = vec![particle_at(0.5, 0.5, 0.5)];
        list.create_list(&particles).unwrap();
        assert_eq!(list.loop_inner(), vec![0]);
        assert!(list.loop_halo().is_empty());
    }
}

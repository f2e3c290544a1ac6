//! Per-particle state (spec.md §3, "Particle").
//!
//! Ownership is exclusive to the `ParticleContainer`; particles are
//! created at initialization and destroyed only by outflow culling.

use crate::vec3::Vec3;

/// Sentinel stored in `neighbours` slots that have no neighbour.
pub const NO_NEIGHBOUR: usize = usize::MAX;

/// A single particle: position, velocity, current and previous-step
/// force, type tag, its stable index within the container's dense
/// array, up to 8 membrane neighbour indices, and the `in_molecule`
/// flag.
#[derive(Clone, Debug)]
pub struct Particle {
    x: Vec3,
    v: Vec3,
    f: Vec3,
    old_f: Vec3,
    ptype: usize,
    index: usize,
    /// Slots 0..4: axial neighbours. Slots 4..8: diagonal neighbours.
    /// `NO_NEIGHBOUR` marks an empty slot.
    neighbours: [usize; 8],
    in_molecule: bool,
}

impl Particle {
    pub fn new(x: Vec3, v: Vec3, ptype: usize) -> Self {
        Particle {
            x,
            v,
            f: Vec3::zeros(),
            old_f: Vec3::zeros(),
            ptype,
            index: 0,
            neighbours: [NO_NEIGHBOUR; 8],
            in_molecule: false,
        }
    }

    pub fn x(&self) -> &Vec3 {
        &self.x
    }
    pub fn v(&self) -> &Vec3 {
        &self.v
    }
    pub fn f(&self) -> &Vec3 {
        &self.f
    }
    pub fn old_f(&self) -> &Vec3 {
        &self.old_f
    }
    pub fn ptype(&self) -> usize {
        self.ptype
    }
    pub fn index(&self) -> usize {
        self.index
    }
    pub fn neighbours(&self) -> &[usize; 8] {
        &self.neighbours
    }
    pub fn in_molecule(&self) -> bool {
        self.in_molecule
    }

    pub fn set_x(&mut self, x: Vec3) {
        self.x = x;
    }
    pub fn set_v(&mut self, v: Vec3) {
        self.v = v;
    }
    pub fn set_f(&mut self, f: Vec3) {
        self.f = f;
    }
    pub fn set_old_f(&mut self, old_f: Vec3) {
        self.old_f = old_f;
    }
    pub fn add_f(&mut self, df: Vec3) {
        self.f += df;
    }
    pub fn set_index(&mut self, index: usize) {
        self.index = index;
    }
    pub fn set_neighbours(&mut self, neighbours: [usize; 8]) {
        self.neighbours = neighbours;
    }
    pub fn set_in_molecule(&mut self, in_molecule: bool) {
        self.in_molecule = in_molecule;
    }

    /// `true` if `idx` occupies one of this particle's 4 axial
    /// neighbour slots (spec.md §4.3, MolCalculator case (a)).
    pub fn is_axial_neighbour(&self, idx: usize) -> bool {
        idx != NO_NEIGHBOUR && self.neighbours[0..4].contains(&idx)
    }

    /// `true` if `idx` occupies one of this particle's 4 diagonal
    /// neighbour slots (spec.md §4.3, MolCalculator case (b)).
    pub fn is_diagonal_neighbour(&self, idx: usize) -> bool {
        idx != NO_NEIGHBOUR && self.neighbours[4..8].contains(&idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbour_slots_classify_correctly() {
        let mut p = Particle::new(Vec3::zeros(), Vec3::zeros(), 0);
        let mut n = [NO_NEIGHBOUR; 8];
        n[1] = 5;
        n[6] = 9;
        p.set_neighbours(n);

        assert!(p.is_axial_neighbour(5));
        assert!(!p.is_diagonal_neighbour(5));
        assert!(p.is_diagonal_neighbour(9));
        assert!(!p.is_axial_neighbour(9));
        assert!(!p.is_axial_neighbour(NO_NEIGHBOUR));
    }
}

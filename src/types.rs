//! Per-type and per-type-pair precomputed constants (spec.md §3,
//! "TypeDesc" and "TypePairDesc").
//!
//! Both are built once from a `(delta_t, environment)` snapshot; none of
//! their fields change over the lifetime of a run.

use crate::vec3::Vec3;

/// Raw and precomputed parameters for one particle type.
#[derive(Debug, Clone, Copy)]
pub struct TypeDesc {
    mass: f64,
    sigma: f64,
    epsilon: f64,
    /// delta_t * 0.5 / m, used by velocity integration.
    dt_m: f64,
    /// delta_t^2 * 0.5 / m, used by position integration.
    dt_dt_m: f64,
    /// Membrane spring stiffness.
    stiffness: f64,
    /// Membrane axial rest length r0.
    r0: f64,
    /// Membrane diagonal rest length r1 = r0 * sqrt(2).
    r1: f64,
    /// Membrane repulsive-force cutoff (squared distance).
    cutoff_squared: f64,
    gravity: Vec3,
}

impl TypeDesc {
    /// Build a type descriptor for a non-membrane particle type.
    pub fn new(mass: f64, sigma: f64, epsilon: f64, delta_t: f64, gravity: Vec3) -> Self {
        TypeDesc {
            mass,
            sigma,
            epsilon,
            dt_m: delta_t * 0.5 / mass,
            dt_dt_m: delta_t * delta_t * 0.5 / mass,
            stiffness: 0.0,
            r0: 0.0,
            r1: 0.0,
            cutoff_squared: 0.0,
            gravity,
        }
    }

    /// Build a type descriptor for a membrane particle type, adding the
    /// spring stiffness, rest length, and repulsion cutoff.
    pub fn new_membrane(
        mass: f64,
        sigma: f64,
        epsilon: f64,
        delta_t: f64,
        gravity: Vec3,
        stiffness: f64,
        r0: f64,
        cutoff: f64,
    ) -> Self {
        let mut desc = TypeDesc::new(mass, sigma, epsilon, delta_t, gravity);
        desc.stiffness = stiffness;
        desc.r0 = r0;
        desc.r1 = r0 * std::f64::consts::SQRT_2;
        desc.cutoff_squared = cutoff * cutoff;
        desc
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }
    pub fn sigma(&self) -> f64 {
        self.sigma
    }
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
    pub fn dt_m(&self) -> f64 {
        self.dt_m
    }
    pub fn dt_dt_m(&self) -> f64 {
        self.dt_dt_m
    }
    pub fn stiffness(&self) -> f64 {
        self.stiffness
    }
    pub fn r0(&self) -> f64 {
        self.r0
    }
    pub fn r1(&self) -> f64 {
        self.r1
    }
    pub fn cutoff_squared(&self) -> f64 {
        self.cutoff_squared
    }
    pub fn gravity(&self) -> Vec3 {
        self.gravity
    }
}

/// Precomputed constants for one unordered pair of types.
#[derive(Debug, Clone, Copy)]
pub struct TypePairDesc {
    /// 24 * sqrt(eps_i * eps_j). Per the sign reconciliation in
    /// SPEC_FULL.md §4.3 / §9: the source's `TypeDesc` used the negative
    /// form and its `TypePairDesc` the positive form for the same
    /// constant. The worked examples in spec.md §8 (the LJ pair and
    /// ghost-boundary scenarios) only check out against the positive
    /// form, so that is the one used everywhere here.
    scaled_epsilon: f64,
    /// ((sigma_i + sigma_j) / 2)^2
    sigma_squared: f64,
    /// m_i * m_j
    mass: f64,
}

impl TypePairDesc {
    pub fn new(m1: f64, s1: f64, e1: f64, m2: f64, s2: f64, e2: f64) -> Self {
        let sigma = (s1 + s2) * 0.5;
        TypePairDesc {
            scaled_epsilon: 24.0 * (e1 * e2).sqrt(),
            sigma_squared: sigma * sigma,
            mass: m1 * m2,
        }
    }

    pub fn scaled_epsilon(&self) -> f64 {
        self.scaled_epsilon
    }
    pub fn sigma_squared(&self) -> f64 {
        self.sigma_squared
    }
    pub fn mass(&self) -> f64 {
        self.mass
    }
}

/// A dense, symmetric (n_types x n_types) table of `TypePairDesc`,
/// indexed by `(t1, t2)` in either order.
#[derive(Debug, Clone)]
pub struct TypePairTable {
    n_types: usize,
    table: Vec<TypePairDesc>,
}

impl TypePairTable {
    pub fn build(types: &[TypeDesc]) -> Self {
        let n_types = types.len();
        let mut table = Vec::with_capacity(n_types * n_types);
        for t1 in types {
            for t2 in types {
                table.push(TypePairDesc::new(
                    t1.mass(),
                    t1.sigma(),
                    t1.epsilon(),
                    t2.mass(),
                    t2.sigma(),
                    t2.epsilon(),
                ));
            }
        }
        TypePairTable { n_types, table }
    }

    pub fn get(&self, t1: usize, t2: usize) -> &TypePairDesc {
        &self.table[t1 * self.n_types + t2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_table_is_symmetric() {
        let types = vec![
            TypeDesc::new(1.0, 1.0, 5.0, 0.01, Vec3::zeros()),
            TypeDesc::new(2.0, 1.2, 3.0, 0.01, Vec3::zeros()),
        ];
        let table = TypePairTable::build(&types);
        let a = table.get(0, 1);
        let b = table.get(1, 0);
        assert_eq!(a.scaled_epsilon(), b.scaled_epsilon());
        assert_eq!(a.sigma_squared(), b.sigma_squared());
        assert_eq!(a.mass(), b.mass());
    }

    #[test]
    fn single_component_matches_hand_calculation() {
        // sigma = 1, epsilon = 5 -> scaled_epsilon = 24*5 = 120
        let types = vec![TypeDesc::new(1.0, 1.0, 5.0, 0.01, Vec3::zeros())];
        let table = TypePairTable::build(&types);
        let pd = table.get(0, 0);
        assert_eq!(pd.scaled_epsilon(), 120.0);
        assert_eq!(pd.sigma_squared(), 1.0);
    }
}

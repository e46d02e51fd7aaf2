//! The regular representation of a finite group
//!
//! The group acts on the vector space with basis `{e_h}` by left
//! multiplication, `P_g e_h = e_(g·h)`. Each `P_g` is therefore an N×N
//! permutation matrix whose column `h` has its single 1 at row `g·h`, and the
//! assignment `g ↦ P_g` is a homomorphism: `P_g P_h = P_(g·h)`.

use ndarray::{Array1, Array2, Array3};

use crate::config::Validation;
use crate::group::{GroupError, MultiplicationTable, Result};

/// Generates the regular representation matrices of the group with the given table.
///
/// Only the Latin-square property is checked. Entry `g` of the result is `P_g`.
pub fn generate(table: &Array2<usize>) -> Result<Vec<Array2<i32>>> {
    generate_with(table, Validation::LatinSquare)
}

/// Generates the regular representation matrices with the requested validation
pub fn generate_with(table: &Array2<usize>, validation: Validation) -> Result<Vec<Array2<i32>>> {
    let table = MultiplicationTable::with_validation(table.clone(), validation)?;
    Ok(permutation_matrices(&table))
}

/// The regular representation stacked as an `[N, N, N]` tensor with `rep[[g, .., ..]] = P_g`
pub fn regular_representation(table: &Array2<usize>) -> Result<Array3<i32>> {
    let table = MultiplicationTable::new(table.clone())?;
    let n = table.order();
    let t = table.as_array();

    let mut rep = Array3::zeros((n, n, n));
    for ((g, h), &gh) in t.indexed_iter() {
        rep[[g, gh, h]] = 1;
    }
    Ok(rep)
}

fn permutation_matrices(table: &MultiplicationTable) -> Vec<Array2<i32>> {
    let n = table.order();
    let t = table.as_array();
    log::debug!("Generating regular representation for group of order {}.", n);

    (0..n)
        .map(|g| {
            let mut matrix = Array2::zeros((n, n));
            for h in 0..n {
                matrix[[t[[g, h]], h]] = 1;
            }
            log::trace!("P_{} built.", g);
            matrix
        })
        .collect()
}

/// A group together with its regular representation matrices
#[derive(Debug, Clone, PartialEq)]
pub struct RegularRepresentation {
    table: MultiplicationTable,
    matrices: Vec<Array2<i32>>,
}

impl RegularRepresentation {
    pub fn new(table: MultiplicationTable) -> Self {
        let matrices = permutation_matrices(&table);
        RegularRepresentation { table, matrices }
    }

    /// Order of the group, which is also the dimension of the representation
    pub fn order(&self) -> usize {
        self.table.order()
    }

    pub fn table(&self) -> &MultiplicationTable {
        &self.table
    }

    /// The matrix `P_g`
    pub fn matrix(&self, g: usize) -> Option<&Array2<i32>> {
        self.matrices.get(g)
    }

    pub fn matrices(&self) -> &[Array2<i32>] {
        &self.matrices
    }

    /// `P_g` converted to floating point, for use in kernels
    pub fn as_f64(&self, g: usize) -> Option<Array2<f64>> {
        self.matrix(g).map(|m| m.mapv(f64::from))
    }

    /// Applies `P_g` to a signal over the group: `(P_g x)[g·h] = x[h]`
    pub fn act(&self, g: usize, signal: &Array1<f64>) -> Result<Array1<f64>> {
        let n = self.order();
        if signal.len() != n {
            return Err(GroupError::DimensionMismatch(format!(
                "Signal has length {}, group has order {}",
                signal.len(),
                n
            )));
        }
        let row = self.table.row(g)?;

        let mut out = Array1::zeros(n);
        for (h, &gh) in row.iter().enumerate() {
            out[gh] = signal[h];
        }
        Ok(out)
    }

    /// Checks `P_g · P_h = P_(g·h)` for every pair of elements
    pub fn verify_homomorphism(&self) -> bool {
        let t = self.table.as_array();
        t.indexed_iter()
            .all(|((g, h), &gh)| self.matrices[g].dot(&self.matrices[h]) == self.matrices[gh])
    }

    /// Character of the representation: the trace of each `P_g`.
    ///
    /// Equal to N at the identity and 0 elsewhere, since only the identity
    /// fixes any basis vector.
    pub fn character(&self) -> Vec<i32> {
        self.matrices.iter().map(|m| m.diag().sum()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_c2_matrices() {
        let matrices = generate(&array![[0, 1], [1, 0]]).unwrap();
        assert_eq!(matrices[0], array![[1, 0], [0, 1]]);
        assert_eq!(matrices[1], array![[0, 1], [1, 0]]);
    }

    #[test]
    fn test_stacked_layout_matches_matrices() {
        let table = array![[0, 1, 2], [1, 2, 0], [2, 0, 1]];
        let stacked = regular_representation(&table).unwrap();
        let matrices = generate(&table).unwrap();
        for (g, m) in matrices.iter().enumerate() {
            assert_eq!(stacked.index_axis(ndarray::Axis(0), g), m.view());
        }
    }

    #[test]
    fn test_act_moves_basis_vector() {
        let rep = RegularRepresentation::new(crate::group::cyclic(3).unwrap());
        let e0 = array![1.0, 0.0, 0.0];
        assert_eq!(rep.act(2, &e0).unwrap(), array![0.0, 0.0, 1.0]);
        assert!(rep.act(0, &array![1.0, 0.0]).is_err());
    }
}

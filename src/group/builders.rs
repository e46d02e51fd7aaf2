//! Constructors for commonly used finite groups

use ndarray::Array2;

use super::error::{GroupError, Result};
use super::table::MultiplicationTable;

/// Default numerical tolerance when matching matrix products
pub const DEFAULT_TOLERANCE: f64 = 1e-8;

/// The cyclic group C_n, with `i·j = (i + j) mod n`
pub fn cyclic(n: usize) -> Result<MultiplicationTable> {
    MultiplicationTable::new(Array2::from_shape_fn((n, n), |(i, j)| (i + j) % n))
}

/// The dihedral group D_n of order 2n.
///
/// Index `k` is the rotation `r^k` and index `n + k` is the reflection `s r^k`,
/// using the relations `r^n = s^2 = e` and `r s = s r^{-1}`.
pub fn dihedral(n: usize) -> Result<MultiplicationTable> {
    if n == 0 {
        return Err(GroupError::DimensionMismatch(
            "Dihedral group needs n >= 1".to_string(),
        ));
    }

    // (s^a r^b)(s^c r^d) = s^(a+c) r^((-1)^c b + d)
    let table = Array2::from_shape_fn((2 * n, 2 * n), |(x, y)| {
        let (a, b) = (x / n, x % n);
        let (c, d) = (y / n, y % n);
        let rotation = if c == 0 { (b + d) % n } else { (n - b + d) % n };
        ((a + c) % 2) * n + rotation
    });
    MultiplicationTable::new(table)
}

/// The Klein four-group C_2 × C_2
pub fn klein_four() -> Result<MultiplicationTable> {
    direct_product(&cyclic(2)?, &cyclic(2)?)
}

/// The direct product A × B, with `(i, j)` stored at index `i * |B| + j`
pub fn direct_product(
    a: &MultiplicationTable,
    b: &MultiplicationTable,
) -> Result<MultiplicationTable> {
    let (ta, tb) = (a.as_array(), b.as_array());
    let nb = b.order();
    let n = a.order() * nb;

    let table = Array2::from_shape_fn((n, n), |(x, y)| {
        ta[[x / nb, y / nb]] * nb + tb[[x % nb, y % nb]]
    });
    MultiplicationTable::new(table)
}

/// Recovers the multiplication table of a set of matrices closed under
/// multiplication.
///
/// `table[i][j] = k` when `M_i · M_j` agrees with `M_k` entry-wise within `tol`.
pub fn from_matrices(matrices: &[Array2<f64>], tol: f64) -> Result<MultiplicationTable> {
    let first = matrices.first().ok_or_else(|| {
        GroupError::DimensionMismatch("No matrices given".to_string())
    })?;
    let (d, d2) = first.dim();
    if d != d2 {
        return Err(GroupError::DimensionMismatch(format!(
            "Matrices must be square, got {}x{}",
            d, d2
        )));
    }
    if let Some((i, m)) = matrices.iter().enumerate().find(|(_, m)| m.dim() != (d, d)) {
        return Err(GroupError::DimensionMismatch(format!(
            "Matrix {} has shape {:?}, expected ({}, {})",
            i,
            m.dim(),
            d,
            d
        )));
    }

    let n = matrices.len();
    log::debug!("Recovering multiplication table from {} matrices of dimension {}.", n, d);

    let mut table = Array2::zeros((n, n));
    for (i, mi) in matrices.iter().enumerate() {
        for (j, mj) in matrices.iter().enumerate() {
            let product = mi.dot(mj);
            let hits: Vec<usize> = matrices
                .iter()
                .enumerate()
                .filter(|(_, mk)| {
                    product
                        .iter()
                        .zip(mk.iter())
                        .all(|(p, q)| (p - q).abs() < tol)
                })
                .map(|(k, _)| k)
                .collect();

            match hits.as_slice() {
                [k] => table[[i, j]] = *k,
                [] => {
                    return Err(GroupError::InvalidGroup(format!(
                        "Product of matrices {} and {} is not in the set",
                        i, j
                    )))
                }
                _ => {
                    return Err(GroupError::InvalidGroup(format!(
                        "Product of matrices {} and {} matches several matrices",
                        i, j
                    )))
                }
            }
        }
    }

    MultiplicationTable::new(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dihedral_reflections_are_involutions() {
        let d4 = dihedral(4).unwrap();
        for k in 4..8 {
            assert_eq!(d4.element_order(k).unwrap(), 2);
        }
        assert_eq!(d4.element_order(1).unwrap(), 4);
        assert!(!d4.is_abelian());
    }

    #[test]
    fn test_duplicate_matrices_are_ambiguous() {
        let matrices = vec![Array2::<f64>::eye(2), Array2::<f64>::eye(2)];
        let err = from_matrices(&matrices, DEFAULT_TOLERANCE).unwrap_err();
        assert!(matches!(err, GroupError::InvalidGroup(_)));
    }

    #[test]
    fn test_direct_product_order() {
        let g = direct_product(&cyclic(2).unwrap(), &cyclic(3).unwrap()).unwrap();
        assert_eq!(g.order(), 6);
        // C_2 × C_3 is cyclic, generated by (1, 1)
        assert_eq!(g.element_order(4).unwrap(), 6);
    }
}

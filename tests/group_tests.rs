use ndarray::{array, Array2};
use equivariant::config::Validation;
use equivariant::group::*;

#[cfg(test)]
mod multiplication_table_tests {
    use super::*;

    #[test]
    fn test_cyclic_identity_and_inverses() {
        let c6 = cyclic(6).unwrap();
        assert_eq!(c6.identity().unwrap(), 0);
        assert_eq!(c6.inverses().unwrap(), vec![0, 5, 4, 3, 2, 1]);
        assert_eq!(c6.inverse(2).unwrap(), 4);
        assert!(c6.is_abelian());
        assert!(c6.validate_axioms().is_ok());
    }

    #[test]
    fn test_element_orders_in_cyclic_group() {
        let c6 = cyclic(6).unwrap();
        let orders: Vec<usize> = (0..6).map(|g| c6.element_order(g).unwrap()).collect();
        assert_eq!(orders, vec![1, 6, 3, 2, 3, 6]);
    }

    #[test]
    fn test_dihedral_group_axioms() {
        for n in 1..=6 {
            let d = dihedral(n).unwrap();
            assert_eq!(d.order(), 2 * n);
            assert!(d.validate_axioms().is_ok(), "D_{} failed axioms", n);
        }
    }

    #[test]
    fn test_dihedral_inverses() {
        let d3 = dihedral(3).unwrap();
        // rotations invert to r^{-k}, reflections are self-inverse
        assert_eq!(d3.inverses().unwrap(), vec![0, 2, 1, 3, 4, 5]);
    }

    #[test]
    fn test_klein_four_is_abelian_with_involutions() {
        let v = klein_four().unwrap();
        assert_eq!(v.order(), 4);
        assert!(v.is_abelian());
        assert_eq!(v.inverses().unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_product_bounds() {
        let c3 = cyclic(3).unwrap();
        assert_eq!(c3.product(2, 2).unwrap(), 1);
        assert!(matches!(c3.product(3, 0), Err(GroupError::DimensionMismatch(_))));
        assert!(c3.row(5).is_err());
    }

    #[test]
    fn test_try_from_nested_vectors() {
        let table = MultiplicationTable::try_from(vec![vec![0, 1], vec![1, 0]]).unwrap();
        assert_eq!(table.as_array(), &array![[0, 1], [1, 0]]);

        let err = MultiplicationTable::try_from(Vec::<Vec<usize>>::new()).unwrap_err();
        assert!(matches!(err, GroupError::DimensionMismatch(_)));
    }

    #[test]
    fn test_full_validation_accepts_groups() {
        let table = dihedral(4).unwrap().as_array().clone();
        assert!(MultiplicationTable::with_validation(table, Validation::Full).is_ok());
    }

    #[test]
    fn test_json_tables_are_validated() {
        let table: MultiplicationTable = serde_json::from_str("[[0, 1], [1, 0]]").unwrap();
        assert_eq!(table.order(), 2);
        assert_eq!(serde_json::to_string(&table).unwrap(), "[[0,1],[1,0]]");

        let bad: std::result::Result<MultiplicationTable, _> = serde_json::from_str("[[0, 0], [1, 1]]");
        assert!(bad.is_err());
    }

    #[test]
    fn test_validation_setting_from_json() {
        let v: Validation = serde_json::from_str("\"Full\"").unwrap();
        assert_eq!(v, Validation::Full);
        assert_eq!(Validation::default(), Validation::LatinSquare);
    }
}

#[cfg(test)]
mod from_matrices_tests {
    use super::*;

    fn rotation(quarter_turns: usize) -> Array2<f64> {
        let theta = std::f64::consts::FRAC_PI_2 * quarter_turns as f64;
        array![[theta.cos(), -theta.sin()], [theta.sin(), theta.cos()]]
    }

    #[test]
    fn test_recovers_cyclic_four_from_rotations() {
        let matrices: Vec<Array2<f64>> = (0..4).map(rotation).collect();
        let table = from_matrices(&matrices, DEFAULT_TOLERANCE).unwrap();
        assert_eq!(table, cyclic(4).unwrap());
    }

    #[test]
    fn test_rejects_set_not_closed() {
        let matrices = vec![rotation(0), rotation(1)];
        let err = from_matrices(&matrices, DEFAULT_TOLERANCE).unwrap_err();
        assert!(matches!(err, GroupError::InvalidGroup(_)));
    }

    #[test]
    fn test_rejects_bad_shapes() {
        assert!(matches!(
            from_matrices(&[], DEFAULT_TOLERANCE),
            Err(GroupError::DimensionMismatch(_))
        ));

        let matrices = vec![Array2::eye(2), Array2::eye(3)];
        assert!(matches!(
            from_matrices(&matrices, DEFAULT_TOLERANCE),
            Err(GroupError::DimensionMismatch(_))
        ));
    }
}

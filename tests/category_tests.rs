use ndarray::{array, Array2};
use equivariant::category::laws::verify_category_laws;
use equivariant::category::{Category, Functor};
use equivariant::group::{cyclic, dihedral, GroupCategory, MultiplicationTable};
use equivariant::representation::{PermutationMatrixCategory, RegularRepresentation, RegularRepresentationFunctor};

#[cfg(test)]
mod group_category_tests {
    use super::*;

    #[test]
    fn test_group_category_laws() {
        let cat = GroupCategory::new(dihedral(3).unwrap()).unwrap();
        assert!(verify_category_laws(&cat, &cat.elements()));
    }

    #[test]
    fn test_composition_is_g_after_f() {
        let cat = GroupCategory::new(dihedral(3).unwrap()).unwrap();
        // r then s: s·r = s r (index 3 + 1)
        assert_eq!(cat.compose(&1, &3), Some(4));
        // s then r: r·s = s r^{-1} (index 3 + 2)
        assert_eq!(cat.compose(&3, &1), Some(5));
        assert_eq!(cat.compose(&0, &6), None);
    }

    #[test]
    fn test_matrix_category_laws() {
        let cat = PermutationMatrixCategory::new(2);
        let swap = array![[0, 1], [1, 0]];
        let id: Array2<i32> = cat.identity(&2);
        assert!(verify_category_laws(&cat, &[swap.clone(), id]));
        assert_eq!(cat.compose(&swap, &swap), Some(Array2::eye(2)));
        assert_eq!(cat.compose(&swap, &Array2::eye(3)), None);
    }
}

#[cfg(test)]
mod representation_functor_tests {
    use super::*;

    #[test]
    fn test_regular_representation_is_a_functor() {
        for table in [cyclic(4).unwrap(), dihedral(4).unwrap()] {
            let rep = RegularRepresentation::new(table.clone());
            let functor = RegularRepresentationFunctor::new(rep);
            let source = GroupCategory::new(table).unwrap();
            let target = functor.target();

            assert!(functor.verify_functor_laws(&source, &target, &[()], &source.elements()));
        }
    }

    #[test]
    fn test_non_associative_table_breaks_functor_laws() {
        let table = MultiplicationTable::new(array![
            [0, 1, 2, 3, 4],
            [1, 0, 3, 4, 2],
            [2, 4, 0, 1, 3],
            [3, 2, 4, 0, 1],
            [4, 3, 1, 2, 0]
        ])
        .unwrap();
        let functor = RegularRepresentationFunctor::new(RegularRepresentation::new(table.clone()));
        let source = GroupCategory::new(table).unwrap();
        let target = functor.target();

        assert!(functor.preserves_identity(&source, &target, &()));
        assert!(!functor.verify_functor_laws(&source, &target, &[()], &source.elements()));
    }
}

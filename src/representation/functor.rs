//! The regular representation as a functor into permutation matrices

use ndarray::Array2;

use super::regular::RegularRepresentation;
use crate::category::{Category, Functor};
use crate::group::GroupCategory;

/// The category of N×N integer matrices under multiplication.
///
/// Its single object is the dimension N; "g after f" is the product `G · F`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermutationMatrixCategory {
    pub dimension: usize,
}

impl PermutationMatrixCategory {
    pub fn new(dimension: usize) -> Self {
        PermutationMatrixCategory { dimension }
    }
}

impl Category for PermutationMatrixCategory {
    type Object = usize;
    type Morphism = Array2<i32>;

    fn domain(&self, f: &Array2<i32>) -> usize {
        f.ncols()
    }

    fn codomain(&self, f: &Array2<i32>) -> usize {
        f.nrows()
    }

    fn identity(&self, obj: &usize) -> Array2<i32> {
        Array2::eye(*obj)
    }

    fn compose(&self, f: &Array2<i32>, g: &Array2<i32>) -> Option<Array2<i32>> {
        if !self.can_compose(f, g) {
            return None;
        }
        Some(g.dot(f))
    }
}

/// Maps each group element g to its regular representation matrix `P_g`
#[derive(Debug, Clone)]
pub struct RegularRepresentationFunctor {
    representation: RegularRepresentation,
}

impl RegularRepresentationFunctor {
    pub fn new(representation: RegularRepresentation) -> Self {
        RegularRepresentationFunctor { representation }
    }

    /// The matching target category
    pub fn target(&self) -> PermutationMatrixCategory {
        PermutationMatrixCategory::new(self.representation.order())
    }
}

impl Functor<GroupCategory, PermutationMatrixCategory> for RegularRepresentationFunctor {
    fn map_object(&self, _c: &GroupCategory, d: &PermutationMatrixCategory, _obj: &()) -> usize {
        d.dimension
    }

    fn map_morphism(
        &self,
        _c: &GroupCategory,
        d: &PermutationMatrixCategory,
        f: &usize,
    ) -> Array2<i32> {
        // Elements outside the group map to the zero matrix, which fails every law check
        self.representation
            .matrix(*f)
            .cloned()
            .unwrap_or_else(|| Array2::zeros((d.dimension, d.dimension)))
    }
}

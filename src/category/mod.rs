//! Category theory abstractions for finite groups and their representations
//!
//! A group is a category with a single object whose morphisms are the group
//! elements, and a representation is a functor from that category into a
//! category of matrices. These traits let both sides be checked with the same
//! law verifiers.

use std::fmt::Debug;

pub mod functor;

pub use functor::Functor;

/// A category consists of objects and morphisms between them.
pub trait Category {
    /// The type representing objects in this category
    type Object: Clone + Debug + PartialEq;

    /// The type representing morphisms between objects
    ///
    /// We require PartialEq for morphisms to properly verify category laws
    type Morphism: Clone + Debug + PartialEq;

    /// The domain (source) of a morphism
    fn domain(&self, f: &Self::Morphism) -> Self::Object;

    /// The codomain (target) of a morphism
    fn codomain(&self, f: &Self::Morphism) -> Self::Object;

    /// The identity morphism for a given object
    fn identity(&self, obj: &Self::Object) -> Self::Morphism;

    /// Composition of morphisms f and g, where f goes from A to B, and g goes from B to C.
    /// The result is a morphism from A to C.
    ///
    /// Returns None if the morphisms cannot be composed
    fn compose(&self, f: &Self::Morphism, g: &Self::Morphism) -> Option<Self::Morphism>;

    /// Whether the codomain of f matches the domain of g
    fn can_compose(&self, f: &Self::Morphism, g: &Self::Morphism) -> bool {
        self.codomain(f) == self.domain(g)
    }
}

/// Verification of category laws
pub mod laws {
    use super::Category;

    /// Verify the identity and associativity laws on a sample of morphisms.
    ///
    /// Every test morphism must be composable with every other one, which is
    /// always the case for a single-object category.
    pub fn verify_category_laws<C: Category>(category: &C, test_morphisms: &[C::Morphism]) -> bool {
        // id_B ∘ f = f = f ∘ id_A
        let identity_law = test_morphisms.iter().all(|f| {
            let id_src = category.identity(&category.domain(f));
            let id_tgt = category.identity(&category.codomain(f));

            match (category.compose(&id_src, f), category.compose(f, &id_tgt)) {
                (Some(left), Some(right)) => left == *f && right == *f,
                _ => false,
            }
        });

        // (h ∘ g) ∘ f = h ∘ (g ∘ f)
        let associativity_law = test_morphisms.iter().all(|f| {
            test_morphisms.iter().all(|g| {
                test_morphisms.iter().all(|h| {
                    if !category.can_compose(f, g) || !category.can_compose(g, h) {
                        return true;
                    }
                    let g_f = category.compose(f, g);
                    let h_g = category.compose(g, h);
                    match (g_f, h_g) {
                        (Some(g_f), Some(h_g)) => {
                            category.compose(&g_f, h) == category.compose(f, &h_g)
                        }
                        _ => false,
                    }
                })
            })
        });

        identity_law && associativity_law
    }
}

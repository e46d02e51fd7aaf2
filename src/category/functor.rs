//! Functors between categories
//!
//! A representation of a group is exactly a functor out of the group's
//! one-object category, so identity and composition preservation below are the
//! two halves of the homomorphism property.

use super::Category;

/// A functor maps objects and morphisms from one category to another,
/// preserving identity morphisms and composition.
pub trait Functor<C: Category, D: Category> {
    /// Map an object from category C to category D
    fn map_object(&self, c: &C, d: &D, obj: &C::Object) -> D::Object;

    /// Map a morphism from category C to category D
    fn map_morphism(&self, c: &C, d: &D, f: &C::Morphism) -> D::Morphism;

    /// Check if the functor properly maps domains and codomains
    fn preserves_endpoints(&self, c: &C, d: &D, f: &C::Morphism) -> bool {
        let mapped = self.map_morphism(c, d, f);
        self.map_object(c, d, &c.domain(f)) == d.domain(&mapped)
            && self.map_object(c, d, &c.codomain(f)) == d.codomain(&mapped)
    }

    /// Verify that the functor preserves identity
    fn preserves_identity(&self, c: &C, d: &D, obj: &C::Object) -> bool {
        let mapped_id = self.map_morphism(c, d, &c.identity(obj));
        let d_id = d.identity(&self.map_object(c, d, obj));

        mapped_id == d_id
    }

    /// Verify that F(g ∘ f) = F(g) ∘ F(f)
    fn preserves_composition(&self, c: &C, d: &D, f: &C::Morphism, g: &C::Morphism) -> bool {
        if !c.can_compose(f, g) {
            return true; // vacuously true
        }

        let comp = match c.compose(f, g) {
            Some(comp) => comp,
            None => return false,
        };
        let mapped_comp = self.map_morphism(c, d, &comp);

        let mapped_f = self.map_morphism(c, d, f);
        let mapped_g = self.map_morphism(c, d, g);
        match d.compose(&mapped_f, &mapped_g) {
            Some(comp_mapped) => mapped_comp == comp_mapped,
            None => false,
        }
    }

    /// Verify all functor laws at once for a collection of test objects and morphisms
    fn verify_functor_laws(
        &self,
        c: &C,
        d: &D,
        test_objects: &[C::Object],
        test_morphisms: &[C::Morphism],
    ) -> bool {
        let identity_preservation = test_objects
            .iter()
            .all(|obj| self.preserves_identity(c, d, obj));

        let composition_preservation = test_morphisms.iter().all(|f| {
            test_morphisms
                .iter()
                .all(|g| self.preserves_composition(c, d, f, g))
        });

        let endpoint_preservation = test_morphisms
            .iter()
            .all(|f| self.preserves_endpoints(c, d, f));

        identity_preservation && composition_preservation && endpoint_preservation
    }
}

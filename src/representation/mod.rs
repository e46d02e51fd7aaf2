//! Representations of finite groups by matrices

pub mod regular;
pub mod functor;

pub use regular::{generate, generate_with, regular_representation, RegularRepresentation};
pub use functor::{PermutationMatrixCategory, RegularRepresentationFunctor};

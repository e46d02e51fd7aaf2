//! Finite groups given by their multiplication tables
//!
//! Elements are labelled `0..N`. Tables are validated on construction and can
//! be built by hand, from the constructors in [`builders`], or recovered from a
//! set of matrices closed under multiplication.

pub mod error;
pub mod table;
pub mod builders;
pub mod category;

pub use error::{GroupError, Result};
pub use table::MultiplicationTable;
pub use builders::{cyclic, dihedral, klein_four, direct_product, from_matrices, DEFAULT_TOLERANCE};
pub use category::GroupCategory;

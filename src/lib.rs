//! Finite-group representations for equivariant convolution
//!
//! This crate builds the regular representation of a finite group from its
//! multiplication table and uses it to construct and check group-equivariant
//! convolution layers. Groups and representations are also exposed as
//! categories and functors so the homomorphism property can be verified with
//! generic law checkers.

pub mod category;
pub mod config;
pub mod group;
pub mod representation;
pub mod convolution;

// Create a prelude module for convenient imports
pub mod prelude {
    pub use crate::category::{Category, Functor};
    pub use crate::config::{ConvolutionConfig, Validation};
    pub use crate::group::{GroupCategory, GroupError, MultiplicationTable};
    pub use crate::representation::{generate, generate_with, regular_representation, RegularRepresentation};
    pub use crate::convolution::{equivariance_error, GroupConvolution, GroupLayer, RelaxedGroupConvolution};
}

// Version and crate information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");

//! Configuration knobs for validation and layer initialisation

use serde::{Deserialize, Serialize};

/// How strictly a multiplication table is checked before use.
///
/// `LatinSquare` only guarantees that left multiplication by every element is a
/// permutation, which is all the regular representation needs to be a set of
/// permutation matrices. `Full` also checks identity, inverses and associativity,
/// which is what makes the matrices a homomorphic image of the group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Validation {
    /// Square shape, entries in range, every row and column a permutation
    #[default]
    LatinSquare,

    /// Latin square plus identity, inverses and associativity
    Full,
}

impl Validation {
    /// Whether the group axioms are checked in addition to the Latin-square property
    pub fn checks_axioms(&self) -> bool {
        matches!(self, Validation::Full)
    }
}

/// Initialisation settings for group convolution layers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvolutionConfig {
    /// Whether the layer carries a learnable bias
    pub bias: bool,

    /// Filter weights are drawn uniformly from `[-init_range, init_range)`
    pub init_range: f64,
}

impl Default for ConvolutionConfig {
    fn default() -> Self {
        ConvolutionConfig {
            bias: true,
            init_range: 1.0,
        }
    }
}

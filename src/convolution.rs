//! Group convolution layers over signals on a finite group
//!
//! A signal is a vector `x` of length N indexed by group elements. A group
//! convolution with filter ψ computes `(ψ ⋆ x)(g) = Σ_h ψ(h⁻¹·g) x(h)`, which
//! commutes with the left regular action: `f(P_a x) = P_a f(x)` for every a.
//! Relaxed group convolution mixes several such convolutions with weights
//! that may depend on the output element, trading exact equivariance for
//! flexibility.

use ndarray::{Array1, Array2};
use rand::Rng;

use crate::config::ConvolutionConfig;
use crate::group::{GroupError, MultiplicationTable, Result};
use crate::representation::RegularRepresentation;

/// Common interface of layers acting on signals over a group
pub trait GroupLayer {
    /// Order of the group the layer is defined on
    fn order(&self) -> usize;

    /// Applies the layer to a signal of length `order()`
    fn forward(&self, signal: &Array1<f64>) -> Result<Array1<f64>>;

    /// Returns the number of trainable parameters in the layer
    fn parameter_count(&self) -> usize;

    /// Gets the current parameters as a flat vector
    fn get_parameters(&self) -> Vec<f64>;

    /// Sets the parameters from a flat vector of length `parameter_count()`
    fn set_parameters(&mut self, parameters: &[f64]) -> Result<()>;
}

/// Kernel matrix of the group convolution with filter ψ: `K[g, h] = ψ(h⁻¹·g)`
fn convolution_kernel(table: &MultiplicationTable, inverses: &[usize], filter: &Array1<f64>) -> Array2<f64> {
    let t = table.as_array();
    let n = table.order();
    Array2::from_shape_fn((n, n), |(g, h)| filter[t[[inverses[h], g]]])
}

fn check_signal(signal: &Array1<f64>, order: usize) -> Result<()> {
    if signal.len() == order {
        Ok(())
    } else {
        Err(GroupError::DimensionMismatch(format!(
            "Signal has length {}, group has order {}",
            signal.len(),
            order
        )))
    }
}

fn check_parameter_count(parameters: &[f64], expected: usize) -> Result<()> {
    if parameters.len() == expected {
        Ok(())
    } else {
        Err(GroupError::DimensionMismatch(format!(
            "Expected {} parameters, got {}",
            expected,
            parameters.len()
        )))
    }
}

fn random_weights<R: Rng + ?Sized>(len: usize, range: f64, rng: &mut R) -> Result<Vec<f64>> {
    // The sampled interval has width 2 * range, which must itself be finite
    if !range.is_finite() || !(2.0 * range).is_finite() {
        return Err(GroupError::DimensionMismatch(format!(
            "Initialisation range {} is not a finite interval",
            range
        )));
    }
    if range <= 0.0 {
        return Ok(vec![0.0; len]);
    }
    Ok((0..len).map(|_| rng.gen_range(-range..range)).collect())
}

/// A single group convolution with an optional bias
#[derive(Debug, Clone)]
pub struct GroupConvolution {
    table: MultiplicationTable,
    inverses: Vec<usize>,
    filter: Array1<f64>,
    bias: Option<f64>,
}

impl GroupConvolution {
    /// Creates a layer from a filter over the group elements
    pub fn new(table: MultiplicationTable, filter: Array1<f64>, bias: Option<f64>) -> Result<Self> {
        if filter.len() != table.order() {
            return Err(GroupError::DimensionMismatch(format!(
                "Filter has length {}, group has order {}",
                filter.len(),
                table.order()
            )));
        }
        let inverses = table.inverses()?;
        Ok(GroupConvolution {
            table,
            inverses,
            filter,
            bias,
        })
    }

    /// Creates a layer with random filter weights and the default configuration
    pub fn random<R: Rng + ?Sized>(table: MultiplicationTable, rng: &mut R) -> Result<Self> {
        Self::random_with(table, &ConvolutionConfig::default(), rng)
    }

    /// Creates a layer with random filter weights
    pub fn random_with<R: Rng + ?Sized>(
        table: MultiplicationTable,
        config: &ConvolutionConfig,
        rng: &mut R,
    ) -> Result<Self> {
        let filter = Array1::from(random_weights(table.order(), config.init_range, rng)?);
        let bias = config.bias.then_some(0.0);
        Self::new(table, filter, bias)
    }

    pub fn filter(&self) -> &Array1<f64> {
        &self.filter
    }

    pub fn bias(&self) -> Option<f64> {
        self.bias
    }

    /// The N×N matrix this layer multiplies signals by
    pub fn kernel(&self) -> Array2<f64> {
        convolution_kernel(&self.table, &self.inverses, &self.filter)
    }
}

impl GroupLayer for GroupConvolution {
    fn order(&self) -> usize {
        self.table.order()
    }

    fn forward(&self, signal: &Array1<f64>) -> Result<Array1<f64>> {
        check_signal(signal, self.order())?;
        let out = self.kernel().dot(signal);
        Ok(match self.bias {
            Some(b) => out + b,
            None => out,
        })
    }

    fn parameter_count(&self) -> usize {
        self.filter.len() + usize::from(self.bias.is_some())
    }

    fn get_parameters(&self) -> Vec<f64> {
        self.filter.iter().copied().chain(self.bias).collect()
    }

    fn set_parameters(&mut self, parameters: &[f64]) -> Result<()> {
        check_parameter_count(parameters, self.parameter_count())?;
        let n = self.filter.len();
        self.filter = Array1::from(parameters[..n].to_vec());
        if self.bias.is_some() {
            self.bias = Some(parameters[n]);
        }
        Ok(())
    }
}

/// A relaxed group convolution: `out(g) = Σ_l α_l(g) (ψ_l ⋆ x)(g) + b`.
///
/// Row l of `filters` is ψ_l and row l of `relaxed_weights` is α_l. The layer is
/// exactly equivariant when every α_l is constant over the group.
#[derive(Debug, Clone)]
pub struct RelaxedGroupConvolution {
    table: MultiplicationTable,
    inverses: Vec<usize>,
    filters: Array2<f64>,
    relaxed_weights: Array2<f64>,
    bias: Option<f64>,
}

impl RelaxedGroupConvolution {
    pub fn new(
        table: MultiplicationTable,
        filters: Array2<f64>,
        relaxed_weights: Array2<f64>,
        bias: Option<f64>,
    ) -> Result<Self> {
        let n = table.order();
        if filters.nrows() == 0 {
            return Err(GroupError::DimensionMismatch(
                "Relaxed convolution needs at least one filter".to_string(),
            ));
        }
        if filters.ncols() != n {
            return Err(GroupError::DimensionMismatch(format!(
                "Filters have length {}, group has order {}",
                filters.ncols(),
                n
            )));
        }
        if relaxed_weights.dim() != filters.dim() {
            return Err(GroupError::DimensionMismatch(format!(
                "Relaxed weights have shape {:?}, filters have shape {:?}",
                relaxed_weights.dim(),
                filters.dim()
            )));
        }

        let inverses = table.inverses()?;
        Ok(RelaxedGroupConvolution {
            table,
            inverses,
            filters,
            relaxed_weights,
            bias,
        })
    }

    /// Random filters with relaxed weights initialised to `1 / num_filters`,
    /// so the layer starts out exactly equivariant
    pub fn random_with<R: Rng + ?Sized>(
        table: MultiplicationTable,
        num_filters: usize,
        config: &ConvolutionConfig,
        rng: &mut R,
    ) -> Result<Self> {
        let n = table.order();
        let weights = random_weights(num_filters * n, config.init_range, rng)?;
        let filters = Array2::from_shape_vec((num_filters, n), weights)
            .map_err(|e| GroupError::DimensionMismatch(e.to_string()))?;
        let relaxed_weights = Array2::from_elem((num_filters, n), 1.0 / num_filters.max(1) as f64);
        let bias = config.bias.then_some(0.0);
        Self::new(table, filters, relaxed_weights, bias)
    }

    pub fn num_filters(&self) -> usize {
        self.filters.nrows()
    }

    pub fn relaxed_weights(&self) -> &Array2<f64> {
        &self.relaxed_weights
    }

    /// Kernel matrices of the individual convolutions
    pub fn kernels(&self) -> Vec<Array2<f64>> {
        self.filters
            .rows()
            .into_iter()
            .map(|psi| convolution_kernel(&self.table, &self.inverses, &psi.to_owned()))
            .collect()
    }

    /// Whether every α_l is constant over the group, making the layer exactly equivariant
    pub fn is_strictly_equivariant(&self, tol: f64) -> bool {
        self.relaxed_weights.rows().into_iter().all(|alpha| {
            let first = alpha[0];
            alpha.iter().all(|a| (a - first).abs() <= tol)
        })
    }
}

impl GroupLayer for RelaxedGroupConvolution {
    fn order(&self) -> usize {
        self.table.order()
    }

    fn forward(&self, signal: &Array1<f64>) -> Result<Array1<f64>> {
        check_signal(signal, self.order())?;

        let mut out = Array1::from_elem(self.order(), self.bias.unwrap_or(0.0));
        for (kernel, alpha) in self.kernels().iter().zip(self.relaxed_weights.rows()) {
            out = out + &alpha * &kernel.dot(signal);
        }
        Ok(out)
    }

    fn parameter_count(&self) -> usize {
        self.filters.len() + self.relaxed_weights.len() + usize::from(self.bias.is_some())
    }

    fn get_parameters(&self) -> Vec<f64> {
        self.filters
            .iter()
            .chain(self.relaxed_weights.iter())
            .copied()
            .chain(self.bias)
            .collect()
    }

    fn set_parameters(&mut self, parameters: &[f64]) -> Result<()> {
        check_parameter_count(parameters, self.parameter_count())?;
        let shape = self.filters.dim();
        let size = self.filters.len();

        self.filters = Array2::from_shape_vec(shape, parameters[..size].to_vec())
            .map_err(|e| GroupError::DimensionMismatch(e.to_string()))?;
        self.relaxed_weights = Array2::from_shape_vec(shape, parameters[size..2 * size].to_vec())
            .map_err(|e| GroupError::DimensionMismatch(e.to_string()))?;
        if self.bias.is_some() {
            self.bias = Some(parameters[2 * size]);
        }
        Ok(())
    }
}

/// Largest deviation from equivariance over all group elements:
/// `max_g ‖f(P_g x) − P_g f(x)‖∞`
pub fn equivariance_error<L: GroupLayer>(
    layer: &L,
    representation: &RegularRepresentation,
    signal: &Array1<f64>,
) -> Result<f64> {
    if layer.order() != representation.order() {
        return Err(GroupError::DimensionMismatch(format!(
            "Layer is defined on a group of order {}, representation has order {}",
            layer.order(),
            representation.order()
        )));
    }

    let output = layer.forward(signal)?;
    let mut worst = 0.0_f64;
    for g in 0..representation.order() {
        let transformed_then_applied = layer.forward(&representation.act(g, signal)?)?;
        let applied_then_transformed = representation.act(g, &output)?;
        let deviation = (&transformed_then_applied - &applied_then_transformed)
            .iter()
            .fold(0.0_f64, |acc, d| acc.max(d.abs()));
        worst = worst.max(deviation);
    }

    log::debug!("Equivariance error over {} elements: {:e}", representation.order(), worst);
    Ok(worst)
}

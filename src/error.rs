use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors surfaced while deriving quantities from a mortality law.
///
/// Evaluating a hazard never fails: out-of-domain parameters or ages show up as
/// NaN or infinite values. Only the numerical integration path and tabulation
/// can return an error.
#[derive(Debug, Error)]
pub enum MortLawError {
    /// The adaptive quadrature exhausted its subinterval budget before the
    /// error estimate dropped below the requested tolerance.
    #[error(
        "integration over [{lower}, {upper}] did not converge: estimate {value:e} with error {error:e}"
    )]
    NonConvergence {
        lower: f64,
        upper: f64,
        value: f64,
        error: f64,
    },

    /// The integrand returned NaN or an infinite value at a quadrature node.
    #[error("hazard is not finite at age {at}")]
    NonFiniteIntegrand { at: f64 },

    /// Integrator configuration failed validation.
    #[error("invalid integrator configuration: {0}")]
    InvalidConfig(#[from] garde::Report),

    /// Building a tabulated frame failed.
    #[error("failed to build table: {0}")]
    Polars(#[from] PolarsError),
}

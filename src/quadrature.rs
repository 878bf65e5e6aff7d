//! # Numerical Quadrature
//!
//! Adaptive integration over a finite interval, used to derive the cumulative hazard
//! of laws that have no closed form.
//!
//! The [`Integrator`] trait is the seam: the derivation layer only needs a definite
//! integral estimate or a distinct failure. [`GaussKronrod`] is the bundled
//! implementation, a globally adaptive 7-point Gauss / 15-point Kronrod rule.
//!
//! ## Example
//! ```rust
//! # use mortlaw::prelude::*;
//! let gk = GaussKronrod::builder().rel_tol(1e-10).build()?;
//! let estimate = gk.integrate(|x| x * x, 0.0, 3.0)?;
//! assert!((estimate.value - 9.0).abs() < 1e-12);
//! # MortLawResult::Ok(())
//! ```
//!
//! ## Notes
//! - The rule never evaluates the integrand at the interval endpoints, so integrable
//!   endpoint singularities (e.g. `x^(-1/2)` at 0) are tolerated.
//! - Reversed bounds return the negated integral.

use crate::{MortLawError, MortLawResult};
use bon::bon;
use garde::Validate;
use log::{debug, warn};

/// √ε for `f64`, the usual default relative tolerance for adaptive quadrature.
pub const DEFAULT_REL_TOL: f64 = 1.490_116_119_384_765_6e-8;

/// Default cap on the number of subintervals before giving up.
pub const DEFAULT_MAX_SUBINTERVALS: usize = 2000;

// ===============================================
// INTEGRATOR TRAIT
// ===============================================

/// A definite-integral estimate with its absolute error bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub value: f64,
    pub error: f64,
    /// Number of subintervals the estimate was assembled from.
    pub subintervals: usize,
}

/// Numerical integration over a finite interval `[lower, upper]`.
///
/// Implementations must only evaluate the integrand strictly inside the interval,
/// never at `lower` or `upper`. Hazards such as Weibull's `x^(-1/2)` or the inverse
/// Weibull's `0/0` are undefined at age 0, and the derivation layer integrates them
/// from 0.
pub trait Integrator {
    /// Integrate `integrand` from `lower` to `upper`.
    ///
    /// `upper < lower` yields the negated integral and `lower == upper` yields 0.
    /// Must fail with [`MortLawError::NonConvergence`] instead of returning an estimate
    /// that misses the requested tolerance.
    fn integrate<F>(&self, integrand: F, lower: f64, upper: f64) -> MortLawResult<Estimate>
    where
        F: Fn(f64) -> f64;
}

// ===============================================
// GAUSS-KRONROD
// ===============================================

/// Globally adaptive Gauss-Kronrod (G7/K15) integrator.
///
/// The interval with the largest error estimate is bisected until the summed error is
/// within `max(abs_tol, rel_tol * |I|)` or the subinterval budget runs out.
#[derive(Debug, Clone, Copy, PartialEq, Validate)]
pub struct GaussKronrod {
    /// Relative tolerance on the integral estimate.
    #[garde(custom(validate_tolerance))]
    pub rel_tol: f64,

    /// Absolute tolerance on the integral estimate.
    #[garde(custom(validate_tolerance))]
    pub abs_tol: f64,

    /// Maximum number of subintervals.
    #[garde(range(min = 1))]
    pub max_subintervals: usize,
}

fn validate_tolerance(value: &f64, _context: &()) -> garde::Result {
    if !value.is_finite() || *value < 0.0 {
        return Err(garde::Error::new("tolerance must be a finite, non-negative number"));
    }
    Ok(())
}

impl Default for GaussKronrod {
    fn default() -> Self {
        GaussKronrod {
            rel_tol: DEFAULT_REL_TOL,
            abs_tol: 0.0,
            max_subintervals: DEFAULT_MAX_SUBINTERVALS,
        }
    }
}

#[bon]
impl GaussKronrod {
    #[builder]
    pub fn new(
        #[builder(default = DEFAULT_REL_TOL)] rel_tol: f64,
        #[builder(default = 0.0)] abs_tol: f64,
        #[builder(default = DEFAULT_MAX_SUBINTERVALS)] max_subintervals: usize,
    ) -> MortLawResult<Self> {
        let config = GaussKronrod {
            rel_tol,
            abs_tol,
            max_subintervals,
        };

        config.validate()?;

        // With both tolerances at zero only an exact error estimate would converge
        if rel_tol == 0.0 && abs_tol == 0.0 {
            let mut report = garde::Report::new();
            report.append(
                garde::Path::new("rel_tol"),
                garde::Error::new("rel_tol and abs_tol cannot both be 0.0"),
            );
            return Err(report.into());
        }

        Ok(config)
    }
}

impl Integrator for GaussKronrod {
    fn integrate<F>(&self, integrand: F, lower: f64, upper: f64) -> MortLawResult<Estimate>
    where
        F: Fn(f64) -> f64,
    {
        if lower == upper {
            return Ok(Estimate {
                value: 0.0,
                error: 0.0,
                subintervals: 0,
            });
        }

        // ∫ₐᵇ f = -∫ᵇₐ f
        if lower > upper {
            let estimate = self.integrate(integrand, upper, lower)?;
            return Ok(Estimate {
                value: -estimate.value,
                ..estimate
            });
        }

        let mut segments = vec![kronrod_segment(&integrand, lower, upper)?];

        loop {
            let value: f64 = segments.iter().map(|s| s.value).sum();
            let error: f64 = segments.iter().map(|s| s.error).sum();
            let tolerance = self.abs_tol.max(self.rel_tol * value.abs());

            if error <= tolerance {
                debug!(
                    "integrated [{lower}, {upper}] to {value:e} (error {error:e}) over {} subintervals",
                    segments.len()
                );
                return Ok(Estimate {
                    value,
                    error,
                    subintervals: segments.len(),
                });
            }

            let non_convergence = MortLawError::NonConvergence {
                lower,
                upper,
                value,
                error,
            };

            if segments.len() >= self.max_subintervals {
                warn!("{non_convergence} after {} subintervals", segments.len());
                return Err(non_convergence);
            }

            // Bisect the subinterval with the largest error
            let worst = segments
                .iter()
                .enumerate()
                .max_by(|(_, a), (_, b)| a.error.total_cmp(&b.error))
                .map(|(i, _)| i)
                .unwrap_or(0);
            let segment = segments.swap_remove(worst);
            let mid = 0.5 * (segment.lower + segment.upper);

            // Interval too narrow to split in double precision
            if mid <= segment.lower || mid >= segment.upper {
                warn!("{non_convergence}: cannot bisect [{}, {}]", segment.lower, segment.upper);
                return Err(non_convergence);
            }

            segments.push(kronrod_segment(&integrand, segment.lower, mid)?);
            segments.push(kronrod_segment(&integrand, mid, segment.upper)?);
        }
    }
}

// ===============================================
// PRIVATE FUNCTIONS
// ===============================================

// Kronrod abscissae on [-1, 1], descending; odd indices are the Gauss nodes
const XGK: [f64; 8] = [
    0.991_455_371_120_812_6,
    0.949_107_912_342_758_5,
    0.864_864_423_359_769_1,
    0.741_531_185_599_394_4,
    0.586_087_235_467_691_1,
    0.405_845_151_377_397_2,
    0.207_784_955_007_898_5,
    0.0,
];

const WGK: [f64; 8] = [
    0.022_935_322_010_529_22,
    0.063_092_092_629_978_55,
    0.104_790_010_322_250_2,
    0.140_653_259_715_525_9,
    0.169_004_726_639_267_9,
    0.190_350_578_064_785_4,
    0.204_432_940_075_298_9,
    0.209_482_141_084_727_8,
];

const WG: [f64; 4] = [
    0.129_484_966_168_869_7,
    0.279_705_391_489_276_7,
    0.381_830_050_505_118_9,
    0.417_959_183_673_469_4,
];

#[derive(Debug, Clone, Copy)]
struct Segment {
    lower: f64,
    upper: f64,
    value: f64,
    error: f64,
}

fn kronrod_segment<F>(integrand: &F, lower: f64, upper: f64) -> MortLawResult<Segment>
where
    F: Fn(f64) -> f64,
{
    let center = 0.5 * (lower + upper);
    let half = 0.5 * (upper - lower);

    let f_center = evaluate(integrand, center)?;
    let mut kronrod = WGK[7] * f_center;
    let mut gauss = WG[3] * f_center;

    for j in 0..7 {
        let dx = half * XGK[j];
        let pair = evaluate(integrand, center - dx)? + evaluate(integrand, center + dx)?;
        kronrod += WGK[j] * pair;
        if j % 2 == 1 {
            gauss += WG[j / 2] * pair;
        }
    }

    Ok(Segment {
        lower,
        upper,
        value: kronrod * half,
        error: ((kronrod - gauss) * half).abs(),
    })
}

fn evaluate<F>(integrand: &F, x: f64) -> MortLawResult<f64>
where
    F: Fn(f64) -> f64,
{
    let y = integrand(x);
    if y.is_finite() {
        Ok(y)
    } else {
        Err(MortLawError::NonFiniteIntegrand { at: x })
    }
}

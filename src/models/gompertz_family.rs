//! Gompertz-type laws: mortality growing (or shrinking) exponentially with age.

#![allow(non_snake_case)]

use crate::MortLawResult;
use crate::models::ParametricMortality;
use crate::quadrature::Integrator;
use bon::{Builder, builder};

// ===============================================
// MAKEHAM / GOMPERTZ
// ===============================================

/// Makeham's law: Gompertz senescent mortality plus an age-independent term.
///
/// # Formula
/// ```text
/// μₓ = a·eᵇˣ + c
/// Hₓ = a/b·(eᵇˣ - 1) + c·x
/// S(x) = e^(-Hₓ)
/// ```
///
/// # Example
/// ```rust
/// # use mortlaw::prelude::*;
/// let law = Makeham::builder().c(0.0005).build(); // a, b at their defaults
/// assert_eq!(law.a, 0.0002);
/// println!("H(60) = {:.6}", law.cumhazard(60.0)?);
/// # MortLawResult::Ok(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Builder)]
pub struct Makeham {
    #[builder(default = 0.0002)]
    pub a: f64,
    #[builder(default = 0.13)]
    pub b: f64,
    #[builder(default = 0.001)]
    pub c: f64,
}

impl ParametricMortality for Makeham {
    fn hazard(&self, age: f64) -> f64 {
        self.a * (self.b * age).exp() + self.c
    }

    fn cumhazard_with<I: Integrator>(&self, age: f64, _integrator: &I) -> MortLawResult<f64> {
        Ok(self.a / self.b * ((self.b * age).exp() - 1.0) + self.c * age)
    }
}

/// Gompertz's law: μₓ = a·eᵇˣ.
///
/// Returns a [`Makeham`] with `c = 0` rather than a separate type.
///
/// ```rust
/// # use mortlaw::prelude::*;
/// let law: Makeham = Gompertz().b(0.1).build();
/// assert_eq!(law.c, 0.0);
/// ```
#[builder(finish_fn = build)]
pub fn Gompertz(#[builder(default = 0.0002)] a: f64, #[builder(default = 0.13)] b: f64) -> Makeham {
    Makeham { a, b, c: 0.0 }
}

// ===============================================
// INVERSE GOMPERTZ
// ===============================================

/// Inverse Gompertz law, with modal age `m` and dispersion `sigma`.
///
/// # Formula
/// ```text
/// μₓ = (1/σ)·e^(-(x-m)/σ) / (exp(e^(-(x-m)/σ)) - 1)
/// S(x) = (1 - exp(-e^(-(x-m)/σ))) / (1 - exp(-e^(m/σ)))
/// Hₓ = -ln S(x)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Builder)]
pub struct InverseGompertz {
    #[builder(default = 49.0)]
    pub m: f64,
    #[builder(default = 7.7)]
    pub sigma: f64,
}

impl InverseGompertz {
    fn exp_term(&self, age: f64) -> f64 {
        (-(age - self.m) / self.sigma).exp()
    }
}

impl ParametricMortality for InverseGompertz {
    fn hazard(&self, age: f64) -> f64 {
        let exp_term = self.exp_term(age);
        exp_term / self.sigma / exp_term.exp_m1()
    }

    fn cumhazard_with<I: Integrator>(&self, age: f64, integrator: &I) -> MortLawResult<f64> {
        Ok(-self.survivorship_with(age, integrator)?.ln())
    }

    fn survivorship_with<I: Integrator>(&self, age: f64, _integrator: &I) -> MortLawResult<f64> {
        // 1 - e^(-v) == -expm1(-v)
        let numerator = -(-self.exp_term(age)).exp_m1();
        let denominator = -(-(self.m / self.sigma).exp()).exp_m1();
        Ok(numerator / denominator)
    }
}

// ===============================================
// STREHLER-MILDVAN
// ===============================================

/// Strehler-Mildvan law: mortality from vitality `v0` declining linearly at rate `b`,
/// against challenges of mean energy `d` arriving at frequency `k`.
///
/// # Formula
/// ```text
/// μₓ = k·e^(-v0·(1 - b·x)/d)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Builder)]
pub struct StrehlerMildvan {
    #[builder(default = 0.01)]
    pub k: f64,
    #[builder(default = 2.7)]
    pub v0: f64,
    #[builder(default = 0.2)]
    pub b: f64,
    #[builder(default = 6.0)]
    pub d: f64,
}

impl ParametricMortality for StrehlerMildvan {
    fn hazard(&self, age: f64) -> f64 {
        self.k * (-self.v0 * (1.0 - self.b * age) / self.d).exp()
    }
}

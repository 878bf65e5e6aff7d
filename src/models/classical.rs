//! Nineteenth-century laws covering the whole age range, childhood included.

use crate::models::ParametricMortality;
use bon::Builder;

// ===============================================
// OPPERMAN
// ===============================================

/// Opperman's law for infant and early-childhood mortality.
///
/// # Formula
/// ```text
/// μₓ = max(a/√(x+1) - b + c·√(x+1), 0)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Builder)]
pub struct Opperman {
    #[builder(default = 0.04)]
    pub a: f64,
    #[builder(default = 0.0004)]
    pub b: f64,
    #[builder(default = 0.001)]
    pub c: f64,
}

impl ParametricMortality for Opperman {
    fn hazard(&self, age: f64) -> f64 {
        let root = (age + 1.0).sqrt();
        let mu = self.a / root - self.b + self.c * root;
        // Clamp negative values only; NaN passes through
        if mu < 0.0 { 0.0 } else { mu }
    }
}

// ===============================================
// THIELE
// ===============================================

/// Thiele's law: infant, accident hump and senescent components.
///
/// # Formula
/// ```text
/// μ¹ₓ = a·e^(-bx)
/// μ²ₓ = c·e^(-½·d·(x - e)²)
/// μ³ₓ = f·e^(gx)
/// μₓ = μ¹ₓ + μ²ₓ + μ³ₓ      (μ₀ = μ¹₀ + μ³₀)
/// ```
///
/// The hump term is excluded at exactly age 0.
#[derive(Debug, Clone, Copy, PartialEq, Builder)]
pub struct Thiele {
    #[builder(default = 0.02474)]
    pub a: f64,
    #[builder(default = 0.3)]
    pub b: f64,
    #[builder(default = 0.004)]
    pub c: f64,
    #[builder(default = 0.5)]
    pub d: f64,
    #[builder(default = 25.0)]
    pub e: f64,
    #[builder(default = 0.0001)]
    pub f: f64,
    #[builder(default = 0.13)]
    pub g: f64,
}

impl ParametricMortality for Thiele {
    fn hazard(&self, age: f64) -> f64 {
        let infant = self.a * (-self.b * age).exp();
        let senescent = self.f * (self.g * age).exp();
        if age == 0.0 {
            return infant + senescent;
        }
        let hump = self.c * (-0.5 * self.d * (age - self.e).powi(2)).exp();
        infant + hump + senescent
    }
}

// ===============================================
// WITTSTEIN
// ===============================================

/// Wittstein's law, with `m` the maximum attainable age.
///
/// # Formula
/// ```text
/// μₓ = (1/b)·a^(-(bx)ⁿ) + a^(-(m-x)ⁿ)
/// ```
///
/// For fractional `n` the second term is only real up to age `m`; beyond it the hazard is NaN.
#[derive(Debug, Clone, Copy, PartialEq, Builder)]
pub struct Wittstein {
    #[builder(default = 1.5)]
    pub a: f64,
    #[builder(default = 1.0)]
    pub b: f64,
    #[builder(default = 0.5)]
    pub n: f64,
    #[builder(default = 100.0)]
    pub m: f64,
}

impl ParametricMortality for Wittstein {
    fn hazard(&self, age: f64) -> f64 {
        (1.0 / self.b) * self.a.powf(-(self.b * age).powf(self.n))
            + self.a.powf(-(self.m - age).powf(self.n))
    }
}

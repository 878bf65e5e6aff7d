//! Polynomial laws, optionally with a pole at a terminal age `n`.

use crate::models::ParametricMortality;
use bon::Builder;

/// Van der Maen's law.
///
/// # Formula
/// ```text
/// μₓ = a + b·x + c·x² + i/(n - x)
/// ```
///
/// Undefined (infinite) at `x = n`.
#[derive(Debug, Clone, Copy, PartialEq, Builder)]
pub struct VanderMaen {
    #[builder(default = 0.01)]
    pub a: f64,
    #[builder(default = 1.0)]
    pub b: f64,
    #[builder(default = 0.01)]
    pub c: f64,
    #[builder(default = 100.0)]
    pub i: f64,
    #[builder(default = 200.0)]
    pub n: f64,
}

impl ParametricMortality for VanderMaen {
    fn hazard(&self, age: f64) -> f64 {
        self.a + self.b * age + self.c * age.powi(2) + self.i / (self.n - age)
    }
}

/// Van der Maen's second law, without the quadratic term.
///
/// # Formula
/// ```text
/// μₓ = a + b·x + i/(n - x)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Builder)]
pub struct VanderMaen2 {
    #[builder(default = 0.01)]
    pub a: f64,
    #[builder(default = 1.0)]
    pub b: f64,
    #[builder(default = 100.0)]
    pub i: f64,
    #[builder(default = 200.0)]
    pub n: f64,
}

impl ParametricMortality for VanderMaen2 {
    fn hazard(&self, age: f64) -> f64 {
        self.a + self.b * age + self.i / (self.n - age)
    }
}

/// Quadratic law: μₓ = a + b·x + c·x².
#[derive(Debug, Clone, Copy, PartialEq, Builder)]
pub struct Quadratic {
    #[builder(default = 0.01)]
    pub a: f64,
    #[builder(default = 1.0)]
    pub b: f64,
    #[builder(default = 0.01)]
    pub c: f64,
}

impl ParametricMortality for Quadratic {
    fn hazard(&self, age: f64) -> f64 {
        self.a + self.b * age + self.c * age.powi(2)
    }
}

//! Logistic laws, where senescent mortality decelerates towards a plateau at old ages.

use crate::models::ParametricMortality;
use bon::Builder;

/// Perks' law.
///
/// # Formula
/// ```text
/// μₓ = (a + b·cˣ) / (b·c⁻ˣ + 1 + d·cˣ)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Builder)]
pub struct Perks {
    #[builder(default = 0.002)]
    pub a: f64,
    #[builder(default = 0.13)]
    pub b: f64,
    #[builder(default = 0.01)]
    pub c: f64,
    #[builder(default = 0.01)]
    pub d: f64,
}

impl ParametricMortality for Perks {
    fn hazard(&self, age: f64) -> f64 {
        let c_x = self.c.powf(age);
        (self.a + self.b * c_x) / (self.b * self.c.powf(-age) + 1.0 + self.d * c_x)
    }
}

/// Beard's law.
///
/// # Formula
/// ```text
/// μₓ = a·eᵇˣ / (1 + k·a·eᵇˣ)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Builder)]
pub struct Beard {
    #[builder(default = 0.002)]
    pub a: f64,
    #[builder(default = 0.13)]
    pub b: f64,
    #[builder(default = 1.0)]
    pub k: f64,
}

impl ParametricMortality for Beard {
    fn hazard(&self, age: f64) -> f64 {
        beard_hazard(self.a, self.b, self.k, age)
    }
}

/// Makeham-Beard law: Beard's law plus an age-independent term `c`.
///
/// # Formula
/// ```text
/// μₓ = a·eᵇˣ / (1 + k·a·eᵇˣ) + c
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Builder)]
pub struct MakehamBeard {
    #[builder(default = 0.002)]
    pub a: f64,
    #[builder(default = 0.13)]
    pub b: f64,
    #[builder(default = 0.01)]
    pub c: f64,
    #[builder(default = 0.01)]
    pub k: f64,
}

impl ParametricMortality for MakehamBeard {
    fn hazard(&self, age: f64) -> f64 {
        beard_hazard(self.a, self.b, self.k, age) + self.c
    }
}

fn beard_hazard(a: f64, b: f64, k: f64, age: f64) -> f64 {
    let gompertz = a * (b * age).exp();
    gompertz / (1.0 + k * gompertz)
}

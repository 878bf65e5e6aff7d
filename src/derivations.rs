//! # Derived Mortality Functions
//!
//! Cumulative hazard, survivorship and decrement for any [`ParametricMortality`] law.
//!
//! Each function uses the law's closed form when it has one and otherwise integrates
//! the hazard numerically, so the numerical path can fail with
//! [`MortLawError::NonConvergence`](crate::MortLawError::NonConvergence). The
//! builders take an optional `integrator` for that path, a default [`GaussKronrod`]
//! when left out.
//!
//! ## Example
//! ```rust
//! # use mortlaw::prelude::*;
//! let law = Thiele::default();
//!
//! // S(65): probability a newborn reaches 65
//! let s_65 = survivorship().model(&law).to_age(65.0).call()?;
//!
//! // ₂₀p₄₅ and ₂₀q₄₅: surviving / dying between 45 and 65 given alive at 45
//! let p = survivorship().model(&law).from_age(45.0).to_age(65.0).call()?;
//! let q = decrement().model(&law).from_age(45.0).to_age(65.0).call()?;
//! assert_eq!(q, 1.0 - p);
//! # MortLawResult::Ok(())
//! ```

use crate::MortLawResult;
use crate::models::ParametricMortality;
use crate::quadrature::{GaussKronrod, Integrator};
use bon::builder;

// =======================================
// PUBLIC FUNCTIONS
// =======================================

/// Force of mortality μₓ of `model` at `age`.
///
/// ```rust
/// # use mortlaw::prelude::*;
/// let mu = force_of_mortality().model(&Opperman::default()).age(0.0).call();
/// assert!((mu - 0.0406).abs() < 1e-15);
/// ```
#[builder]
pub fn force_of_mortality<M: ParametricMortality>(model: &M, age: f64) -> f64 {
    model.hazard(age)
}

/// Cumulative hazard Hₓ = ∫₀ˣ μₜ dt of `model` at `age`.
#[builder]
pub fn cumhazard<M: ParametricMortality>(
    model: &M,
    age: f64,
    #[builder(default)] integrator: GaussKronrod,
) -> MortLawResult<f64> {
    model.cumhazard_with(age, &integrator)
}

/// Survival probability.
///
/// # Formula
/// ```text
/// S(x) = exp(-∫₀ˣ μₜ dt)                    (to_age only)
/// S(from, to) = S(to) / S(from)             (with from_age)
/// ```
///
/// With `from_age == to_age` the result is exactly `1.0` and nothing is evaluated.
///
/// ```rust
/// # use mortlaw::prelude::*;
/// let gk = GaussKronrod::builder().rel_tol(1e-10).build()?;
/// let p = survivorship()
///     .model(&Perks::default())
///     .from_age(40.0)
///     .to_age(65.0)
///     .integrator(gk)
///     .call()?;
/// assert!(p > 0.0 && p < 1.0);
/// # MortLawResult::Ok(())
/// ```
#[builder]
pub fn survivorship<M: ParametricMortality>(
    model: &M,
    from_age: Option<f64>,
    to_age: f64,
    #[builder(default)] integrator: GaussKronrod,
) -> MortLawResult<f64> {
    match from_age {
        None => model.survivorship_with(to_age, &integrator),
        Some(from_age) if from_age == to_age => Ok(1.0),
        Some(from_age) => Ok(model.survivorship_with(to_age, &integrator)?
            / model.survivorship_with(from_age, &integrator)?),
    }
}

/// Decrement (probability of death): `1 - survivorship`, same arguments as [`survivorship()`].
///
/// # Formula
/// ```text
/// q(x) = 1 - S(x)
/// q(from, to) = 1 - S(to) / S(from)
/// ```
#[builder]
pub fn decrement<M: ParametricMortality>(
    model: &M,
    from_age: Option<f64>,
    to_age: f64,
    #[builder(default)] integrator: GaussKronrod,
) -> MortLawResult<f64> {
    let survival = survivorship()
        .model(model)
        .maybe_from_age(from_age)
        .to_age(to_age)
        .integrator(integrator)
        .call()?;
    Ok(1.0 - survival)
}

/// Cumulative hazard by numerical integration of the hazard, ignoring any closed form.
///
/// Age 0 returns 0 without calling the integrator. A negative age integrates over
/// `[age, 0]` and returns the oriented (negated) integral.
pub fn integrated_cumhazard<M, I>(model: &M, age: f64, integrator: &I) -> MortLawResult<f64>
where
    M: ParametricMortality + ?Sized,
    I: Integrator,
{
    if age == 0.0 {
        return Ok(0.0);
    }
    let estimate = integrator.integrate(|t| model.hazard(t), 0.0, age)?;
    Ok(estimate.value)
}

/// Survivorship by numerical integration of the hazard, ignoring any closed form.
pub fn integrated_survivorship<M, I>(model: &M, age: f64, integrator: &I) -> MortLawResult<f64>
where
    M: ParametricMortality + ?Sized,
    I: Integrator,
{
    Ok((-integrated_cumhazard(model, age, integrator)?).exp())
}

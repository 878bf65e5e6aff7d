//! Weibull-type laws, parameterized by a location `m` and scale `sigma`.

use crate::MortLawResult;
use crate::models::ParametricMortality;
use crate::quadrature::Integrator;
use bon::Builder;

/// Weibull law.
///
/// # Formula
/// ```text
/// μₓ = (1/σ)·(x/m)^(m/σ - 1)      (μ₀ = 1)
/// Hₓ = (x/m)^(m/σ)
/// S(x) = e^(-Hₓ)
/// ```
///
/// The general formula is singular at `x = 0` whenever `m < σ`, so the hazard is
/// pinned to `1.0` there.
#[derive(Debug, Clone, Copy, PartialEq, Builder)]
pub struct Weibull {
    #[builder(default = 1.0)]
    pub m: f64,
    #[builder(default = 2.0)]
    pub sigma: f64,
}

impl ParametricMortality for Weibull {
    fn hazard(&self, age: f64) -> f64 {
        if age == 0.0 {
            return 1.0;
        }
        (age / self.m).powf(self.m / self.sigma - 1.0) / self.sigma
    }

    fn cumhazard_with<I: Integrator>(&self, age: f64, _integrator: &I) -> MortLawResult<f64> {
        Ok((age / self.m).powf(self.m / self.sigma))
    }
}

/// Inverse Weibull (Fréchet) law.
///
/// # Formula
/// ```text
/// μₓ = (1/σ)·(x/m)^(-m/σ - 1) / (exp((x/m)^(-m/σ)) - 1)
/// Hₓ = -ln(1 - exp(-(x/m)^(-m/σ)))
/// S(x) = e^(-Hₓ)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Builder)]
pub struct InverseWeibull {
    #[builder(default = 5.0)]
    pub m: f64,
    #[builder(default = 10.0)]
    pub sigma: f64,
}

impl ParametricMortality for InverseWeibull {
    fn hazard(&self, age: f64) -> f64 {
        let shape = self.m / self.sigma;
        let ratio = age / self.m;
        ratio.powf(-shape - 1.0) / self.sigma / ratio.powf(-shape).exp_m1()
    }

    fn cumhazard_with<I: Integrator>(&self, age: f64, _integrator: &I) -> MortLawResult<f64> {
        let u = (age / self.m).powf(-self.m / self.sigma);
        // ln(1 - e^(-u)) == ln_1p(-e^(-u))
        Ok(-(-(-u).exp()).ln_1p())
    }
}

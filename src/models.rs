//! # Parametric Mortality Laws
//!
//! Closed-form models of the force of mortality μₓ as a function of age.
//!
//! Every law is a small `Copy` struct of named parameters built with a builder, where
//! any parameter left out takes its documented default:
//!
//! ```rust
//! # use mortlaw::prelude::*;
//! let makeham = Makeham::builder().a(0.0002).b(0.13).c(0.001).build();
//! let gompertz = Gompertz().a(0.0002).b(0.13).build(); // a Makeham with c = 0
//! let weibull = Weibull::default();
//!
//! println!("μ₅₀ = {:.6}", makeham.hazard(50.0));
//! println!("S(50) = {:.6}", gompertz.survivorship(50.0)?);
//! println!("S(50) = {:.6}", weibull.survivorship(50.0)?);
//! # MortLawResult::Ok(())
//! ```
//!
//! ## Laws
//! - [`gompertz_family`]: `Makeham`, `Gompertz`, `InverseGompertz`, `StrehlerMildvan`
//! - [`weibull_family`]: `Weibull`, `InverseWeibull`
//! - [`classical`]: `Opperman`, `Thiele`, `Wittstein`
//! - [`logistic`]: `Perks`, `Beard`, `MakehamBeard`
//! - [`polynomial`]: `VanderMaen`, `VanderMaen2`, `Quadratic`
//!
//! ## Notes
//! - Parameters are not validated. Out-of-domain parameters or ages give NaN, infinite
//!   or negative values instead of an error.
//! - Laws without a closed-form cumulative hazard integrate their hazard numerically,
//!   so `cumhazard` and `survivorship` return a [`MortLawResult`].

pub mod classical;
pub mod gompertz_family;
pub mod logistic;
pub mod polynomial;
pub mod weibull_family;

use self::classical::{Opperman, Thiele, Wittstein};
use self::gompertz_family::{Gompertz, InverseGompertz, Makeham, StrehlerMildvan};
use self::logistic::{Beard, MakehamBeard, Perks};
use self::polynomial::{Quadratic, VanderMaen, VanderMaen2};
use self::weibull_family::{InverseWeibull, Weibull};
use crate::MortLawResult;
use crate::derivations::integrated_cumhazard;
use crate::quadrature::{GaussKronrod, Integrator};

// ===============================================
// COMMON INTERFACE
// ===============================================

/// A parametric mortality law.
///
/// Only [`hazard`](Self::hazard) is required. Laws with an analytic cumulative hazard
/// or survivorship override [`cumhazard_with`](Self::cumhazard_with) and
/// [`survivorship_with`](Self::survivorship_with) and ignore the integrator; the others
/// integrate the hazard over `[0, age]` with it. [`cumhazard`](Self::cumhazard) and
/// [`survivorship`](Self::survivorship) use a default [`GaussKronrod`].
pub trait ParametricMortality {
    /// Force of mortality μₓ at exact age `age`.
    fn hazard(&self, age: f64) -> f64;

    /// Cumulative hazard ∫₀ˣ μₜ dt, integrated with `integrator` when there is no
    /// closed form.
    fn cumhazard_with<I: Integrator>(&self, age: f64, integrator: &I) -> MortLawResult<f64> {
        integrated_cumhazard(self, age, integrator)
    }

    /// Survivorship from birth, integrated with `integrator` when there is no closed form.
    fn survivorship_with<I: Integrator>(&self, age: f64, integrator: &I) -> MortLawResult<f64> {
        Ok((-self.cumhazard_with(age, integrator)?).exp())
    }

    /// Cumulative hazard: ∫₀ˣ μₜ dt.
    fn cumhazard(&self, age: f64) -> MortLawResult<f64> {
        self.cumhazard_with(age, &GaussKronrod::default())
    }

    /// Survivorship from birth: S(x) = exp(-∫₀ˣ μₜ dt).
    fn survivorship(&self, age: f64) -> MortLawResult<f64> {
        self.survivorship_with(age, &GaussKronrod::default())
    }

    /// Alias for [`hazard`](Self::hazard).
    fn force_of_mortality(&self, age: f64) -> f64 {
        self.hazard(age)
    }

    /// Lazily evaluate the hazard at each of `ages`.
    fn hazards<I>(&self, ages: I) -> impl Iterator<Item = f64>
    where
        I: IntoIterator<Item = f64>,
        Self: Sized,
    {
        ages.into_iter().map(move |age| self.hazard(age))
    }
}

// ===============================================
// MODEL SUM TYPE
// ===============================================

macro_rules! parametric_models {
    ($($law:ident),+ $(,)?) => {
        /// Any of the bundled laws, for code that picks a law at runtime.
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub enum ParametricModel {
            $($law($law)),+
        }

        impl ParametricModel {
            /// Name of the underlying law type.
            ///
            /// Gompertz is a [`Makeham`] with `c = 0`, so it reports `"Makeham"`; use
            /// [`ParametricModel::named_catalog`] for display labels.
            pub fn name(&self) -> &'static str {
                match self {
                    $(ParametricModel::$law(_) => stringify!($law)),+
                }
            }
        }

        impl ParametricMortality for ParametricModel {
            fn hazard(&self, age: f64) -> f64 {
                match self {
                    $(ParametricModel::$law(law) => law.hazard(age)),+
                }
            }

            fn cumhazard_with<I: Integrator>(&self, age: f64, integrator: &I) -> MortLawResult<f64> {
                match self {
                    $(ParametricModel::$law(law) => law.cumhazard_with(age, integrator)),+
                }
            }

            fn survivorship_with<I: Integrator>(&self, age: f64, integrator: &I) -> MortLawResult<f64> {
                match self {
                    $(ParametricModel::$law(law) => law.survivorship_with(age, integrator)),+
                }
            }
        }

        $(
            impl From<$law> for ParametricModel {
                fn from(law: $law) -> Self {
                    ParametricModel::$law(law)
                }
            }

            impl Default for $law {
                fn default() -> Self {
                    $law::builder().build()
                }
            }
        )+

        fn defaults() -> Vec<ParametricModel> {
            vec![$(ParametricModel::$law($law::default())),+]
        }
    };
}

parametric_models!(
    Makeham,
    InverseGompertz,
    Opperman,
    Thiele,
    Wittstein,
    Weibull,
    InverseWeibull,
    Perks,
    VanderMaen,
    VanderMaen2,
    StrehlerMildvan,
    Beard,
    MakehamBeard,
    Quadratic,
);

impl ParametricModel {
    /// Every bundled law at its default parameters, Gompertz included as a `Makeham`
    /// with `c = 0`.
    pub fn catalog() -> Vec<ParametricModel> {
        Self::named_catalog().into_iter().map(|(_, model)| model).collect()
    }

    /// [`catalog`](Self::catalog) with a display label per entry. Labels match
    /// [`name`](Self::name) except for Gompertz, labelled `"Gompertz"`.
    pub fn named_catalog() -> Vec<(&'static str, ParametricModel)> {
        let mut catalog: Vec<_> = defaults().into_iter().map(|m| (m.name(), m)).collect();
        catalog.insert(1, ("Gompertz", Gompertz().build().into()));
        catalog
    }
}

// ================================================
// UNIT TESTS
// ================================================
#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_models_are_thread_safe_values() {
        assert_send_sync::<ParametricModel>();
        assert_send_sync::<GaussKronrod>();
    }

    #[test]
    fn test_catalog_covers_every_law() {
        let catalog = ParametricModel::catalog();
        assert_eq!(catalog.len(), 15);
        assert_eq!(catalog[0].name(), "Makeham");
        // Gompertz is a Makeham without the age-independent term
        assert_eq!(catalog[1], ParametricModel::Makeham(Makeham { c: 0.0, ..Makeham::default() }));
        assert_eq!(catalog[14].name(), "Quadratic");
    }

    #[test]
    fn test_named_catalog_labels_are_unique() {
        let named = ParametricModel::named_catalog();
        assert_eq!(named.len(), 15);
        assert_eq!(named[1].0, "Gompertz");
        // The law type behind the Gompertz label is still Makeham
        assert_eq!(named[1].1.name(), "Makeham");

        let mut labels: Vec<&str> = named.iter().map(|(label, _)| *label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 15);

        let models: Vec<ParametricModel> = named.into_iter().map(|(_, m)| m).collect();
        assert_eq!(models, ParametricModel::catalog());
    }

    #[test]
    fn test_model_forwards_integrator() {
        let tight = GaussKronrod::builder().max_subintervals(1).build().unwrap();
        let thiele = ParametricModel::from(Thiele::default());
        assert!(matches!(
            thiele.survivorship_with(60.0, &tight),
            Err(crate::MortLawError::NonConvergence { .. })
        ));
        // Closed forms never call the integrator
        let makeham = ParametricModel::from(Makeham::default());
        assert_eq!(
            makeham.survivorship_with(60.0, &tight).unwrap(),
            makeham.survivorship(60.0).unwrap()
        );
    }

    #[test]
    fn test_model_delegates_to_law() {
        let law = Perks::default();
        let model = ParametricModel::from(law);
        for age in [0.0, 30.0, 65.0, 100.0] {
            assert_eq!(model.hazard(age), law.hazard(age));
            assert_eq!(model.force_of_mortality(age), law.hazard(age));
        }
        assert_abs_diff_eq!(
            model.survivorship(40.0).unwrap(),
            law.survivorship(40.0).unwrap(),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_hazards_is_lazy_and_ordered() {
        let law = Quadratic::default();
        let ages = vec![0.0, 1.0, 2.0];
        let hazards: Vec<f64> = law.hazards(ages.iter().copied()).collect();
        for (hazard, expected) in hazards.iter().zip([0.01, 1.02, 2.05]) {
            assert_abs_diff_eq!(*hazard, expected, epsilon = 1e-12);
        }
        // The model is untouched and can be reused
        assert_eq!(law.hazards(ages).count(), 3);
    }
}

//! # MortLaw Prelude
//!
//! Re-exports the laws, the derivation functions and the integrator so a single
//! `use` statement covers typical work.
//!
//! ## Example
//!
//! ```rust
//! # use mortlaw::prelude::*;
//! for (name, law) in ParametricModel::named_catalog() {
//!     let q = decrement().model(&law).from_age(60.0).to_age(70.0).call()?;
//!     println!("{name:>16}: ₁₀q₆₀ = {q:.6}");
//! }
//! # MortLawResult::Ok(())
//! ```

// Package Result and error types
pub use crate::{MortLawError, MortLawResult};

// Common interface and runtime-selectable model
pub use crate::models::{ParametricModel, ParametricMortality};

// Laws
pub use crate::models::classical::{Opperman, Thiele, Wittstein};
pub use crate::models::gompertz_family::{Gompertz, InverseGompertz, Makeham, StrehlerMildvan};
pub use crate::models::logistic::{Beard, MakehamBeard, Perks};
pub use crate::models::polynomial::{Quadratic, VanderMaen, VanderMaen2};
pub use crate::models::weibull_family::{InverseWeibull, Weibull};

// Derived functions
pub use crate::derivations::*;
pub use crate::life_table::life_table;

// Numerical integration
pub use crate::quadrature::{Estimate, GaussKronrod, Integrator};

// Polars frame type returned by `life_table`
pub use polars::prelude::{DataFrame, PolarsError, Series};

//! # MortLaw
//!
//! Parametric mortality laws for actuarial and demographic work: closed-form models of
//! the force of mortality and the survival functions derived from them.
//!
//! ## Features
//! - **15 Laws**: Makeham, Gompertz, Inverse Gompertz, Opperman, Thiele, Wittstein, Weibull,
//!   Inverse Weibull, Perks, Van der Maen (two forms), Strehler-Mildvan, Beard,
//!   Makeham-Beard and Quadratic
//! - **Closed Forms First**: Analytic cumulative hazard / survivorship where one exists,
//!   adaptive Gauss-Kronrod integration of the hazard otherwise
//! - **Builder Pattern**: Every parameter is optional and defaults to the standard value
//! - **Tables**: Tabulate any law over an age grid into a Polars `DataFrame`
//! - **Pure Values**: Laws are immutable `Copy` structs, safe to share across threads
//!
//! ## Quick Start
//!
//! ```rust
//! use mortlaw::prelude::*;
//!
//! let law = Makeham::builder().a(0.0002).b(0.13).c(0.001).build();
//!
//! let mu_50 = law.hazard(50.0);
//! let s_50 = survivorship().model(&law).to_age(50.0).call()?;
//! let q_50_60 = decrement().model(&law).from_age(50.0).to_age(60.0).call()?;
//!
//! println!("μ₅₀: {:.6}", mu_50);
//! println!("S(50): {:.6}", s_50);
//! println!("₁₀q₅₀: {:.6}", q_50_60);
//! # MortLawResult::Ok(())
//! ```
//!
//! ## Supported Functions
//!
//! - **Law methods**: `hazard`, `force_of_mortality`, `cumhazard`, `survivorship`, `hazards`
//! - **Derivations**: `force_of_mortality`, `cumhazard`, `survivorship`, `decrement`
//!   (one-age and conditional two-age forms)
//! - **Numerical path**: `integrated_cumhazard`, `integrated_survivorship` with any [`quadrature::Integrator`]
//! - **Tabulation**: `life_table`
//!
//! ## Notes
//! - Parameters are never validated; out-of-domain inputs give NaN or infinite values
//! - Only numerical integration can fail, see [`MortLawError`]

pub mod derivations;
pub mod error;
pub mod life_table;
pub mod models;
pub mod prelude;
pub mod quadrature;

pub use crate::error::MortLawError;

pub type MortLawResult<T> = Result<T, MortLawError>;

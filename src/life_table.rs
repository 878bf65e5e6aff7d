//! # Tabulated Mortality Functions
//!
//! Evaluate a law over a grid of ages into a Polars [`DataFrame`], one row per age:
//!
//! | column | value |
//! |---|---|
//! | `age` | x |
//! | `hazard` | μₓ |
//! | `cumhazard` | Hₓ |
//! | `survivorship` | S(x) |
//! | `decrement` | 1 - S(x) |
//!
//! ```rust
//! # use mortlaw::prelude::*;
//! let ages: Vec<f64> = (0..=100).step_by(10).map(f64::from).collect();
//! let table = life_table().model(&Makeham::default()).ages(&ages).call()?;
//! assert_eq!(table.height(), 11);
//! println!("{table}");
//! # MortLawResult::Ok(())
//! ```

use crate::MortLawResult;
use crate::models::ParametricMortality;
use crate::quadrature::GaussKronrod;
use bon::builder;
use polars::prelude::*;

/// Tabulate hazard, cumulative hazard, survivorship and decrement of `model` at `ages`.
///
/// Laws without a closed form are integrated with `integrator` (default
/// [`GaussKronrod`]). Fails with the first derivation error, e.g. a non-converging
/// integration.
#[builder]
pub fn life_table<M: ParametricMortality>(
    model: &M,
    ages: &[f64],
    #[builder(default)] integrator: GaussKronrod,
) -> MortLawResult<DataFrame> {
    let hazard: Vec<f64> = model.hazards(ages.iter().copied()).collect();

    let cumhazard = ages
        .iter()
        .map(|&age| model.cumhazard_with(age, &integrator))
        .collect::<MortLawResult<Vec<f64>>>()?;

    let survivorship = ages
        .iter()
        .map(|&age| model.survivorship_with(age, &integrator))
        .collect::<MortLawResult<Vec<f64>>>()?;

    let df = DataFrame::new(vec![
        Series::new("age".into(), ages).into_column(),
        Series::new("hazard".into(), hazard).into_column(),
        Series::new("cumhazard".into(), cumhazard).into_column(),
        Series::new("survivorship".into(), survivorship).into_column(),
    ])?;

    // qₓ = 1 - S(x)
    let df = df
        .lazy()
        .with_column((lit(1.0) - col("survivorship")).alias("decrement"))
        .collect()?;

    Ok(df)
}

// ================================================
// UNIT TESTS
// ================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::MortLawError;
    use crate::models::classical::{Thiele, Wittstein};
    use crate::models::gompertz_family::Makeham;
    use crate::models::logistic::Perks;
    use approx::assert_abs_diff_eq;

    fn column(df: &DataFrame, name: &str) -> Vec<f64> {
        df.column(name)
            .unwrap()
            .f64()
            .unwrap()
            .into_no_null_iter()
            .collect()
    }

    #[test]
    fn test_life_table_columns() {
        let law = Makeham::default();
        let ages = [0.0, 50.0, 100.0];
        let df = life_table().model(&law).ages(&ages).call().unwrap();

        assert_eq!(
            df.get_column_names(),
            vec!["age", "hazard", "cumhazard", "survivorship", "decrement"]
        );
        assert_eq!(df.height(), 3);
        assert_eq!(column(&df, "age"), ages.to_vec());
    }

    #[test]
    fn test_life_table_values() {
        let law = Perks::default();
        let ages = [0.0, 20.0, 65.0];
        let df = life_table().model(&law).ages(&ages).call().unwrap();

        let hazard = column(&df, "hazard");
        let cumhazard = column(&df, "cumhazard");
        let survivorship = column(&df, "survivorship");
        let decrement = column(&df, "decrement");

        for (i, &age) in ages.iter().enumerate() {
            assert_eq!(hazard[i], law.hazard(age));
            assert_abs_diff_eq!(cumhazard[i], law.cumhazard(age).unwrap(), epsilon = 1e-15);
            assert_abs_diff_eq!(survivorship[i], (-cumhazard[i]).exp(), epsilon = 1e-15);
            assert_eq!(decrement[i], 1.0 - survivorship[i]);
        }
    }

    #[test]
    fn test_life_table_empty_grid() {
        let df = life_table().model(&Makeham::default()).ages(&[]).call().unwrap();
        assert_eq!(df.height(), 0);
    }

    #[test]
    fn test_life_table_uses_given_integrator() {
        let tight = GaussKronrod::builder().max_subintervals(1).build().unwrap();
        let err = life_table()
            .model(&Thiele::default())
            .ages(&[0.0, 60.0])
            .integrator(tight)
            .call()
            .unwrap_err();
        assert!(matches!(err, MortLawError::NonConvergence { .. }));
    }

    #[test]
    fn test_life_table_propagates_integration_error() {
        // Hazard is NaN past the maximum age m = 100
        let err = life_table()
            .model(&Wittstein::default())
            .ages(&[50.0, 110.0])
            .call()
            .unwrap_err();
        assert!(matches!(err, MortLawError::NonFiniteIntegrand { .. }));
    }
}

//! # MortLaw Basic Usage Example
//!
//! Builds a few parametric laws, derives survival functions from them and
//! tabulates one over an age grid.

use mortlaw::prelude::*;

fn main() -> MortLawResult<()> {
    println!("MortLaw Basic Usage Example");
    println!("===========================");
    println!();

    // Laws are built with named parameters; omitted ones take their defaults
    let makeham = Makeham::builder().a(0.0002).b(0.13).c(0.001).build();
    let gompertz = Gompertz().a(0.0002).b(0.13).build();
    let thiele = Thiele::default();

    println!("=== Force of mortality at age 50 ===");
    println!("  Makeham:  {:.6}", makeham.hazard(50.0));
    println!("  Gompertz: {:.6}", gompertz.hazard(50.0));
    println!("  Thiele:   {:.6}", force_of_mortality().model(&thiele).age(50.0).call());

    // Makeham has a closed-form cumulative hazard, Thiele is integrated numerically
    println!("\n=== Survival from birth to 65 ===");
    let s_makeham = survivorship().model(&makeham).to_age(65.0).call()?;
    let s_thiele = survivorship().model(&thiele).to_age(65.0).call()?;
    println!("  Makeham S(65): {s_makeham:.6}");
    println!("  Thiele  S(65): {s_thiele:.6}");

    println!("\n=== Conditional probabilities between 45 and 65 ===");
    let p = survivorship().model(&makeham).from_age(45.0).to_age(65.0).call()?;
    let q = decrement().model(&makeham).from_age(45.0).to_age(65.0).call()?;
    println!("  ₂₀p₄₅: {p:.6}");
    println!("  ₂₀q₄₅: {q:.6}");
    println!("  Sum (should be 1.0): {:.6}", p + q);

    // Cross-check the closed form against a tighter numerical integration
    let gk = GaussKronrod::builder().rel_tol(1e-12).build()?;
    let integrated = integrated_survivorship(&makeham, 65.0, &gk)?;
    println!("\n=== Closed form vs integrated hazard ===");
    println!("  |Δ S(65)|: {:.3e}", (integrated - s_makeham).abs());

    println!("\n=== Every law in the catalog, ₁₀q₆₀ ===");
    for (name, law) in ParametricModel::named_catalog() {
        let q = decrement().model(&law).from_age(60.0).to_age(70.0).call()?;
        println!("  {name:>16}: {q:.6}");
    }

    println!("\n=== Makeham life table ===");
    let ages: Vec<f64> = (0..=100).step_by(10).map(f64::from).collect();
    let table = life_table().model(&makeham).ages(&ages).call()?;
    println!("{table}");

    Ok(())
}

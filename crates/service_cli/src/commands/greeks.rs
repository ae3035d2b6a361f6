//! Greeks command implementation
//!
//! Estimates Delta, Gamma and Theta by bump-and-revalue.

use pricer_mc::analytical::{
    black_scholes_delta, black_scholes_gamma, black_scholes_maturity_sensitivity,
    black_scholes_price,
};
use pricer_mc::greeks::{GreeksConfig, GreeksEstimator, GreeksResult};
use pricer_mc::mc::{GbmParams, MonteCarloPricer, PayoffParams, PricingError};
use serde::Serialize;
use tracing::{info, warn};

use super::{row, OutputFormat, TABLE_BOTTOM, TABLE_RULE, TABLE_TOP};
use crate::config::{OptionSection, RunConfig, SimulationSection};
use crate::Result;

/// Closed-form values matching the estimated quantities.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ClosedForm {
    pub price: f64,
    pub delta: f64,
    pub gamma: f64,
    /// ∂V/∂T, the quantity the maturity difference estimates.
    pub theta: f64,
}

/// Everything the greeks command reports.
#[derive(Debug, Clone, Serialize)]
pub struct GreeksReport {
    pub option: OptionSection,
    pub simulation: SimulationSection,
    pub greeks: GreeksResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub black_scholes: Option<ClosedForm>,
}

fn closed_form(
    gbm: &GbmParams,
    payoff: &PayoffParams,
) -> std::result::Result<ClosedForm, PricingError> {
    Ok(ClosedForm {
        price: black_scholes_price(gbm, payoff)?,
        delta: black_scholes_delta(gbm, payoff)?,
        gamma: black_scholes_gamma(gbm, payoff)?,
        theta: black_scholes_maturity_sensitivity(gbm, payoff)?,
    })
}

/// Estimate the Greeks of the configured option.
pub fn compute(config: &RunConfig, compare: bool) -> Result<GreeksReport> {
    let gbm = config.gbm();
    let payoff = config.payoff();

    let pricer = MonteCarloPricer::new(config.mc_config()?)?;
    let mut estimator = GreeksEstimator::new(pricer, GreeksConfig::default())?;
    let greeks = estimator.estimate(gbm, payoff)?;

    let black_scholes = if compare {
        match closed_form(&gbm, &payoff) {
            Ok(reference) => Some(reference),
            Err(e) => {
                warn!(error = %e, "Black-Scholes reference unavailable");
                None
            }
        }
    } else {
        None
    };

    Ok(GreeksReport {
        option: config.option,
        simulation: config.simulation,
        greeks,
        black_scholes,
    })
}

/// Render a report as a table.
pub fn render_table(report: &GreeksReport) -> String {
    let g = &report.greeks;
    let mut out = String::from(TABLE_TOP);
    out += &row("Option", format!("{} K={}", report.option.kind, report.option.strike));
    out += &row("Paths x steps", format!("{} x {}", report.simulation.paths, report.simulation.steps));
    out += &row("Seed", report.simulation.seed);
    out += TABLE_RULE;
    out += &row("Price", format!("{:.6}", g.price));
    out += &row("Std error", format!("{:.6}", g.std_error));
    out += &row("Delta", format!("{:.6}", g.delta));
    out += &row("Gamma", format!("{:.6}", g.gamma));
    out += &row("Theta", format!("{:.6}", g.theta));
    if let Some(bs) = &report.black_scholes {
        out += TABLE_RULE;
        out += &row("BS price", format!("{:.6}", bs.price));
        out += &row("BS delta", format!("{:.6}", bs.delta));
        out += &row("BS gamma", format!("{:.6}", bs.gamma));
        out += &row("BS dV/dT", format!("{:.6}", bs.theta));
    }
    out += TABLE_BOTTOM;
    out
}

/// Run the greeks command
pub fn run(config: &RunConfig, format: OutputFormat, compare: bool) -> Result<()> {
    info!(
        kind = %config.option.kind,
        paths = config.simulation.paths,
        steps = config.simulation.steps,
        seed = config.simulation.seed,
        "Starting Greeks estimation"
    );

    let report = compute(config, compare)?;

    match format {
        OutputFormat::Table => print!("{}", render_table(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    info!(
        delta = report.greeks.delta,
        gamma = report.greeks.gamma,
        theta = report.greeks.theta,
        "Greeks complete"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_put_greeks() {
        let report = compute(&RunConfig::default(), false).unwrap();
        let g = report.greeks;
        assert_relative_eq!(g.price, 5.572_847_944_183_94, max_relative = 1e-10);
        assert_relative_eq!(g.delta, -0.409_113_022_019_576, max_relative = 1e-8);
        assert_relative_eq!(g.theta, -51.713_256_785_355_45, max_relative = 1e-8);
    }

    #[test]
    fn test_compare_table_and_json() {
        let mut config = RunConfig::default();
        config.simulation.paths = 100;
        config.simulation.steps = 4;

        let report = compute(&config, true).unwrap();
        let bs = report.black_scholes.unwrap();
        assert_relative_eq!(bs.delta, -0.363_169_349, epsilon = 1e-6);

        let table = render_table(&report);
        assert!(table.contains("Delta"));
        assert!(table.contains("BS gamma"));

        let value = serde_json::to_value(&report).unwrap();
        assert!(value["greeks"]["theta"].is_number());
        assert!(value["black_scholes"]["gamma"].is_number());
    }

    #[test]
    fn test_compare_with_zero_volatility_keeps_estimate() {
        let mut config = RunConfig::default();
        config.option.volatility = 0.0;
        config.simulation.paths = 10;
        config.simulation.steps = 2;

        let report = compute(&config, true).unwrap();
        assert!(report.greeks.is_finite());
        assert!(report.black_scholes.is_none());
        assert!(!render_table(&report).contains("BS price"));
    }

    #[test]
    fn test_maturity_shorter_than_bump_is_rejected() {
        let mut config = RunConfig::default();
        config.option.maturity = 0.001;
        config.simulation.paths = 10;
        assert!(compute(&config, false).is_err());
    }
}

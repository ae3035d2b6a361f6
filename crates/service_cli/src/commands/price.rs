//! Price command implementation
//!
//! Runs one Monte Carlo pricing of the configured option.

use pricer_mc::analytical::black_scholes_price;
use pricer_mc::mc::{MonteCarloPricer, PricingResult};
use serde::Serialize;
use tracing::{info, warn};

use super::{row, OutputFormat, TABLE_BOTTOM, TABLE_RULE, TABLE_TOP};
use crate::config::{OptionSection, RunConfig, SimulationSection};
use crate::Result;

/// Everything the price command reports.
#[derive(Debug, Clone, Serialize)]
pub struct PriceReport {
    pub option: OptionSection,
    pub simulation: SimulationSection,
    pub result: PricingResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub black_scholes: Option<f64>,
}

/// Price the configured option, optionally alongside its closed form.
pub fn compute(config: &RunConfig, compare: bool) -> Result<PriceReport> {
    let gbm = config.gbm();
    let payoff = config.payoff();

    let mut pricer = MonteCarloPricer::new(config.mc_config()?)?;
    let result = pricer.price_european(gbm, payoff)?;

    // Zero volatility has no closed form; the estimate is still reported
    let black_scholes = if compare {
        match black_scholes_price(&gbm, &payoff) {
            Ok(reference) => Some(reference),
            Err(e) => {
                warn!(error = %e, "Black-Scholes reference unavailable");
                None
            }
        }
    } else {
        None
    };

    Ok(PriceReport {
        option: config.option,
        simulation: config.simulation,
        result,
        black_scholes,
    })
}

/// Render a report as a table.
pub fn render_table(report: &PriceReport) -> String {
    let mut out = String::from(TABLE_TOP);
    out += &row("Option", format!("{} K={}", report.option.kind, report.option.strike));
    out += &row("Paths x steps", format!("{} x {}", report.simulation.paths, report.simulation.steps));
    out += &row("Seed", report.simulation.seed);
    out += TABLE_RULE;
    out += &row("Price", format!("{:.6}", report.result.price));
    out += &row("Std error", format!("{:.6}", report.result.std_error));
    out += &row("95% half-width", format!("{:.6}", report.result.confidence_95()));
    if let Some(reference) = report.black_scholes {
        out += &row("Black-Scholes", format!("{:.6}", reference));
        out += &row("Difference", format!("{:+.6}", report.result.price - reference));
    }
    out += TABLE_BOTTOM;
    out
}

/// Run the price command
pub fn run(config: &RunConfig, format: OutputFormat, compare: bool) -> Result<()> {
    info!(
        kind = %config.option.kind,
        paths = config.simulation.paths,
        steps = config.simulation.steps,
        seed = config.simulation.seed,
        "Starting pricing"
    );

    let report = compute(config, compare)?;

    match format {
        OutputFormat::Table => print!("{}", render_table(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    info!(price = report.result.price, "Pricing complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_mc::mc::PayoffType;

    fn small_config() -> RunConfig {
        let mut config = RunConfig::default();
        config.simulation.paths = 200;
        config.simulation.steps = 4;
        config
    }

    #[test]
    fn test_reference_put() {
        let report = compute(&RunConfig::default(), false).unwrap();
        assert_relative_eq!(report.result.price, 5.572_847_944_183_94, max_relative = 1e-10);
        assert!(report.black_scholes.is_none());
    }

    #[test]
    fn test_compare_adds_closed_form() {
        let mut config = small_config();
        config.option.kind = PayoffType::Call;
        let report = compute(&config, true).unwrap();
        assert_relative_eq!(report.black_scholes.unwrap(), 10.450_583_572, epsilon = 1e-5);

        let table = render_table(&report);
        assert!(table.contains("Black-Scholes"));
        assert!(table.contains("call K=100"));
    }

    #[test]
    fn test_compare_with_zero_volatility_keeps_estimate() {
        let mut config = small_config();
        config.option.volatility = 0.0;
        config.simulation.paths = 10;
        config.simulation.steps = 2;

        let report = compute(&config, true).unwrap();
        // ATM put under deterministic growth expires worthless
        assert_eq!(report.result.price, 0.0);
        assert!(report.black_scholes.is_none());
        assert!(!render_table(&report).contains("Black-Scholes"));
    }

    #[test]
    fn test_json_shape() {
        let report = compute(&small_config(), false).unwrap();
        let value: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["option"]["kind"], "put");
        assert_eq!(value["result"]["n_paths"], 200);
        assert!(value.get("black_scholes").is_none());
    }

    #[test]
    fn test_invalid_market_is_reported() {
        let mut config = small_config();
        config.option.spot = -1.0;
        assert!(matches!(
            compute(&config, false),
            Err(crate::CliError::Pricing(_))
        ));
    }
}

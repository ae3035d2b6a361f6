//! Tests for finite-difference Greeks.

use super::*;
use crate::mc::{GbmParams, MonteCarloConfig, MonteCarloPricer, PayoffParams, PricingError};
use crate::rng::PricerRng;
use approx::assert_relative_eq;

fn reference_pricer() -> MonteCarloPricer {
    let config = MonteCarloConfig::builder()
        .n_paths(10_000)
        .n_steps(252)
        .build()
        .unwrap();
    MonteCarloPricer::new(config).unwrap()
}

fn small_pricer(seed: u32) -> MonteCarloPricer {
    let config = MonteCarloConfig::builder()
        .n_paths(200)
        .n_steps(8)
        .seed(seed)
        .build()
        .unwrap();
    MonteCarloPricer::new(config).unwrap()
}

// =============================================================================
// GreeksResult
// =============================================================================

mod greeks_result_tests {
    use super::*;

    #[test]
    fn test_greeks_result_default() {
        let result = GreeksResult::default();
        assert_eq!(result.price, 0.0);
        assert_eq!(result.std_error, 0.0);
        assert_eq!(result.delta, 0.0);
        assert_eq!(result.gamma, 0.0);
        assert_eq!(result.theta, 0.0);
        assert!(result.is_finite());
    }

    #[test]
    fn test_greeks_result_confidence_95() {
        let result = GreeksResult {
            price: 10.0,
            std_error: 0.1,
            ..Default::default()
        };
        assert_relative_eq!(result.confidence_95(), 0.196, epsilon = 1e-10);
    }

    #[test]
    fn test_greeks_result_is_finite() {
        let result = GreeksResult {
            gamma: f64::NAN,
            ..Default::default()
        };
        assert!(!result.is_finite());

        let result = GreeksResult {
            theta: f64::NEG_INFINITY,
            ..Default::default()
        };
        assert!(!result.is_finite());
    }
}

// =============================================================================
// GreeksConfig
// =============================================================================

mod greeks_config_tests {
    use super::*;

    #[test]
    fn test_greeks_config_default() {
        let config = GreeksConfig::default();
        assert_eq!(config.spot_bump_relative, 0.01);
        assert_eq!(config.time_bump_years, 1.0 / 365.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_greeks_config_builder() {
        let config = GreeksConfig::builder()
            .spot_bump_relative(0.005)
            .time_bump_days(7.0)
            .build()
            .unwrap();
        assert_eq!(config.spot_bump_relative, 0.005);
        assert_relative_eq!(config.time_bump_years, 7.0 / 365.0, epsilon = 1e-15);

        let config = GreeksConfig::builder().time_bump_years(0.25).build().unwrap();
        assert_eq!(config.time_bump_years, 0.25);
    }

    #[test]
    fn test_greeks_config_rejects_bad_bumps() {
        for bump in [0.0, -0.01, 1.0, 1.5, f64::NAN, f64::INFINITY] {
            let result = GreeksConfig::builder().spot_bump_relative(bump).build();
            assert!(
                matches!(
                    result,
                    Err(PricingError::InvalidParameter {
                        name: "spot_bump_relative",
                        ..
                    })
                ),
                "bump {bump} accepted"
            );
        }

        for bump in [0.0, -1.0, f64::NAN] {
            let result = GreeksConfig::builder().time_bump_years(bump).build();
            assert!(matches!(
                result,
                Err(PricingError::InvalidParameter {
                    name: "time_bump_years",
                    ..
                })
            ));
        }
    }
}

// =============================================================================
// GreeksEstimator
// =============================================================================

mod estimator_tests {
    use super::*;

    #[test]
    fn test_estimator_rejects_invalid_config() {
        let config = GreeksConfig {
            spot_bump_relative: 0.0,
            ..Default::default()
        };
        assert!(GreeksEstimator::new(reference_pricer(), config).is_err());
    }

    #[test]
    fn test_reference_put_greeks() {
        let mut estimator =
            GreeksEstimator::new(reference_pricer(), GreeksConfig::default()).unwrap();
        let greeks = estimator
            .estimate(GbmParams::default(), PayoffParams::put(100.0))
            .unwrap();

        assert_relative_eq!(greeks.price, 5.572_847_944_183_94, max_relative = 1e-10);
        assert_relative_eq!(greeks.std_error, 0.085_858_400_783_3, max_relative = 1e-6);
        assert_relative_eq!(greeks.delta, -0.409_113_022_019_576, max_relative = 1e-8);
        assert_relative_eq!(greeks.gamma, -0.011_705_838_882_321, max_relative = 1e-6);
        assert_relative_eq!(greeks.theta, -51.713_256_785_355_45, max_relative = 1e-8);
    }

    #[test]
    fn test_reference_call_greeks() {
        let mut estimator =
            GreeksEstimator::new(reference_pricer(), GreeksConfig::default()).unwrap();
        let greeks = estimator
            .estimate(GbmParams::default(), PayoffParams::call(100.0))
            .unwrap();

        assert_relative_eq!(greeks.price, 10.351_249_887_288_12, max_relative = 1e-10);
        assert_relative_eq!(greeks.delta, 0.646_091_782_228_023, max_relative = 1e-8);
        assert_relative_eq!(greeks.gamma, 0.444_730_165_073_128, max_relative = 1e-6);
        assert_relative_eq!(greeks.theta, -49.232_884_691_462_55, max_relative = 1e-8);
    }

    #[test]
    fn test_put_greeks_signs_and_bands() {
        let mut estimator =
            GreeksEstimator::new(reference_pricer(), GreeksConfig::default()).unwrap();
        let greeks = estimator
            .estimate(GbmParams::default(), PayoffParams::put(100.0))
            .unwrap();

        // Analytical put delta is about -0.36; the independent bumps add
        // noise of order 0.06 at this path count.
        assert!((greeks.delta - (-0.46)).abs() < 0.1);
        assert!(greeks.delta < 0.0);
        assert!(greeks.theta < 0.0);
        assert!(greeks.is_finite());
    }

    #[test]
    fn test_base_price_matches_plain_pricing() {
        let gbm = GbmParams::default();
        let payoff = PayoffParams::put(105.0);

        let mut plain = small_pricer(3);
        let expected = plain.price_european(gbm, payoff).unwrap();

        let mut estimator = GreeksEstimator::new(small_pricer(3), GreeksConfig::default()).unwrap();
        let greeks = estimator.estimate(gbm, payoff).unwrap();

        assert_eq!(greeks.price, expected.price);
        assert_eq!(greeks.std_error, expected.std_error);
    }

    #[test]
    fn test_scenarios_follow_fixed_order() {
        let gbm = GbmParams::new(80.0, 0.03, 0.25, 0.5);
        let payoff = PayoffParams::call(85.0);
        let config = GreeksConfig::default();
        let d_spot = config.spot_bump_relative * gbm.spot;
        let d_time = config.time_bump_years;

        let mut manual = small_pricer(11);
        let base = manual.price_european(gbm, payoff).unwrap().price;
        let up = manual.price_european(gbm.with_spot(gbm.spot + d_spot), payoff).unwrap().price;
        let down = manual.price_european(gbm.with_spot(gbm.spot - d_spot), payoff).unwrap().price;
        let next = manual
            .price_european(gbm.with_maturity(gbm.maturity - d_time), payoff)
            .unwrap()
            .price;

        let mut estimator = GreeksEstimator::new(small_pricer(11), config).unwrap();
        let greeks = estimator.estimate(gbm, payoff).unwrap();

        assert_eq!(greeks.price, base);
        assert_eq!(greeks.delta, (up - down) / (2.0 * d_spot));
        assert_eq!(greeks.gamma, (up - 2.0 * base + down) / (d_spot * d_spot));
        assert_eq!(greeks.theta, -(next - base) / d_time);

        // Both streams end at the same position.
        let mut after_estimate = estimator.into_pricer().rng().clone();
        let mut after_manual = manual.rng().clone();
        assert_eq!(after_estimate.gen_u32(), after_manual.gen_u32());
    }

    #[test]
    fn test_zero_volatility_call_greeks() {
        // Deep in the money with no diffusion: V = S - K e^{-rT}, so the
        // maturity difference recovers rK e^{-rT}.
        let gbm = GbmParams::new(100.0, 0.05, 0.0, 1.0);
        let mut estimator = GreeksEstimator::new(small_pricer(1), GreeksConfig::default()).unwrap();
        let greeks = estimator.estimate(gbm, PayoffParams::call(50.0)).unwrap();

        assert_relative_eq!(greeks.delta, 1.0, epsilon = 1e-9);
        assert!(greeks.gamma.abs() < 1e-6);
        let expected_theta = 0.05 * 50.0 * (-0.05_f64).exp();
        assert_relative_eq!(greeks.theta, expected_theta, max_relative = 1e-3);
    }

    #[test]
    fn test_short_maturity_rejected_before_drawing() {
        let mut estimator = GreeksEstimator::new(small_pricer(5), GreeksConfig::default()).unwrap();
        let gbm = GbmParams::default().with_maturity(0.5 / 365.0);

        let result = estimator.estimate(gbm, PayoffParams::call(100.0));
        assert!(matches!(
            result,
            Err(PricingError::InvalidParameter {
                name: "maturity",
                ..
            })
        ));

        let mut untouched = estimator.pricer().rng().clone();
        let mut fresh = PricerRng::from_seed(5);
        assert_eq!(untouched.gen_u32(), fresh.gen_u32());
    }

    #[test]
    fn test_maturity_equal_to_bump_rejected() {
        let mut estimator = GreeksEstimator::new(small_pricer(5), GreeksConfig::default()).unwrap();
        let gbm = GbmParams::default().with_maturity(1.0 / 365.0);
        assert!(estimator.estimate(gbm, PayoffParams::put(100.0)).is_err());
    }

    #[test]
    fn test_invalid_market_rejected() {
        let mut estimator = GreeksEstimator::new(small_pricer(5), GreeksConfig::default()).unwrap();
        let gbm = GbmParams::default().with_spot(0.0);
        assert!(matches!(
            estimator.estimate(gbm, PayoffParams::put(100.0)),
            Err(PricingError::InvalidParameter { name: "spot", .. })
        ));
    }

    #[test]
    fn test_overflowing_spot_bump_rejected_before_drawing() {
        let mut estimator = GreeksEstimator::new(small_pricer(5), GreeksConfig::default()).unwrap();
        // Valid spot whose up-bump overflows to infinity
        let gbm = GbmParams::new(f64::MAX, 0.05, 0.2, 1.0);
        assert!(gbm.validate().is_ok());

        assert!(matches!(
            estimator.estimate(gbm, PayoffParams::put(100.0)),
            Err(PricingError::InvalidParameter { name: "spot", .. })
        ));

        let mut untouched = estimator.pricer().rng().clone();
        let mut fresh = PricerRng::from_seed(5);
        for _ in 0..4 {
            assert_eq!(untouched.gen_u32(), fresh.gen_u32());
        }
    }

    #[test]
    fn test_accessors() {
        let config = GreeksConfig::builder().spot_bump_relative(0.02).build().unwrap();
        let estimator = GreeksEstimator::new(small_pricer(8), config).unwrap();
        assert_eq!(estimator.config().spot_bump_relative, 0.02);
        assert_eq!(estimator.pricer().config().n_paths(), 200);
        assert_eq!(estimator.into_pricer().rng().seed(), 8);
    }
}

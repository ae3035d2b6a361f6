//! Greeks calculation result type.

/// Price and finite-difference sensitivities of one option.
///
/// - `delta`: ∂V/∂S, central difference
/// - `gamma`: ∂²V/∂S², second central difference
/// - `theta`: `-(V(T - dT) - V(T)) / dT`, forward difference in maturity
///
/// The four underlying prices come from independent stretches of the
/// random stream, so each sensitivity carries the sampling noise of its
/// prices divided by the bump size. With small bumps this noise can
/// dominate the true sensitivity, gamma and theta especially.
///
/// # Examples
///
/// ```rust
/// use pricer_mc::greeks::GreeksResult;
///
/// let result = GreeksResult {
///     price: 5.57,
///     std_error: 0.086,
///     delta: -0.41,
///     gamma: 0.02,
///     theta: -1.8,
/// };
///
/// println!("Price: {} ± {}", result.price, result.confidence_95());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreeksResult {
    /// Present value of the instrument.
    pub price: f64,
    /// Standard error of the unbumped price estimate.
    pub std_error: f64,
    /// Delta: ∂V/∂S (sensitivity to spot price).
    pub delta: f64,
    /// Gamma: ∂²V/∂S² (convexity with respect to spot).
    pub gamma: f64,
    /// Theta: time decay as maturity shortens.
    pub theta: f64,
}

impl GreeksResult {
    /// Returns the 95% confidence interval half-width of the price.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns `true` if every field is finite.
    pub fn is_finite(&self) -> bool {
        self.price.is_finite()
            && self.std_error.is_finite()
            && self.delta.is_finite()
            && self.gamma.is_finite()
            && self.theta.is_finite()
    }
}

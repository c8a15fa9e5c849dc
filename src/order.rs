//! ARIMA order identification from correlogram confidence bands.
//!
//! Encodes the standard reading of ACF/PACF plots: the candidate order
//! is the last lag whose coefficient falls outside its confidence band.
//! The PACF gives the AR order `p`, the ACF gives the MA order `q`.

use crate::correlogram::{acf_profile, pacf_profile, CoefficientProfile};
use crate::error::Result;
use tracing::debug;

/// Configuration for order estimation.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSelectionConfig {
    /// Highest lag to examine.
    pub max_lag: usize,
    /// Significance level for the confidence band.
    pub alpha: f64,
}

impl Default for OrderSelectionConfig {
    fn default() -> Self {
        Self {
            max_lag: 20,
            alpha: 0.05,
        }
    }
}

impl OrderSelectionConfig {
    /// Set the highest lag to examine.
    pub fn with_max_lag(mut self, max_lag: usize) -> Self {
        self.max_lag = max_lag;
        self
    }

    /// Set the significance level.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }
}

/// Result of an order estimation.
///
/// `order` of 0 is a sentinel for "no significant lag within the
/// search horizon", not evidence of a true zero-order process;
/// [`OrderEstimate::any_significant`] disambiguates the two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderEstimate {
    /// Suggested order: the last significant lag, or 0.
    pub order: usize,
    /// All significant lags in ascending order.
    pub significant_lags: Vec<usize>,
}

impl OrderEstimate {
    /// Whether any lag was significant at all.
    pub fn any_significant(&self) -> bool {
        !self.significant_lags.is_empty()
    }
}

/// Find the last lag whose coefficient lies strictly outside its
/// confidence band.
///
/// Lags `1..=max_lag` are tested; lag 0 is excluded by construction.
/// A coefficient exactly on a band edge is not significant, and a NaN
/// coefficient never is. When several lags are significant the highest
/// one wins: significance near the search boundary says more about the
/// true order than an isolated early spike.
pub fn last_significant_lag(profile: &CoefficientProfile) -> OrderEstimate {
    let coefficients = profile.coefficients();
    let lower = profile.lower();
    let upper = profile.upper();

    let significant_lags: Vec<usize> = (1..=profile.max_lag())
        .filter(|&i| coefficients[i] < lower[i] || coefficients[i] > upper[i])
        .collect();

    let order = significant_lags.last().copied().unwrap_or(0);

    if significant_lags.is_empty() {
        debug!(
            max_lag = profile.max_lag(),
            "no significant lag within the search horizon, suggesting order 0"
        );
    } else {
        debug!(
            order,
            lags = ?significant_lags,
            "selected last significant lag"
        );
    }

    OrderEstimate {
        order,
        significant_lags,
    }
}

/// Estimate the AR order `p` from the partial autocorrelation of a
/// stationary series.
///
/// Validation and insufficient-data errors from the PACF estimator
/// propagate unchanged.
pub fn estimate_ar_order(series: &[f64], config: &OrderSelectionConfig) -> Result<OrderEstimate> {
    let profile = pacf_profile(series, config.max_lag, config.alpha)?;
    let estimate = last_significant_lag(&profile);
    debug!(p = estimate.order, "estimated AR order from PACF");
    Ok(estimate)
}

/// Estimate the MA order `q` from the autocorrelation of a stationary
/// series.
///
/// Identical to [`estimate_ar_order`] except that the coefficients come
/// from the ACF.
pub fn estimate_ma_order(series: &[f64], config: &OrderSelectionConfig) -> Result<OrderEstimate> {
    let profile = acf_profile(series, config.max_lag, config.alpha)?;
    let estimate = last_significant_lag(&profile);
    debug!(q = estimate.order, "estimated MA order from ACF");
    Ok(estimate)
}

//! Sample autocorrelation and partial autocorrelation estimation.
//!
//! Produces correlogram coefficients together with the per-lag
//! confidence band used for ARIMA order identification.

use crate::error::{AnalysisError, Result};
use crate::stats::mean;
use statrs::distribution::{ContinuousCDF, Normal};

/// Correlogram coefficients for lags `0..=max_lag` with the per-lag
/// confidence band at level `1 - alpha`.
///
/// The band is centered at zero: a coefficient inside
/// `[lower[i], upper[i]]` is statistically indistinguishable from zero
/// at the chosen significance level. Index 0 holds the lag-0
/// coefficient (1.0 for a non-degenerate series) with a degenerate
/// band; it is never tested for significance.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientProfile {
    coefficients: Vec<f64>,
    lower: Vec<f64>,
    upper: Vec<f64>,
}

impl CoefficientProfile {
    /// Build a profile from raw parts, validating that all three
    /// sequences have identical length and cover at least lag 1.
    pub fn new(coefficients: Vec<f64>, lower: Vec<f64>, upper: Vec<f64>) -> Result<Self> {
        if coefficients.len() < 2 {
            return Err(AnalysisError::InvalidParameter(
                "profile must cover at least lag 1".to_string(),
            ));
        }
        if lower.len() != coefficients.len() {
            return Err(AnalysisError::DimensionMismatch {
                expected: coefficients.len(),
                got: lower.len(),
            });
        }
        if upper.len() != coefficients.len() {
            return Err(AnalysisError::DimensionMismatch {
                expected: coefficients.len(),
                got: upper.len(),
            });
        }
        Ok(Self {
            coefficients,
            lower,
            upper,
        })
    }

    /// The highest lag covered by this profile.
    pub fn max_lag(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Coefficients for lags `0..=max_lag`.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Lower confidence-band edges for lags `0..=max_lag`.
    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    /// Upper confidence-band edges for lags `0..=max_lag`.
    pub fn upper(&self) -> &[f64] {
        &self.upper
    }
}

/// Compute the ACF profile of a series for lags `0..=max_lag`.
///
/// Confidence bands use Bartlett's formula: the standard error at lag
/// `k` accounts for the sample autocorrelations at all shorter lags.
///
/// # Arguments
/// * `series` - Stationary input series
/// * `max_lag` - Highest lag to estimate (must be >= 1)
/// * `alpha` - Significance level in (0, 1); the band covers `1 - alpha`
pub fn acf_profile(series: &[f64], max_lag: usize, alpha: f64) -> Result<CoefficientProfile> {
    validate_arguments(series, max_lag, alpha)?;

    let coefficients = autocorrelations(series, max_lag);
    let n = series.len() as f64;
    let z = normal_quantile(1.0 - alpha / 2.0);

    // Bartlett: var(r_k) = (1 + 2 * sum_{j<k} r_j^2) / n
    let mut cumulative_sq = 0.0;
    let mut lower = vec![0.0; max_lag + 1];
    let mut upper = vec![0.0; max_lag + 1];
    for k in 1..=max_lag {
        let se = ((1.0 + 2.0 * cumulative_sq) / n).sqrt();
        lower[k] = -z * se;
        upper[k] = z * se;
        cumulative_sq += coefficients[k] * coefficients[k];
    }

    CoefficientProfile::new(coefficients, lower, upper)
}

/// Compute the PACF profile of a series for lags `0..=max_lag`.
///
/// Partial autocorrelations come from the Durbin-Levinson recursion;
/// the confidence band is the usual `±z / sqrt(n)` at every lag.
///
/// # Arguments
/// * `series` - Stationary input series
/// * `max_lag` - Highest lag to estimate (must be >= 1)
/// * `alpha` - Significance level in (0, 1); the band covers `1 - alpha`
pub fn pacf_profile(series: &[f64], max_lag: usize, alpha: f64) -> Result<CoefficientProfile> {
    validate_arguments(series, max_lag, alpha)?;

    let coefficients = partial_autocorrelations(series, max_lag);
    let n = series.len() as f64;
    let z = normal_quantile(1.0 - alpha / 2.0);
    let half_width = z / n.sqrt();

    let mut lower = vec![-half_width; max_lag + 1];
    let mut upper = vec![half_width; max_lag + 1];
    lower[0] = 0.0;
    upper[0] = 0.0;

    CoefficientProfile::new(coefficients, lower, upper)
}

/// Sample autocorrelations for lags `0..=max_lag`.
///
/// A zero-variance series yields all-zero coefficients.
fn autocorrelations(series: &[f64], max_lag: usize) -> Vec<f64> {
    let m = mean(series);
    let denominator: f64 = series.iter().map(|&x| (x - m).powi(2)).sum();

    if denominator < 1e-10 {
        return vec![0.0; max_lag + 1];
    }

    (0..=max_lag)
        .map(|lag| {
            let numerator: f64 = series
                .iter()
                .skip(lag)
                .zip(series.iter())
                .map(|(&a, &b)| (a - m) * (b - m))
                .sum();
            numerator / denominator
        })
        .collect()
}

/// Partial autocorrelations for lags `0..=max_lag` via Durbin-Levinson.
///
/// Lags past a numerically degenerate step are NaN, which downstream
/// significance tests treat as never significant.
fn partial_autocorrelations(series: &[f64], max_lag: usize) -> Vec<f64> {
    let acf = autocorrelations(series, max_lag);

    let mut pacf = vec![f64::NAN; max_lag + 1];
    pacf[0] = 1.0;

    let mut phi = vec![vec![0.0; max_lag + 1]; max_lag + 1];
    phi[1][1] = acf[1];
    pacf[1] = acf[1];

    for k in 2..=max_lag {
        let mut num = acf[k];
        for j in 1..k {
            num -= phi[k - 1][j] * acf[k - j];
        }

        let mut denom = 1.0;
        for j in 1..k {
            denom -= phi[k - 1][j] * acf[j];
        }

        if denom.abs() < 1e-10 {
            break;
        }

        phi[k][k] = num / denom;
        pacf[k] = phi[k][k];

        for j in 1..k {
            phi[k][j] = phi[k - 1][j] - phi[k][k] * phi[k - 1][k - j];
        }
    }

    pacf
}

fn validate_arguments(series: &[f64], max_lag: usize, alpha: f64) -> Result<()> {
    if max_lag == 0 {
        return Err(AnalysisError::InvalidParameter(
            "max_lag must be positive".to_string(),
        ));
    }
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(AnalysisError::InvalidParameter(format!(
            "alpha must be in (0, 1), got {alpha}"
        )));
    }
    if series.len() <= max_lag {
        return Err(AnalysisError::InsufficientData {
            needed: max_lag + 1,
            got: series.len(),
        });
    }
    Ok(())
}

fn normal_quantile(p: f64) -> f64 {
    let normal = Normal::new(0.0, 1.0).unwrap();
    normal.inverse_cdf(p)
}

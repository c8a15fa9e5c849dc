//! IQR-based outlier counting.
//!
//! Flags values outside `[Q1 - m*IQR, Q3 + m*IQR]`, the Tukey fence
//! rule used in the exploratory data-quality pass.

use crate::stats::quantile;
use crate::station::StationTable;
use std::collections::BTreeMap;

/// Standard Tukey fence multiplier.
pub const DEFAULT_IQR_MULTIPLIER: f64 = 1.5;

/// Compute the IQR fences `(Q1 - m*IQR, Q3 + m*IQR)` for a slice.
///
/// Quartiles use linear interpolation between order statistics.
/// Returns `None` for an empty slice.
pub fn iqr_fences(values: &[f64], multiplier: f64) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }

    let q1 = quantile(values, 0.25);
    let q3 = quantile(values, 0.75);
    let iqr = q3 - q1;

    Some((q1 - multiplier * iqr, q3 + multiplier * iqr))
}

/// Count values strictly outside the 1.5-IQR fences.
pub fn count_outliers(values: &[f64]) -> usize {
    match iqr_fences(values, DEFAULT_IQR_MULTIPLIER) {
        Some((lower, upper)) => values
            .iter()
            .filter(|&&x| x < lower || x > upper)
            .count(),
        None => 0,
    }
}

/// Count 1.5-IQR outliers in every numeric column of a table.
///
/// Returns a column-name to outlier-count mapping.
pub fn count_outliers_per_column(table: &StationTable) -> BTreeMap<String, usize> {
    table
        .column_names()
        .iter()
        .filter_map(|name| {
            table
                .column(name)
                .map(|values| (name.clone(), count_outliers(values)))
        })
        .collect()
}

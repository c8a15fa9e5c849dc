//! Multi-station dataset handling.
//!
//! A combined dataset holds observations from several monitoring
//! stations, one station code per row. Analysis always starts by
//! selecting one station's subseries and, where the feed reports
//! Fahrenheit, converting temperature columns to Celsius.

use crate::error::{AnalysisError, Result};
use std::collections::BTreeSet;
use tracing::info;

/// Column-major table of observations from multiple monitoring
/// stations.
///
/// Every row carries a station code; all numeric columns have exactly
/// one value per row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StationTable {
    codes: Vec<String>,
    names: Vec<String>,
    columns: Vec<Vec<f64>>,
}

impl StationTable {
    /// Create a table from per-row station codes.
    pub fn new(codes: Vec<String>) -> Self {
        Self {
            codes,
            names: Vec::new(),
            columns: Vec::new(),
        }
    }

    /// Add a numeric column. Its length must match the number of rows.
    pub fn with_column(mut self, name: impl Into<String>, values: Vec<f64>) -> Result<Self> {
        if values.len() != self.codes.len() {
            return Err(AnalysisError::DimensionMismatch {
                expected: self.codes.len(),
                got: values.len(),
            });
        }
        self.names.push(name.into());
        self.columns.push(values);
        Ok(self)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Station code of each row.
    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    /// Names of the numeric columns, in insertion order.
    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    /// Values of a named column, if present.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.columns[i].as_slice())
    }

    /// Distinct station codes present in the table, sorted.
    pub fn station_codes(&self) -> BTreeSet<&str> {
        self.codes.iter().map(String::as_str).collect()
    }

    /// Select the subseries of one station.
    ///
    /// The code is a required, validated parameter: an unknown code
    /// fails fast with the set of available codes instead of prompting.
    pub fn select_station(&self, code: &str) -> Result<StationTable> {
        if !self.codes.iter().any(|c| c == code) {
            let available = self
                .station_codes()
                .into_iter()
                .collect::<Vec<_>>()
                .join(", ");
            return Err(AnalysisError::UnknownStation {
                code: code.to_string(),
                available,
            });
        }

        let keep: Vec<usize> = self
            .codes
            .iter()
            .enumerate()
            .filter(|(_, c)| c.as_str() == code)
            .map(|(i, _)| i)
            .collect();

        let codes = keep.iter().map(|&i| self.codes[i].clone()).collect();
        let columns = self
            .columns
            .iter()
            .map(|col| keep.iter().map(|&i| col[i]).collect())
            .collect();

        info!(code, rows = keep.len(), "selected station subseries");

        Ok(StationTable {
            codes,
            names: self.names.clone(),
            columns,
        })
    }

    /// Overwrite a Fahrenheit column with its Celsius conversion
    /// `(value - 32) * 5 / 9`.
    pub fn fahrenheit_to_celsius(&mut self, column: &str) -> Result<()> {
        let index = self
            .names
            .iter()
            .position(|n| n == column)
            .ok_or_else(|| AnalysisError::ColumnNotFound(column.to_string()))?;

        for value in &mut self.columns[index] {
            *value = (*value - 32.0) * 5.0 / 9.0;
        }

        info!(column, "converted column from Fahrenheit to Celsius");
        Ok(())
    }
}

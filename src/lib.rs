//! # airq-analysis
//!
//! Exploratory and preparatory analysis of PM2.5 time series from
//! multiple monitoring stations.
//!
//! Supports the usual preparation pipeline: select one station's
//! subseries from a combined dataset, convert units, count IQR
//! outliers per column, and estimate candidate ARIMA orders `p` and
//! `q` from the PACF/ACF confidence bands of a stationary series.

pub mod correlogram;
pub mod error;
pub mod narrative;
pub mod order;
pub mod outlier;
pub mod station;
pub mod stats;

pub use error::{AnalysisError, Result};

pub mod prelude {
    pub use crate::correlogram::{acf_profile, pacf_profile, CoefficientProfile};
    pub use crate::error::{AnalysisError, Result};
    pub use crate::narrative::{NarrativeLibrary, StationCommentary};
    pub use crate::order::{
        estimate_ar_order, estimate_ma_order, last_significant_lag, OrderEstimate,
        OrderSelectionConfig,
    };
    pub use crate::outlier::{count_outliers, count_outliers_per_column, iqr_fences};
    pub use crate::station::StationTable;
}

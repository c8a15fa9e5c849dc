//! End-to-end tests for the station preparation pipeline and
//! ACF/PACF-based order identification.

use airq_analysis::prelude::*;

/// AR(1) series with deterministic pseudo-noise.
fn ar1_series(phi: f64, len: usize) -> Vec<f64> {
    let mut series = vec![0.0; len];
    series[0] = 1.0;
    for i in 1..len {
        let noise = ((i * 17 + 13) % 97) as f64 / 97.0 - 0.5;
        series[i] = phi * series[i - 1] + 0.2 * noise;
    }
    series
}

#[test]
fn autoregressive_series_yields_nonzero_orders() {
    let series = ar1_series(0.8, 400);
    let config = OrderSelectionConfig::default();

    let p = estimate_ar_order(&series, &config).unwrap();
    let q = estimate_ma_order(&series, &config).unwrap();

    // Persistent dynamics must show up in both correlograms
    assert!(p.any_significant());
    assert!(p.order >= 1);
    assert!(p.order <= config.max_lag);

    assert!(q.any_significant());
    assert!(q.order >= 1);
    assert!(q.order <= config.max_lag);
}

#[test]
fn constant_series_yields_sentinel_zero_orders() {
    let series = vec![17.3; 200];
    let config = OrderSelectionConfig::default();

    let p = estimate_ar_order(&series, &config).unwrap();
    let q = estimate_ma_order(&series, &config).unwrap();

    assert_eq!(p.order, 0);
    assert!(!p.any_significant());
    assert_eq!(q.order, 0);
    assert!(!q.any_significant());
}

#[test]
fn orders_respect_the_search_horizon() {
    let series = ar1_series(0.9, 400);
    let config = OrderSelectionConfig::default().with_max_lag(5);

    let p = estimate_ar_order(&series, &config).unwrap();
    let q = estimate_ma_order(&series, &config).unwrap();

    assert!(p.order <= 5);
    assert!(q.order <= 5);
}

#[test]
fn short_series_fails_with_insufficient_data() {
    let series = ar1_series(0.5, 10);
    let config = OrderSelectionConfig::default(); // max_lag 20

    let err = estimate_ar_order(&series, &config).unwrap_err();
    assert_eq!(
        err,
        AnalysisError::InsufficientData {
            needed: 21,
            got: 10
        }
    );
}

#[test]
fn estimators_agree_with_manual_profile_selection() {
    let series = ar1_series(0.7, 300);
    let config = OrderSelectionConfig::default();

    let via_estimator = estimate_ar_order(&series, &config).unwrap();
    let profile = pacf_profile(&series, config.max_lag, config.alpha).unwrap();
    let via_selector = last_significant_lag(&profile);

    assert_eq!(via_estimator, via_selector);
}

#[test]
fn station_pipeline_prepares_and_identifies() {
    // Combined two-station dataset: an autocorrelated PM2.5 signal for
    // the station under study, plus a Fahrenheit temperature column.
    let study = ar1_series(0.8, 250);
    let other = ar1_series(0.3, 100);

    let mut codes = vec!["ASFF01".to_string(); study.len()];
    codes.extend(vec!["ANCCAMS04".to_string(); other.len()]);

    let mut pm25: Vec<f64> = study.iter().map(|x| 15.0 + 5.0 * x).collect();
    pm25.extend(other.iter().map(|x| 12.0 + 3.0 * x));
    // One spurious sensor reading, in the other station's rows
    pm25[300] = 400.0;

    let temp_f = vec![68.0; codes.len()];

    let mut table = StationTable::new(codes)
        .with_column("pm25", pm25)
        .unwrap()
        .with_column("temperature", temp_f)
        .unwrap();

    // Clean: convert units
    table.fahrenheit_to_celsius("temperature").unwrap();
    assert!(table
        .column("temperature")
        .unwrap()
        .iter()
        .all(|&c| (c - 20.0).abs() < 1e-9));

    // Data quality: the spike is counted as an outlier
    let counts = count_outliers_per_column(&table);
    assert!(counts["pm25"] >= 1);
    assert_eq!(counts["temperature"], 0);

    // Select the station under study and identify candidate orders
    let selected = table.select_station("ASFF01").unwrap();
    assert_eq!(selected.len(), 250);

    let series = selected.column("pm25").unwrap();
    let config = OrderSelectionConfig::default();

    let p = estimate_ar_order(series, &config).unwrap();
    let q = estimate_ma_order(series, &config).unwrap();
    assert!(p.any_significant());
    assert!(q.any_significant());

    // Attach the narrative commentary for the report
    let library = NarrativeLibrary::from_json(
        r#"{
            "ASFF01": {
                "series": "Levels fluctuate between 5 and 25 ug/m3.",
                "decomposition": "Additive decomposition, annual cycle.",
                "weekly": "Weekly resampling smooths the series.",
                "monthly": "Monthly values stay below 20 ug/m3."
            }
        }"#,
    )
    .unwrap();

    let commentary = library.commentary("ASFF01").unwrap();
    assert!(!commentary.series.is_empty());
}

#[test]
fn pipeline_rejects_unknown_station_before_any_estimation() {
    let table = StationTable::new(vec!["ASFF01".to_string()])
        .with_column("pm25", vec![10.0])
        .unwrap();

    let err = table.select_station("nope").unwrap_err();
    assert!(matches!(err, AnalysisError::UnknownStation { .. }));
}

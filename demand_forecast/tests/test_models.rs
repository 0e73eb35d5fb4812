use assert_approx_eq::assert_approx_eq;
use chrono::NaiveDate;
use demand_forecast::data::{DemandHistory, MonthlySeries, UsageRecord};
use demand_forecast::models::exponential_smoothing::ExponentialSmoothing;
use demand_forecast::models::moving_average::MovingAverage;
use demand_forecast::models::seasonal_naive::SeasonalNaive;
use demand_forecast::models::{DemandModel, TrainedDemandModel};
use rstest::rstest;

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn monthly_series(start: &str, totals: &[f64]) -> MonthlySeries {
    let mut date: NaiveDate = format!("{start}-01").parse().unwrap();
    let mut records = Vec::new();
    for &total in totals {
        records.push(UsageRecord::new("item", date, total));
        date = date
            .checked_add_months(chrono::Months::new(1))
            .unwrap();
    }
    DemandHistory::from_records(records)
        .unwrap()
        .monthly_series("item")
        .unwrap()
}

#[test]
fn test_moving_average_forecast() {
    let series = monthly_series("2024-01", &[10.0, 12.0, 14.0, 16.0]);
    let model = MovingAverage::new(2).unwrap();

    let trained = model.train(&series).unwrap();
    let forecast = trained.forecast(3).unwrap();

    assert_eq!(forecast.horizon(), 3);
    for value in forecast.values() {
        assert_approx_eq!(*value, 15.0);
    }
}

#[test]
fn test_moving_average_clamps_window_to_series_length() {
    let series = monthly_series("2024-01", &[10.0, 20.0]);
    let model = MovingAverage::new(12).unwrap();

    let trained = model.train(&series).unwrap();
    let forecast = trained.forecast(1).unwrap();

    assert_approx_eq!(forecast.values()[0], 15.0);
}

#[test]
fn test_exponential_smoothing_forecast() {
    let series = monthly_series("2024-01", &[100.0, 102.0, 104.0, 103.0, 105.0]);
    let model = ExponentialSmoothing::new(0.7).unwrap();

    let trained = model.train(&series).unwrap();
    let forecast = trained.forecast(3).unwrap();

    assert_eq!(forecast.horizon(), 3);
    // The level must sit inside the observed range
    for value in forecast.values() {
        assert!(*value > 100.0 && *value < 105.0);
    }
}

#[test]
fn test_seasonal_naive_repeats_last_year() {
    let totals: Vec<f64> = (1..=12).map(|m| m as f64 * 10.0).collect();
    let series = monthly_series("2023-01", &totals);
    let model = SeasonalNaive::new();

    let trained = model.train(&series).unwrap();
    let forecast = trained.forecast(3).unwrap();

    // Last observation is 2023-12, so the forecast starts at January
    assert_approx_eq!(forecast.values()[0], 10.0);
    assert_approx_eq!(forecast.values()[1], 20.0);
    assert_approx_eq!(forecast.values()[2], 30.0);
}

#[test]
fn test_seasonal_naive_falls_back_to_mean() {
    let series = monthly_series("2024-01", &[10.0, 20.0, 30.0]);
    let model = SeasonalNaive::new();

    let trained = model.train(&series).unwrap();
    let forecast = trained.forecast(2).unwrap();

    // April and May were never observed; the fallback is the overall mean
    assert_approx_eq!(forecast.values()[0], 20.0);
    assert_approx_eq!(forecast.values()[1], 20.0);
}

#[rstest]
#[case(0.0)]
#[case(1.0)]
#[case(1.5)]
#[case(-0.2)]
fn test_exponential_smoothing_rejects_bad_alpha(#[case] alpha: f64) {
    assert!(ExponentialSmoothing::new(alpha).is_err());
}

#[test]
fn test_model_parameter_validation() {
    assert!(ExponentialSmoothing::new(0.3).is_ok());
    assert!(MovingAverage::new(0).is_err());
    assert!(MovingAverage::new(3).is_ok());
}

#[test]
fn test_training_on_empty_series_fails() {
    let history = DemandHistory::from_records(vec![UsageRecord::new(
        "item",
        date("2024-01-01"),
        1.0,
    )])
    .unwrap();
    let empty = history.monthly_series("other");
    assert!(empty.is_none());
}

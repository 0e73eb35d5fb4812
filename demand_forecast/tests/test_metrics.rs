use assert_approx_eq::assert_approx_eq;
use demand_forecast::metrics::{forecast_accuracy, train_test_split};

#[test]
fn test_forecast_accuracy() {
    let forecast = vec![10.0, 20.0, 30.0];
    let actual = vec![12.0, 18.0, 30.0];

    let accuracy = forecast_accuracy(&forecast, &actual).unwrap();

    assert_approx_eq!(accuracy.mae, 4.0 / 3.0);
    assert_approx_eq!(accuracy.mse, 8.0 / 3.0);
    assert_approx_eq!(accuracy.rmse, (8.0f64 / 3.0).sqrt());
    assert!(accuracy.mape > 0.0);
}

#[test]
fn test_forecast_accuracy_length_mismatch() {
    assert!(forecast_accuracy(&[1.0, 2.0], &[1.0]).is_err());
    assert!(forecast_accuracy(&[], &[]).is_err());
}

#[test]
fn test_forecast_accuracy_skips_zero_actuals_in_mape() {
    let accuracy = forecast_accuracy(&[5.0, 5.0], &[0.0, 10.0]).unwrap();
    // Only the non-zero actual contributes to MAPE
    assert_approx_eq!(accuracy.mape, 25.0);
}

#[test]
fn test_train_test_split() {
    let data: Vec<f64> = (0..10).map(|i| i as f64).collect();
    let (train, test) = train_test_split(&data, 0.2);

    assert_eq!(train.len(), 8);
    assert_eq!(test.len(), 2);
    assert_eq!(test, vec![8.0, 9.0]);
}

#[test]
fn test_train_test_split_degenerate_ratio() {
    let data = vec![1.0, 2.0, 3.0];
    let (train, test) = train_test_split(&data, 0.0);
    assert_eq!(train, data);
    assert!(test.is_empty());
}

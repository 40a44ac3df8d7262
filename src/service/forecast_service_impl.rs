use crate::common::*;

use crate::traits::service_traits::forecast_service::*;

use crate::dto::{forecast_point::*, series_point::*};

use crate::errors::api_error::*;

use linregress::{FormulaRegressionBuilder, RegressionDataBuilder};

#[derive(Debug, Clone, new)]
pub struct ForecastServiceImpl;

#[doc = "표시용 반올림 - 모델 내부 계산은 전체 정밀도를 유지한다"]
fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl ForecastService for ForecastServiceImpl {
    fn forecast(
        &self,
        history: &[SeriesPoint],
        horizon: usize,
    ) -> Result<Vec<ForecastPoint>, ApiError> {
        if horizon == 0 || horizon > MAX_FORECAST_YEARS {
            return Err(ApiError::Validation(format!(
                "Years must be between 1 and {}.",
                MAX_FORECAST_YEARS
            )));
        }

        /* 직선 적합에는 최소 2개의 이력 포인트가 필요하다 */
        if history.len() < 2 {
            return Err(ApiError::NotFound(
                "Insufficient historical data to fit a forecast.".to_string(),
            ));
        }

        let years: Vec<f64> = history.iter().map(|p| p.year as f64).collect();
        let values: Vec<f64> = history.iter().map(|p| p.value).collect();

        let data = RegressionDataBuilder::new()
            .build_from(vec![("consumption", values), ("year", years)])
            .map_err(|e| {
                ApiError::render(
                    "[ForecastServiceImpl->forecast] Failed to build regression data",
                    anyhow!(e),
                )
            })?;

        /* 2개 포인트 이력에서도 적합이 가능하도록 추론 통계 계산은 생략한다 */
        let parameters: Vec<f64> = FormulaRegressionBuilder::new()
            .data(&data)
            .formula("consumption ~ year")
            .fit_without_statistics()
            .map_err(|e| {
                ApiError::render(
                    "[ForecastServiceImpl->forecast] Failed to fit the linear model",
                    anyhow!(e),
                )
            })?;

        let (intercept, slope) = match parameters.as_slice() {
            [intercept, slope] => (*intercept, *slope),
            other => {
                return Err(ApiError::Render(format!(
                    "[ForecastServiceImpl->forecast] Unexpected parameter count from the fit: {}",
                    other.len()
                )));
            }
        };

        let last_year: i64 = history[history.len() - 1].year;

        let forecast: Vec<ForecastPoint> = (1..=horizon as i64)
            .map(|i| {
                let year: i64 = last_year + i;
                let predicted: f64 = intercept + slope * year as f64;
                ForecastPoint::new(year, round_2dp(predicted))
            })
            .collect();

        Ok(forecast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(points: &[(i64, f64)]) -> Vec<SeriesPoint> {
        points
            .iter()
            .map(|(year, value)| SeriesPoint::new(*year, *value))
            .collect()
    }

    #[test]
    fn horizon_above_the_bound_is_a_validation_error() {
        let service: ForecastServiceImpl = ForecastServiceImpl::new();
        let err: ApiError = service
            .forecast(&history(&[(2020, 1.0), (2021, 2.0)]), 51)
            .unwrap_err();

        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn zero_horizon_is_a_validation_error() {
        let service: ForecastServiceImpl = ForecastServiceImpl::new();
        let err: ApiError = service
            .forecast(&history(&[(2020, 1.0), (2021, 2.0)]), 0)
            .unwrap_err();

        match err {
            ApiError::Validation(msg) => assert!(msg.contains("between 1 and 50")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn fewer_than_two_points_is_insufficient_data() {
        let service: ForecastServiceImpl = ForecastServiceImpl::new();

        let err: ApiError = service.forecast(&history(&[(2020, 1.0)]), 5).unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));

        let err: ApiError = service.forecast(&[], 5).unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[test]
    fn forecast_extends_a_perfect_line_exactly() {
        let service: ForecastServiceImpl = ForecastServiceImpl::new();

        /* consumption = 2 * year - 4030 */
        let past: Vec<SeriesPoint> = history(&[
            (2018, 6.0),
            (2019, 8.0),
            (2020, 10.0),
            (2021, 12.0),
            (2022, 14.0),
        ]);

        let forecast: Vec<ForecastPoint> = service.forecast(&past, 3).unwrap();

        assert_eq!(
            forecast,
            vec![
                ForecastPoint::new(2023, 16.0),
                ForecastPoint::new(2024, 18.0),
                ForecastPoint::new(2025, 20.0),
            ]
        );
    }

    #[test]
    fn horizon_length_and_year_range_are_exact() {
        let service: ForecastServiceImpl = ForecastServiceImpl::new();

        let past: Vec<SeriesPoint> = history(&[
            (2015, 5.1),
            (2016, 5.9),
            (2017, 6.4),
            (2018, 7.2),
            (2019, 7.8),
            (2020, 8.9),
            (2021, 9.3),
            (2022, 10.2),
            (2023, 10.8),
            (2024, 11.7),
        ]);

        let forecast: Vec<ForecastPoint> = service.forecast(&past, 5).unwrap();

        assert_eq!(forecast.len(), 5);
        let years: Vec<i64> = forecast.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![2025, 2026, 2027, 2028, 2029]);

        /* 표시용 값은 소수 2자리까지만 */
        for point in &forecast {
            let scaled: f64 = point.predicted_consumption * 100.0;
            assert!((scaled - scaled.round()).abs() < 1e-9);
        }
    }

    #[test]
    fn two_points_are_enough_to_fit() {
        let service: ForecastServiceImpl = ForecastServiceImpl::new();

        let forecast: Vec<ForecastPoint> = service
            .forecast(&history(&[(2020, 10.0), (2021, 12.0)]), 2)
            .unwrap();

        assert_eq!(forecast.len(), 2);
        assert_eq!(forecast[0].year, 2022);
        assert_eq!(forecast[1].year, 2023);
    }
}

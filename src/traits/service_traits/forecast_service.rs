use crate::dto::{forecast_point::*, series_point::*};

use crate::errors::api_error::*;

#[doc = "무제한 외삽 방지를 위한 예측 기간 상한"]
pub const MAX_FORECAST_YEARS: usize = 50;

pub trait ForecastService: Send + Sync {
    #[doc = r#"
        과거 (연도, 소비량) 이력에 선형 모델을 적합시켜 향후 `horizon` 개 연도를 예측한다.

        * horizon 이 1..=MAX_FORECAST_YEARS 를 벗어나면 `Validation`
        * 이력이 2건 미만이면 직선을 적합할 수 없으므로 `NotFound` (insufficient data)
        * 반환 길이는 정확히 horizon, 연도는 `last_year+1 ..= last_year+horizon`
    "#]
    fn forecast(
        &self,
        history: &[SeriesPoint],
        horizon: usize,
    ) -> Result<Vec<ForecastPoint>, ApiError>;
}

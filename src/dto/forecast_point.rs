use crate::common::*;

#[doc = "예측 결과 1개 연도분 - predicted_consumption 은 표시용으로 소수 2자리 반올림"]
#[derive(Debug, Clone, Copy, Serialize, PartialEq, new)]
pub struct ForecastPoint {
    pub year: i64,
    pub predicted_consumption: f64,
}

use crate::common::*;

#[doc = "차트/예측 입력용 (연도, 값) 포인트 - 한 시리즈 내에서 year 는 단조 증가"]
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, new)]
pub struct SeriesPoint {
    pub year: i64,
    #[serde(alias = "consumption")]
    pub value: f64,
}

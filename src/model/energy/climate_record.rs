use crate::common::*;

#[doc = "global_temperature 테이블 1행"]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, new)]
pub struct ClimateRecord {
    pub year: i64,
    pub average_temperature: f64,
    pub country: String,
}

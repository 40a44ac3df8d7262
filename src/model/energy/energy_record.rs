use crate::common::*;

#[doc = r#"
    renewable_energy_consumption 테이블 1행.

    Warehouse 에서는 소문자 별칭(year/country/consumption)으로 내려오고,
    응답 JSON 에서는 기존 API 와 동일한 표시용 키로 나간다.
"#]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, new)]
pub struct EnergyRecord {
    #[serde(rename(serialize = "Year", deserialize = "year"))]
    pub year: i64,
    #[serde(rename(serialize = "Country", deserialize = "country"))]
    pub country: String,
    #[serde(rename(serialize = "Renewable Energy Consumption", deserialize = "consumption"))]
    pub consumption: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warehouse_aliases_in_display_keys_out() {
        let row: Value = json!({"year": 2020, "country": "Japan", "consumption": 10.5});
        let record: EnergyRecord = serde_json::from_value(row).unwrap();
        assert_eq!(record.year, 2020);

        let out: Value = serde_json::to_value(&record).unwrap();
        assert_eq!(out["Year"], 2020);
        assert_eq!(out["Country"], "Japan");
        assert_eq!(out["Renewable Energy Consumption"], 10.5);
    }
}

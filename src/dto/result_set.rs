use crate::common::*;

#[doc = r#"
    Warehouse 조회 결과 컨테이너.

    "조건에 맞는 행이 0건" 은 정상 성공이며 빈 rows 로 표현된다.
    전송/실행 실패와는 엄격하게 구분된다. (그쪽은 Err 로 표면화)
"#]
#[derive(Debug, Clone, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct ResultSet {
    pub rows: Vec<Value>,
    pub total_rows: usize,
}

impl ResultSet {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_the_warehouse_response_shape() {
        let body: &str = r#"{"rows": [{"year": 2020, "consumption": 10.5}], "total_rows": 1}"#;
        let result_set: ResultSet = serde_json::from_str(body).unwrap();

        assert_eq!(*result_set.total_rows(), 1);
        assert_eq!(result_set.rows()[0]["year"], 2020);
        assert!(!result_set.is_empty());
    }

    #[test]
    fn zero_rows_is_a_valid_result_not_an_error() {
        let body: &str = r#"{"rows": [], "total_rows": 0}"#;
        let result_set: ResultSet = serde_json::from_str(body).unwrap();

        assert!(result_set.is_empty());
        assert_eq!(*result_set.total_rows(), 0);
    }
}

use crate::common::*;

use crate::dto::built_query::*;

use crate::enums::sort_order::*;

#[doc = "기후 데이터 테이블 (fully qualified)"]
pub const CLIMATE_TABLE: &str = "climate_data.global_temperature";

#[doc = "재생에너지 소비 데이터 테이블 (fully qualified)"]
pub const ENERGY_TABLE: &str = "renewable_energy_data.renewable_energy_consumption";

#[doc = r#"
    Warehouse 쿼리 빌더.

    고정된 테이블에 대한 SELECT 문을 조립한다. 필터 값은 쿼리 문자열에
    직접 삽입하지 않고 전부 named placeholder (`@name`) 로 바인딩한다.
    None 필터는 조건절에서 완전히 제외된다. (null 비교를 만들지 않는다.)

    차트/예측 입력이 별도 정렬 없이 단조가 되도록 ORDER BY 절은 항상 붙여준다.
"#]
#[derive(Debug)]
pub struct QueryBuilder {
    select: String,
    table: &'static str,
    conditions: Vec<String>,
    params: Vec<QueryParam>,
    order_by: Option<String>,
}

impl QueryBuilder {
    pub fn new(select: &str, table: &'static str) -> Self {
        QueryBuilder {
            select: select.to_string(),
            table,
            conditions: Vec::new(),
            params: Vec::new(),
            order_by: None,
        }
    }

    #[doc = "문자열 필터 - 값이 Some 인 경우에만 등호 조건과 STRING 파라미터를 추가"]
    pub fn filter_str(mut self, column: &str, param_name: &str, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.conditions.push(format!("{} = @{}", column, param_name));
            self.params.push(QueryParam::new(
                param_name.to_string(),
                ScalarParam::Str(value.to_string()),
            ));
        }
        self
    }

    #[doc = "정수 필터 - 값이 Some 인 경우에만 등호 조건과 INT64 파라미터를 추가"]
    pub fn filter_int(mut self, column: &str, param_name: &str, value: Option<i64>) -> Self {
        if let Some(value) = value {
            self.conditions.push(format!("{} = @{}", column, param_name));
            self.params.push(QueryParam::new(
                param_name.to_string(),
                ScalarParam::Int(value),
            ));
        }
        self
    }

    #[doc = "결정적 정렬 절 지정 - build() 시 항상 포함된다"]
    pub fn order_by(mut self, column: &str, order: SortOrder) -> Self {
        self.order_by = Some(format!("{} {}", column, order.as_sql()));
        self
    }

    pub fn build(self) -> BuiltQuery {
        let mut sql: String = format!("SELECT {} FROM `{}`", self.select, self.table);

        if !self.conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.conditions.join(" AND "));
        }

        if let Some(order_by) = &self.order_by {
            sql.push_str(" ORDER BY ");
            sql.push_str(order_by);
        }

        BuiltQuery::new(sql, self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_without_filters_has_no_where_clause() {
        let built: BuiltQuery = QueryBuilder::new("year, country", CLIMATE_TABLE)
            .order_by("year", SortOrder::Desc)
            .build();

        assert_eq!(
            built.sql(),
            "SELECT year, country FROM `climate_data.global_temperature` ORDER BY year DESC"
        );
        assert!(built.params().is_empty());
    }

    #[test]
    fn absent_filters_are_omitted_entirely() {
        let built: BuiltQuery = QueryBuilder::new("*", ENERGY_TABLE)
            .filter_str("Country_Code", "country_code", None)
            .filter_int("Year", "year", None)
            .order_by("Year", SortOrder::Asc)
            .build();

        assert!(!built.sql().contains("WHERE"));
        assert!(built.params().is_empty());
    }

    #[test]
    fn present_filters_become_bound_conditions() {
        let built: BuiltQuery = QueryBuilder::new("*", ENERGY_TABLE)
            .filter_str("Country_Code", "country_code", Some("JPN"))
            .filter_int("Year", "year", Some(2020))
            .order_by("Year", SortOrder::Asc)
            .build();

        assert_eq!(
            built.sql(),
            "SELECT * FROM `renewable_energy_data.renewable_energy_consumption` \
             WHERE Country_Code = @country_code AND Year = @year ORDER BY Year ASC"
        );
        assert_eq!(
            built.params(),
            &[
                QueryParam::new(
                    "country_code".to_string(),
                    ScalarParam::Str("JPN".to_string())
                ),
                QueryParam::new("year".to_string(), ScalarParam::Int(2020)),
            ]
        );
    }

    #[test]
    fn filter_values_never_appear_in_query_text() {
        let built: BuiltQuery = QueryBuilder::new("*", ENERGY_TABLE)
            .filter_str("Country_Code", "country_code", Some("JPN' OR '1'='1"))
            .order_by("Year", SortOrder::Asc)
            .build();

        assert!(!built.sql().contains("JPN"));
        assert!(built.sql().contains("@country_code"));
    }
}

use crate::common::*;

use crate::traits::{repository_traits::warehouse_repository::*, service_traits::query_service::*};

use crate::utils_modules::query_utils::*;

use crate::model::energy::{climate_record::*, energy_record::*};

use crate::dto::{built_query::*, result_set::*, series_point::*};

use crate::enums::sort_order::*;

#[derive(Debug, new)]
pub struct QueryServiceImpl<R: WarehouseRepository> {
    warehouse_conn: Arc<R>,
}

impl<R: WarehouseRepository> QueryServiceImpl<R> {
    #[doc = r#"
        Warehouse 응답의 rows 를 지정된 행 타입의 벡터로 역직렬화하는 제네릭 함수.

        0건 결과는 빈 벡터로 정상 반환된다. 행 파싱 실패는 스키마 불일치이므로
        오류로 표면화한다.

        # Type Parameters
        * `T` - 행 타입 (`DeserializeOwned` 구현 필요)
    "#]
    fn parse_rows<T: DeserializeOwned>(&self, result_set: &ResultSet) -> Result<Vec<T>, anyhow::Error> {
        let records: Vec<T> = result_set
            .rows()
            .iter()
            .map(|row| {
                serde_json::from_value(row.to_owned()).map_err(|e| {
                    anyhow!(
                        "[QueryServiceImpl->parse_rows] Failed to deserialize row: {}",
                        e
                    )
                })
            })
            .collect::<Result<_, _>>()?;

        Ok(records)
    }

    async fn fetch_energy_records(&self, query: BuiltQuery) -> Result<Vec<EnergyRecord>, anyhow::Error> {
        let result_set: ResultSet = self.warehouse_conn.execute_query(&query).await?;
        self.parse_rows::<EnergyRecord>(&result_set)
    }
}

const ENERGY_SELECT: &str =
    "Year AS year, Country_Name AS country, Renewable_Energy_Consumption AS consumption";

#[async_trait]
impl<R: WarehouseRepository> QueryService for QueryServiceImpl<R> {
    async fn get_climate_data(
        &self,
        year: Option<i64>,
        country: Option<&str>,
    ) -> Result<Vec<ClimateRecord>, anyhow::Error> {
        let query: BuiltQuery =
            QueryBuilder::new("year, average_temperature, country", CLIMATE_TABLE)
                .filter_int("year", "year", year)
                .filter_str("country", "country", country)
                .order_by("year", SortOrder::Desc)
                .build();

        let result_set: ResultSet = self.warehouse_conn.execute_query(&query).await?;
        self.parse_rows::<ClimateRecord>(&result_set)
    }

    async fn get_energy_by_country(
        &self,
        country_code: &str,
    ) -> Result<Vec<EnergyRecord>, anyhow::Error> {
        let query: BuiltQuery = QueryBuilder::new(ENERGY_SELECT, ENERGY_TABLE)
            .filter_str("Country_Code", "country_code", Some(country_code))
            .order_by("Year", SortOrder::Desc)
            .build();

        self.fetch_energy_records(query).await
    }

    async fn get_energy_by_year(&self, year: i64) -> Result<Vec<EnergyRecord>, anyhow::Error> {
        let query: BuiltQuery = QueryBuilder::new(ENERGY_SELECT, ENERGY_TABLE)
            .filter_int("Year", "year", Some(year))
            .order_by("Country_Code", SortOrder::Asc)
            .build();

        self.fetch_energy_records(query).await
    }

    async fn get_energy_by_country_and_year(
        &self,
        country_code: &str,
        year: i64,
    ) -> Result<Vec<EnergyRecord>, anyhow::Error> {
        let query: BuiltQuery = QueryBuilder::new(ENERGY_SELECT, ENERGY_TABLE)
            .filter_str("Country_Code", "country_code", Some(country_code))
            .filter_int("Year", "year", Some(year))
            .order_by("Year", SortOrder::Asc)
            .build();

        self.fetch_energy_records(query).await
    }

    async fn get_consumption_series(
        &self,
        country_code: &str,
    ) -> Result<Vec<SeriesPoint>, anyhow::Error> {
        let query: BuiltQuery = QueryBuilder::new(
            "Year AS year, Renewable_Energy_Consumption AS consumption",
            ENERGY_TABLE,
        )
        .filter_str("Country_Code", "country_code", Some(country_code))
        .order_by("Year", SortOrder::Asc)
        .build();

        let result_set: ResultSet = self.warehouse_conn.execute_query(&query).await?;
        self.parse_rows::<SeriesPoint>(&result_set)
    }
}

use crate::common::*;

use crate::dto::series_point::*;

use crate::model::energy::{climate_record::*, energy_record::*};

#[async_trait]
pub trait QueryService: Send + Sync {
    async fn get_climate_data(
        &self,
        year: Option<i64>,
        country: Option<&str>,
    ) -> Result<Vec<ClimateRecord>, anyhow::Error>;

    async fn get_energy_by_country(
        &self,
        country_code: &str,
    ) -> Result<Vec<EnergyRecord>, anyhow::Error>;

    async fn get_energy_by_year(&self, year: i64) -> Result<Vec<EnergyRecord>, anyhow::Error>;

    async fn get_energy_by_country_and_year(
        &self,
        country_code: &str,
        year: i64,
    ) -> Result<Vec<EnergyRecord>, anyhow::Error>;

    #[doc = "차트/예측 입력용 시리즈 - year 오름차순 보장"]
    async fn get_consumption_series(
        &self,
        country_code: &str,
    ) -> Result<Vec<SeriesPoint>, anyhow::Error>;
}

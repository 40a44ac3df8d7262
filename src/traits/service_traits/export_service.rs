use crate::common::*;

use crate::dto::forecast_point::*;

use crate::enums::export_format::*;

use crate::errors::api_error::*;

#[async_trait]
pub trait ExportService: Send + Sync {
    #[doc = r#"
        예측 결과 테이블을 지정 포맷 파일로 직렬화하여 저장한다.

        파일명은 `{COUNTRY}_forecast.{확장자}` 로 결정적이다.
        직렬화/저장 실패는 `Render` 로 분류된다.
    "#]
    async fn export_forecast(
        &self,
        records: &[ForecastPoint],
        format: ExportFormat,
        country_code: &str,
    ) -> Result<PathBuf, ApiError>;
}

use crate::common::*;

use crate::traits::service_traits::{
    chart_service::*, export_service::*, forecast_service::*, query_service::*,
};

use crate::model::energy::{climate_record::*, energy_record::*};

use crate::dto::{api_response::*, forecast_point::*, series_point::*};

use crate::enums::{chart_kind::*, export_format::*};

use crate::errors::api_error::*;

#[derive(Clone, new)]
pub struct AppState {
    query_service: Arc<dyn QueryService>,
    forecast_service: Arc<dyn ForecastService>,
    chart_service: Arc<dyn ChartService>,
    export_service: Arc<dyn ExportService>,
}

#[doc = r#"
    전체 라우트 구성.

    모든 핸들러는 Validate → Fetch → Render → Respond 순서를 따른다.
    `/static` 하위는 생성된 산출물(차트/내보내기 파일) 정적 서빙용.
"#]
pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/energy/climate-data", get(get_climate_data))
        .route(
            "/energy/renewable-energy/{country_code}",
            get(get_energy_by_country),
        )
        .route(
            "/energy/renewable-energy/year/{year}",
            get(get_energy_by_year),
        )
        .route(
            "/energy/renewable-energy/{country_code}/{year}",
            get(get_energy_by_country_and_year),
        )
        .route(
            "/energy/graph/{kind}/renewable-energy/{country_code}",
            get(get_energy_graph_by_country),
        )
        .route(
            "/energy/graph/{kind}/renewable-energy/year/{year}",
            get(get_energy_graph_by_year),
        )
        .route(
            "/energy/forecast/renewable-energy",
            get(forecast_renewable_energy),
        )
        .route("/energy/export/forecast", get(export_forecast))
        .nest_service("/static", ServeDir::new("static"))
        .with_state(app_state)
}

async fn health_check() -> Json<Value> {
    Json(json!({"status": "API is running"}))
}

#[derive(Debug, Deserialize)]
struct ClimateDataParams {
    year: Option<i64>,
    country: Option<String>,
}

fn default_forecast_years() -> usize {
    5
}

#[derive(Debug, Deserialize)]
struct ForecastParams {
    country: String,
    #[serde(default = "default_forecast_years")]
    years: usize,
}

fn default_export_format() -> String {
    "csv".to_string()
}

#[derive(Debug, Deserialize)]
struct ExportParams {
    country: String,
    #[serde(default = "default_forecast_years")]
    years: usize,
    #[serde(default = "default_export_format")]
    format: String,
}

#[doc = "산출물 파일을 attachment 로 내려주는 공통 응답 함수"]
async fn file_attachment_response(path: &Path, media_type: &str) -> Result<Response, ApiError> {
    let bytes: Vec<u8> = tokio::fs::read(path).await.map_err(|e| {
        ApiError::Render(format!(
            "[energy_controller->file_attachment_response] Failed to read artifact {:?}: {:?}",
            path, e
        ))
    })?;

    let file_name: String = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("artifact")
        .to_string();

    let headers = [
        (header::CONTENT_TYPE, media_type.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", file_name),
        ),
    ];

    Ok((headers, bytes).into_response())
}

#[doc = "예측 기간 파라미터 범위 검증 - Fetch 단계 진입 전에 수행된다"]
fn validate_forecast_years(years: usize) -> Result<(), ApiError> {
    if years == 0 || years > MAX_FORECAST_YEARS {
        return Err(ApiError::Validation(format!(
            "Years must be between 1 and {}.",
            MAX_FORECAST_YEARS
        )));
    }
    Ok(())
}

async fn get_climate_data(
    State(app_state): State<AppState>,
    AxumQuery(params): AxumQuery<ClimateDataParams>,
) -> Result<Json<ApiResponse<ClimateRecord>>, ApiError> {
    let records: Vec<ClimateRecord> = app_state
        .query_service
        .get_climate_data(params.year, params.country.as_deref())
        .await
        .map_err(|e| ApiError::fetch("Error fetching climate data", e))?;

    /* 0건 조회는 빈 data 배열과 함께 성공으로 응답한다 */
    Ok(Json(ApiResponse::success(records)))
}

async fn get_energy_by_country(
    State(app_state): State<AppState>,
    AxumPath(country_code): AxumPath<String>,
) -> Result<Json<ApiResponse<EnergyRecord>>, ApiError> {
    let records: Vec<EnergyRecord> = app_state
        .query_service
        .get_energy_by_country(&country_code)
        .await
        .map_err(|e| ApiError::fetch(&format!("Error fetching data for {}", country_code), e))?;

    Ok(Json(ApiResponse::success(records)))
}

async fn get_energy_by_year(
    State(app_state): State<AppState>,
    AxumPath(year): AxumPath<i64>,
) -> Result<Json<ApiResponse<EnergyRecord>>, ApiError> {
    let records: Vec<EnergyRecord> = app_state
        .query_service
        .get_energy_by_year(year)
        .await
        .map_err(|e| ApiError::fetch(&format!("Error fetching data for year {}", year), e))?;

    Ok(Json(ApiResponse::success(records)))
}

async fn get_energy_by_country_and_year(
    State(app_state): State<AppState>,
    AxumPath((country_code, year)): AxumPath<(String, i64)>,
) -> Result<Json<ApiResponse<EnergyRecord>>, ApiError> {
    let records: Vec<EnergyRecord> = app_state
        .query_service
        .get_energy_by_country_and_year(&country_code, year)
        .await
        .map_err(|e| {
            ApiError::fetch(
                &format!("Error fetching data for {} in {}", country_code, year),
                e,
            )
        })?;

    Ok(Json(ApiResponse::success(records)))
}

async fn get_energy_graph_by_country(
    State(app_state): State<AppState>,
    AxumPath((kind, country_code)): AxumPath<(String, String)>,
) -> Result<Response, ApiError> {
    let kind: ChartKind = kind.parse()?;

    let series: Vec<SeriesPoint> = app_state
        .query_service
        .get_consumption_series(&country_code)
        .await
        .map_err(|e| ApiError::fetch(&format!("Error fetching data for {}", country_code), e))?;

    if series.is_empty() {
        return Err(ApiError::NotFound(
            "No data found for the given country.".to_string(),
        ));
    }

    let x_labels: Vec<String> = series.iter().map(|p| p.year.to_string()).collect();
    let y_data: Vec<f64> = series.iter().map(|p| p.value).collect();
    let file_name: String = format!("{}_{}_chart.png", country_code, kind.as_str());

    let stored_path: PathBuf = app_state
        .chart_service
        .render_series_chart(
            kind,
            &format!("Renewable Energy Consumption for {}", country_code),
            x_labels,
            y_data,
            "Year",
            "Consumption (%)",
            &file_name,
        )
        .await?;

    file_attachment_response(&stored_path, "image/png").await
}

async fn get_energy_graph_by_year(
    State(app_state): State<AppState>,
    AxumPath((kind, year)): AxumPath<(String, i64)>,
) -> Result<Response, ApiError> {
    let kind: ChartKind = kind.parse()?;

    let records: Vec<EnergyRecord> = app_state
        .query_service
        .get_energy_by_year(year)
        .await
        .map_err(|e| ApiError::fetch(&format!("Error fetching data for year {}", year), e))?;

    if records.is_empty() {
        return Err(ApiError::NotFound(
            "No data found for the given year.".to_string(),
        ));
    }

    let x_labels: Vec<String> = records.iter().map(|r| r.country.clone()).collect();
    let y_data: Vec<f64> = records.iter().map(|r| r.consumption).collect();
    let file_name: String = format!("year_{}_{}_chart.png", year, kind.as_str());

    let stored_path: PathBuf = app_state
        .chart_service
        .render_series_chart(
            kind,
            &format!("Renewable Energy Consumption in {}", year),
            x_labels,
            y_data,
            "Country",
            "Consumption (%)",
            &file_name,
        )
        .await?;

    file_attachment_response(&stored_path, "image/png").await
}

async fn forecast_renewable_energy(
    State(app_state): State<AppState>,
    AxumQuery(params): AxumQuery<ForecastParams>,
) -> Result<Json<ApiResponse<ForecastPoint>>, ApiError> {
    validate_forecast_years(params.years)?;

    let series: Vec<SeriesPoint> = app_state
        .query_service
        .get_consumption_series(&params.country)
        .await
        .map_err(|e| ApiError::fetch("Error fetching data from the warehouse", e))?;

    if series.is_empty() {
        return Err(ApiError::NotFound(
            "No data found for the given country.".to_string(),
        ));
    }

    let forecast: Vec<ForecastPoint> = app_state
        .forecast_service
        .forecast(&series, params.years)?;

    let future: Vec<SeriesPoint> = forecast
        .iter()
        .map(|p| SeriesPoint::new(p.year, p.predicted_consumption))
        .collect();

    let file_name: String = format!("{}_forecast_chart.png", params.country);

    app_state
        .chart_service
        .render_forecast_chart(
            series,
            future,
            &format!("Renewable Energy Forecast for {}", params.country),
            &file_name,
        )
        .await?;

    let graph_url: String = format!("/static/graphs/{}", file_name);

    Ok(Json(ApiResponse::success_with_graph(forecast, graph_url)))
}

async fn export_forecast(
    State(app_state): State<AppState>,
    AxumQuery(params): AxumQuery<ExportParams>,
) -> Result<Response, ApiError> {
    let format: ExportFormat = params.format.parse()?;
    validate_forecast_years(params.years)?;

    let series: Vec<SeriesPoint> = app_state
        .query_service
        .get_consumption_series(&params.country)
        .await
        .map_err(|e| ApiError::fetch("Error fetching data from the warehouse", e))?;

    if series.is_empty() {
        return Err(ApiError::NotFound(
            "No data found for the given country.".to_string(),
        ));
    }

    let forecast: Vec<ForecastPoint> = app_state
        .forecast_service
        .forecast(&series, params.years)?;

    let stored_path: PathBuf = app_state
        .export_service
        .export_forecast(&forecast, format, &params.country)
        .await?;

    file_attachment_response(&stored_path, format.media_type()).await
}

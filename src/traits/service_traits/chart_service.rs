use crate::common::*;

use crate::dto::series_point::*;

use crate::enums::chart_kind::*;

use crate::errors::api_error::*;

#[async_trait]
pub trait ChartService: Send + Sync {
    #[doc = "
        Generate a chart from a labelled series and persist it as a PNG artifact
        # Arguments
        * `kind` - Chart style (bar / line / pie)
        * `title` - Chart title
        * `x_labels` - Labels for X-axis
        * `y_data` - Data points for Y-axis
        * `x_label` - Label for X-axis
        * `y_label` - Label for Y-axis
        * `file_name` - Artifact file name (deterministic per request parameters)
    "]
    async fn render_series_chart(
        &self,
        kind: ChartKind,
        title: &str,
        x_labels: Vec<String>,
        y_data: Vec<f64>,
        x_label: &str,
        y_label: &str,
        file_name: &str,
    ) -> Result<PathBuf, ApiError>;

    #[doc = "과거 이력(실선) + 예측(점선) 2개 시리즈를 겹쳐 그린 차트를 저장한다"]
    async fn render_forecast_chart(
        &self,
        past: Vec<SeriesPoint>,
        future: Vec<SeriesPoint>,
        title: &str,
        file_name: &str,
    ) -> Result<PathBuf, ApiError>;
}

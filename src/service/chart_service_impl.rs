use crate::common::*;

use crate::traits::{repository_traits::artifact_store::*, service_traits::chart_service::*};

use crate::dto::series_point::*;

use crate::enums::chart_kind::*;

use crate::errors::api_error::*;

use plotters::element::Pie;
use plotters::prelude::*;

const CHART_WIDTH: u32 = 1400;
const CHART_HEIGHT: u32 = 700;

const BG_COLOR: RGBColor = RGBColor(20, 20, 20);
const GRID_COLOR: RGBColor = RGBColor(60, 60, 60);
const TEXT_COLOR: RGBColor = RGBColor(200, 200, 200);
const SERIES_COLOR: RGBColor = RGBColor(0, 191, 255);
const FORECAST_COLOR: RGBColor = RGBColor(255, 99, 71);

const PIE_PALETTE: [RGBColor; 8] = [
    RGBColor(0, 191, 255),
    RGBColor(255, 99, 71),
    RGBColor(50, 205, 50),
    RGBColor(255, 215, 0),
    RGBColor(186, 85, 211),
    RGBColor(255, 140, 0),
    RGBColor(64, 224, 208),
    RGBColor(219, 112, 147),
];

#[derive(Clone, new)]
pub struct ChartServiceImpl {
    artifact_store: Arc<dyn ArtifactStore>,
}

#[doc = "Helper function to determine Y-axis range with padding"]
fn calculate_y_range(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 100.0);
    }

    let min_val: f64 = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max_val: f64 = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let padding: f64 = ((max_val - min_val) * 0.1).max(1.0);

    let y_min: f64 = (min_val - padding).max(0.0);
    let y_max: f64 = max_val + padding;

    (y_min, y_max)
}

#[doc = "plotters 픽셀 버퍼(RGB)를 PNG 바이트로 인코딩"]
fn encode_png(buf: Vec<u8>) -> Result<Vec<u8>, anyhow::Error> {
    let img: image::RgbImage = image::RgbImage::from_raw(CHART_WIDTH, CHART_HEIGHT, buf)
        .ok_or_else(|| anyhow!("[ChartServiceImpl->encode_png] Pixel buffer size mismatch"))?;

    let mut png_bytes: Vec<u8> = Vec::new();
    img.write_to(
        &mut std::io::Cursor::new(&mut png_bytes),
        image::ImageFormat::Png,
    )?;

    Ok(png_bytes)
}

fn draw_series_chart(
    buf: &mut [u8],
    kind: ChartKind,
    title: &str,
    x_labels: &[String],
    y_data: &[f64],
    x_label: &str,
    y_label: &str,
) -> Result<(), anyhow::Error> {
    let root = BitMapBackend::with_buffer(buf, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&BG_COLOR)?;

    if kind == ChartKind::Pie {
        let root = root.titled(title, ("sans-serif", 40).into_font().color(&TEXT_COLOR))?;

        let center: (i32, i32) = ((CHART_WIDTH / 2) as i32, (CHART_HEIGHT / 2 + 20) as i32);
        let radius: f64 = (CHART_HEIGHT / 3) as f64;
        let colors: Vec<RGBColor> = (0..y_data.len())
            .map(|i| PIE_PALETTE[i % PIE_PALETTE.len()])
            .collect();

        let pie = Pie::new(&center, &radius, y_data, &colors, x_labels);
        root.draw(&pie)?;

        root.present()?;
        return Ok(());
    }

    let (y_min, y_max) = calculate_y_range(y_data);
    let x_max: f64 = (x_labels.len() - 1).max(1) as f64;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 40).into_font().color(&TEXT_COLOR))
        .margin(30)
        .x_label_area_size(70)
        .y_label_area_size(90)
        .build_cartesian_2d(-0.5f64..x_max + 0.5, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc(x_label)
        .y_desc(y_label)
        .x_labels(x_labels.len().min(10))
        .y_labels(10)
        .axis_style(ShapeStyle::from(&RGBColor(120, 120, 120)).stroke_width(2))
        .light_line_style(ShapeStyle::from(&GRID_COLOR).stroke_width(1))
        .bold_line_style(ShapeStyle::from(&GRID_COLOR).stroke_width(2))
        .x_label_style(("sans-serif", 18).into_font().color(&TEXT_COLOR))
        .y_label_style(("sans-serif", 18).into_font().color(&TEXT_COLOR))
        .x_label_formatter(&|x| {
            let idx: f64 = x.round();
            if (x - idx).abs() < 1e-6 && idx >= 0.0 && (idx as usize) < x_labels.len() {
                x_labels[idx as usize].clone()
            } else {
                String::new()
            }
        })
        .draw()?;

    match kind {
        ChartKind::Line => {
            chart.draw_series(LineSeries::new(
                y_data.iter().enumerate().map(|(i, &y)| (i as f64, y)),
                ShapeStyle::from(&SERIES_COLOR).stroke_width(3),
            ))?;
        }
        ChartKind::Bar => {
            chart.draw_series(y_data.iter().enumerate().map(|(i, &y)| {
                Rectangle::new(
                    [(i as f64 - 0.35, y_min), (i as f64 + 0.35, y)],
                    SERIES_COLOR.filled(),
                )
            }))?;
        }
        ChartKind::Pie => unreachable!(),
    }

    root.present()?;
    Ok(())
}

fn draw_forecast_chart(
    buf: &mut [u8],
    past: &[SeriesPoint],
    future: &[SeriesPoint],
    title: &str,
) -> Result<(), anyhow::Error> {
    let root = BitMapBackend::with_buffer(buf, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&BG_COLOR)?;

    let all_values: Vec<f64> = past
        .iter()
        .chain(future.iter())
        .map(|p| p.value)
        .collect();
    let (y_min, y_max) = calculate_y_range(&all_values);

    let x_min: f64 = past[0].year as f64 - 0.5;
    let x_max: f64 = future[future.len() - 1].year as f64 + 0.5;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 40).into_font().color(&TEXT_COLOR))
        .margin(30)
        .x_label_area_size(70)
        .y_label_area_size(90)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Year")
        .y_desc("Consumption (%)")
        .x_labels(((past.len() + future.len()).min(15)).max(2))
        .y_labels(10)
        .axis_style(ShapeStyle::from(&RGBColor(120, 120, 120)).stroke_width(2))
        .light_line_style(ShapeStyle::from(&GRID_COLOR).stroke_width(1))
        .bold_line_style(ShapeStyle::from(&GRID_COLOR).stroke_width(2))
        .x_label_style(("sans-serif", 18).into_font().color(&TEXT_COLOR))
        .y_label_style(("sans-serif", 18).into_font().color(&TEXT_COLOR))
        .x_label_formatter(&|x| format!("{:.0}", x))
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            past.iter().map(|p| (p.year as f64, p.value)),
            ShapeStyle::from(&SERIES_COLOR).stroke_width(3),
        ))?
        .label("Past Data")
        .legend(|(x, y)| {
            plotters::element::PathElement::new(
                vec![(x, y), (x + 20, y)],
                ShapeStyle::from(&SERIES_COLOR).stroke_width(3),
            )
        });

    /* 이력 마지막 포인트와 예측 첫 포인트를 이어서 그린다 */
    let bridge: SeriesPoint = past[past.len() - 1];
    chart
        .draw_series(LineSeries::new(
            std::iter::once(bridge)
                .chain(future.iter().copied())
                .map(|p| (p.year as f64, p.value)),
            ShapeStyle::from(&FORECAST_COLOR).stroke_width(3),
        ))?
        .label("Forecast Data")
        .legend(|(x, y)| {
            plotters::element::PathElement::new(
                vec![(x, y), (x + 20, y)],
                ShapeStyle::from(&FORECAST_COLOR).stroke_width(3),
            )
        });

    chart
        .configure_series_labels()
        .background_style(BG_COLOR.mix(0.8))
        .border_style(ShapeStyle::from(&GRID_COLOR).stroke_width(1))
        .label_font(("sans-serif", 20).into_font().color(&TEXT_COLOR))
        .draw()?;

    root.present()?;
    Ok(())
}

#[async_trait]
impl ChartService for ChartServiceImpl {
    async fn render_series_chart(
        &self,
        kind: ChartKind,
        title: &str,
        x_labels: Vec<String>,
        y_data: Vec<f64>,
        x_label: &str,
        y_label: &str,
        file_name: &str,
    ) -> Result<PathBuf, ApiError> {
        if x_labels.is_empty() || y_data.is_empty() {
            return Err(ApiError::NotFound(
                "No data to chart for the given filters.".to_string(),
            ));
        }

        if x_labels.len() != y_data.len() {
            return Err(ApiError::Render(format!(
                "[ChartServiceImpl->render_series_chart] X labels and Y data must have the same length: {} vs {}",
                x_labels.len(),
                y_data.len()
            )));
        }

        /* 합계가 0 이하인 시리즈는 파이 조각 각도가 정의되지 않는다 */
        if kind == ChartKind::Pie {
            let total: f64 = y_data.iter().sum();
            if total <= 0.0 {
                return Err(ApiError::Render(format!(
                    "[ChartServiceImpl->render_series_chart] Pie chart requires a positive series total, got {}",
                    total
                )));
            }
        }

        let title: String = title.to_string();
        let x_label: String = x_label.to_string();
        let y_label: String = y_label.to_string();

        let handle: tokio::task::JoinHandle<Result<Vec<u8>, anyhow::Error>> =
            tokio::task::spawn_blocking(move || {
                /* ---- 여기부터는 동기 코드 (plotters) ---- */
                let mut buf: Vec<u8> = vec![0u8; (CHART_WIDTH * CHART_HEIGHT * 3) as usize];
                draw_series_chart(
                    &mut buf, kind, &title, &x_labels, &y_data, &x_label, &y_label,
                )?;
                encode_png(buf)
            });

        let png_bytes: Vec<u8> = handle
            .await
            .map_err(|e| {
                ApiError::render(
                    "[ChartServiceImpl->render_series_chart] blocking task join failed",
                    anyhow!(e),
                )
            })?
            .map_err(|e| {
                ApiError::render("[ChartServiceImpl->render_series_chart] drawing failed", e)
            })?;

        let stored_path: PathBuf = self.artifact_store.put(file_name, &png_bytes).map_err(|e| {
            ApiError::render("[ChartServiceImpl->render_series_chart] artifact store put failed", e)
        })?;

        info!("Chart generated successfully: {:?}", stored_path);

        Ok(stored_path)
    }

    async fn render_forecast_chart(
        &self,
        past: Vec<SeriesPoint>,
        future: Vec<SeriesPoint>,
        title: &str,
        file_name: &str,
    ) -> Result<PathBuf, ApiError> {
        if past.is_empty() || future.is_empty() {
            return Err(ApiError::NotFound(
                "No data to chart for the given filters.".to_string(),
            ));
        }

        let title: String = title.to_string();

        let handle: tokio::task::JoinHandle<Result<Vec<u8>, anyhow::Error>> =
            tokio::task::spawn_blocking(move || {
                let mut buf: Vec<u8> = vec![0u8; (CHART_WIDTH * CHART_HEIGHT * 3) as usize];
                draw_forecast_chart(&mut buf, &past, &future, &title)?;
                encode_png(buf)
            });

        let png_bytes: Vec<u8> = handle
            .await
            .map_err(|e| {
                ApiError::render(
                    "[ChartServiceImpl->render_forecast_chart] blocking task join failed",
                    anyhow!(e),
                )
            })?
            .map_err(|e| {
                ApiError::render("[ChartServiceImpl->render_forecast_chart] drawing failed", e)
            })?;

        let stored_path: PathBuf = self.artifact_store.put(file_name, &png_bytes).map_err(|e| {
            ApiError::render(
                "[ChartServiceImpl->render_forecast_chart] artifact store put failed",
                e,
            )
        })?;

        info!("Forecast chart generated successfully: {:?}", stored_path);

        Ok(stored_path)
    }
}

use crate::common::*;

use crate::traits::{repository_traits::artifact_store::*, service_traits::export_service::*};

use crate::dto::forecast_point::*;

use crate::enums::export_format::*;

use crate::errors::api_error::*;

use printpdf::{BuiltinFont, Mm, PdfDocument};
use rust_xlsxwriter::Workbook;

#[derive(Clone, new)]
pub struct ExportServiceImpl {
    artifact_store: Arc<dyn ArtifactStore>,
}

#[doc = "CSV 직렬화 - 헤더 1행 + 예측 1건당 1행"]
fn serialize_csv(records: &[ForecastPoint]) -> Result<Vec<u8>, anyhow::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(["year", "predicted_consumption"])?;
    for record in records {
        writer.write_record([
            record.year.to_string(),
            format!("{:.2}", record.predicted_consumption),
        ])?;
    }

    let bytes: Vec<u8> = writer
        .into_inner()
        .map_err(|e| anyhow!("[ExportServiceImpl->serialize_csv] writer flush failed: {:?}", e))?;

    Ok(bytes)
}

#[doc = "Excel 직렬화 - 단일 시트, 헤더 1행 + 예측 1건당 1행"]
fn serialize_excel(records: &[ForecastPoint]) -> Result<Vec<u8>, anyhow::Error> {
    let mut workbook: Workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.write_string(0, 0, "year")?;
    worksheet.write_string(0, 1, "predicted_consumption")?;

    for (i, record) in records.iter().enumerate() {
        let row: u32 = (i + 1) as u32;
        worksheet.write_number(row, 0, record.year as f64)?;
        worksheet.write_number(row, 1, record.predicted_consumption)?;
    }

    let bytes: Vec<u8> = workbook.save_to_buffer()?;
    Ok(bytes)
}

const PDF_PAGE_WIDTH: f64 = 210.0;
const PDF_PAGE_HEIGHT: f64 = 297.0;
const PDF_FIRST_PAGE_TOP: f64 = 265.0;
const PDF_NEXT_PAGE_TOP: f64 = 280.0;
const PDF_BOTTOM_MARGIN: f64 = 15.0;
const PDF_LINE_STEP: f64 = 8.0;

#[doc = r#"
    행별 (페이지 번호, Y 좌표) 배치 계산.

    Y 좌표가 하단 여백 아래로 내려가면 다음 페이지 상단으로 넘어간다.
    모든 행은 페이지 박스 안의 좌표를 받는다. (off-page 로 사라지는 행 없음)
"#]
fn pdf_row_layout(count: usize) -> Vec<(usize, f64)> {
    let mut positions: Vec<(usize, f64)> = Vec::with_capacity(count);

    let mut page_idx: usize = 0;
    let mut y_pos: f64 = PDF_FIRST_PAGE_TOP;

    for _ in 0..count {
        if y_pos < PDF_BOTTOM_MARGIN {
            page_idx += 1;
            y_pos = PDF_NEXT_PAGE_TOP;
        }

        positions.push((page_idx, y_pos));
        y_pos -= PDF_LINE_STEP;
    }

    positions
}

#[doc = "PDF 직렬화 - 제목 1줄 + 예측 1건당 1줄, 페이지가 차면 새 페이지로 이어 쓴다"]
fn serialize_pdf(records: &[ForecastPoint], title: &str) -> Result<Vec<u8>, anyhow::Error> {
    let (doc, page, layer) =
        PdfDocument::new(title, Mm(PDF_PAGE_WIDTH as f32), Mm(PDF_PAGE_HEIGHT as f32), "Layer 1");

    let title_font = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
    let body_font = doc.add_builtin_font(BuiltinFont::Helvetica)?;

    let mut layers = vec![doc.get_page(page).get_layer(layer)];
    layers[0].use_text(title, 16.0, Mm(20.0), Mm(280.0), &title_font);

    let layout: Vec<(usize, f64)> = pdf_row_layout(records.len());

    for (i, (record, (page_idx, y_pos))) in records.iter().zip(layout.iter()).enumerate() {
        while *page_idx >= layers.len() {
            let (next_page, next_layer) =
                doc.add_page(Mm(PDF_PAGE_WIDTH as f32), Mm(PDF_PAGE_HEIGHT as f32), "Layer 1");
            layers.push(doc.get_page(next_page).get_layer(next_layer));
        }

        let line: String = format!(
            "{}. year: {}, predicted_consumption: {:.2}",
            i + 1,
            record.year,
            record.predicted_consumption
        );
        layers[*page_idx].use_text(line, 12.0, Mm(20.0), Mm(*y_pos as f32), &body_font);
    }

    let bytes: Vec<u8> = doc.save_to_bytes()?;
    Ok(bytes)
}

#[async_trait]
impl ExportService for ExportServiceImpl {
    async fn export_forecast(
        &self,
        records: &[ForecastPoint],
        format: ExportFormat,
        country_code: &str,
    ) -> Result<PathBuf, ApiError> {
        let file_name: String = format!("{}_forecast.{}", country_code, format.extension());
        let title: String = format!("Forecast for {}", country_code);

        let bytes: Vec<u8> = match format {
            ExportFormat::Csv => serialize_csv(records),
            ExportFormat::Excel => serialize_excel(records),
            ExportFormat::Pdf => serialize_pdf(records, &title),
        }
        .map_err(|e| {
            ApiError::render("[ExportServiceImpl->export_forecast] serialization failed", e)
        })?;

        let stored_path: PathBuf = self.artifact_store.put(&file_name, &bytes).map_err(|e| {
            ApiError::render(
                "[ExportServiceImpl->export_forecast] artifact store put failed",
                e,
            )
        })?;

        info!("Export file generated successfully: {:?}", stored_path);

        Ok(stored_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::repository::memory_artifact_store::*;

    fn export_service() -> (ExportServiceImpl, Arc<MemoryArtifactStore>) {
        let store: Arc<MemoryArtifactStore> = Arc::new(MemoryArtifactStore::new());
        (
            ExportServiceImpl::new(Arc::clone(&store) as Arc<dyn ArtifactStore>),
            store,
        )
    }

    fn sample_records() -> Vec<ForecastPoint> {
        vec![
            ForecastPoint::new(2024, 10.54),
            ForecastPoint::new(2025, 10.77),
        ]
    }

    #[tokio::test]
    async fn csv_export_writes_header_and_rows() {
        let (service, store) = export_service();

        service
            .export_forecast(&sample_records(), ExportFormat::Csv, "JPN")
            .await
            .unwrap();

        let bytes: Vec<u8> = store.bytes_of("JPN_forecast.csv").unwrap();
        let content: String = String::from_utf8(bytes).unwrap();

        assert!(content.starts_with("year,predicted_consumption"));
        assert!(content.contains("2024,10.54"));
        assert!(content.contains("2025,10.77"));
    }

    #[tokio::test]
    async fn excel_export_produces_a_workbook() {
        let (service, store) = export_service();

        service
            .export_forecast(&sample_records(), ExportFormat::Excel, "JPN")
            .await
            .unwrap();

        let bytes: Vec<u8> = store.bytes_of("JPN_forecast.xlsx").unwrap();
        /* xlsx = zip 컨테이너 */
        assert_eq!(&bytes[..2], b"PK");
    }

    #[tokio::test]
    async fn pdf_export_produces_a_pdf_document() {
        let (service, store) = export_service();

        service
            .export_forecast(&sample_records(), ExportFormat::Pdf, "JPN")
            .await
            .unwrap();

        let bytes: Vec<u8> = store.bytes_of("JPN_forecast.pdf").unwrap();
        assert_eq!(&bytes[..5], b"%PDF-");
    }

    #[test]
    fn pdf_layout_keeps_every_row_inside_the_page_box() {
        let layout: Vec<(usize, f64)> = pdf_row_layout(50);

        assert_eq!(layout.len(), 50);
        for (_, y_pos) in &layout {
            assert!(*y_pos >= PDF_BOTTOM_MARGIN);
            assert!(*y_pos <= PDF_NEXT_PAGE_TOP);
        }

        /* 50행은 첫 페이지에 다 들어가지 않으므로 두 번째 페이지로 이어진다 */
        assert_eq!(layout[0], (0, PDF_FIRST_PAGE_TOP));
        assert_eq!(layout.last().unwrap().0, 1);
        assert_eq!(layout[32], (1, PDF_NEXT_PAGE_TOP));
    }

    #[tokio::test]
    async fn maximum_horizon_pdf_export_carries_all_rows() {
        let (service, store) = export_service();

        let records: Vec<ForecastPoint> = (0..50)
            .map(|i| ForecastPoint::new(2025 + i, 10.0 + i as f64 * 0.25))
            .collect();

        service
            .export_forecast(&records, ExportFormat::Pdf, "JPN")
            .await
            .unwrap();

        let bytes: Vec<u8> = store.bytes_of("JPN_forecast.pdf").unwrap();
        assert_eq!(&bytes[..5], b"%PDF-");

        /* 50행 문서는 두 번째 페이지를 포함하므로 소규모 내보내기보다 커야 한다 */
        let (small_service, small_store) = export_service();
        small_service
            .export_forecast(&sample_records(), ExportFormat::Pdf, "JPN")
            .await
            .unwrap();
        let small_bytes: Vec<u8> = small_store.bytes_of("JPN_forecast.pdf").unwrap();
        assert!(bytes.len() > small_bytes.len());
    }

    #[tokio::test]
    async fn file_names_are_deterministic_per_format() {
        let (service, store) = export_service();

        for format in [ExportFormat::Csv, ExportFormat::Excel, ExportFormat::Pdf] {
            service
                .export_forecast(&sample_records(), format, "KOR")
                .await
                .unwrap();
        }

        assert_eq!(
            store.stored_names(),
            vec![
                "KOR_forecast.csv".to_string(),
                "KOR_forecast.xlsx".to_string(),
                "KOR_forecast.pdf".to_string(),
            ]
        );
    }
}

use crate::common::*;

#[doc = r#"
    요청 처리 실패 분류.

    * `Validation` - 파라미터 범위/포맷 오류. Fetch 단계 진입 전에 반환된다. (400)
    * `NotFound`   - 필터 조건에 해당하는 데이터 없음 / 예측에 필요한 이력 부족. (404)
    * `Fetch`      - Warehouse 호출 실패. 재시도 없이 메시지를 그대로 노출한다. (500)
    * `Render`     - 차트 래스터화 / 파일 직렬화 실패. (500)

    "0건 조회"는 실패가 아니다 - 일반 데이터 엔드포인트는 빈 data 배열과 함께
    success 를 반환하며, 이 타입으로 들어오지 않는다.
"#]
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Fetch(String),
    #[error("{0}")]
    Render(String),
}

impl ApiError {
    pub fn fetch(context: &str, e: anyhow::Error) -> Self {
        ApiError::Fetch(format!("{}: {:?}", context, e))
    }

    pub fn render(context: &str, e: anyhow::Error) -> Self {
        ApiError::Render(format!("{}: {:?}", context, e))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Fetch(_) | ApiError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status: StatusCode = self.status_code();

        if status.is_server_error() {
            error!("[ApiError] {}", self);
        }

        let body = json!({
            "status": "error",
            "message": self.to_string(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy_maps_to_expected_status_codes() {
        assert_eq!(
            ApiError::Validation("x".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("x".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Fetch("x".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Render("x".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

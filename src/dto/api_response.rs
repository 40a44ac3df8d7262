use crate::common::*;

#[doc = r#"
    데이터/예측 엔드포인트 공통 응답 envelope.

    `{"status": "success"|"error", "data": [...], "message"?, "graph_url"?}`
"#]
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: String,
    pub data: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph_url: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: Vec<T>) -> Self {
        ApiResponse {
            status: "success".to_string(),
            data,
            message: None,
            graph_url: None,
        }
    }

    pub fn success_with_graph(data: Vec<T>, graph_url: String) -> Self {
        ApiResponse {
            status: "success".to_string(),
            data,
            message: None,
            graph_url: Some(graph_url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_are_omitted_when_absent() {
        let resp: ApiResponse<Value> = ApiResponse::success(vec![]);
        let body: Value = serde_json::to_value(&resp).unwrap();

        assert_eq!(body["status"], "success");
        assert_eq!(body["data"], json!([]));
        assert!(body.get("message").is_none());
        assert!(body.get("graph_url").is_none());
    }

    #[test]
    fn graph_url_is_carried_when_present() {
        let resp: ApiResponse<Value> =
            ApiResponse::success_with_graph(vec![], "/static/graphs/JPN_forecast_chart.png".to_string());
        let body: Value = serde_json::to_value(&resp).unwrap();

        assert_eq!(body["graph_url"], "/static/graphs/JPN_forecast_chart.png");
    }
}

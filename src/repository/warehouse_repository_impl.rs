use crate::common::*;

use crate::dto::{built_query::*, result_set::*};

use crate::model::configs::warehouse_config::*;

use crate::traits::repository_traits::warehouse_repository::*;

#[derive(Debug, Clone)]
pub struct WarehouseRepositoryImpl {
    client: Client,
    query_endpoint: String,
    api_token: Option<String>,
}

impl WarehouseRepositoryImpl {
    pub fn new(warehouse_config: &WarehouseConfig) -> Result<Self, anyhow::Error> {
        let client: Client = Client::builder()
            .timeout(Duration::from_secs(*warehouse_config.query_timeout_sec()))
            .build()?;

        let query_endpoint: String = format!(
            "{}/v1/query",
            warehouse_config.base_url().trim_end_matches('/')
        );

        Ok(WarehouseRepositoryImpl {
            client,
            query_endpoint,
            api_token: warehouse_config.api_token().clone(),
        })
    }
}

#[async_trait]
impl WarehouseRepository for WarehouseRepositoryImpl {
    #[doc = "Function that EXECUTES a bound query against the warehouse - single attempt"]
    async fn execute_query(&self, query: &BuiltQuery) -> Result<ResultSet, anyhow::Error> {
        let mut request = self.client.post(&self.query_endpoint).json(query);

        if let Some(api_token) = &self.api_token {
            request = request.bearer_auth(api_token);
        }

        let response = request.send().await.map_err(|e| {
            anyhow!(
                "[Warehouse Error][execute_query()] Failed to reach the warehouse: {:?}",
                e
            )
        })?;

        if response.status().is_success() {
            let result_set: ResultSet = response.json::<ResultSet>().await?;
            Ok(result_set)
        } else {
            let status = response.status();
            let error_body: String = response.text().await.unwrap_or_default();
            Err(anyhow!(
                "[Warehouse Error][execute_query()] response status is failed: {} {}",
                status,
                error_body
            ))
        }
    }
}

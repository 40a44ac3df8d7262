use crate::common::*;

use crate::dto::{built_query::*, result_set::*};

#[async_trait]
pub trait WarehouseRepository: Send + Sync {
    #[doc = r#"
        Warehouse 에 쿼리를 1회 실행한다. 재시도/백오프 없음.

        * 정상 응답이면서 0건 → 빈 `ResultSet` (성공)
        * 전송 실패 / 비정상 상태코드 → Err (FetchError 로 매핑됨)
    "#]
    async fn execute_query(&self, query: &BuiltQuery) -> Result<ResultSet, anyhow::Error>;
}

use crate::common::*;

#[doc = "바인딩 파라미터의 스칼라 값 - wire 상에서 타입 태그와 함께 전송된다"]
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", content = "value")]
pub enum ScalarParam {
    #[serde(rename = "STRING")]
    Str(String),
    #[serde(rename = "INT64")]
    Int(i64),
}

#[doc = "named placeholder 하나에 대응하는 바인딩 파라미터"]
#[derive(Debug, Clone, Serialize, PartialEq, new)]
pub struct QueryParam {
    pub name: String,
    #[serde(flatten)]
    pub param: ScalarParam,
}

#[doc = r#"
    Warehouse 로 전송되는 최종 쿼리.

    쿼리 텍스트에는 placeholder 만 남고 실제 필터 값은 `params` 로 분리된다.
"#]
#[derive(Debug, Clone, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct BuiltQuery {
    pub sql: String,
    pub params: Vec<QueryParam>,
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct TrackPageViewRequest {
    #[serde(default)]
    pub path: Option<String>,
}

/// Resultado del contador: `success` es falso cuando se usó el contador en memoria
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageViewResult {
    pub success: bool,
    pub count: i64,
}

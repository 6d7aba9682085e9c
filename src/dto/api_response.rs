use serde::{Deserialize, Serialize};

// Envoltorio genérico de toda respuesta exitosa con cuerpo: {"data": ...}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self { data }
    }
}

// Respuesta del endpoint raíz
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
    pub database_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_wraps_single_item_and_sequence() {
        assert_eq!(serde_json::to_value(ApiResponse::success("x")).unwrap(), json!({ "data": "x" }));
        assert_eq!(
            serde_json::to_value(ApiResponse::success(vec![1, 2])).unwrap(),
            json!({ "data": [1, 2] })
        );
        assert_eq!(
            serde_json::to_value(ApiResponse::success(Vec::<i32>::new())).unwrap(),
            json!({ "data": [] })
        );
    }
}

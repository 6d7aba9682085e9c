//! Utilidades de validación
//!
//! Extractor JSON que convierte los rechazos de axum en errores de la
//! aplicación: errores de datos (campos faltantes o de tipo incorrecto)
//! se devuelven como 422 con detalle por campo, errores de sintaxis como 400.

use async_trait::async_trait;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use super::errors::{bad_request_error, AppError, FieldError};

const DESERIALIZE_PREFIX: &str = "Failed to deserialize the JSON body into the target type: ";

/// JSON de entrada validado contra la forma `T`
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ValidatedJson(value)),
            Err(rejection) => Err(map_rejection(rejection)),
        }
    }
}

fn map_rejection(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::JsonDataError(err) => AppError::Validation(vec![field_error(&err.body_text())]),
        JsonRejection::JsonSyntaxError(err) => bad_request_error(&err.body_text()),
        JsonRejection::MissingJsonContentType(err) => bad_request_error(&err.body_text()),
        other => bad_request_error(&other.body_text()),
    }
}

/// Extraer el campo afectado del mensaje de serde.
///
/// Formatos conocidos: "missing field `name` at line 1 column 2" y
/// "region: invalid type: integer `5`, expected a string at line 1 column 12".
pub fn field_error(body_text: &str) -> FieldError {
    let message = body_text
        .strip_prefix(DESERIALIZE_PREFIX)
        .unwrap_or(body_text)
        .trim()
        .to_string();

    if let Some(rest) = message.split("missing field `").nth(1) {
        if let Some(field) = rest.split('`').next() {
            return FieldError {
                field: field.to_string(),
                message: "field required".to_string(),
            };
        }
    }

    if let Some((path, detail)) = message.split_once(": ") {
        if !path.is_empty() && !path.contains(' ') {
            return FieldError {
                field: path.to_string(),
                message: detail.to_string(),
            };
        }
    }

    FieldError {
        field: "body".to_string(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_is_named() {
        let err = field_error(
            "Failed to deserialize the JSON body into the target type: missing field `name` at line 1 column 21",
        );
        assert_eq!(err.field, "name");
        assert_eq!(err.message, "field required");
    }

    #[test]
    fn test_wrong_type_uses_path() {
        let err = field_error(
            "Failed to deserialize the JSON body into the target type: region: invalid type: integer `5`, expected a string at line 1 column 24",
        );
        assert_eq!(err.field, "region");
        assert!(err.message.starts_with("invalid type"));
    }

    #[test]
    fn test_unknown_shape_falls_back_to_body() {
        let err = field_error("invalid type: sequence, expected struct ZoneCreate at line 1 column 0");
        assert_eq!(err.field, "body");
    }
}

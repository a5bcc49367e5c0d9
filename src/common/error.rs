// src/common/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Único tipo de error del panel. Las fallas "de aplicación" ({success:false},
// {error:...}) no viven acá: son respuestas válidas que el App inspecciona.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error de red: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("El backend respondió con estado {status}")]
    Http { status: u16 },

    #[error("Respuesta JSON inválida: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Error de validación")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Error de plantilla: {0}")]
    Template(#[from] tera::Error),

    // Cualquier otro error inesperado, con el contexto que trae anyhow
    #[error("Error interno del servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl AppError {
    /// Primer mensaje legible de un error de validación, para mostrarlo en
    /// la región de error de un componente.
    pub fn first_validation_message(&self) -> Option<String> {
        let AppError::ValidationError(errors) = self else {
            return None;
        };

        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        fields.into_iter().find_map(|(_, field_errors)| {
            field_errors
                .iter()
                .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ValidationError(ref errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors.iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Uno o más campos son inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::Transport(ref e) => {
                tracing::error!("🔥 Backend inaccesible: {}", e);
                (StatusCode::BAD_GATEWAY, "No se pudo contactar al backend.")
            }
            AppError::Http { status } => {
                tracing::error!("🔥 Backend respondió {}", status);
                (StatusCode::BAD_GATEWAY, "El backend respondió con un error.")
            }
            AppError::Decode(ref e) => {
                tracing::error!("🔥 Respuesta inválida del backend: {}", e);
                (StatusCode::BAD_GATEWAY, "El backend devolvió una respuesta inválida.")
            }

            // Plantillas e internos terminan en 500; el detalle queda en el log.
            ref e => {
                tracing::error!("Error interno del servidor: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Ocurrió un error inesperado.")
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::{ValidationError, ValidationErrors};

    #[test]
    fn test_first_validation_message() {
        let mut errors = ValidationErrors::new();
        let mut err = ValidationError::new("length");
        err.message = Some("El nombre es obligatorio.".into());
        errors.add("nombre", err);

        let app_err = AppError::from(errors);
        assert_eq!(
            app_err.first_validation_message().as_deref(),
            Some("El nombre es obligatorio.")
        );
    }

    #[test]
    fn test_first_validation_message_other_variant() {
        let app_err = AppError::Http { status: 503 };
        assert_eq!(app_err.first_validation_message(), None);
    }

    #[test]
    fn test_into_response_status() {
        assert_eq!(
            AppError::Http { status: 500 }.into_response().status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::InternalServerError(anyhow::anyhow!("boom")).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

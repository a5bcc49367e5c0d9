// src/services/conversion_service.rs

use std::sync::Arc;

use crate::{
    common::error::AppError,
    models::{
        conversion::{AsignacionResponse, AsignarEtiquetaRequest, Conversion},
        payload::ListPayload,
    },
    services::ApiService,
};

const CONVERSIONES_PATH: &str = "/conversiones";

#[derive(Clone)]
pub struct ConversionService {
    api: Arc<dyn ApiService>,
}

impl ConversionService {
    pub fn new(api: Arc<dyn ApiService>) -> Self {
        Self { api }
    }

    pub async fn list_conversiones(&self) -> Result<ListPayload<Conversion>, AppError> {
        let value = self.api.get(CONVERSIONES_PATH).await?;
        Ok(ListPayload::from_value(value))
    }

    pub async fn asignar_etiqueta(
        &self,
        conversion_id: i64,
        etiqueta_id: i64,
    ) -> Result<AsignacionResponse, AppError> {
        let path = format!("{CONVERSIONES_PATH}/{conversion_id}/etiqueta");
        let body = serde_json::to_value(AsignarEtiquetaRequest { etiqueta_id })?;

        let value = self.api.post(&path, body).await?;

        // Cualquier cuerpo que no sea un objeto reconocible cuenta como éxito:
        // el backend no garantiza una forma fija para esta respuesta.
        Ok(serde_json::from_value(value).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fake_api::FakeApi;
    use serde_json::json;

    #[tokio::test]
    async fn test_asignar_posts_to_conversion_path() {
        let api = Arc::new(
            FakeApi::new().respond("POST", "/conversiones/12/etiqueta", json!({"success": true})),
        );
        let service = ConversionService::new(api.clone());

        let resp = service.asignar_etiqueta(12, 3).await.unwrap();

        assert!(!resp.is_failure());
        let calls = api.calls();
        assert_eq!(calls[0].path, "/conversiones/12/etiqueta");
        assert_eq!(calls[0].body, Some(json!({"etiqueta_id": 3})));
    }

    #[tokio::test]
    async fn test_asignar_accepts_shapeless_response() {
        let api = Arc::new(FakeApi::new().respond("POST", "/conversiones/1/etiqueta", json!("ok")));
        let service = ConversionService::new(api);

        let resp = service.asignar_etiqueta(1, 1).await.unwrap();
        assert!(!resp.is_failure());
    }

    #[tokio::test]
    async fn test_list_error_object() {
        let api = Arc::new(FakeApi::new().respond("GET", "/conversiones", json!({"error": "sin DB"})));
        let service = ConversionService::new(api);

        let payload = service.list_conversiones().await.unwrap();
        assert_eq!(payload.error_message(), Some("sin DB"));
    }
}

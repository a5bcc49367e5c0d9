// src/services/etiqueta_service.rs

use std::sync::Arc;

use crate::{
    common::error::AppError,
    models::{
        etiqueta::{CrearEtiquetaResponse, Etiqueta, NuevaEtiqueta},
        payload::ListPayload,
    },
    services::ApiService,
};

const ETIQUETAS_PATH: &str = "/etiquetas";

#[derive(Clone)]
pub struct EtiquetaService {
    api: Arc<dyn ApiService>,
}

impl EtiquetaService {
    pub fn new(api: Arc<dyn ApiService>) -> Self {
        Self { api }
    }

    pub async fn list_etiquetas(&self) -> Result<ListPayload<Etiqueta>, AppError> {
        let value = self.api.get(ETIQUETAS_PATH).await?;
        Ok(ListPayload::from_value(value))
    }

    pub async fn create_etiqueta(
        &self,
        etiqueta: &NuevaEtiqueta,
    ) -> Result<CrearEtiquetaResponse, AppError> {
        let body = serde_json::to_value(etiqueta)?;
        let value = self.api.post(ETIQUETAS_PATH, body).await?;
        Ok(serde_json::from_value(value)?)
    }
}

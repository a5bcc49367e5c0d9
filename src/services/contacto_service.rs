// src/services/contacto_service.rs

use std::sync::Arc;

use crate::{
    common::error::AppError,
    models::contacto::ContactosResponse,
    services::ApiService,
};

const CONTACTOS_PATH: &str = "/v1/contact/list";

#[derive(Clone)]
pub struct ContactoService {
    api: Arc<dyn ApiService>,
}

impl ContactoService {
    pub fn new(api: Arc<dyn ApiService>) -> Self {
        Self { api }
    }

    pub async fn list_contactos(&self) -> Result<ContactosResponse, AppError> {
        let value = self.api.get(CONTACTOS_PATH).await?;
        Ok(serde_json::from_value(value)?)
    }
}

// src/models/contacto.rs

use serde::{Deserialize, Serialize};

// Consulta recibida por el formulario del sitio. Todo llega opcional:
// lo que falte se muestra como celda vacía.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contacto {
    pub ticket_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub message: Option<String>,
    pub page_location: Option<String>,
    pub traffic_source: Option<String>,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: Option<String>,
}

// GET /v1/contact/list
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactosResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub contactos: Option<Vec<Contacto>>,
}

impl ContactosResponse {
    /// Los contactos, solo si la respuesta es un éxito con lista.
    pub fn into_contactos(self) -> Option<Vec<Contacto>> {
        if self.success { self.contactos } else { None }
    }
}

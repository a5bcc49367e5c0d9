// src/models/conversion.rs

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::models::etiqueta::Etiqueta;

// Conversión registrada en un sitio. Solo lectura: el panel nunca la modifica,
// la vuelve a pedir después de asignarle una etiqueta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    pub id: i64,
    pub tipo: String,
    pub timestamp: String,
    #[serde(default, deserialize_with = "numero_o_texto")]
    pub tiempo_navegacion: Option<f64>,
    pub seccion: String,
    #[serde(default)]
    pub web: Option<String>,
    #[serde(default)]
    pub fuente_trafico: Option<String>,
    #[serde(default)]
    pub etiqueta: Option<Etiqueta>,
}

// Flask serializa los Decimal como texto ("12.5"); se aceptan las dos formas.
// Un texto que no es número queda como ausente.
fn numero_o_texto<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;

    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

impl Conversion {
    pub fn etiqueta_display(&self) -> Option<String> {
        self.etiqueta.as_ref().map(Etiqueta::display)
    }

    /// Las conversiones sin etiqueta son exactamente las que llevan selector.
    pub fn necesita_etiqueta(&self) -> bool {
        self.etiqueta.is_none()
    }
}

// Cuerpo de POST /conversiones/{id}/etiqueta
#[derive(Debug, Clone, Serialize)]
pub struct AsignarEtiquetaRequest {
    pub etiqueta_id: i64,
}

// La respuesta de asignación no tiene forma fija; solo miramos las banderas.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AsignacionResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub error: Option<String>,
}

impl AsignacionResponse {
    pub fn is_failure(&self) -> bool {
        self.success == Some(false) || self.error.is_some()
    }
}

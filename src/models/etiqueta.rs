// src/models/etiqueta.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

// Etiqueta tal como la devuelve GET /etiquetas (y embebida en cada conversión)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Etiqueta {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
}

impl Etiqueta {
    /// `nombre (descripcion)`, con paréntesis vacíos si no hay descripción.
    pub fn display(&self) -> String {
        format!("{} ({})", self.nombre, self.descripcion.as_deref().unwrap_or(""))
    }
}

// Cuerpo de POST /etiquetas
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct NuevaEtiqueta {
    #[validate(length(min = 1, message = "El nombre de la etiqueta es obligatorio."))]
    pub nombre: String,
    pub descripcion: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CrearEtiquetaResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_with_and_without_description() {
        let con = Etiqueta { id: 1, nombre: "Lead".into(), descripcion: Some("Caliente".into()) };
        let sin = Etiqueta { id: 2, nombre: "Spam".into(), descripcion: None };

        assert_eq!(con.display(), "Lead (Caliente)");
        assert_eq!(sin.display(), "Spam ()");
    }

    #[test]
    fn test_nueva_etiqueta_requires_name() {
        let vacia = NuevaEtiqueta { nombre: String::new(), descripcion: "x".into() };
        assert!(vacia.validate().is_err());

        let ok = NuevaEtiqueta { nombre: "A".into(), descripcion: String::new() };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_crear_response_defaults_to_failure() {
        let resp: CrearEtiquetaResponse = serde_json::from_value(json!({})).unwrap();
        assert!(!resp.success);
        assert!(resp.error.is_none());
    }
}

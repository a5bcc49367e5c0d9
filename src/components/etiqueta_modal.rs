// src/components/etiqueta_modal.rs

use std::sync::Arc;

use futures::future::BoxFuture;
use serde::Deserialize;

use crate::{components::surface::Surface, models::etiqueta::NuevaEtiqueta};

/// Callback de envío del formulario. Recibe el contexto que lo dispara
/// (el `App`) para poder llamar al backend y repintar.
pub type OnSubmit<C> =
    Arc<dyn for<'a> Fn(&'a mut C, NuevaEtiqueta) -> BoxFuture<'a, ()> + Send + Sync>;

// Campos tal como llegan del formulario, sin recortar
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EtiquetaFormFields {
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub descripcion: String,
}

pub struct EtiquetaModalComponent<C> {
    modal_id: String,
    form_id: String,
    error_id: String,
    on_submit: Option<OnSubmit<C>>,
}

impl<C> EtiquetaModalComponent<C> {
    pub fn new(modal_id: &str, form_id: &str, error_id: &str) -> Self {
        Self {
            modal_id: modal_id.to_string(),
            form_id: form_id.to_string(),
            error_id: error_id.to_string(),
            on_submit: None,
        }
    }

    // Un solo callback a la vez: el último registrado reemplaza al anterior.
    pub fn set_on_submit(&mut self, callback: OnSubmit<C>) {
        self.on_submit = Some(callback);
    }

    /// Recorta los campos, oculta el error anterior y devuelve el callback
    /// junto con los datos a enviar. Quien llama es el que lo espera.
    pub fn handle_submit(
        &self,
        surface: &mut dyn Surface,
        fields: &EtiquetaFormFields,
    ) -> Option<(OnSubmit<C>, NuevaEtiqueta)> {
        let datos = NuevaEtiqueta {
            nombre: fields.nombre.trim().to_string(),
            descripcion: fields.descripcion.trim().to_string(),
        };

        self.hide_error(surface);

        self.on_submit.clone().map(|callback| (callback, datos))
    }

    pub fn show_error(&self, surface: &mut dyn Surface, message: &str) {
        surface.show_error(&self.error_id, message);
    }

    pub fn hide_error(&self, surface: &mut dyn Surface) {
        surface.hide_error(&self.error_id);
    }

    pub fn close(&self, surface: &mut dyn Surface) {
        surface.close_modal(&self.modal_id);
        surface.reset_form(&self.form_id);
    }
}

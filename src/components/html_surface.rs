// src/components/html_surface.rs

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::components::{row::RowView, surface::Surface};

// Estado en memoria de la página: cuerpos de tabla, errores visibles,
// modales abiertos y valores de formularios. `views` lo convierte en HTML.
#[derive(Debug, Default)]
pub struct HtmlSurface {
    tables: HashMap<String, Vec<RowView>>,
    errors: HashMap<String, String>,
    open_modals: HashSet<String>,
    forms: HashMap<String, BTreeMap<String, String>>,
}

impl HtmlSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self, table: &str) -> &[RowView] {
        self.tables.get(table).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Texto del error, solo si la región está visible.
    pub fn error(&self, region: &str) -> Option<&str> {
        self.errors.get(region).map(String::as_str)
    }

    pub fn is_modal_open(&self, modal: &str) -> bool {
        self.open_modals.contains(modal)
    }

    /// Lo que el usuario escribió en un campo (para repintarlo si el modal
    /// queda abierto).
    pub fn set_form_value(&mut self, form: &str, field: &str, value: &str) {
        self.forms
            .entry(form.to_string())
            .or_default()
            .insert(field.to_string(), value.to_string());
    }

    pub fn form_value(&self, form: &str, field: &str) -> &str {
        self.forms
            .get(form)
            .and_then(|fields| fields.get(field))
            .map(String::as_str)
            .unwrap_or("")
    }
}

impl Surface for HtmlSurface {
    fn clear_rows(&mut self, table: &str) {
        self.tables.insert(table.to_string(), Vec::new());
    }

    fn append_row(&mut self, table: &str, row: RowView) {
        self.tables.entry(table.to_string()).or_default().push(row);
    }

    fn show_error(&mut self, region: &str, message: &str) {
        self.errors.insert(region.to_string(), message.to_string());
    }

    fn hide_error(&mut self, region: &str) {
        self.errors.remove(region);
    }

    fn open_modal(&mut self, modal: &str) {
        self.open_modals.insert(modal.to_string());
    }

    fn close_modal(&mut self, modal: &str) {
        self.open_modals.remove(modal);
    }

    fn reset_form(&mut self, form: &str) {
        self.forms.remove(form);
    }
}

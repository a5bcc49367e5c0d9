// src/components/table.rs

use crate::{
    components::{row::RowView, surface::Surface},
    models::payload::ListPayload,
};

pub const DEFAULT_ERROR_MESSAGE: &str = "No se pudieron cargar los datos.";

/// Capacidad de convertir un registro en una fila.
///
/// `Aux` son los datos extra que necesita el renderer (por ejemplo, las
/// etiquetas conocidas para armar un selector); `()` si no usa nada.
pub trait RowRenderer {
    type Item;
    type Aux: ?Sized;

    fn render_row(&self, item: &Self::Item, aux: &Self::Aux) -> RowView;
}

// Una tabla de la página: su cuerpo, su región de error y el renderer de filas.
pub struct TableComponent<R> {
    table_id: String,
    error_id: String,
    renderer: R,
}

impl<R: RowRenderer> TableComponent<R> {
    pub fn new(table_id: &str, error_id: &str, renderer: R) -> Self {
        Self {
            table_id: table_id.to_string(),
            error_id: error_id.to_string(),
            renderer,
        }
    }

    pub fn show_error(&self, surface: &mut dyn Surface, message: &str) {
        surface.show_error(&self.error_id, message);
    }

    pub fn hide_error(&self, surface: &mut dyn Surface) {
        surface.hide_error(&self.error_id);
    }

    pub fn clear(&self, surface: &mut dyn Surface) {
        surface.clear_rows(&self.table_id);
    }

    /// Pinta la respuesta de un listado. Si no es una secuencia, la tabla
    /// queda vacía y se muestra el `error` del payload (o el mensaje por
    /// defecto). Devuelve la cantidad de filas pintadas.
    pub fn render(
        &self,
        surface: &mut dyn Surface,
        payload: &ListPayload<R::Item>,
        aux: &R::Aux,
    ) -> usize {
        match payload.items() {
            Some(items) => self.render_items(surface, items, aux),
            None => {
                self.clear(surface);
                let message = payload.error_message().unwrap_or(DEFAULT_ERROR_MESSAGE);
                self.show_error(surface, message);
                0
            }
        }
    }

    // Reemplaza el cuerpo completo, una fila por item y en el mismo orden.
    pub fn render_items(&self, surface: &mut dyn Surface, items: &[R::Item], aux: &R::Aux) -> usize {
        self.hide_error(surface);
        self.clear(surface);

        for item in items {
            let row = self.renderer.render_row(item, aux);
            surface.append_row(&self.table_id, row);
        }

        items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{html_surface::HtmlSurface, row::Cell};
    use serde_json::json;

    struct NumeroRenderer;

    impl RowRenderer for NumeroRenderer {
        type Item = u32;
        type Aux = str;

        fn render_row(&self, item: &u32, aux: &str) -> RowView {
            RowView::new(vec![Cell::text(format!("{aux}{item}"))])
        }
    }

    fn texts(surface: &HtmlSurface, table: &str) -> Vec<String> {
        surface
            .rows(table)
            .iter()
            .map(|r| r.cells[0].as_text().unwrap_or_default().to_string())
            .collect()
    }

    #[test]
    fn test_render_preserves_count_and_order() {
        let table = TableComponent::new("t", "e", NumeroRenderer);
        let mut surface = HtmlSurface::new();

        let count = table.render(&mut surface, &ListPayload::Items(vec![3, 1, 2]), "#");

        assert_eq!(count, 3);
        assert_eq!(texts(&surface, "t"), vec!["#3", "#1", "#2"]);
    }

    #[test]
    fn test_render_replaces_previous_rows_and_hides_error() {
        let table = TableComponent::new("t", "e", NumeroRenderer);
        let mut surface = HtmlSurface::new();
        table.render(&mut surface, &ListPayload::Items(vec![1, 2, 3]), "");
        table.show_error(&mut surface, "viejo");

        table.render(&mut surface, &ListPayload::Items(vec![9]), "");

        assert_eq!(texts(&surface, "t"), vec!["9"]);
        assert_eq!(surface.error("e"), None);
    }

    #[test]
    fn test_error_payload_shows_its_message_and_empties_table() {
        let table = TableComponent::new("t", "e", NumeroRenderer);
        let mut surface = HtmlSurface::new();
        table.render(&mut surface, &ListPayload::Items(vec![1]), "");

        let payload = ListPayload::Other(json!({"error": "sin conexión a la base"}));
        let count = table.render(&mut surface, &payload, "");

        assert_eq!(count, 0);
        assert!(surface.rows("t").is_empty());
        assert_eq!(surface.error("e"), Some("sin conexión a la base"));
    }

    #[test]
    fn test_unknown_payload_uses_default_message() {
        let table = TableComponent::new("t", "e", NumeroRenderer);
        let mut surface = HtmlSurface::new();

        table.render(&mut surface, &ListPayload::Other(json!({"ok": 1})), "");

        assert_eq!(surface.error("e"), Some(DEFAULT_ERROR_MESSAGE));
    }
}

// src/components/surface.rs

use crate::components::row::RowView;

/// Superficie de pintado: lo mínimo del DOM que tocan los componentes.
///
/// Las regiones se identifican por id, igual que en la página. Los
/// componentes nunca guardan una referencia a la superficie: la reciben en
/// cada operación, así el mismo componente sirve contra `HtmlSurface` o
/// cualquier otra implementación.
pub trait Surface {
    fn clear_rows(&mut self, table: &str);

    fn append_row(&mut self, table: &str, row: RowView);

    fn show_error(&mut self, region: &str, message: &str);

    fn hide_error(&mut self, region: &str);

    fn open_modal(&mut self, modal: &str);

    fn close_modal(&mut self, modal: &str);

    /// Vacía todos los campos del formulario.
    fn reset_form(&mut self, form: &str);
}

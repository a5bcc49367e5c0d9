// src/components/etiqueta_table.rs

use crate::{
    components::{row::{Cell, RowView}, table::RowRenderer},
    models::etiqueta::Etiqueta,
};

pub struct EtiquetaRowRenderer;

impl RowRenderer for EtiquetaRowRenderer {
    type Item = Etiqueta;
    type Aux = ();

    fn render_row(&self, etiqueta: &Etiqueta, _aux: &()) -> RowView {
        RowView::new(vec![
            Cell::text(etiqueta.id.to_string()),
            Cell::text(etiqueta.nombre.as_str()),
            Cell::text(etiqueta.descripcion.as_deref().unwrap_or("")),
        ])
    }
}

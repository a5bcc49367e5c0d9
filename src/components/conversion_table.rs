// src/components/conversion_table.rs

use crate::{
    components::{
        row::{Cell, RowView, SelectOption},
        table::RowRenderer,
    },
    models::{conversion::Conversion, etiqueta::Etiqueta},
    utils::date_formatter::to_buenos_aires_datetime,
};

pub const PLACEHOLDER_LABEL: &str = "Seleccionar etiqueta";

pub struct ConversionRowRenderer;

impl ConversionRowRenderer {
    // Opción vacía primero, después todas las etiquetas en el orden recibido.
    fn selector(conversion_id: i64, etiquetas: &[Etiqueta]) -> Cell {
        let placeholder = SelectOption {
            value: String::new(),
            label: PLACEHOLDER_LABEL.to_string(),
        };

        let options = std::iter::once(placeholder)
            .chain(etiquetas.iter().map(|e| SelectOption {
                value: e.id.to_string(),
                label: e.nombre.clone(),
            }))
            .collect();

        Cell::Selector { conversion_id, options }
    }
}

impl RowRenderer for ConversionRowRenderer {
    type Item = Conversion;
    type Aux = [Etiqueta];

    fn render_row(&self, conversion: &Conversion, etiquetas: &[Etiqueta]) -> RowView {
        let etiqueta = if conversion.necesita_etiqueta() {
            Self::selector(conversion.id, etiquetas)
        } else {
            Cell::text(conversion.etiqueta_display().unwrap_or_default())
        };

        let tiempo = conversion
            .tiempo_navegacion
            .map(|t| t.to_string())
            .unwrap_or_default();

        RowView::new(vec![
            Cell::text(conversion.id.to_string()),
            Cell::text(conversion.tipo.as_str()),
            Cell::text(to_buenos_aires_datetime(&conversion.timestamp)),
            Cell::text(tiempo),
            Cell::text(conversion.seccion.as_str()),
            Cell::text(conversion.web.as_deref().unwrap_or("")),
            Cell::text(conversion.fuente_trafico.as_deref().unwrap_or("")),
            etiqueta,
        ])
    }
}

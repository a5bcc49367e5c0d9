// src/components/contact_table.rs

use crate::{
    components::{row::{Cell, RowView}, table::RowRenderer},
    models::contacto::Contacto,
    utils::date_formatter::to_buenos_aires_datetime,
};

pub struct ContactRowRenderer;

fn text(value: &Option<String>) -> Cell {
    Cell::text(value.as_deref().unwrap_or(""))
}

impl RowRenderer for ContactRowRenderer {
    type Item = Contacto;
    type Aux = ();

    fn render_row(&self, contacto: &Contacto, _aux: &()) -> RowView {
        let created_at = contacto
            .created_at
            .as_deref()
            .map(to_buenos_aires_datetime)
            .unwrap_or_default();

        RowView::new(vec![
            text(&contacto.ticket_id),
            text(&contacto.name),
            text(&contacto.email),
            text(&contacto.company),
            text(&contacto.message),
            text(&contacto.page_location),
            text(&contacto.traffic_source),
            text(&contacto.ip),
            text(&contacto.user_agent),
            Cell::text(created_at),
        ])
    }
}

// src/views.rs

use serde::Serialize;
use tera::{Context, Tera};

use crate::{
    app::{
        CONTACTOS_ERROR, CONTACTOS_TABLE, CONVERSIONES_ERROR, CONVERSIONES_TABLE, ETIQUETAS_ERROR,
        ETIQUETAS_TABLE, ETIQUETA_FORM, ETIQUETA_MODAL, ETIQUETA_MODAL_ERROR,
    },
    common::error::AppError,
    components::{HtmlSurface, RowView},
};

pub const PANEL_TEMPLATE: &str = "panel.html";

#[derive(Debug, Serialize)]
pub struct TableView<'a> {
    pub rows: &'a [RowView],
    pub error: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct ModalView<'a> {
    pub open: bool,
    pub error: Option<&'a str>,
    pub nombre: &'a str,
    pub descripcion: &'a str,
}

// Foto de la superficie lista para la plantilla
#[derive(Debug, Serialize)]
pub struct PageView<'a> {
    pub etiquetas: TableView<'a>,
    pub conversiones: TableView<'a>,
    pub contactos: TableView<'a>,
    pub modal: ModalView<'a>,
}

impl<'a> PageView<'a> {
    pub fn from_surface(surface: &'a HtmlSurface) -> Self {
        let table = |table: &str, error: &str| TableView {
            rows: surface.rows(table),
            error: surface.error(error),
        };

        Self {
            etiquetas: table(ETIQUETAS_TABLE, ETIQUETAS_ERROR),
            conversiones: table(CONVERSIONES_TABLE, CONVERSIONES_ERROR),
            contactos: table(CONTACTOS_TABLE, CONTACTOS_ERROR),
            modal: ModalView {
                open: surface.is_modal_open(ETIQUETA_MODAL),
                error: surface.error(ETIQUETA_MODAL_ERROR),
                nombre: surface.form_value(ETIQUETA_FORM, "nombre"),
                descripcion: surface.form_value(ETIQUETA_FORM, "descripcion"),
            },
        }
    }
}

/// La plantilla va embebida en el binario: no depende del directorio de trabajo.
pub fn load_templates() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_template(PANEL_TEMPLATE, include_str!("../templates/panel.html"))?;
    Ok(tera)
}

pub fn render_panel(tera: &Tera, surface: &HtmlSurface) -> Result<String, AppError> {
    let context = Context::from_serialize(PageView::from_surface(surface))?;
    Ok(tera.render(PANEL_TEMPLATE, &context)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{
        Surface,
        row::{Cell, SelectOption},
    };

    fn render(surface: &HtmlSurface) -> String {
        let tera = load_templates().unwrap();
        render_panel(&tera, surface).unwrap()
    }

    #[test]
    fn test_selector_carries_conversion_id() {
        let mut surface = HtmlSurface::new();
        surface.append_row(
            CONVERSIONES_TABLE,
            RowView::new(vec![
                Cell::text("10"),
                Cell::Selector {
                    conversion_id: 10,
                    options: vec![
                        SelectOption { value: String::new(), label: "Seleccionar etiqueta".into() },
                        SelectOption { value: "1".into(), label: "Lead".into() },
                    ],
                },
            ]),
        );

        let html = render(&surface);

        assert!(html.contains(r#"action="/conversiones/10/etiqueta""#));
        assert!(html.contains(r#"data-conversion-id="10""#));
        assert!(html.contains(r#"<option value="1">Lead</option>"#));
    }

    #[test]
    fn test_cell_text_is_escaped() {
        let mut surface = HtmlSurface::new();
        surface.append_row(
            CONTACTOS_TABLE,
            RowView::new(vec![Cell::text("<script>alert(1)</script>")]),
        );

        let html = render(&surface);

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_error_regions_and_modal_state() {
        let mut surface = HtmlSurface::new();
        surface.show_error(CONVERSIONES_ERROR, "Error al cargar conversiones.");
        surface.open_modal(ETIQUETA_MODAL);
        surface.show_error(ETIQUETA_MODAL_ERROR, "X");
        surface.set_form_value(ETIQUETA_FORM, "nombre", "Lead");

        let html = render(&surface);

        assert!(html.contains(
            r#"<div id="conversiones-error" class="alert alert-danger">Error al cargar conversiones.</div>"#
        ));
        assert!(html.contains(r#"<div id="etiquetas-error" class="alert alert-danger d-none"></div>"#));
        assert!(html.contains(r#"class="modal fade show d-block""#));
        assert!(html.contains(r#"<div id="etiqueta-modal-error" class="alert alert-danger">X</div>"#));
        assert!(html.contains(r#"value="Lead""#));
    }
}

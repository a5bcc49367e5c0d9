// src/handlers/panel.rs

use axum::{
    extract::{Form, Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::{
    app::{App, CONVERSIONES_ERROR, ETIQUETA_FORM, ETIQUETA_MODAL},
    common::error::AppError,
    components::{EtiquetaFormFields, HtmlSurface, Surface},
    config::AppState,
    views,
};

// Cada request arma un App nuevo sobre una superficie vacía: "página lista",
// después el evento, y se devuelve la página resultante.
async fn ready_app(app_state: &AppState) -> App<HtmlSurface> {
    let mut app = App::new(app_state.api.clone(), HtmlSurface::new());
    app.init().await;
    app
}

fn render(app_state: &AppState, app: App<HtmlSurface>) -> Result<Html<String>, AppError> {
    let surface = app.into_surface();
    Ok(Html(views::render_panel(&app_state.tera, &surface)?))
}

// GET /
pub async fn show_panel(
    State(app_state): State<AppState>,
) -> Result<Html<String>, AppError> {
    let app = ready_app(&app_state).await;
    render(&app_state, app)
}

#[derive(Debug, Deserialize)]
pub struct AsignarEtiquetaForm {
    #[serde(default)]
    pub etiqueta_id: String,
}

// POST /conversiones/{id}/etiqueta
// Sin error visible se redirige a GET /, así un refresh no repite el POST.
pub async fn asignar_etiqueta(
    State(app_state): State<AppState>,
    Path(conversion_id): Path<i64>,
    Form(form): Form<AsignarEtiquetaForm>,
) -> Result<Response, AppError> {
    let mut app = ready_app(&app_state).await;
    app.on_etiqueta_selected(conversion_id, &form.etiqueta_id).await;

    if app.surface().error(CONVERSIONES_ERROR).is_none() {
        return Ok(Redirect::to("/").into_response());
    }
    Ok(render(&app_state, app)?.into_response())
}

// POST /etiquetas
// Si el modal sigue abierto hubo error y se pinta en el lugar; si no, a GET /.
pub async fn crear_etiqueta(
    State(app_state): State<AppState>,
    Form(fields): Form<EtiquetaFormFields>,
) -> Result<Response, AppError> {
    let mut app = ready_app(&app_state).await;

    // El usuario envió desde el modal abierto, con lo que había escrito.
    let surface = app.surface_mut();
    surface.open_modal(ETIQUETA_MODAL);
    surface.set_form_value(ETIQUETA_FORM, "nombre", &fields.nombre);
    surface.set_form_value(ETIQUETA_FORM, "descripcion", &fields.descripcion);

    app.submit_etiqueta_form(&fields).await;

    if !app.surface().is_modal_open(ETIQUETA_MODAL) {
        return Ok(Redirect::to("/").into_response());
    }
    Ok(render(&app_state, app)?.into_response())
}

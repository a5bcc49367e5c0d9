// src/app.rs

use std::sync::Arc;

use futures::future::BoxFuture;
use validator::Validate;

use crate::{
    common::error::AppError,
    components::{
        ContactRowRenderer, ConversionRowRenderer, EtiquetaFormFields, EtiquetaModalComponent,
        EtiquetaRowRenderer, Surface, TableComponent,
    },
    models::{
        etiqueta::{Etiqueta, NuevaEtiqueta},
        payload::ListPayload,
    },
    services::{ApiService, ContactoService, ConversionService, EtiquetaService},
};

// Ids de las regiones de la página
pub const CONTACTOS_TABLE: &str = "contactos-table";
pub const CONTACTOS_ERROR: &str = "contactos-error";
pub const CONVERSIONES_TABLE: &str = "conversiones-table";
pub const CONVERSIONES_ERROR: &str = "conversiones-error";
pub const ETIQUETAS_TABLE: &str = "etiquetas-table";
pub const ETIQUETAS_ERROR: &str = "etiquetas-error";
pub const ETIQUETA_MODAL: &str = "etiqueta-modal";
pub const ETIQUETA_FORM: &str = "etiqueta-form";
pub const ETIQUETA_MODAL_ERROR: &str = "etiqueta-modal-error";

pub const CONTACTOS_UNAVAILABLE: &str = "No se pudieron cargar los contactos.";
pub const CONTACTOS_LOAD_ERROR: &str = "Error al cargar contactos.";
pub const CONVERSIONES_LOAD_ERROR: &str = "Error al cargar conversiones.";
pub const ETIQUETAS_LOAD_ERROR: &str = "Error al cargar etiquetas.";
pub const CREAR_ETIQUETA_RECHAZADA: &str = "No se pudo crear la etiqueta.";
pub const CREAR_ETIQUETA_ERROR: &str = "Error al crear la etiqueta.";
pub const ASIGNAR_ETIQUETA_PREFIX: &str = "No se pudo asignar la etiqueta";
pub const ASIGNAR_ETIQUETA_ERROR: &str = "Error al asignar la etiqueta.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Init,
    Loaded,
    Interactive,
}

// Orquestador del panel: conecta servicios con componentes, carga los datos
// al estar lista la página y recarga después de cada mutación.
pub struct App<S> {
    surface: S,
    phase: Phase,
    contacto_service: ContactoService,
    conversion_service: ConversionService,
    etiqueta_service: EtiquetaService,
    contact_table: TableComponent<ContactRowRenderer>,
    conversion_table: TableComponent<ConversionRowRenderer>,
    etiqueta_table: TableComponent<EtiquetaRowRenderer>,
    etiqueta_modal: EtiquetaModalComponent<App<S>>,
    // Última lista de etiquetas cargada; alimenta los selectores.
    etiquetas: Vec<Etiqueta>,
}

impl<S: Surface + Send + 'static> App<S> {
    pub fn new(api: Arc<dyn ApiService>, surface: S) -> Self {
        Self {
            surface,
            phase: Phase::Init,
            contacto_service: ContactoService::new(api.clone()),
            conversion_service: ConversionService::new(api.clone()),
            etiqueta_service: EtiquetaService::new(api),
            contact_table: TableComponent::new(CONTACTOS_TABLE, CONTACTOS_ERROR, ContactRowRenderer),
            conversion_table: TableComponent::new(
                CONVERSIONES_TABLE,
                CONVERSIONES_ERROR,
                ConversionRowRenderer,
            ),
            etiqueta_table: TableComponent::new(ETIQUETAS_TABLE, ETIQUETAS_ERROR, EtiquetaRowRenderer),
            etiqueta_modal: EtiquetaModalComponent::new(
                ETIQUETA_MODAL,
                ETIQUETA_FORM,
                ETIQUETA_MODAL_ERROR,
            ),
            etiquetas: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[cfg(test)]
    pub fn etiquetas(&self) -> &[Etiqueta] {
        &self.etiquetas
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Página lista: etiquetas primero (los selectores las necesitan),
    /// después conversiones y contactos, y recién entonces los listeners.
    pub async fn init(&mut self) {
        tracing::info!("Inicializando panel...");

        self.load_etiquetas().await;
        self.load_conversiones().await;
        self.load_contactos().await;
        self.phase = Phase::Loaded;

        self.attach_listeners();
    }

    pub fn attach_listeners(&mut self) {
        self.etiqueta_modal
            .set_on_submit(Arc::new(crear_etiqueta_desde_modal::<S>));
        self.phase = Phase::Interactive;
    }

    pub async fn load_etiquetas(&mut self) {
        match self.etiqueta_service.list_etiquetas().await {
            Ok(payload) => {
                self.etiqueta_table.render(&mut self.surface, &payload, &());
                self.etiquetas = match payload {
                    ListPayload::Items(items) => items,
                    ListPayload::Other(_) => Vec::new(),
                };
            }
            Err(e) => {
                tracing::error!("🔥 Error al cargar etiquetas: {}", e);
                self.etiquetas.clear();
                self.etiqueta_table.clear(&mut self.surface);
                self.etiqueta_table.show_error(&mut self.surface, ETIQUETAS_LOAD_ERROR);
            }
        }
    }

    pub async fn load_conversiones(&mut self) {
        match self.conversion_service.list_conversiones().await {
            Ok(payload) => {
                let filas = self.conversion_table.render(&mut self.surface, &payload, &self.etiquetas);
                tracing::debug!("{} conversiones pintadas", filas);
            }
            Err(e) => {
                tracing::error!("🔥 Error al cargar conversiones: {}", e);
                self.conversion_table.clear(&mut self.surface);
                self.conversion_table.show_error(&mut self.surface, CONVERSIONES_LOAD_ERROR);
            }
        }
    }

    pub async fn load_contactos(&mut self) {
        match self.contacto_service.list_contactos().await {
            Ok(response) => match response.into_contactos() {
                Some(contactos) => {
                    self.contact_table.render_items(&mut self.surface, &contactos, &());
                }
                None => {
                    self.contact_table.clear(&mut self.surface);
                    self.contact_table.show_error(&mut self.surface, CONTACTOS_UNAVAILABLE);
                }
            },
            Err(e) => {
                tracing::error!("🔥 Error al cargar contactos: {}", e);
                self.contact_table.clear(&mut self.surface);
                self.contact_table.show_error(&mut self.surface, CONTACTOS_LOAD_ERROR);
            }
        }
    }

    /// Cambio en un selector de la tabla de conversiones.
    pub async fn on_etiqueta_selected(&mut self, conversion_id: i64, value: &str) {
        if self.phase != Phase::Interactive {
            tracing::warn!("Cambio de etiqueta ignorado: listeners sin registrar");
            return;
        }

        let value = value.trim();
        if value.is_empty() {
            return;
        }

        let Ok(etiqueta_id) = value.parse::<i64>() else {
            tracing::warn!("Etiqueta inválida '{}' para la conversión {}", value, conversion_id);
            return;
        };

        match self.conversion_service.asignar_etiqueta(conversion_id, etiqueta_id).await {
            Ok(response) if !response.is_failure() => {
                tracing::info!("✅ Etiqueta {} asignada a la conversión {}", etiqueta_id, conversion_id);
                self.load_conversiones().await;
            }
            Ok(response) => {
                let detalle = response
                    .error
                    .unwrap_or_else(|| "el backend rechazó la asignación".to_string());
                self.show_asignacion_error(&detalle);
            }
            Err(e) => {
                // El detalle puede traer la URL del backend: solo al log.
                tracing::error!("🔥 Error al asignar etiqueta: {}", e);
                self.conversion_table.show_error(&mut self.surface, ASIGNAR_ETIQUETA_ERROR);
            }
        }
    }

    // La tabla queda como estaba: recargarla borraría el mensaje.
    fn show_asignacion_error(&mut self, detalle: &str) {
        let mensaje = format!("{ASIGNAR_ETIQUETA_PREFIX}: {detalle}");
        self.conversion_table.show_error(&mut self.surface, &mensaje);
    }

    /// Envío del formulario del modal.
    pub async fn submit_etiqueta_form(&mut self, fields: &EtiquetaFormFields) {
        let Some((callback, datos)) = self.etiqueta_modal.handle_submit(&mut self.surface, fields)
        else {
            tracing::warn!("Formulario de etiqueta enviado sin callback registrado");
            return;
        };

        callback(self, datos).await;
    }

    pub async fn crear_etiqueta(&mut self, datos: NuevaEtiqueta) {
        if let Err(errors) = datos.validate() {
            let mensaje = AppError::from(errors)
                .first_validation_message()
                .unwrap_or_else(|| CREAR_ETIQUETA_RECHAZADA.to_string());
            self.etiqueta_modal.show_error(&mut self.surface, &mensaje);
            return;
        }

        match self.etiqueta_service.create_etiqueta(&datos).await {
            Ok(response) if response.success => {
                tracing::info!("✅ Etiqueta '{}' creada", datos.nombre);
                self.etiqueta_modal.close(&mut self.surface);
                self.load_etiquetas().await;
                self.load_conversiones().await;
            }
            Ok(response) => {
                let mensaje = response.error.as_deref().unwrap_or(CREAR_ETIQUETA_RECHAZADA);
                self.etiqueta_modal.show_error(&mut self.surface, mensaje);
            }
            Err(e) => {
                tracing::error!("🔥 Error al crear etiqueta: {}", e);
                self.etiqueta_modal.show_error(&mut self.surface, CREAR_ETIQUETA_ERROR);
            }
        }
    }
}

fn crear_etiqueta_desde_modal<'a, S: Surface + Send + 'static>(
    app: &'a mut App<S>,
    datos: NuevaEtiqueta,
) -> BoxFuture<'a, ()> {
    Box::pin(app.crear_etiqueta(datos))
}

pub mod api_service;
pub use api_service::{ApiService, HttpApiService};
pub mod contacto_service;
pub use contacto_service::ContactoService;
pub mod conversion_service;
pub use conversion_service::ConversionService;
pub mod etiqueta_service;
pub use etiqueta_service::EtiquetaService;

#[cfg(test)]
pub mod fake_api;

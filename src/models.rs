pub mod contacto;
pub mod conversion;
pub mod etiqueta;
pub mod payload;

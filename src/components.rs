pub mod row;
pub use row::RowView;
pub mod surface;
pub use surface::Surface;
pub mod html_surface;
pub use html_surface::HtmlSurface;
pub mod table;
pub use table::TableComponent;
pub mod contact_table;
pub use contact_table::ContactRowRenderer;
pub mod conversion_table;
pub use conversion_table::ConversionRowRenderer;
pub mod etiqueta_table;
pub use etiqueta_table::EtiquetaRowRenderer;
pub mod etiqueta_modal;
pub use etiqueta_modal::{EtiquetaFormFields, EtiquetaModalComponent};

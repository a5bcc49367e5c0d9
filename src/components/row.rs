// src/components/row.rs

use serde::Serialize;

// Fila lista para pintar: celdas en orden de columna.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowView {
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Cell {
    Text { value: String },

    // Desplegable de etiquetas para una conversión sin etiquetar.
    // `conversion_id` es la clave con la que se identifica el evento de cambio.
    Selector {
        conversion_id: i64,
        options: Vec<SelectOption>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text { value: value.into() }
    }

    #[cfg(test)]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text { value } => Some(value),
            Cell::Selector { .. } => None,
        }
    }
}

impl RowView {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    #[cfg(test)]
    pub fn selector(&self) -> Option<(i64, &[SelectOption])> {
        self.cells.iter().find_map(|cell| match cell {
            Cell::Selector { conversion_id, options } => Some((*conversion_id, options.as_slice())),
            Cell::Text { .. } => None,
        })
    }
}

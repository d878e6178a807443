//! Este modulo define la asignacion de un tote a una ubicacion del catalogo,
//! que es la fila de la tabla de asignaciones

use std::{
    fmt,
    io::{Read, Write},
};

use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::aliases::{Color, IdAlmacenamiento};

/// Columnas de la tabla de asignaciones, en orden
pub const ENCABEZADO_ASIGNACIONES: [&str; 3] = ["tote_id", "storage_id", "color"];

/// Un tote queda definido por su identificador unico, la ubicacion que ocupa
/// y el color con el que se lo etiqueta
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct AsignacionTote {
    tote_id: String,
    #[serde(rename = "storage_id")]
    id_ubicacion: IdAlmacenamiento,
    color: Color,
}

impl AsignacionTote {
    pub fn new(tote_id: String, id_ubicacion: IdAlmacenamiento, color: Color) -> Self {
        Self {
            tote_id,
            id_ubicacion,
            color,
        }
    }

    /// Obtiene el identificador del tote
    pub fn get_id(&self) -> &str {
        &self.tote_id
    }

    /// Obtiene el identificador de la ubicacion asignada
    pub fn get_ubicacion(&self) -> &str {
        &self.id_ubicacion
    }

    pub fn get_color(&self) -> &str {
        &self.color
    }
}

impl fmt::Display for AsignacionTote {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "tote {} ", self.tote_id.blue())?;
        write!(
            f,
            "en {} de color {}",
            self.id_ubicacion.blue(),
            self.color
        )
    }
}

/// Parsea un lector de bytes (en formato csv, con encabezado) en un vector de
/// asignaciones. Simplemente encapsula las funcionalidades de la libreria de csv.
pub fn from_reader(reader: &mut dyn Read) -> csv::Result<Vec<AsignacionTote>> {
    csv::Reader::from_reader(reader).deserialize().collect()
}

/// Escribe las asignaciones en formato csv, siempre con encabezado
pub fn to_writer(writer: &mut dyn Write, asignaciones: &[AsignacionTote]) -> csv::Result<()> {
    let mut escritor = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    escritor.write_record(ENCABEZADO_ASIGNACIONES)?;
    for asignacion in asignaciones {
        escritor.serialize(asignacion)?;
    }
    escritor.flush()?;
    Ok(())
}

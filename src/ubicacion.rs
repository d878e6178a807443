//! Este modulo define las ubicaciones de almacenamiento que forman el catalogo
//! de un deposito, junto con el formato de sus identificadores y la lectura y
//! escritura de la tabla del catalogo

use std::{
    fmt,
    io::{Read, Write},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::aliases::{IdAlmacenamiento, IndiceColumna, NumeroFila, NumeroNivel, NumeroSeccion};
use crate::errores::ErrorDuranteParseo;

/// Columnas de la tabla del catalogo, en orden
pub const ENCABEZADO_CATALOGO: [&str; 2] = ["storage_id", "section"];

/// Cantidad de columnas que se pueden nombrar con una unica letra
pub const COLUMNAS_UNA_LETRA: u32 = 26;

const PREFIJO: &str = "storage";

/// Convierte el indice (desde 0) de una columna a su nombre en letras mayusculas.
/// Hasta la columna 25 el nombre es una unica letra (0 -> A, 25 -> Z); a partir
/// de ahi se sigue la numeracion de las planillas de calculo (26 -> AA, 27 -> AB).
pub fn letra_columna(indice: IndiceColumna) -> String {
    let mut restante = u64::from(indice) + 1;
    let mut letras = Vec::new();
    while restante > 0 {
        let resto = ((restante - 1) % 26) as u8;
        letras.push(char::from(b'A' + resto));
        restante = (restante - 1) / 26;
    }
    letras.iter().rev().collect()
}

/// Inversa de [`letra_columna`]. Devuelve `None` si el texto esta vacio,
/// contiene algo distinto de letras mayusculas o no entra en un indice.
pub fn indice_columna(letras: &str) -> Option<IndiceColumna> {
    if letras.is_empty() {
        return None;
    }
    let mut acumulado: IndiceColumna = 0;
    for c in letras.chars() {
        if !c.is_ascii_uppercase() {
            return None;
        }
        let valor = c as u32 - 'A' as u32 + 1;
        acumulado = acumulado.checked_mul(26)?.checked_add(valor)?;
    }
    Some(acumulado - 1)
}

/// Identificador de una ubicacion, con la forma `storage{seccion}-{fila}{columna}_{nivel}`.
/// La seccion, la fila y el nivel se guardan tal cual se muestran (desde 1),
/// mientras que la columna se guarda como indice desde 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdUbicacion {
    seccion: NumeroSeccion,
    fila: NumeroFila,
    columna: IndiceColumna,
    nivel: NumeroNivel,
}

impl IdUbicacion {
    /// Crea un identificador a partir de las coordenadas ya numeradas desde 1
    /// y el indice de columna
    pub fn new(
        seccion: NumeroSeccion,
        fila: NumeroFila,
        columna: IndiceColumna,
        nivel: NumeroNivel,
    ) -> Self {
        Self {
            seccion,
            fila,
            columna,
            nivel,
        }
    }

    pub fn get_seccion(&self) -> NumeroSeccion {
        self.seccion
    }

    pub fn get_fila(&self) -> NumeroFila {
        self.fila
    }

    pub fn get_columna(&self) -> IndiceColumna {
        self.columna
    }

    pub fn get_nivel(&self) -> NumeroNivel {
        self.nivel
    }
}

impl fmt::Display for IdUbicacion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}{}-{}{}_{}",
            PREFIJO,
            self.seccion,
            self.fila,
            letra_columna(self.columna),
            self.nivel
        )
    }
}

/// Parsea un numero que debe ser positivo
fn parsear_positivo(texto: &str) -> Option<u32> {
    if texto.is_empty() || !texto.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    texto.parse().ok().filter(|n| *n > 0)
}

impl FromStr for IdUbicacion {
    type Err = ErrorDuranteParseo;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalido = || ErrorDuranteParseo::IdentificadorInvalido(s.to_string());

        let resto = s.strip_prefix(PREFIJO).ok_or_else(invalido)?;
        let (seccion, posicion) = resto.split_once('-').ok_or_else(invalido)?;
        let (fila_columna, nivel) = posicion.split_once('_').ok_or_else(invalido)?;

        let inicio_columna = fila_columna
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(invalido)?;
        let (fila, columna) = fila_columna.split_at(inicio_columna);

        Ok(Self {
            seccion: parsear_positivo(seccion).ok_or_else(invalido)?,
            fila: parsear_positivo(fila).ok_or_else(invalido)?,
            columna: indice_columna(columna).ok_or_else(invalido)?,
            nivel: parsear_positivo(nivel).ok_or_else(invalido)?,
        })
    }
}

/// Una ubicacion del catalogo: su identificador y la seccion a la que pertenece.
/// Es la fila de la tabla del catalogo.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Ubicacion {
    #[serde(rename = "storage_id")]
    id: IdAlmacenamiento,
    #[serde(rename = "section")]
    seccion: NumeroSeccion,
}

impl Ubicacion {
    /// Crea la ubicacion correspondiente a un identificador; la seccion se toma
    /// del mismo identificador, por lo que siempre coinciden
    pub fn new(id: &IdUbicacion) -> Self {
        Self {
            id: id.to_string(),
            seccion: id.get_seccion(),
        }
    }

    /// Obtiene el identificador textual
    pub fn get_id(&self) -> &str {
        &self.id
    }

    /// Obtiene el numero de seccion
    pub fn get_seccion(&self) -> NumeroSeccion {
        self.seccion
    }

    /// Interpreta el identificador textual en sus coordenadas
    pub fn id_ubicacion(&self) -> Result<IdUbicacion, ErrorDuranteParseo> {
        self.id.parse()
    }
}

/// Parsea un lector de bytes (en formato csv, con encabezado) en un vector de
/// ubicaciones. Simplemente encapsula las funcionalidades de la libreria de csv.
pub fn from_reader(reader: &mut dyn Read) -> csv::Result<Vec<Ubicacion>> {
    csv::Reader::from_reader(reader).deserialize().collect()
}

/// Escribe las ubicaciones en formato csv. El encabezado se escribe siempre,
/// aun si no hay ubicaciones.
pub fn to_writer(writer: &mut dyn Write, ubicaciones: &[Ubicacion]) -> csv::Result<()> {
    let mut escritor = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    escritor.write_record(ENCABEZADO_CATALOGO)?;
    for ubicacion in ubicaciones {
        escritor.serialize(ubicacion)?;
    }
    escritor.flush()?;
    Ok(())
}

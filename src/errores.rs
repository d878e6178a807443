//! Este modulo define tipos de errores que pueden darse en
//! la ejecucion

use std::{fmt, io};

/// Enumerativo que engloba a todos los tipos de errores posibles desde
/// todos los modulos
#[derive(Debug)]
pub enum Error {
    ErrorDeParseo(ErrorDuranteParseo),
    ErrorDeEscritura(ErrorDuranteEscritura),
    ErrorDeAsignacion(ErrorAsignacion),
}

impl From<ErrorDuranteParseo> for Error {
    fn from(err: ErrorDuranteParseo) -> Self {
        Error::ErrorDeParseo(err)
    }
}

impl From<ErrorDuranteEscritura> for Error {
    fn from(err: ErrorDuranteEscritura) -> Self {
        Error::ErrorDeEscritura(err)
    }
}

impl From<ErrorAsignacion> for Error {
    fn from(err: ErrorAsignacion) -> Self {
        Error::ErrorDeAsignacion(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::ErrorDeParseo(e) => write!(f, "error de lectura: {}", e),
            Error::ErrorDeEscritura(e) => write!(f, "error de escritura: {}", e),
            Error::ErrorDeAsignacion(e) => write!(f, "error de asignacion: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ErrorDeParseo(e) => Some(e),
            Error::ErrorDeEscritura(e) => Some(e),
            Error::ErrorDeAsignacion(e) => Some(e),
        }
    }
}

/// Enumerativo que define todos los errores que pueden darse
/// en el parseo de los archivos de catalogo y de asignaciones.
/// Los errores de entrada/salida y de formato se propagan tal cual
/// los reporta la libreria subyacente.
#[derive(Debug)]
pub enum ErrorDuranteParseo {
    NoSePudoAbrirArchivo(io::Error),
    FormatoArchivoInvalido(csv::Error),
    IdentificadorInvalido(String),
}

impl From<io::Error> for ErrorDuranteParseo {
    fn from(err: io::Error) -> Self {
        ErrorDuranteParseo::NoSePudoAbrirArchivo(err)
    }
}

impl From<csv::Error> for ErrorDuranteParseo {
    fn from(err: csv::Error) -> Self {
        ErrorDuranteParseo::FormatoArchivoInvalido(err)
    }
}

impl fmt::Display for ErrorDuranteParseo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorDuranteParseo::NoSePudoAbrirArchivo(e) => {
                write!(f, "no se pudo abrir el archivo: {}", e)
            }
            ErrorDuranteParseo::FormatoArchivoInvalido(e) => {
                write!(f, "formato de archivo invalido: {}", e)
            }
            ErrorDuranteParseo::IdentificadorInvalido(id) => {
                write!(f, "identificador de ubicacion invalido: '{}'", id)
            }
        }
    }
}

impl std::error::Error for ErrorDuranteParseo {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ErrorDuranteParseo::NoSePudoAbrirArchivo(e) => Some(e),
            ErrorDuranteParseo::FormatoArchivoInvalido(e) => Some(e),
            ErrorDuranteParseo::IdentificadorInvalido(_) => None,
        }
    }
}

/// Enumerativo que define todos los errores que pueden darse
/// al escribir las tablas generadas
#[derive(Debug)]
pub enum ErrorDuranteEscritura {
    NoSePudoCrearArchivo(io::Error),
    NoSePudoSerializar(csv::Error),
}

impl From<io::Error> for ErrorDuranteEscritura {
    fn from(err: io::Error) -> Self {
        ErrorDuranteEscritura::NoSePudoCrearArchivo(err)
    }
}

impl From<csv::Error> for ErrorDuranteEscritura {
    fn from(err: csv::Error) -> Self {
        ErrorDuranteEscritura::NoSePudoSerializar(err)
    }
}

impl fmt::Display for ErrorDuranteEscritura {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorDuranteEscritura::NoSePudoCrearArchivo(e) => {
                write!(f, "no se pudo crear el archivo: {}", e)
            }
            ErrorDuranteEscritura::NoSePudoSerializar(e) => {
                write!(f, "no se pudo serializar la tabla: {}", e)
            }
        }
    }
}

impl std::error::Error for ErrorDuranteEscritura {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ErrorDuranteEscritura::NoSePudoCrearArchivo(e) => Some(e),
            ErrorDuranteEscritura::NoSePudoSerializar(e) => Some(e),
        }
    }
}

/// Enumerativo que define todos los errores que pueden darse
/// al asignar totes a ubicaciones
#[derive(Debug, PartialEq)]
pub enum ErrorAsignacion {
    /// Se pidieron mas totes que ubicaciones distintas hay en el catalogo
    CapacidadExcedida { pedidos: usize, disponibles: usize },
    PaletaVacia,
}

impl fmt::Display for ErrorAsignacion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorAsignacion::CapacidadExcedida {
                pedidos,
                disponibles,
            } => write!(
                f,
                "la cantidad de totes ({}) no puede superar la cantidad de ubicaciones ({})",
                pedidos, disponibles
            ),
            ErrorAsignacion::PaletaVacia => write!(f, "la paleta de colores esta vacia"),
        }
    }
}

impl std::error::Error for ErrorAsignacion {}

//! Este modulo define los argumentos del programa generador y la ejecucion
//! de cada uno de sus comandos

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use rand::{rngs::StdRng, thread_rng, RngCore, SeedableRng};

use crate::aliases::{CantidadTotes, IndiceColumna, NumeroFila, NumeroNivel, NumeroSeccion};
use crate::errores::Error;
use crate::generators::{catalogo_gen, totes_gen};

/// Archivo del catalogo usado cuando no se indica otro
pub const ARCHIVO_CATALOGO: &str = "storage_list.csv";

/// Archivo de asignaciones usado cuando no se indica otro
pub const ARCHIVO_ASIGNACIONES: &str = "assigned_totes.csv";

/// Genera el catalogo de ubicaciones de un deposito y asigna totes a
/// algunas de ellas
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Argumentos {
    #[command(subcommand)]
    pub comando: Comando,

    /// Muestra tambien los mensajes de depuracion
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Muestra solo los errores
    #[arg(short, long, global = true, default_value_t = false, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Comando {
    /// Genera el archivo del catalogo de ubicaciones
    Catalogo {
        #[command(flatten)]
        dimensiones: Dimensiones,

        /// Archivo csv donde se escribe el catalogo
        #[arg(long, default_value = ARCHIVO_CATALOGO)]
        salida: String,
    },
    /// Asigna totes a ubicaciones de un catalogo ya generado
    Totes {
        #[command(flatten)]
        opciones: OpcionesTotes,

        /// Archivo csv del catalogo a leer
        #[arg(long, default_value = ARCHIVO_CATALOGO)]
        catalogo: String,

        /// Archivo csv donde se escriben las asignaciones
        #[arg(long, default_value = ARCHIVO_ASIGNACIONES)]
        salida: String,
    },
    /// Genera el catalogo y a continuacion las asignaciones
    Todo {
        #[command(flatten)]
        dimensiones: Dimensiones,

        #[command(flatten)]
        opciones: OpcionesTotes,

        /// Archivo csv del catalogo
        #[arg(long, default_value = ARCHIVO_CATALOGO)]
        catalogo: String,

        /// Archivo csv donde se escriben las asignaciones
        #[arg(long, default_value = ARCHIVO_ASIGNACIONES)]
        salida: String,
    },
}

/// Dimensiones del deposito
#[derive(Args, Debug, Clone, PartialEq)]
pub struct Dimensiones {
    #[arg(long, default_value_t = 4)]
    pub filas: NumeroFila,

    /// Hasta 26 columnas se nombran con una unica letra
    #[arg(long, default_value_t = 3)]
    pub columnas: IndiceColumna,

    #[arg(long, default_value_t = 5)]
    pub niveles: NumeroNivel,

    #[arg(long, default_value_t = 3)]
    pub secciones: NumeroSeccion,
}

/// Parametros de la asignacion de totes
#[derive(Args, Debug, Clone, PartialEq)]
pub struct OpcionesTotes {
    /// Cantidad de totes a asignar
    #[arg(long, default_value_t = 80)]
    pub cantidad: CantidadTotes,

    /// Color de la paleta, se puede repetir. Sin este argumento se usa la paleta por defecto
    #[arg(long = "color")]
    pub colores: Vec<String>,

    /// Semilla para obtener asignaciones reproducibles
    #[arg(long)]
    pub semilla: Option<u64>,
}

impl OpcionesTotes {
    /// Obtiene la paleta a usar
    pub fn paleta(&self) -> Vec<String> {
        if self.colores.is_empty() {
            totes_gen::PALETA_POR_DEFECTO
                .iter()
                .map(|c| c.to_string())
                .collect()
        } else {
            self.colores.clone()
        }
    }

    fn rng(&self) -> Box<dyn RngCore> {
        match self.semilla {
            Some(semilla) => Box::new(StdRng::seed_from_u64(semilla)),
            None => Box::new(thread_rng()),
        }
    }
}

impl Argumentos {
    /// Nivel de log por defecto segun los flags recibidos
    pub fn nivel_log(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }

    /// Ejecuta el comando pedido, imprimiendo por pantalla un resumen del resultado
    pub fn ejecutar(&self) -> Result<(), Error> {
        match &self.comando {
            Comando::Catalogo {
                dimensiones,
                salida,
            } => {
                generar_catalogo(dimensiones, salida)?;
            }
            Comando::Totes {
                opciones,
                catalogo,
                salida,
            } => {
                generar_totes(opciones, catalogo, salida)?;
            }
            Comando::Todo {
                dimensiones,
                opciones,
                catalogo,
                salida,
            } => {
                generar_catalogo(dimensiones, catalogo)?;
                generar_totes(opciones, catalogo, salida)?;
            }
        }
        Ok(())
    }
}

fn generar_catalogo(dimensiones: &Dimensiones, salida: &str) -> Result<(), Error> {
    let filas = catalogo_gen::generar_arch_catalogo(
        salida,
        dimensiones.filas,
        dimensiones.columnas,
        dimensiones.niveles,
        dimensiones.secciones,
    )?;
    println!(
        "Catalogo con {} ubicaciones en {}",
        filas.to_string().blue(),
        salida.blue()
    );
    Ok(())
}

fn generar_totes(opciones: &OpcionesTotes, catalogo: &str, salida: &str) -> Result<(), Error> {
    let mut rng = opciones.rng();
    let totes = totes_gen::generar_arch_asignaciones(
        catalogo,
        salida,
        opciones.cantidad,
        &opciones.paleta(),
        rng.as_mut(),
    )?;
    println!(
        "{} totes asignados en {}",
        totes.to_string().blue(),
        salida.blue()
    );
    Ok(())
}

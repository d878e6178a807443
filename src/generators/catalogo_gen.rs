//! Este modulo permite generar el catalogo de ubicaciones de un deposito,
//! enumerando todas las combinaciones de fila, columna, nivel y seccion. El
//! archivo generado es en formato csv, con las columnas `storage_id` y `section`.

use std::fs::File;

use log::{debug, info, warn};

use crate::aliases::{IndiceColumna, NumeroFila, NumeroNivel, NumeroSeccion};
use crate::errores::ErrorDuranteEscritura;
use crate::ubicacion::{self, IdUbicacion, Ubicacion, COLUMNAS_UNA_LETRA};

/// Genera el catalogo completo: una ubicacion por cada combinacion de fila,
/// columna, nivel y seccion. Si alguna de las cantidades es cero el catalogo
/// queda vacio.
///
/// Con mas de 26 columnas los nombres de columna pasan a tener mas de una
/// letra (`AA`, `AB`, ...), cosa que los consumidores que asumen una unica
/// letra no interpretan bien.
pub fn generar_catalogo(
    filas: NumeroFila,
    columnas: IndiceColumna,
    niveles: NumeroNivel,
    secciones: NumeroSeccion,
) -> Vec<Ubicacion> {
    if columnas > COLUMNAS_UNA_LETRA {
        warn!(
            "Se pidieron {} columnas; a partir de la {} el nombre tiene mas de una letra",
            columnas,
            COLUMNAS_UNA_LETRA + 1
        );
    }

    let total = [filas, columnas, niveles, secciones]
        .iter()
        .try_fold(1usize, |acc, n| acc.checked_mul(*n as usize))
        .unwrap_or(0);
    let mut catalogo = Vec::with_capacity(total);

    for fila in 0..filas {
        for columna in 0..columnas {
            for nivel in 0..niveles {
                for seccion in 0..secciones {
                    let id = IdUbicacion::new(seccion + 1, fila + 1, columna, nivel + 1);
                    catalogo.push(Ubicacion::new(&id));
                }
            }
        }
    }
    catalogo
}

/// A partir de un nombre de archivo y las dimensiones del deposito genera el
/// archivo del catalogo. Devuelve la cantidad de ubicaciones escritas.
pub fn generar_arch_catalogo(
    nombre_arch: &str,
    filas: NumeroFila,
    columnas: IndiceColumna,
    niveles: NumeroNivel,
    secciones: NumeroSeccion,
) -> Result<usize, ErrorDuranteEscritura> {
    debug!(
        "Generando catalogo de {} filas, {} columnas, {} niveles y {} secciones",
        filas, columnas, niveles, secciones
    );
    let catalogo = generar_catalogo(filas, columnas, niveles, secciones);

    let mut file = File::create(nombre_arch)?;
    ubicacion::to_writer(&mut file, &catalogo)?;

    info!(
        "Archivo CSV '{}' generado con {} filas.",
        nombre_arch,
        catalogo.len()
    );
    Ok(catalogo.len())
}

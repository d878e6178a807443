//! Este modulo permite asignar totes a ubicaciones tomadas de un catalogo.
//! Cada tote recibe un identificador unico aleatorio, una ubicacion distinta
//! de la de los demas y un color de una paleta fija. El archivo generado es
//! en formato csv, con las columnas `tote_id`, `storage_id` y `color`.

use std::{collections::HashSet, fs::File};

use log::{debug, info};
use rand::{seq::SliceRandom, Rng};
use uuid::Builder;

use crate::aliases::CantidadTotes;
use crate::errores::{Error, ErrorAsignacion, ErrorDuranteEscritura, ErrorDuranteParseo};
use crate::tote::{self, AsignacionTote};
use crate::ubicacion::{self, Ubicacion};

/// Paleta usada cuando no se indica otra
pub const PALETA_POR_DEFECTO: [&str; 4] = ["#FF5733", "#33FF57", "#3357FF", "#F0FF33"];

/// Obtiene los identificadores distintos del catalogo, en el orden en que
/// aparecen por primera vez
pub fn ubicaciones_distintas(catalogo: &[Ubicacion]) -> Vec<&str> {
    let mut vistas = HashSet::new();
    catalogo
        .iter()
        .map(|u| u.get_id())
        .filter(|id| vistas.insert(*id))
        .collect()
}

/// Genera un identificador de tote: 128 bits aleatorios con formato de UUID v4.
/// No se reintenta ante colisiones, su probabilidad es despreciable.
fn nuevo_id_tote<R: Rng + ?Sized>(rng: &mut R) -> String {
    Builder::from_random_bytes(rng.gen()).into_uuid().to_string()
}

/// Asigna `cantidad_totes` totes a ubicaciones distintas del catalogo, cada uno
/// con un color elegido de la paleta.
///
/// Falla con [`ErrorAsignacion::CapacidadExcedida`] si se piden mas totes que
/// ubicaciones distintas, antes de generar nada.
pub fn generar_asignaciones<R, C>(
    catalogo: &[Ubicacion],
    cantidad_totes: CantidadTotes,
    paleta: &[C],
    rng: &mut R,
) -> Result<Vec<AsignacionTote>, ErrorAsignacion>
where
    R: Rng + ?Sized,
    C: AsRef<str>,
{
    let mut ids_ubicaciones = ubicaciones_distintas(catalogo);
    if cantidad_totes > ids_ubicaciones.len() {
        return Err(ErrorAsignacion::CapacidadExcedida {
            pedidos: cantidad_totes,
            disponibles: ids_ubicaciones.len(),
        });
    }
    if cantidad_totes > 0 && paleta.is_empty() {
        return Err(ErrorAsignacion::PaletaVacia);
    }

    let totes: Vec<String> = (0..cantidad_totes).map(|_| nuevo_id_tote(rng)).collect();

    // Fisher-Yates parcial: solo se mezclan las primeras `cantidad_totes` posiciones
    let (elegidas, _) = ids_ubicaciones.partial_shuffle(rng, cantidad_totes);

    let colores = (0..cantidad_totes)
        .map(|_| paleta.choose(rng).map(|c| c.as_ref().to_string()))
        .collect::<Option<Vec<_>>>()
        .ok_or(ErrorAsignacion::PaletaVacia)?;

    Ok(totes
        .into_iter()
        .zip(elegidas.iter())
        .zip(colores)
        .map(|((tote_id, id_ubicacion), color)| {
            AsignacionTote::new(tote_id, id_ubicacion.to_string(), color)
        })
        .collect())
}

/// Obtiene el catalogo de ubicaciones guardado en el archivo dado
pub fn obtener_catalogo(nombre_arch: &str) -> Result<Vec<Ubicacion>, ErrorDuranteParseo> {
    let mut catalogo_csv = File::open(nombre_arch)?;
    let catalogo = ubicacion::from_reader(&mut catalogo_csv)?;
    Ok(catalogo)
}

/// A partir del archivo de catalogo, una cantidad de totes y una paleta genera
/// el archivo de asignaciones. Si la asignacion no es posible no se crea el
/// archivo de salida. Devuelve la cantidad de totes escritos.
pub fn generar_arch_asignaciones<R, C>(
    arch_catalogo: &str,
    arch_salida: &str,
    cantidad_totes: CantidadTotes,
    paleta: &[C],
    rng: &mut R,
) -> Result<usize, Error>
where
    R: Rng + ?Sized,
    C: AsRef<str>,
{
    let catalogo = obtener_catalogo(arch_catalogo)?;
    debug!(
        "Leidas {} ubicaciones de '{}', asignando {} totes",
        catalogo.len(),
        arch_catalogo,
        cantidad_totes
    );

    let asignaciones = generar_asignaciones(&catalogo, cantidad_totes, paleta, rng)?;
    for asignacion in &asignaciones {
        debug!("Asignado {}", asignacion);
    }

    let mut file = File::create(arch_salida).map_err(Into::<ErrorDuranteEscritura>::into)?;
    tote::to_writer(&mut file, &asignaciones).map_err(Into::<ErrorDuranteEscritura>::into)?;

    info!(
        "Archivo CSV '{}' generado con {} filas.",
        arch_salida,
        asignaciones.len()
    );
    Ok(asignaciones.len())
}

#[cfg(test)]
mod test {
    use rand::{rngs::StdRng, SeedableRng};
    use uuid::Uuid;

    use super::*;
    use crate::generators::catalogo_gen::{generar_arch_catalogo, generar_catalogo};

    fn verificar_asignaciones(catalogo: &[Ubicacion], asignaciones: &[AsignacionTote]) {
        let ids_catalogo: HashSet<&str> = catalogo.iter().map(|u| u.get_id()).collect();

        let totes: HashSet<&str> = asignaciones.iter().map(|a| a.get_id()).collect();
        assert_eq!(totes.len(), asignaciones.len());

        let ubicaciones: HashSet<&str> = asignaciones.iter().map(|a| a.get_ubicacion()).collect();
        assert_eq!(ubicaciones.len(), asignaciones.len());
        assert!(ubicaciones.is_subset(&ids_catalogo));

        for asignacion in asignaciones {
            assert!(PALETA_POR_DEFECTO.contains(&asignacion.get_color()));
            let id = Uuid::parse_str(asignacion.get_id()).unwrap();
            assert_eq!(id.get_version_num(), 4);
        }
    }

    #[test]
    fn asignar_ochenta_totes() {
        let catalogo = generar_catalogo(4, 3, 5, 3);
        let mut rng = StdRng::seed_from_u64(7);

        let asignaciones =
            generar_asignaciones(&catalogo, 80, &PALETA_POR_DEFECTO, &mut rng).unwrap();

        assert_eq!(asignaciones.len(), 80);
        verificar_asignaciones(&catalogo, &asignaciones);
    }

    #[test]
    fn demasiados_totes() {
        let catalogo = generar_catalogo(4, 3, 5, 3);
        let mut rng = StdRng::seed_from_u64(7);

        let res = generar_asignaciones(&catalogo, 200, &PALETA_POR_DEFECTO, &mut rng);

        assert_eq!(
            res,
            Err(ErrorAsignacion::CapacidadExcedida {
                pedidos: 200,
                disponibles: 180
            })
        );
    }

    #[test]
    fn tantos_totes_como_ubicaciones() {
        let catalogo = generar_catalogo(2, 2, 2, 2);
        let mut rng = StdRng::seed_from_u64(1);

        let asignaciones =
            generar_asignaciones(&catalogo, catalogo.len(), &PALETA_POR_DEFECTO, &mut rng)
                .unwrap();

        assert_eq!(asignaciones.len(), 16);
        verificar_asignaciones(&catalogo, &asignaciones);
    }

    #[test]
    fn las_ubicaciones_repetidas_cuentan_una_vez() {
        let mut catalogo = generar_catalogo(1, 1, 1, 2);
        catalogo.extend(catalogo.clone());
        assert_eq!(catalogo.len(), 4);
        assert_eq!(ubicaciones_distintas(&catalogo).len(), 2);

        let mut rng = StdRng::seed_from_u64(3);
        let res = generar_asignaciones(&catalogo, 3, &PALETA_POR_DEFECTO, &mut rng);
        assert!(matches!(
            res,
            Err(ErrorAsignacion::CapacidadExcedida { disponibles: 2, .. })
        ));

        let asignaciones =
            generar_asignaciones(&catalogo, 2, &PALETA_POR_DEFECTO, &mut rng).unwrap();
        verificar_asignaciones(&catalogo, &asignaciones);
    }

    #[test]
    fn cero_totes() {
        let mut rng = StdRng::seed_from_u64(0);
        let vacia: [&str; 0] = [];

        assert!(generar_asignaciones(&[], 0, &vacia, &mut rng)
            .unwrap()
            .is_empty());
        assert!(matches!(
            generar_asignaciones(&[], 1, &PALETA_POR_DEFECTO, &mut rng),
            Err(ErrorAsignacion::CapacidadExcedida {
                pedidos: 1,
                disponibles: 0
            })
        ));
    }

    #[test]
    fn paleta_vacia() {
        let catalogo = generar_catalogo(1, 1, 1, 1);
        let mut rng = StdRng::seed_from_u64(0);
        let vacia: Vec<String> = Vec::new();

        let res = generar_asignaciones(&catalogo, 1, &vacia, &mut rng);
        assert_eq!(res, Err(ErrorAsignacion::PaletaVacia));
    }

    #[test]
    fn paleta_propia() {
        let catalogo = generar_catalogo(3, 3, 3, 3);
        let paleta = vec!["rojo".to_string()];
        let mut rng = StdRng::seed_from_u64(11);

        let asignaciones = generar_asignaciones(&catalogo, 20, &paleta, &mut rng).unwrap();
        assert!(asignaciones.iter().all(|a| a.get_color() == "rojo"));
    }

    #[test]
    fn misma_semilla_mismas_asignaciones() {
        let catalogo = generar_catalogo(4, 3, 5, 3);

        let primera = generar_asignaciones(
            &catalogo,
            80,
            &PALETA_POR_DEFECTO,
            &mut StdRng::seed_from_u64(42),
        )
        .unwrap();
        let segunda = generar_asignaciones(
            &catalogo,
            80,
            &PALETA_POR_DEFECTO,
            &mut StdRng::seed_from_u64(42),
        )
        .unwrap();
        let otra = generar_asignaciones(
            &catalogo,
            80,
            &PALETA_POR_DEFECTO,
            &mut StdRng::seed_from_u64(43),
        )
        .unwrap();

        assert_eq!(primera, segunda);
        assert_ne!(primera, otra);
        assert_eq!(primera.len(), otra.len());
    }

    #[test]
    fn generar_archivo_asignaciones() {
        let dir = tempfile::tempdir().unwrap();
        let arch_catalogo = dir.path().join("storage_list.csv");
        let arch_totes = dir.path().join("assigned_totes.csv");
        let (arch_catalogo, arch_totes) =
            (arch_catalogo.to_str().unwrap(), arch_totes.to_str().unwrap());
        let mut rng = StdRng::seed_from_u64(5);

        generar_arch_catalogo(arch_catalogo, 4, 3, 5, 3).unwrap();
        let res =
            generar_arch_asignaciones(arch_catalogo, arch_totes, 80, &PALETA_POR_DEFECTO, &mut rng);
        let mut totes_csv = File::open(arch_totes).unwrap();
        let asignaciones = tote::from_reader(&mut totes_csv).unwrap();

        assert_eq!(res.unwrap(), 80);
        assert_eq!(asignaciones.len(), 80);
        verificar_asignaciones(&obtener_catalogo(arch_catalogo).unwrap(), &asignaciones);
    }

    #[test]
    fn capacidad_excedida_no_crea_archivo() {
        let dir = tempfile::tempdir().unwrap();
        let arch_catalogo = dir.path().join("storage_list.csv");
        let arch_totes = dir.path().join("assigned_totes.csv");
        let mut rng = StdRng::seed_from_u64(5);

        generar_arch_catalogo(arch_catalogo.to_str().unwrap(), 4, 3, 5, 3).unwrap();
        let res = generar_arch_asignaciones(
            arch_catalogo.to_str().unwrap(),
            arch_totes.to_str().unwrap(),
            200,
            &PALETA_POR_DEFECTO,
            &mut rng,
        );

        assert!(matches!(
            res,
            Err(Error::ErrorDeAsignacion(
                ErrorAsignacion::CapacidadExcedida { .. }
            ))
        ));
        assert!(!arch_totes.exists());
    }

    #[test]
    fn catalogo_inexistente() {
        let dir = tempfile::tempdir().unwrap();
        let arch_catalogo = dir.path().join("no_existe.csv");
        let arch_totes = dir.path().join("assigned_totes.csv");
        let mut rng = StdRng::seed_from_u64(5);

        let res = generar_arch_asignaciones(
            arch_catalogo.to_str().unwrap(),
            arch_totes.to_str().unwrap(),
            1,
            &PALETA_POR_DEFECTO,
            &mut rng,
        );

        assert!(matches!(
            res,
            Err(Error::ErrorDeParseo(
                ErrorDuranteParseo::NoSePudoAbrirArchivo(_)
            ))
        ));
        assert!(!arch_totes.exists());
    }

    #[test]
    fn catalogo_mal_formado() {
        let dir = tempfile::tempdir().unwrap();
        let arch_catalogo = dir.path().join("storage_list.csv");
        std::fs::write(&arch_catalogo, "storage_id,section\nstorage1-1A_1,uno\n").unwrap();

        let res = obtener_catalogo(arch_catalogo.to_str().unwrap());
        assert!(matches!(
            res,
            Err(ErrorDuranteParseo::FormatoArchivoInvalido(_))
        ));
    }
}

//! Genera el catalogo de ubicaciones (`storage_list.csv`) y la asignacion de
//! totes (`assigned_totes.csv`), segun el comando recibido.

use almacen::errores;
use almacen::generators::argumentos::Argumentos;
use clap::Parser;

fn main() -> Result<(), errores::Error> {
    let argumentos = Argumentos::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(argumentos.nivel_log()),
    )
    .init();

    argumentos.ejecutar().map_err(|error| {
        log::error!("{}", error);
        error
    })
}

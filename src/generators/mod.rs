//! Este modulo agrupa los generadores de las tablas del deposito: primero el
//! catalogo de ubicaciones y luego, a partir de el, la asignacion de totes

pub mod argumentos;
pub mod catalogo_gen;
pub mod totes_gen;

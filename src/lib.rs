pub mod aliases;
pub mod errores;
pub mod generators;
pub mod tote;
pub mod ubicacion;

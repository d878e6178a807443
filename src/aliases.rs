//! Este modulo define aliases a los distintos tipos de datos
//! para hacer sencillo el pase de uno al otro y dar mayor
//! claridad al codigo

pub type NumeroSeccion = u32;
pub type NumeroFila = u32;
pub type IndiceColumna = u32;
pub type NumeroNivel = u32;
pub type CantidadTotes = usize;
pub type IdAlmacenamiento = String;
pub type Color = String;

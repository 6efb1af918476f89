//! Generadores de datos: las ordenes aleatorias y el script SQL que las inserta

pub mod ordenes_gen;
pub mod sql_gen;

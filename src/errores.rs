//! Este modulo define tipos de errores que pueden darse en
//! la ejecucion

use std::io;

use crate::aliases::IdProducto;

/// Enumerativo que engloba a todos los tipos de errores posibles desde
/// todos los modulos
#[derive(Debug)]
pub enum Error {
    ErrorDeGeneracion(ErrorGenerador),
    ErrorDeEscritura(ErrorEscritura),
}

impl From<ErrorGenerador> for Error {
    fn from(err: ErrorGenerador) -> Self {
        Error::ErrorDeGeneracion(err)
    }
}

impl From<ErrorEscritura> for Error {
    fn from(err: ErrorEscritura) -> Self {
        Error::ErrorDeEscritura(err)
    }
}

/// Enumerativo que define todos los errores que pueden darse
/// al generar las ordenes. Todos provienen de una configuracion
/// que no permite realizar el muestreo pedido.
#[derive(Debug, PartialEq)]
pub enum ErrorGenerador {
    /// Se pidieron mas productos distintos de los que hay disponibles
    PoolAgotado {
        pedidos: usize,
        disponibles: usize,
    },
    /// Un pool de ids o de estados quedo vacio
    PoolVacio,
    /// El producto no figura en la lista de precios
    ProductoSinPrecio(IdProducto),
    /// Alguna fecha no existe o la fecha final es anterior a la inicial
    VentanaFechasInvalida,
    /// Algun rango de la configuracion tiene el minimo mayor al maximo
    RangoInvertido,
}

/// Enumerativo que define los errores que pueden darse
/// al volcar el script SQL a disco
#[derive(Debug)]
pub enum ErrorEscritura {
    NoSePudoCrearArchivo(io::Error),
    NoSePudoEscribir(io::Error),
}

impl From<io::Error> for ErrorEscritura {
    fn from(err: io::Error) -> Self {
        ErrorEscritura::NoSePudoEscribir(err)
    }
}

//! Este modulo define aliases a los distintos tipos de datos
//! para hacer sencillo el pase de uno al otro y dar mayor
//! claridad al codigo

pub type IdOrden = u32;
pub type IdItemOrden = u32;
pub type IdCliente = u16;
pub type IdProducto = u16;
pub type CantidadProducto = u8;
pub type Dinero = f64;

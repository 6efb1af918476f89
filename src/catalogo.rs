//! Este modulo define los datos fijos sobre los que se generan las ordenes:
//! los estados posibles de una orden y la lista de precios de los productos.

use crate::aliases::{Dinero, IdProducto};

/// Estados posibles de una orden. El peso de cada estado esta dado por la
/// cantidad de veces que aparece: 70% completadas, y 10% para cada uno
/// de los restantes.
pub const ESTADOS_ORDEN: [&str; 10] = [
    "Completed",
    "Completed",
    "Completed",
    "Completed",
    "Completed",
    "Completed",
    "Completed",
    "Processing",
    "Cancelled",
    "Returned",
];

/// Precio unitario de cada producto, la posicion `i` corresponde al
/// producto con id `i + 1`. Coincide con la tabla de productos.
pub const PRECIOS_PRODUCTOS: [Dinero; 40] = [
    149.99, 399.99, 49.99, 79.99, 129.99, 29.99, 79.99, 199.99, 139.99, 89.99, //
    89.99, 249.99, 39.99, 69.99, 49.99, 34.99, 199.99, 599.99, 79.99, 59.99, //
    24.99, 34.99, 14.99, 19.99, 29.99, 44.99, 79.99, 69.99, 24.99, 89.99, //
    99.99, 79.99, 39.99, 119.99, 149.99, 29.99, 19.99, 24.99, 44.99, 34.99,
];

/// Busca el precio unitario de un producto. Devuelve `None` si el id
/// no figura en la lista de precios.
pub fn precio_unitario(id_producto: IdProducto) -> Option<Dinero> {
    let indice = usize::from(id_producto).checked_sub(1)?;
    PRECIOS_PRODUCTOS.get(indice).copied()
}

use aliases::{Dinero, IdCliente, IdOrden, IdProducto};

pub mod aliases;
pub mod catalogo;
pub mod errores;
pub mod generators;
pub mod orden;
pub mod resumen;

/// Cantidad de ordenes a generar en cada ejecucion
pub const CANTIDAD_ORDENES: IdOrden = 2000;

/// Archivo donde se escribe el script SQL resultante
pub const ARCHIVO_SALIDA: &str = "03_generate_orders.sql";

/// Cantidad maxima de filas por cada INSERT de items (SQLite limita la
/// cantidad de filas por sentencia)
pub const TAM_LOTE_ITEMS: usize = 500;

/// Los clientes se identifican con ids en `1..=CANTIDAD_CLIENTES`
pub const CANTIDAD_CLIENTES: IdCliente = 100;

/// Los productos se identifican con ids en `1..=CANTIDAD_PRODUCTOS`
pub const CANTIDAD_PRODUCTOS: IdProducto = 40;

/// Primer dia posible de una orden (año, mes, dia)
pub const FECHA_INICIO: (i32, u32, u32) = (2023, 1, 1);

/// Ultimo dia posible de una orden, inclusive (año, mes, dia)
pub const FECHA_FIN: (i32, u32, u32) = (2024, 12, 31);

/// Rango del costo de envio de una orden
pub const RANGO_ENVIO: (Dinero, Dinero) = (5.0, 25.0);

/// Rango de la cantidad de productos distintos por orden
pub const RANGO_ITEMS_POR_ORDEN: (usize, usize) = (1, 5);

/// Rango de unidades pedidas de cada producto
pub const RANGO_CANTIDAD: (u8, u8) = (1, 3);

/// Probabilidad de que un item tenga descuento
pub const PROBABILIDAD_DESCUENTO: f64 = 0.3;

/// Rango de la fraccion descontada sobre el subtotal de un item
pub const RANGO_DESCUENTO: (f64, f64) = (0.05, 0.20);

/// Redondea un monto a dos decimales
pub fn redondear_centavos(monto: Dinero) -> Dinero {
    (monto * 100.0).round() / 100.0
}

/// Parametros de la generacion. Por defecto toma las constantes del crate,
/// que son las que usa el binario.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigGenerador {
    pub cantidad_ordenes: IdOrden,
    pub cantidad_clientes: IdCliente,
    pub cantidad_productos: IdProducto,
    pub fecha_inicio: (i32, u32, u32),
    pub fecha_fin: (i32, u32, u32),
    pub rango_envio: (Dinero, Dinero),
    pub rango_items_por_orden: (usize, usize),
    pub rango_cantidad: (u8, u8),
    pub probabilidad_descuento: f64,
    pub rango_descuento: (f64, f64),
    pub tam_lote: usize,
    pub archivo_salida: String,
}

impl Default for ConfigGenerador {
    fn default() -> Self {
        Self {
            cantidad_ordenes: CANTIDAD_ORDENES,
            cantidad_clientes: CANTIDAD_CLIENTES,
            cantidad_productos: CANTIDAD_PRODUCTOS,
            fecha_inicio: FECHA_INICIO,
            fecha_fin: FECHA_FIN,
            rango_envio: RANGO_ENVIO,
            rango_items_por_orden: RANGO_ITEMS_POR_ORDEN,
            rango_cantidad: RANGO_CANTIDAD,
            probabilidad_descuento: PROBABILIDAD_DESCUENTO,
            rango_descuento: RANGO_DESCUENTO,
            tam_lote: TAM_LOTE_ITEMS,
            archivo_salida: ARCHIVO_SALIDA.to_string(),
        }
    }
}

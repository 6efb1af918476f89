//! Este modulo define las estructuras de ordenes y de items de orden, que
//! son las filas que luego se vuelcan a las tablas `orders` y `order_items`

use std::fmt;

use chrono::NaiveDate;
use colored::Colorize;
#[cfg(test)]
use serde::Serialize;

use crate::aliases::{CantidadProducto, Dinero, IdCliente, IdItemOrden, IdOrden, IdProducto};

/// Columnas de la tabla `orders`, en el orden en que se insertan
pub const COLUMNAS_ORDENES: [&str; 5] = [
    "order_id",
    "customer_id",
    "order_date",
    "order_status",
    "shipping_cost",
];

/// Columnas de la tabla `order_items`, en el orden en que se insertan
pub const COLUMNAS_ITEMS: [&str; 6] = [
    "order_item_id",
    "order_id",
    "product_id",
    "quantity",
    "unit_price",
    "discount_amount",
];

/// Una orden de un cliente, realizada en una fecha y con un costo de envio
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(test, derive(Serialize))]
pub struct Orden {
    #[cfg_attr(test, serde(rename = "order_id"))]
    id: IdOrden,
    #[cfg_attr(test, serde(rename = "customer_id"))]
    id_cliente: IdCliente,
    #[cfg_attr(test, serde(rename = "order_date"))]
    fecha: NaiveDate,
    #[cfg_attr(test, serde(rename = "order_status"))]
    estado: &'static str,
    #[cfg_attr(test, serde(rename = "shipping_cost"))]
    costo_envio: Dinero,
}

impl Orden {
    /// Crea una nueva orden con los parametros dados
    pub fn new(
        id: IdOrden,
        id_cliente: IdCliente,
        fecha: NaiveDate,
        estado: &'static str,
        costo_envio: Dinero,
    ) -> Self {
        Self {
            id,
            id_cliente,
            fecha,
            estado,
            costo_envio,
        }
    }

    pub fn get_id(&self) -> IdOrden {
        self.id
    }

    pub fn get_cliente(&self) -> IdCliente {
        self.id_cliente
    }

    pub fn get_fecha(&self) -> NaiveDate {
        self.fecha
    }

    pub fn get_estado(&self) -> &'static str {
        self.estado
    }

    pub fn get_costo_envio(&self) -> Dinero {
        self.costo_envio
    }

    /// Representa la orden como una tupla de valores SQL, en el orden
    /// de `COLUMNAS_ORDENES`. Las fechas y los estados no requieren
    /// escaparse ya que nunca contienen comillas.
    pub fn tupla_sql(&self) -> String {
        format!(
            "({}, {}, '{}', '{}', {})",
            self.id,
            self.id_cliente,
            self.fecha.format("%Y-%m-%d"),
            self.estado,
            self.costo_envio
        )
    }
}

impl fmt::Display for Orden {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "orden {} del cliente {} ",
            self.id.to_string().blue(),
            self.id_cliente.to_string().blue()
        )?;
        write!(
            f,
            "el {} ({}), envio ${}",
            self.fecha,
            self.estado.green(),
            self.costo_envio
        )
    }
}

/// Una linea de una orden: un producto, la cantidad pedida, su precio
/// unitario y el descuento aplicado sobre el subtotal
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(test, derive(Serialize))]
pub struct ItemOrden {
    #[cfg_attr(test, serde(rename = "order_item_id"))]
    id: IdItemOrden,
    #[cfg_attr(test, serde(rename = "order_id"))]
    id_orden: IdOrden,
    #[cfg_attr(test, serde(rename = "product_id"))]
    id_producto: IdProducto,
    #[cfg_attr(test, serde(rename = "quantity"))]
    cantidad: CantidadProducto,
    #[cfg_attr(test, serde(rename = "unit_price"))]
    precio_unitario: Dinero,
    #[cfg_attr(test, serde(rename = "discount_amount"))]
    descuento: Dinero,
}

impl ItemOrden {
    /// Crea un nuevo item con los parametros dados
    pub fn new(
        id: IdItemOrden,
        id_orden: IdOrden,
        id_producto: IdProducto,
        cantidad: CantidadProducto,
        precio_unitario: Dinero,
        descuento: Dinero,
    ) -> Self {
        Self {
            id,
            id_orden,
            id_producto,
            cantidad,
            precio_unitario,
            descuento,
        }
    }

    pub fn get_id(&self) -> IdItemOrden {
        self.id
    }

    pub fn get_orden(&self) -> IdOrden {
        self.id_orden
    }

    pub fn get_producto(&self) -> IdProducto {
        self.id_producto
    }

    pub fn get_cantidad(&self) -> CantidadProducto {
        self.cantidad
    }

    pub fn get_precio_unitario(&self) -> Dinero {
        self.precio_unitario
    }

    pub fn get_descuento(&self) -> Dinero {
        self.descuento
    }

    /// Precio unitario por cantidad, antes del descuento
    pub fn subtotal(&self) -> Dinero {
        self.precio_unitario * Dinero::from(self.cantidad)
    }

    /// Representa el item como una tupla de valores SQL, en el orden
    /// de `COLUMNAS_ITEMS`
    pub fn tupla_sql(&self) -> String {
        format!(
            "({}, {}, {}, {}, {}, {})",
            self.id,
            self.id_orden,
            self.id_producto,
            self.cantidad,
            self.precio_unitario,
            self.descuento
        )
    }
}

impl fmt::Display for ItemOrden {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "item {} compuesto por {} unidades ",
            self.id.to_string().blue(),
            self.cantidad.to_string().blue()
        )?;
        write!(
            f,
            "del producto {} a ${} (descuento ${})",
            self.id_producto.to_string().blue(),
            self.precio_unitario,
            self.descuento
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn fecha(anio: i32, mes: u32, dia: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(anio, mes, dia).unwrap()
    }

    #[test]
    fn tupla_de_orden() {
        let orden = Orden::new(1, 7, fecha(2023, 6, 15), "Completed", 12.50);
        assert_eq!(orden.tupla_sql(), "(1, 7, '2023-06-15', 'Completed', 12.5)");
    }

    #[test]
    fn tupla_de_item_sin_descuento() {
        let item = ItemOrden::new(3, 1, 18, 2, 599.99, 0.0);
        assert_eq!(item.tupla_sql(), "(3, 1, 18, 2, 599.99, 0)");
    }

    #[test]
    fn tupla_de_item_con_descuento() {
        let item = ItemOrden::new(4, 2, 1, 3, 149.99, 44.1);
        assert_eq!(item.tupla_sql(), "(4, 2, 1, 3, 149.99, 44.1)");
    }

    #[test]
    fn subtotal_no_incluye_descuento() {
        let item = ItemOrden::new(1, 1, 6, 3, 29.99, 5.0);
        assert!((item.subtotal() - 89.97).abs() < 1e-9);
    }

    #[test]
    fn los_campos_se_serializan_con_el_nombre_de_la_columna() {
        let orden = Orden::new(1, 7, fecha(2023, 6, 15), "Completed", 12.5);
        let valor = serde_json::to_value(&orden).unwrap();
        let claves: Vec<&String> = valor.as_object().unwrap().keys().collect();
        assert_eq!(claves.len(), COLUMNAS_ORDENES.len());
        for columna in COLUMNAS_ORDENES {
            assert!(valor.get(columna).is_some(), "falta la columna {}", columna);
        }
        assert_eq!(valor["order_date"], "2023-06-15");

        let item = ItemOrden::new(1, 1, 2, 1, 399.99, 0.0);
        let valor = serde_json::to_value(&item).unwrap();
        assert_eq!(valor.as_object().unwrap().len(), COLUMNAS_ITEMS.len());
        for columna in COLUMNAS_ITEMS {
            assert!(valor.get(columna).is_some(), "falta la columna {}", columna);
        }
    }
}

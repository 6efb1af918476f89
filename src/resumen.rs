//! Este modulo calcula las estadisticas que se muestran por pantalla al
//! terminar de generar las ordenes

use std::{collections::BTreeMap, fmt};

use colored::Colorize;

use crate::aliases::{Dinero, IdCliente, IdProducto};
use crate::orden::{ItemOrden, Orden};
use crate::{redondear_centavos, ConfigGenerador};

/// Estadisticas de una corrida del generador
#[derive(Debug, Clone, PartialEq)]
pub struct Resumen {
    pub cant_ordenes: usize,
    pub cant_items: usize,
    pub archivo_salida: String,
    pub fecha_inicio: String,
    pub fecha_fin: String,
    pub cant_clientes: IdCliente,
    pub cant_productos: IdProducto,
    pub promedio_items: f64,
    pub ordenes_por_estado: BTreeMap<&'static str, usize>,
    pub ingresos_totales: Dinero,
}

fn formatear_fecha(fecha: (i32, u32, u32)) -> String {
    format!("{:04}-{:02}-{:02}", fecha.0, fecha.1, fecha.2)
}

impl Resumen {
    /// Calcula el resumen de las ordenes e items generados con la configuracion dada
    pub fn calcular(config: &ConfigGenerador, ordenes: &[Orden], items: &[ItemOrden]) -> Self {
        let promedio_items = if ordenes.is_empty() {
            0.0
        } else {
            items.len() as f64 / ordenes.len() as f64
        };

        let mut ordenes_por_estado = BTreeMap::new();
        for orden in ordenes {
            *ordenes_por_estado.entry(orden.get_estado()).or_insert(0) += 1;
        }

        let envios: Dinero = ordenes.iter().map(Orden::get_costo_envio).sum();
        let ventas: Dinero = items
            .iter()
            .map(|item| item.subtotal() - item.get_descuento())
            .sum();

        Self {
            cant_ordenes: ordenes.len(),
            cant_items: items.len(),
            archivo_salida: config.archivo_salida.clone(),
            fecha_inicio: formatear_fecha(config.fecha_inicio),
            fecha_fin: formatear_fecha(config.fecha_fin),
            cant_clientes: config.cantidad_clientes,
            cant_productos: config.cantidad_productos,
            promedio_items,
            ordenes_por_estado,
            ingresos_totales: redondear_centavos(envios + ventas),
        }
    }
}

impl fmt::Display for Resumen {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Se generaron {} ordenes",
            self.cant_ordenes.to_string().blue()
        )?;
        writeln!(
            f,
            "Se generaron {} items de orden",
            self.cant_items.to_string().blue()
        )?;
        writeln!(
            f,
            "Archivo SQL escrito en: {}",
            self.archivo_salida.as_str().green()
        )?;
        writeln!(f, "\n{}", "Resumen:".bold())?;
        writeln!(
            f,
            "- Rango de fechas: {} a {}",
            self.fecha_inicio, self.fecha_fin
        )?;
        writeln!(f, "- Clientes: {}", self.cant_clientes.to_string().blue())?;
        writeln!(f, "- Productos: {}", self.cant_productos.to_string().blue())?;
        writeln!(
            f,
            "- Promedio de items por orden: {}",
            format!("{:.1}", self.promedio_items).blue()
        )?;
        for (estado, cantidad) in &self.ordenes_por_estado {
            writeln!(f, "- Ordenes {}: {}", estado.green(), cantidad)?;
        }
        write!(f, "- Ingresos totales: ${:.2}", self.ingresos_totales)
    }
}

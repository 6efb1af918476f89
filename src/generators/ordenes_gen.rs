//! Este modulo permite generar ordenes aleatorias junto con sus items.
//! Todos los rangos y pools de ids se toman de la configuracion dada, y
//! la fuente de aleatoriedad se recibe por parametro para poder fijar
//! la semilla.

use chrono::{Days, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::aliases::{IdCliente, IdItemOrden, IdOrden, IdProducto};
use crate::catalogo::{precio_unitario, ESTADOS_ORDEN};
use crate::errores::ErrorGenerador;
use crate::orden::{ItemOrden, Orden};
use crate::{redondear_centavos, ConfigGenerador};

/// Convierte una tupla (año, mes, dia) en una fecha valida
fn fecha_desde(fecha: (i32, u32, u32)) -> Result<NaiveDate, ErrorGenerador> {
    NaiveDate::from_ymd_opt(fecha.0, fecha.1, fecha.2).ok_or(ErrorGenerador::VentanaFechasInvalida)
}

/// Verifica que ningun rango de la configuracion este invertido, ya que
/// el muestreo no esta definido en ese caso
fn validar_rangos(config: &ConfigGenerador) -> Result<(), ErrorGenerador> {
    let invertido = config.rango_envio.0 > config.rango_envio.1
        || config.rango_items_por_orden.0 > config.rango_items_por_orden.1
        || config.rango_cantidad.0 > config.rango_cantidad.1
        || config.rango_descuento.0 > config.rango_descuento.1;

    if invertido {
        return Err(ErrorGenerador::RangoInvertido);
    }
    Ok(())
}

/// Devuelve una fecha uniforme dentro de `[inicio, inicio + dias]`, con
/// granularidad de un dia
fn fecha_aleatoria<R: Rng + ?Sized>(
    inicio: NaiveDate,
    dias: u64,
    rng: &mut R,
) -> Result<NaiveDate, ErrorGenerador> {
    let desplazamiento = rng.gen_range(0..=dias);
    inicio
        .checked_add_days(Days::new(desplazamiento))
        .ok_or(ErrorGenerador::VentanaFechasInvalida)
}

/// Genera los items de una orden. Los productos se eligen sin reemplazo,
/// por lo que una orden nunca repite producto. Los ids de item se asignan
/// a partir de `siguiente_id`, que queda apuntando al proximo libre.
fn generar_items_orden<R: Rng + ?Sized>(
    config: &ConfigGenerador,
    id_orden: IdOrden,
    productos: &[IdProducto],
    siguiente_id: &mut IdItemOrden,
    rng: &mut R,
) -> Result<Vec<ItemOrden>, ErrorGenerador> {
    let (min_items, max_items) = config.rango_items_por_orden;
    let cant_items = rng.gen_range(min_items..=max_items);
    if cant_items > productos.len() {
        return Err(ErrorGenerador::PoolAgotado {
            pedidos: cant_items,
            disponibles: productos.len(),
        });
    }

    let mut items = Vec::with_capacity(cant_items);
    for &id_producto in productos.choose_multiple(rng, cant_items) {
        let cantidad = rng.gen_range(config.rango_cantidad.0..=config.rango_cantidad.1);
        let precio =
            precio_unitario(id_producto).ok_or(ErrorGenerador::ProductoSinPrecio(id_producto))?;

        let descuento = if rng.gen::<f64>() < config.probabilidad_descuento {
            let subtotal = precio * f64::from(cantidad);
            let fraccion = rng.gen_range(config.rango_descuento.0..=config.rango_descuento.1);
            redondear_centavos(subtotal * fraccion)
        } else {
            0.0
        };

        items.push(ItemOrden::new(
            *siguiente_id,
            id_orden,
            id_producto,
            cantidad,
            precio,
            descuento,
        ));
        *siguiente_id += 1;
    }
    Ok(items)
}

/// Genera `config.cantidad_ordenes` ordenes con ids consecutivos desde 1, y
/// entre `config.rango_items_por_orden` items para cada una. Los ids de
/// los items son consecutivos desde 1 a lo largo de todas las ordenes,
/// en el orden en que se generan.
/// # Errors:
/// * si los pools de clientes o productos estan vacios
/// * si se piden mas productos por orden que los disponibles
/// * si la ventana de fechas o algun rango es invalido
pub fn generar_ordenes<R: Rng + ?Sized>(
    config: &ConfigGenerador,
    rng: &mut R,
) -> Result<(Vec<Orden>, Vec<ItemOrden>), ErrorGenerador> {
    validar_rangos(config)?;

    let inicio = fecha_desde(config.fecha_inicio)?;
    let fin = fecha_desde(config.fecha_fin)?;
    let dias = u64::try_from((fin - inicio).num_days())
        .map_err(|_| ErrorGenerador::VentanaFechasInvalida)?;

    let clientes: Vec<IdCliente> = (1..=config.cantidad_clientes).collect();
    let productos: Vec<IdProducto> = (1..=config.cantidad_productos).collect();
    if clientes.is_empty() || productos.is_empty() {
        return Err(ErrorGenerador::PoolVacio);
    }

    let mut ordenes = Vec::new();
    let mut items = Vec::new();
    let mut siguiente_id_item: IdItemOrden = 1;

    for id_orden in 1..=config.cantidad_ordenes {
        let id_cliente = *clientes.choose(rng).ok_or(ErrorGenerador::PoolVacio)?;
        let fecha = fecha_aleatoria(inicio, dias, rng)?;
        let estado = *ESTADOS_ORDEN.choose(rng).ok_or(ErrorGenerador::PoolVacio)?;
        let costo_envio =
            redondear_centavos(rng.gen_range(config.rango_envio.0..=config.rango_envio.1));

        ordenes.push(Orden::new(id_orden, id_cliente, fecha, estado, costo_envio));

        items.extend(generar_items_orden(
            config,
            id_orden,
            &productos,
            &mut siguiente_id_item,
            rng,
        )?);
    }

    Ok((ordenes, items))
}

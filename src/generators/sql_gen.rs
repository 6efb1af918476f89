//! Este modulo vuelca las ordenes y sus items a un script SQL con sentencias
//! INSERT. Las ordenes van en una unica sentencia, mientras que los items
//! se parten en lotes ya que suelen ser varias veces mas que las ordenes.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
};

use crate::errores::ErrorEscritura;
use crate::orden::{ItemOrden, Orden, COLUMNAS_ITEMS, COLUMNAS_ORDENES};

/// Escribe una sentencia INSERT sobre `tabla` con una tupla por linea.
/// Si no hay tuplas no escribe nada, ya que un INSERT sin valores no es
/// SQL valido.
fn escribir_insert<W: Write + ?Sized>(
    writer: &mut W,
    tabla: &str,
    columnas: &[&str],
    tuplas: &[String],
) -> io::Result<()> {
    if tuplas.is_empty() {
        return Ok(());
    }

    writeln!(
        writer,
        "INSERT INTO {} ({}) VALUES",
        tabla,
        columnas.join(", ")
    )?;
    for (i, tupla) in tuplas.iter().enumerate() {
        let terminador = if i < tuplas.len() - 1 { "," } else { ";" };
        writeln!(writer, "{}{}", tupla, terminador)?;
    }
    writeln!(writer)
}

/// Escribe el script completo en el writer dado: un INSERT con todas las
/// ordenes y luego un INSERT por cada lote de a lo sumo `tam_lote` items.
/// # Errors:
/// * si `tam_lote` es cero
/// * si falla alguna escritura sobre el writer
pub fn escribir_sql<W: Write + ?Sized>(
    writer: &mut W,
    ordenes: &[Orden],
    items: &[ItemOrden],
    tam_lote: usize,
) -> io::Result<()> {
    if tam_lote == 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "el tamaño de lote debe ser mayor a cero",
        ));
    }

    writeln!(writer, "-- Generated Orders and Order Items Data")?;
    writeln!(
        writer,
        "-- This file contains realistic transactional data for analytics"
    )?;
    writeln!(writer)?;

    writeln!(writer, "-- Insert Orders")?;
    let tuplas_ordenes: Vec<String> = ordenes.iter().map(Orden::tupla_sql).collect();
    escribir_insert(writer, "orders", &COLUMNAS_ORDENES, &tuplas_ordenes)?;

    writeln!(writer, "-- Insert Order Items")?;
    for lote in items.chunks(tam_lote) {
        let tuplas_lote: Vec<String> = lote.iter().map(ItemOrden::tupla_sql).collect();
        escribir_insert(writer, "order_items", &COLUMNAS_ITEMS, &tuplas_lote)?;
    }

    Ok(())
}

/// A partir de un nombre de archivo, las ordenes, sus items y un tamaño de
/// lote, genera el archivo SQL. Si el archivo ya existe lo sobreescribe.
pub fn generar_arch_sql(
    nombre_arch: &str,
    ordenes: &[Orden],
    items: &[ItemOrden],
    tam_lote: usize,
) -> Result<(), ErrorEscritura> {
    let file = File::create(nombre_arch).map_err(ErrorEscritura::NoSePudoCrearArchivo)?;
    let mut writer = BufWriter::new(file);
    escribir_sql(&mut writer, ordenes, items, tam_lote)?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;
    use std::fs;

    fn fecha(anio: i32, mes: u32, dia: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(anio, mes, dia).unwrap()
    }

    fn items_de_prueba(cantidad: u32) -> Vec<ItemOrden> {
        (1..=cantidad)
            .map(|id| ItemOrden::new(id, 1, 1, 1, 149.99, 0.0))
            .collect()
    }

    fn renderizar(ordenes: &[Orden], items: &[ItemOrden], tam_lote: usize) -> String {
        let mut buf = Vec::new();
        escribir_sql(&mut buf, ordenes, items, tam_lote).unwrap();
        String::from_utf8(buf).unwrap()
    }

    /// Devuelve la cantidad de tuplas de cada INSERT sobre la tabla dada
    fn tuplas_por_insert(sql: &str, tabla: &str) -> Vec<usize> {
        let encabezado = format!("INSERT INTO {} (", tabla);
        sql.split(';')
            .filter_map(|sentencia| {
                let inicio = sentencia.find(&encabezado)?;
                Some(
                    sentencia[inicio..]
                        .lines()
                        .filter(|linea| linea.starts_with('('))
                        .count(),
                )
            })
            .collect()
    }

    #[test]
    fn script_completo() {
        let ordenes = vec![
            Orden::new(1, 7, fecha(2023, 6, 15), "Completed", 12.50),
            Orden::new(2, 42, fecha(2024, 12, 31), "Returned", 5.0),
        ];
        let items = vec![
            ItemOrden::new(1, 1, 18, 2, 599.99, 0.0),
            ItemOrden::new(2, 1, 3, 1, 49.99, 7.5),
            ItemOrden::new(3, 2, 40, 3, 34.99, 0.0),
        ];

        let esperado = "\
-- Generated Orders and Order Items Data
-- This file contains realistic transactional data for analytics

-- Insert Orders
INSERT INTO orders (order_id, customer_id, order_date, order_status, shipping_cost) VALUES
(1, 7, '2023-06-15', 'Completed', 12.5),
(2, 42, '2024-12-31', 'Returned', 5);

-- Insert Order Items
INSERT INTO order_items (order_item_id, order_id, product_id, quantity, unit_price, discount_amount) VALUES
(1, 1, 18, 2, 599.99, 0),
(2, 1, 3, 1, 49.99, 7.5),
(3, 2, 40, 3, 34.99, 0);

";
        assert_eq!(renderizar(&ordenes, &items, 500), esperado);
    }

    #[test]
    fn script_de_ordenes_generadas_con_semilla() {
        use crate::generators::ordenes_gen::generar_ordenes;
        use crate::ConfigGenerador;
        use rand::SeedableRng;
        use rand_chacha::ChaCha8Rng;

        let config = ConfigGenerador {
            cantidad_ordenes: 3,
            ..ConfigGenerador::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(2023);
        let (ordenes, items) = generar_ordenes(&config, &mut rng).unwrap();

        let esperado = "\
-- Generated Orders and Order Items Data
-- This file contains realistic transactional data for analytics

-- Insert Orders
INSERT INTO orders (order_id, customer_id, order_date, order_status, shipping_cost) VALUES
(1, 25, '2023-05-22', 'Completed', 24.07),
(2, 39, '2024-12-20', 'Cancelled', 24.71),
(3, 53, '2023-07-30', 'Cancelled', 8.88);

-- Insert Order Items
INSERT INTO order_items (order_item_id, order_id, product_id, quantity, unit_price, discount_amount) VALUES
(1, 1, 36, 2, 29.99, 0),
(2, 1, 13, 3, 39.99, 0),
(3, 1, 17, 3, 199.99, 98.82),
(4, 1, 37, 2, 19.99, 0),
(5, 2, 31, 1, 99.99, 0);

INSERT INTO order_items (order_item_id, order_id, product_id, quantity, unit_price, discount_amount) VALUES
(6, 2, 39, 2, 44.99, 0),
(7, 2, 2, 1, 399.99, 0),
(8, 2, 11, 1, 89.99, 0),
(9, 3, 30, 1, 89.99, 9.35),
(10, 3, 29, 1, 24.99, 2.41);

INSERT INTO order_items (order_item_id, order_id, product_id, quantity, unit_price, discount_amount) VALUES
(11, 3, 14, 1, 69.99, 0),
(12, 3, 6, 2, 29.99, 0);

";
        assert_eq!(renderizar(&ordenes, &items, 5), esperado);
    }

    #[test]
    fn quinientos_items_entran_en_un_solo_insert() {
        let sql = renderizar(&[], &items_de_prueba(500), 500);
        assert_eq!(tuplas_por_insert(&sql, "order_items"), vec![500]);
    }

    #[test]
    fn quinientos_uno_items_necesitan_dos_inserts() {
        let sql = renderizar(&[], &items_de_prueba(501), 500);
        assert_eq!(tuplas_por_insert(&sql, "order_items"), vec![500, 1]);
        assert!(sql.ends_with("(501, 1, 1, 1, 149.99, 0);\n\n"));
    }

    #[test]
    fn cada_lote_repite_las_columnas_y_termina_en_punto_y_coma() {
        let sql = renderizar(&[], &items_de_prueba(7), 3);
        assert_eq!(tuplas_por_insert(&sql, "order_items"), vec![3, 3, 1]);
        assert_eq!(sql.matches("INSERT INTO order_items (order_item_id").count(), 3);
        assert_eq!(sql.matches(";\n\n").count(), 3);
    }

    #[test]
    fn sin_filas_no_se_escriben_inserts() {
        let sql = renderizar(&[], &[], 500);
        assert!(!sql.contains("INSERT"));
        assert!(sql.contains("-- Insert Orders"));
        assert!(sql.contains("-- Insert Order Items"));
    }

    #[test]
    fn lote_de_tamanio_cero_es_invalido() {
        let mut buf = Vec::new();
        let res = escribir_sql(&mut buf, &[], &items_de_prueba(1), 0);
        assert_eq!(res.unwrap_err().kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn generar_archivo_sobreescribe_el_existente() {
        let ruta = std::env::temp_dir().join("generador_ordenes_sql_gen_test.sql");
        let nombre = ruta.to_str().unwrap();
        fs::write(&ruta, "contenido viejo que no debe quedar").unwrap();

        let ordenes = vec![Orden::new(1, 1, fecha(2023, 1, 1), "Processing", 25.0)];
        let res = generar_arch_sql(nombre, &ordenes, &items_de_prueba(2), 500);
        let contenido = fs::read_to_string(&ruta).unwrap();
        fs::remove_file(&ruta).unwrap();

        assert!(res.is_ok());
        assert!(!contenido.contains("contenido viejo"));
        assert_eq!(tuplas_por_insert(&contenido, "orders"), vec![1]);
        assert_eq!(tuplas_por_insert(&contenido, "order_items"), vec![2]);
    }

    #[test]
    fn directorio_inexistente_no_permite_crear_el_archivo() {
        let ruta = std::env::temp_dir()
            .join("generador_ordenes_no_existe")
            .join("salida.sql");
        let res = generar_arch_sql(ruta.to_str().unwrap(), &[], &[], 500);
        assert!(matches!(res, Err(ErrorEscritura::NoSePudoCrearArchivo(_))));
    }
}

//! Genera ordenes e items de orden aleatorios y los escribe como sentencias
//! INSERT en el archivo `ARCHIVO_SALIDA`, para poblar la base de analisis.

use generador_ordenes::errores::Error;
use generador_ordenes::generators::{ordenes_gen::generar_ordenes, sql_gen::generar_arch_sql};
use generador_ordenes::resumen::Resumen;
use generador_ordenes::ConfigGenerador;

fn main() -> Result<(), Error> {
    let config = ConfigGenerador::default();

    println!("Generando datos de ordenes...");
    let (ordenes, items) = generar_ordenes(&config, &mut rand::thread_rng())?;
    if let Some(orden) = ordenes.first() {
        println!("Por ejemplo, {}", orden);
    }

    generar_arch_sql(&config.archivo_salida, &ordenes, &items, config.tam_lote)?;

    println!("\n{}", Resumen::calcular(&config, &ordenes, &items));
    Ok(())
}

use diesel::prelude::*;

use crate::models::{NewIngrediente, NewRango};
use crate::schema::{ingredientes, rangos};

const CATALOGUE: &[(&str, &[&str])] = &[
    (
        "Feijoada",
        &["Feijão Preto", "Arroz", "Linguiça", "Carne Seca", "Couve", "Laranja"],
    ),
    ("Churrasco", &["Picanha", "Sal Grosso", "Farofa", "Vinagrete"]),
    ("Moqueca de Peixe", &["Peixe", "Leite de Coco", "Azeite de Dendê", "Pimentão", "Coentro"]),
    ("Pão de Queijo", &["Polvilho", "Queijo Minas", "Ovo", "Leite"]),
    ("Brigadeiro", &["Leite Condensado", "Chocolate em Pó", "Manteiga"]),
    ("Tapioca", &[]),
];

/// Inserts the demo catalogue when `rangos` is empty. Returns the number of
/// rangos inserted (0 when data was already present).
pub fn seed_if_empty(conn: &mut SqliteConnection) -> QueryResult<usize> {
    conn.transaction(|conn| {
        let existing: i64 = rangos::table.count().get_result(conn)?;
        if existing > 0 {
            log::info!("database already holds {existing} rangos, skipping seed");
            return Ok(0);
        }

        for (index, &(nome, itens)) in CATALOGUE.iter().enumerate() {
            // the table is empty, so ids follow catalogue order
            let rango_id = index as i32 + 1;
            diesel::insert_into(rangos::table)
                .values(&NewRango {
                    id: Some(rango_id),
                    nome,
                })
                .execute(conn)?;

            for &item in itens {
                diesel::insert_into(ingredientes::table)
                    .values(&NewIngrediente {
                        id: None,
                        nome: item,
                        rango_id,
                    })
                    .execute(conn)?;
            }
        }

        log::info!("seeded {} rangos", CATALOGUE.len());
        Ok(CATALOGUE.len())
    })
}

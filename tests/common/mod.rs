use diesel::prelude::*;

use rango_api::db::{self, DbPool};
use rango_api::models::{NewIngrediente, NewRango};
use rango_api::schema::{ingredientes, rangos};

pub fn empty_pool() -> DbPool {
    let pool = db::init_pool(":memory:", 1).expect("in-memory pool");
    db::run_migrations(&pool).expect("migrations");
    pool
}

pub fn insert_rango(pool: &DbPool, id: i32, nome: &str) {
    let mut conn = pool.get().unwrap();
    diesel::insert_into(rangos::table)
        .values(&NewRango { id: Some(id), nome })
        .execute(&mut conn)
        .unwrap();
}

pub fn insert_ingrediente(pool: &DbPool, id: i32, nome: &str, rango_id: i32) {
    let mut conn = pool.get().unwrap();
    diesel::insert_into(ingredientes::table)
        .values(&NewIngrediente {
            id: Some(id),
            nome,
            rango_id,
        })
        .execute(&mut conn)
        .unwrap();
}

/// Feijoada (with Feijão and Arroz) and Churrasco (no ingredientes).
pub fn feijoada_and_churrasco() -> DbPool {
    let pool = empty_pool();
    insert_rango(&pool, 1, "Feijoada");
    insert_rango(&pool, 2, "Churrasco");
    insert_ingrediente(&pool, 10, "Feijão", 1);
    insert_ingrediente(&pool, 11, "Arroz", 1);
    pool
}

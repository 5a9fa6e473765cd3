use diesel::prelude::*;

use crate::schema::{ingredientes, rangos};

#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = rangos)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Rango {
    pub id: i32,
    pub nome: String,
}

// an ingrediente belongs to exactly one rango; rows go away with their rango
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = ingredientes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Ingrediente {
    pub id: i32,
    pub nome: String,
    pub rango_id: i32,
}

/// Insertable rango. There is no HTTP write path; this is used by seeding
/// and fixtures.
#[derive(Debug, Insertable)]
#[diesel(table_name = rangos)]
pub struct NewRango<'a> {
    pub id: Option<i32>,
    pub nome: &'a str,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = ingredientes)]
pub struct NewIngrediente<'a> {
    pub id: Option<i32>,
    pub nome: &'a str,
    pub rango_id: i32,
}

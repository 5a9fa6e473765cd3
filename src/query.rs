use crate::models::{Ingrediente, Rango};
use crate::schema::{ingredientes, rangos};
use diesel::prelude::*;

/// Lists rangos, optionally narrowed to names containing `filter`
/// (case-insensitive). `None` and `""` both mean no filter.
pub(crate) fn find_rangos(
    conn: &mut SqliteConnection,
    filter: Option<&str>,
) -> QueryResult<Vec<Rango>> {
    let mut found = rangos::table
        .select(Rango::as_select())
        .order(rangos::id.asc())
        .load(conn)?;

    if let Some(needle) = filter.filter(|f| !f.is_empty()) {
        log::debug!("filtering rangos by name {needle:?}");
        // sqlite lower() only folds ASCII, so both sides are folded here
        let needle = needle.to_lowercase();
        found.retain(|rango| rango.nome.to_lowercase().contains(&needle));
    }

    Ok(found)
}

pub(crate) fn find_rango(conn: &mut SqliteConnection, rango_id: i32) -> QueryResult<Option<Rango>> {
    rangos::table
        .filter(rangos::id.eq(rango_id))
        .select(Rango::as_select())
        .first(conn)
        .optional()
}

/// Loads a rango together with its ingredientes in a single join.
/// `None` when the rango itself does not exist.
pub(crate) fn find_ingredientes(
    conn: &mut SqliteConnection,
    rango_id: i32,
) -> QueryResult<Option<Vec<Ingrediente>>> {
    let rows = rangos::table
        .left_join(ingredientes::table)
        .filter(rangos::id.eq(rango_id))
        .order(ingredientes::id.asc())
        .load::<(Rango, Option<Ingrediente>)>(conn)?;

    if rows.is_empty() {
        return Ok(None);
    }
    Ok(Some(
        rows.into_iter()
            .filter_map(|(_, ingrediente)| ingrediente)
            .collect(),
    ))
}

use actix_web::{get, web, HttpResponse};

use crate::db::DbPool;
use crate::dto::{self, RangoDto};
use crate::error::ApiError;
use crate::models::{Ingrediente, Rango};
use crate::query;

/// `?name=` filter. A repeated `name` is joined with commas, so
/// `?name=a&name=b` filters by `"a,b"` instead of being rejected.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct RangoFilter {
    pub(crate) name: Option<String>,
}

impl RangoFilter {
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let names: Vec<String> = pairs
            .into_iter()
            .filter(|(key, _)| key == "name")
            .map(|(_, value)| value)
            .collect();
        RangoFilter {
            name: (!names.is_empty()).then(|| names.join(",")),
        }
    }
}

#[get("/")]
async fn hello() -> &'static str {
    "Hello World!"
}

/// 200 with the matching rangos, 204 when nothing matches.
#[get("/rangos")]
async fn get_rangos(
    params: web::Query<Vec<(String, String)>>,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let name = RangoFilter::from_pairs(params.into_inner()).name;
    let rangos = web::block(move || -> Result<Vec<Rango>, ApiError> {
        let mut conn = pool.get()?;
        Ok(query::find_rangos(&mut conn, name.as_deref())?)
    })
    .await??;

    if rangos.is_empty() {
        return Ok(HttpResponse::NoContent().finish());
    }
    Ok(HttpResponse::Ok().json(dto::to_rango_dtos(rangos)))
}

/// 200 with the rango, 404 when the id is unknown.
#[get("/rango/{id}")]
async fn get_rango(
    id: web::Path<i32>,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let rango = web::block(move || -> Result<Option<Rango>, ApiError> {
        let mut conn = pool.get()?;
        Ok(query::find_rango(&mut conn, id)?)
    })
    .await??;

    Ok(match rango {
        Some(rango) => HttpResponse::Ok().json(RangoDto::from(rango)),
        None => HttpResponse::NotFound().finish(),
    })
}

/// 200 with the rango's ingredientes (possibly `[]`), 204 when the rango
/// itself is unknown.
#[get("/rango/{rango_id}/ingredientes")]
async fn get_ingredientes(
    rango_id: web::Path<i32>,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let rango_id = rango_id.into_inner();
    let ingredientes = web::block(move || -> Result<Option<Vec<Ingrediente>>, ApiError> {
        let mut conn = pool.get()?;
        Ok(query::find_ingredientes(&mut conn, rango_id)?)
    })
    .await??;

    Ok(match ingredientes {
        Some(ingredientes) => HttpResponse::Ok().json(dto::to_ingrediente_dtos(ingredientes)),
        None => HttpResponse::NoContent().finish(),
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(hello)
        .service(get_rangos)
        .service(get_rango)
        .service(get_ingredientes);
}

use std::io;

use actix_web::{middleware, web, App, HttpServer};

use rango_api::config::Config;
use rango_api::{api, db, seed};

fn startup_error(err: impl std::fmt::Display) -> io::Error {
    io::Error::new(io::ErrorKind::Other, err.to_string())
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().map_err(startup_error)?;

    // set up database connection pool
    let pool = db::init_pool(&config.database_url, config.pool_size).map_err(startup_error)?;
    let applied = db::run_migrations(&pool).map_err(startup_error)?;
    log::info!("database ready at {} ({applied} migrations applied)", config.database_url);

    if config.seed_database {
        let mut conn = pool.get().map_err(startup_error)?;
        seed::seed_if_empty(&mut conn).map_err(startup_error)?;
    }

    log::info!("starting HTTP server at http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .wrap(middleware::Logger::default())
            .configure(api::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod utils;

use actix_web::web;

use crate::errors::AppError;

/// Registers the routes and the JSON body error handler.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .service(web::resource("/").route(web::get().to(handlers::get_dataset)))
    .service(
        web::resource("/departamentos")
            .route(web::get().to(handlers::department::get_departments)),
    )
    .service(
        web::resource("/departamentos/{id}")
            .route(web::get().to(handlers::department::get_department)),
    )
    .service(
        web::resource("/empleados")
            .route(web::get().to(handlers::employee::get_employees)),
    )
    .service(
        web::resource("/empleados/{id_departamento}")
            .route(web::post().to(handlers::employee::create_employee)),
    )
    .service(
        web::resource("/empleados/{id_departamento}/{id_empleado}")
            .route(web::put().to(handlers::employee::update_employee))
            .route(web::delete().to(handlers::employee::delete_employee)),
    );
}

use actix_web::{web, HttpResponse};

use crate::db::Directory;
use crate::errors::AppError;

pub async fn get_departments(store: web::Data<Directory>) -> Result<HttpResponse, AppError> {
    let departments = store.departments()?;
    Ok(HttpResponse::Ok().json(departments))
}

pub async fn get_department(
    store: web::Data<Directory>,
    department_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let department = store.department(&department_id.into_inner())?;
    Ok(HttpResponse::Ok().json(department))
}

pub mod department;
pub mod employee;

use actix_web::{web, HttpResponse};

use crate::db::Directory;
use crate::errors::AppError;

/// `GET /`: the whole tree.
pub async fn get_dataset(store: web::Data<Directory>) -> Result<HttpResponse, AppError> {
    let dataset = store.snapshot()?;
    Ok(HttpResponse::Ok().json(dataset))
}

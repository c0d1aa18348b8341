use actix_web::{web, HttpResponse};
use log::warn;
use serde_json::json;

use crate::db::Directory;
use crate::errors::AppError;
use crate::models::employee::{EmployeeFields, EmployeePayload};
use crate::utils::validation::employee_fields;

fn checked_fields(payload: web::Json<EmployeePayload>) -> Result<EmployeeFields, AppError> {
    employee_fields(payload.into_inner()).map_err(|err| {
        warn!("Rejected employee payload: {}", err);
        err
    })
}

pub async fn get_employees(store: web::Data<Directory>) -> Result<HttpResponse, AppError> {
    let employees = store.employees()?;
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn create_employee(
    store: web::Data<Directory>,
    department_id: web::Path<String>,
    new_employee: web::Json<EmployeePayload>,
) -> Result<HttpResponse, AppError> {
    let fields = checked_fields(new_employee)?;
    let employee = store.create_employee(&department_id.into_inner(), fields)?;
    Ok(HttpResponse::Created().json(employee))
}

pub async fn update_employee(
    store: web::Data<Directory>,
    path: web::Path<(String, String)>,
    updates: web::Json<EmployeePayload>,
) -> Result<HttpResponse, AppError> {
    let fields = checked_fields(updates)?;
    let (department_id, employee_id) = path.into_inner();
    let employee = store.update_employee(&department_id, &employee_id, fields)?;
    Ok(HttpResponse::Ok().json(employee))
}

pub async fn delete_employee(
    store: web::Data<Directory>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (department_id, employee_id) = path.into_inner();
    store.delete_employee(&department_id, &employee_id)?;
    Ok(HttpResponse::Ok().json(json!({
        "message": "Empleado eliminado con éxito",
    })))
}
